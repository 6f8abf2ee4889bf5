use anyhow::Result;
use clap::Parser;
use tracing::info;

use level_extractor::settings::{Cli, Settings};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::from_env()?.with_cli(cli);
    info!(settings = ?settings, "Starting level extraction");

    level_extractor::run(&settings, &mut std::io::stdout().lock())?;
    Ok(())
}
