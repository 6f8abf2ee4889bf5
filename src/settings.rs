//! Run settings: defaults, then `LEVELS_*` environment, then CLI flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, Environment};
use serde::Deserialize;

use crate::extract::Scope;

pub const DEFAULT_SOURCE: &str = "/tmp/original_mock_data_service.dart";
pub const DEFAULT_OUTPUT_DIR: &str = "lib/data";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub source_path: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            source_path: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            scope: Scope::Full,
            dry_run: false,
        }
    }
}

#[derive(Debug, Default, Parser)]
#[command(name = "level_extractor", about = "Split Level definitions out of the mock data service")]
pub struct Cli {
    /// Dart file holding the `_initializeLevels` definitions
    #[arg(short, long)]
    pub source: Option<PathBuf>,
    /// Directory for the generated `<id>_data.dart` files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// Search the whole file or only the initializer body
    #[arg(long, value_enum)]
    pub scope: Option<Scope>,
    /// Report what would be written without touching the output directory
    #[arg(long)]
    pub dry_run: bool,
}

impl Settings {
    /// Defaults overlaid with `LEVELS_SOURCE_PATH`, `LEVELS_OUTPUT_DIR`,
    /// `LEVELS_SCOPE` and `LEVELS_DRY_RUN`.
    pub fn from_env() -> Result<Self> {
        Self::from_source(Environment::with_prefix("LEVELS"))
    }

    fn from_source(env: Environment) -> Result<Self> {
        Config::builder()
            .set_default("source_path", DEFAULT_SOURCE)?
            .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
            .set_default("scope", "full")?
            .set_default("dry_run", false)?
            .add_source(env.try_parsing(true))
            .build()
            .and_then(|c| c.try_deserialize())
            .context("Failed to load LEVELS_* settings")
    }

    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(p) = cli.source {
            self.source_path = p;
        }
        if let Some(p) = cli.output_dir {
            self.output_dir = p;
        }
        if let Some(s) = cli.scope {
            self.scope = s;
        }
        self.dry_run |= cli.dry_run;
        self
    }
}
