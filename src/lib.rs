//! Splits the `Level(...)` definitions out of a generated Dart mock data
//! service into one accessor file per level.

pub mod error;
pub mod extract;
pub mod levels;
pub mod output;
pub mod settings;

use std::fs;
use std::io::Write;

use anyhow::Result;
use tracing::info;

use error::ExtractError;
use extract::{Extraction, Outcome};
use levels::LEVELS;
use settings::Settings;

/// Reads the source and extracts every level. Each level's file is written
/// (unless `dry_run`) and its line printed to `out` before the next level
/// is handled; a completion line follows the last one.
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<Extraction> {
    let source = fs::read_to_string(&settings.source_path).map_err(|source| {
        ExtractError::ReadSource {
            path: settings.source_path.clone(),
            source,
        }
    })?;
    info!(path = %settings.source_path.display(), bytes = source.len(), "loaded source");

    let extraction = extract::extract(&source, &LEVELS, settings.scope);
    for outcome in extraction.outcomes(&LEVELS) {
        if let Outcome::Found(file) = outcome {
            if !settings.dry_run {
                output::write_file(&settings.output_dir, file)?;
            }
        }
        writeln!(out, "{}", output::report_line(outcome, settings.dry_run))?;
    }
    writeln!(out, "Level extraction complete")?;

    info!(
        created = extraction.files.len(),
        missed = extraction.misses.len(),
        dry_run = settings.dry_run,
        "extraction finished"
    );
    Ok(extraction)
}
