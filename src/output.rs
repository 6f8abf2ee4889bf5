use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ExtractError;
use crate::extract::{GeneratedFile, Outcome};

/// Writes one generated file into `dir`, replacing whatever is there.
pub fn write_file(dir: &Path, file: &GeneratedFile) -> Result<PathBuf, ExtractError> {
    fs::create_dir_all(dir).map_err(|source| ExtractError::CreateOutputDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file.filename);
    fs::write(&path, &file.contents).map_err(|source| ExtractError::WriteOutput {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = file.contents.len(), "wrote level file");
    Ok(path)
}

pub fn report_line(outcome: Outcome<'_>, dry_run: bool) -> String {
    match outcome {
        Outcome::Found(file) if dry_run => format!("Would create {}", file.filename),
        Outcome::Found(file) => format!("Created {}", file.filename),
        Outcome::Missing(id) => format!("Could not find level definition for {}", id),
    }
}
