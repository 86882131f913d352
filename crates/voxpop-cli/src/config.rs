//! Database location defaults for the CLI.

use crate::error::{CliError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Database file name under the voxpop home directory.
const DB_FILE_NAME: &str = "voxpop.db";

/// Resolve the database path, preferring an explicit override.
///
/// Without an override the database lives at `~/.voxpop/voxpop.db`.
pub fn resolve_db_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path),
        None => {
            let home = dirs::home_dir()
                .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
            Ok(home.join(".voxpop").join(DB_FILE_NAME))
        }
    }
}

/// Create the parent directory of the database file if it is missing.
pub fn ensure_db_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
