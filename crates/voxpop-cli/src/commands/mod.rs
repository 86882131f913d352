//! Command implementations.

pub mod analyze;
pub mod list;
pub mod show;

pub use self::analyze::execute_analyze;
pub use self::list::execute_list;
pub use self::show::execute_show;

use crate::config;
use crate::error::Result;
use std::path::Path;
use voxpop_store::SqliteStore;

/// Open the CLI database, creating its parent directory if needed.
pub(crate) fn open_store(db_path: &Path) -> Result<SqliteStore> {
    config::ensure_db_dir(db_path)?;
    Ok(SqliteStore::new(db_path)?)
}
