//! List command implementation.

use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;
use voxpop_domain::InterviewStore;

/// Execute the list command.
pub fn execute_list(db_path: &Path, formatter: &Formatter) -> Result<()> {
    let store = super::open_store(db_path)?;
    let interviews = store.list_interviews()?;

    println!("{}", formatter.format_interviews(&interviews)?);

    Ok(())
}
