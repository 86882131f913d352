//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;
use voxpop_domain::InterviewStore;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, db_path: &Path, formatter: &Formatter) -> Result<()> {
    let store = super::open_store(db_path)?;
    let interview = store
        .get_interview(args.id)?
        .ok_or(CliError::NotFound(args.id))?;

    println!("{}", formatter.format_interview(&interview, args.transcript)?);

    Ok(())
}
