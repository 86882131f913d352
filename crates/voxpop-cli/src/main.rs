//! Voxpop CLI - Command-line interface for the Voxpop interview analyzer.

use clap::Parser;
use voxpop_cli::commands;
use voxpop_cli::output::OutputFormat;
use voxpop_cli::{Cli, Command, Formatter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> voxpop_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Resolve the database location
    let db_path = voxpop_cli::config::resolve_db_path(cli.db)?;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(OutputFormat::Table);

    // Create formatter
    let formatter = Formatter::new(format, !cli.no_color);

    // Handle commands
    match cli.command {
        Command::Analyze(args) => {
            commands::execute_analyze(args, &db_path, &formatter).await?;
        }
        Command::List => {
            commands::execute_list(&db_path, &formatter)?;
        }
        Command::Show(args) => {
            commands::execute_show(args, &db_path, &formatter)?;
        }
    }

    Ok(())
}
