//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Voxpop CLI - Analyze customer interviews from the command line.
#[derive(Debug, Parser)]
#[command(name = "voxpop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Database file path (default: ~/.voxpop/voxpop.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze interview files and print the insight report
    Analyze(AnalyzeArgs),

    /// List stored interviews
    List,

    /// Show a stored interview
    Show(ShowArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Interview files to analyze (plain text or PDF)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Product under research, passed to the model as context
    #[arg(short, long)]
    pub product_description: Option<String>,

    /// Title for the interview (default: first file name)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Gemini model name
    #[arg(short, long)]
    pub model: Option<String>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY")]
    pub api_key: Option<String>,

    /// Persist the interview to the database and print its id
    #[arg(short, long)]
    pub save: bool,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Interview id
    pub id: i64,

    /// Include the full transcript
    #[arg(short, long)]
    pub transcript: bool,
}

impl From<CliFormat> for crate::output::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::output::OutputFormat::Table,
            CliFormat::Json => crate::output::OutputFormat::Json,
        }
    }
}
