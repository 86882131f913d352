//! Voxpop API server binary
//!
//! Starts the HTTP server for interview upload, analysis, and retrieval.

use std::env;
use std::process;
use voxpop_api::{config::ApiConfig, start_server, ApiServerError};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ApiServerError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        // Load from specified config file
        let config_path = &args[2];
        ApiConfig::from_file(config_path)?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        // Use built-in defaults
        eprintln!("Warning: No config file specified, using built-in defaults");
        eprintln!("Usage: voxpop-api --config <path-to-config.toml>");
        eprintln!();
        ApiConfig::default()
    };

    // Start the server
    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Voxpop API - Customer Interview Analysis Server");
    println!();
    println!("USAGE:");
    println!("    voxpop-api --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("EXAMPLE:");
    println!("    voxpop-api --config config/api.toml");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default: '127.0.0.1')");
    println!("    - bind_port: Port number (default: 8000)");
    println!("    - database_path: SQLite database file (default: 'voxpop.db')");
    println!("    - cors_origins: Allowed browser origins (default: local Vite dev server)");
    println!("    - max_upload_bytes: Request body cap in bytes (default: 10 MiB)");
    println!("    - [llm]: api_key, model, temperature, endpoint");
    println!("    - [analysis]: product_description");
    println!();
}
