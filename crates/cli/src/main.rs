//! MobileMart CLI - Database migrations and catalog management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! mobilemart-cli migrate
//!
//! # Seed the catalog from a JSON file
//! mobilemart-cli seed -f data/mobiles.json
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Load the phone catalog from a JSON file

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mobilemart-cli")]
#[command(author, version, about = "MobileMart CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the phone catalog from a JSON file
    Seed {
        /// Path to the catalog JSON file
        #[arg(short, long)]
        file: String,

        /// Delete existing products before inserting
        #[arg(long)]
        replace: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { file, replace } => {
            commands::seed::catalog(&file, replace).await?;
        }
    }
    Ok(())
}
