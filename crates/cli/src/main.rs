//! Verdura CLI - catalog management tools.
//!
//! # Usage
//!
//! ```bash
//! # Populate the catalog with sample products
//! verdura-cli seed
//!
//! # Seed a specific data directory, replacing nothing (codes are skipped
//! # when already present)
//! verdura-cli seed --data-dir /var/lib/verdura --force
//! ```
//!
//! # Commands
//!
//! - `seed` - Populate the product snapshot with a sample catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "verdura-cli")]
#[command(version, about = "Verdura CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the catalog with sample products
    Seed {
        /// Directory holding the JSON snapshot files
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,

        /// Seed even if the catalog already has products
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { data_dir, force } => commands::seed::run(&data_dir, force)?,
    }
    Ok(())
}
