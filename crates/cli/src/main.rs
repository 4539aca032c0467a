//! Unlock Style CLI - seeding, stats, and exports for the salon store.
//!
//! # Usage
//!
//! ```bash
//! # Seed the catalog, default staff roster, and sample customers
//! salon-cli seed
//!
//! # Dashboard counters
//! salon-cli stats
//!
//! # List bookings, optionally filtered
//! salon-cli bookings list --filter upcoming
//!
//! # Export a collection as CSV
//! salon-cli export customers --out customers.csv
//! ```
//!
//! The data directory comes from `SALON_DATA_DIR` (default `./salon-data`),
//! loaded via dotenv.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use unlock_style_storage::JsonFileStore;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "salon-cli")]
#[command(author, version, about = "Unlock Style CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the store with the catalog, staff roster, and sample customers
    Seed {
        /// How many sample customers to generate
        #[arg(long, default_value_t = 25)]
        customers: usize,
    },
    /// Show the dashboard counters
    Stats,
    /// Inspect bookings
    Bookings {
        #[command(subcommand)]
        action: BookingsAction,
    },
    /// Export a collection as CSV
    Export {
        /// Which collection to export
        collection: ExportTarget,

        /// Output file path
        #[arg(short, long)]
        out: PathBuf,
    },
}

#[derive(Subcommand)]
enum BookingsAction {
    /// List bookings
    List {
        /// Filter: all, upcoming, completed, or cancelled
        #[arg(long, default_value = "all")]
        filter: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportTarget {
    Customers,
    Staff,
    Bookings,
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonFileStore::open(config::data_dir())?;

    match cli.command {
        Commands::Seed { customers } => commands::seed::run(&store, customers)?,
        Commands::Stats => commands::stats::run(&store),
        Commands::Bookings { action } => match action {
            BookingsAction::List { filter } => {
                commands::bookings::list(&store, &filter)?;
            }
        },
        Commands::Export { collection, out } => {
            commands::export::run(&store, collection, &out)?;
        }
    }
    Ok(())
}
