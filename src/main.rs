//! Command-line interface for csv-utility
//!
//! # Usage Examples
//!
//! ## Grid editing
//! ```bash
//! csv-utility grid show data.csv
//! csv-utility grid add-row data.csv
//! csv-utility grid add-column data.csv --output wider.csv
//! csv-utility grid remove-row data.csv 3 --yes
//! csv-utility grid set data.csv 1 0 "Sword"
//! ```
//!
//! ## Record assets
//! ```bash
//! # How many Item assets would be exported
//! csv-utility count --schema records.yaml --type Item
//!
//! # Export them to Assets/data.csv
//! csv-utility export --schema records.yaml --type Item
//!
//! # Create new assets from a CSV file
//! csv-utility import --schema records.yaml --type Item --csv items.csv
//! ```
//!
//! Set `RUST_LOG=debug` for per-row details.

use std::io;

use clap::{Parser, Subcommand};
use csv_utility::assets::{self, AssetArgs};
use csv_utility::grid::{self, GridCommand};
use csv_utility::ConsoleDialogs;

#[derive(Parser)]
#[command(name = "csv-utility")]
#[command(about = "Edit CSV files and move record assets to and from CSV")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Edit a CSV file as a grid
    Grid {
        #[command(subcommand)]
        command: GridCommand,
    },

    /// Count the assets an export would include
    Count {
        #[command(flatten)]
        args: AssetArgs,
    },

    /// Export every asset of a record type to a CSV file
    Export {
        #[command(flatten)]
        args: AssetArgs,
    },

    /// Create new assets from the rows of a CSV file
    Import {
        #[command(flatten)]
        args: AssetArgs,

        /// Import without asking for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Grid { command } => {
            let mut dialogs = ConsoleDialogs::stdio(command.assume_yes());
            grid::run(command, &mut dialogs, &mut stdout)?;
        }
        Commands::Count { args } => {
            let tool = assets::open_tool(&args)?;
            assets::count(&tool, &mut stdout)?;
        }
        Commands::Export { args } => {
            let mut tool = assets::open_tool(&args)?;
            assets::export(&mut tool, &mut stdout)?;
        }
        Commands::Import { args, yes } => {
            let mut tool = assets::open_tool(&args)?;
            let mut dialogs = ConsoleDialogs::stdio(yes);
            assets::import(&mut tool, &mut dialogs, &mut stdout)?;
        }
    }

    Ok(())
}
