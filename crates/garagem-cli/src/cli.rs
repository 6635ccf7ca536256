//! CLI definition using clap

use clap::{Parser, Subcommand};
use garagem_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "garagem")]
#[command(version)]
#[command(about = "Vehicle and maintenance register")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Data directory (overrides config)
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage registered vehicles
    Vehicle {
        #[command(subcommand)]
        action: VehicleAction,
    },

    /// Manage maintenance records
    Maintenance {
        #[command(subcommand)]
        action: MaintenanceAction,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set data directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set default output format (json, table)
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum VehicleAction {
    /// Register a vehicle
    Add {
        /// License plate (AAA-1234 or AAA1B23)
        plate: String,

        /// Model name (e.g., "Fiat Uno")
        #[arg(long, short = 'm')]
        model: String,

        /// Model year
        #[arg(long, short = 'y')]
        year: String,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List registered vehicles
    List,

    /// Remove a vehicle and its maintenance records
    Remove {
        plate: String,
    },
}

#[derive(Subcommand)]
pub enum MaintenanceAction {
    /// Record a maintenance service
    Add {
        /// Plate of a registered vehicle
        plate: String,

        /// Service date (YYYY-MM-DD)
        #[arg(long, short = 'd')]
        date: String,

        /// Service performed (e.g., "Troca de óleo")
        #[arg(long, short = 's')]
        service: String,

        /// Cost in reais (e.g., "1.234,56")
        #[arg(long, short = 'c')]
        cost: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Schedule a future service (date must be today or later)
        #[arg(long)]
        schedule: bool,
    },

    /// List maintenance records
    List {
        /// Only records of this vehicle
        #[arg(long, short = 'p')]
        plate: Option<String>,

        /// Only services dated today or later
        #[arg(long)]
        upcoming: bool,
    },
}
