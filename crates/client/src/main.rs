//! Command-line front-end for the orbital ordnance inventory.
//!
//! Run with: `orbital <command>`. Configuration comes from `ORBITAL_*`
//! environment variables (a `.env` file is honored) and the global flags.

mod commands;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use client_bootstrap::{OrbitalConfig, dirs};
use commands::{Deposit, Inspect, Launch, Show, Strike};

/// Orbital ordnance inventory
#[derive(Parser)]
#[command(name = "orbital")]
#[command(about = "Manage ordnance held in orbit over planets and sectors", long_about = None)]
#[command(version)]
struct Cli {
    /// Custom data directory (defaults to platform-specific location)
    #[arg(short, long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show the reconciled inventory
    Show(Show),

    /// Deposit ordnance at the current location
    Deposit(Deposit),

    /// Launch a satellite payload over the current location
    Launch(Launch),

    /// Call in one unit of ordnance on a tile
    Strike(Strike),

    /// Inspect the inventory document as stored, without reconciling
    Inspect(Inspect),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for ORBITAL_* variables)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(&dirs::log_dir(), cli.verbose)?;

    let mut config = OrbitalConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir);
    }

    match cli.command {
        Command::Show(cmd) => cmd.execute(config),
        Command::Deposit(cmd) => cmd.execute(config),
        Command::Launch(cmd) => cmd.execute(config),
        Command::Strike(cmd) => cmd.execute(config).await,
        Command::Inspect(cmd) => cmd.execute(config),
    }
}
