//! qsonar Command-Line Interface
//!
//! Play quantum battleship on a 4x4 grid, or drive the two sonar engines
//! directly:
//!
//! ```text
//! qsonar play                 # interactive game, 4 hidden ships
//! qsonar ping ship            # interaction-free probe of one cell
//! qsonar scan 1,0,1,1 -c      # counting scan, printing the circuit
//! qsonar check                # engine known-answer self-check
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::common::{Targets, parse_occupancy};
use commands::{check, ping, play, scan, version};
use qsonar_game::DEFAULT_SHIPS;

/// qsonar - quantum sonar for a 4x4 battleship grid
#[derive(Parser)]
#[command(name = "qsonar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Seed for the simulator and board placement
    #[arg(long, env = "QSONAR_SEED", global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against a hidden board
    Play {
        /// Number of ships to hide
        #[arg(short, long, env = "QSONAR_SHIPS", default_value_t = DEFAULT_SHIPS)]
        ships: usize,
    },

    /// Ping one cell given its occupancy
    Ping {
        /// Occupancy of the cell (1/0, true/false, ship/water)
        #[arg(value_parser = parse_occupancy, action = clap::ArgAction::Set, required = true)]
        present: bool,

        /// Print the circuit and its raw counts before running it
        #[arg(short = 'c', long)]
        show_circuit: bool,

        /// Shots sampled for the raw counts shown with --show-circuit
        #[arg(short, long, default_value = "100")]
        shots: u32,
    },

    /// Count occupied cells among four given flags
    Scan {
        /// Occupancy of the four cells, e.g. 1,0,1,1 or 1011
        targets: Targets,

        /// Print the circuit and its raw counts before running it
        #[arg(short = 'c', long)]
        show_circuit: bool,

        /// Shots sampled for the raw counts shown with --show-circuit
        #[arg(short, long, default_value = "100")]
        shots: u32,
    },

    /// Run the engine known-answer self-check
    Check,

    /// Show version information
    Version,
}

/// Log filter used when `RUST_LOG` is unset.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose))),
        )
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Play { ships } => play::execute(ships, cli.seed).await,

        Commands::Ping {
            present,
            show_circuit,
            shots,
        } => ping::execute(present, show_circuit, shots, cli.seed).await,

        Commands::Scan {
            targets,
            show_circuit,
            shots,
        } => scan::execute(&targets.0, show_circuit, shots, cli.seed).await,

        Commands::Check => check::execute(cli.seed).await,

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
