//! Formica CLI - Command-line interface for the ant-colony tour heuristic.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "formica")]
#[command(author, version, about = "Formica - ant-colony tours for the travelling salesperson", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new formica project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Generate a random node file
    Generate {
        /// Output file path
        output: String,

        /// Number of nodes (default: NumberOfNodes from formica.toml)
        #[arg(short, long)]
        nodes: Option<usize>,

        /// Canvas size (default: DisplaySize from formica.toml)
        #[arg(long)]
        size: Option<i64>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the colony, resuming the saved session if there is one
    Run {
        /// Number of ticks to run (default: ticks from formica.toml)
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Discard the saved session and start a new colony
        #[arg(long)]
        fresh: bool,
    },

    /// Show colony statistics
    Stats,

    /// Show the best tour found and the tour the trails recommend
    Tour,

    /// Export the pheromone trails
    Export {
        /// Output file path
        output: String,

        /// Export format (json or csv)
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Generate { output, nodes, size, seed } => {
            commands::generate::run(&output, nodes, size, seed)
        }
        Commands::Run { ticks, seed, fresh } => commands::run::run(ticks, seed, fresh, cli.verbose),
        Commands::Stats => commands::stats::run(),
        Commands::Tour => commands::tour::run(),
        Commands::Export { output, format } => commands::export::run(&output, &format),
    }
}
