mod commands;
mod summary;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "imenhance", about = "Brightness-aware gamma enhancement for photos")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Worker threads for pixel processing (default: one per core)
    #[arg(long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show dimensions and intensity class of an image
    Info(commands::info::InfoArgs),
    /// Write the enhanced image
    Enhance(commands::enhance::EnhanceArgs),
    /// Write original and enhanced images side by side
    Compare(commands::compare::CompareArgs),
    /// Print or save the default enhancement config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Enhance(args) => commands::enhance::run(args),
        Commands::Compare(args) => commands::compare::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
