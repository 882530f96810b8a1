//! figaudit CLI - design library component inventory and audit.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "figaudit")]
#[command(about = "Design library component inventory and audit")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to audit.toml config file
    #[arg(short, long, default_value = "audit.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default audit.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Parse a metadata export into a categorized inventory
    Parse {
        /// Metadata export JSON (defaults to config)
        metadata: Option<PathBuf>,

        /// Inventory output path (defaults to config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the summary and audit figures of an inventory
    Summary {
        /// Inventory JSON (defaults to config)
        #[arg(short, long)]
        inventory: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Parse { metadata, output } => {
            let config = config::load_config(&cli.config)?;
            commands::parse::run(&config, metadata, output)?;
        }
        Commands::Summary { inventory } => {
            let config = config::load_config(&cli.config)?;
            commands::summary::run(&config, inventory)?;
        }
    }

    Ok(())
}
