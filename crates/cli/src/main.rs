//! Developer CLI for behavior configuration.
//!
//! Resolves destination strings, evaluates quest-variable expressions and
//! reads design-note parameters against world data on disk, exactly as a
//! behavior module would at runtime.
//!
//! ```bash
//! script-cli resolve '5.0<@Chest' --me Lever
//! script-cli eval '$spd/10' --default 1
//! script-cli param "Speed='\$spd/10'; Dest=@Chest" Speed
//! script-cli describe 12 --json
//! ```

mod commands;
mod config;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Describe, Eval, Param, Resolve};
use config::{CliConfig, PathArgs};

/// Resolve behavior configuration against world data
#[derive(Parser)]
#[command(name = "script-cli")]
#[command(about = "Resolve behavior configuration against world data", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    paths: PathArgs,

    /// Log resolution details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Resolve a destination string to objects
    Resolve(Resolve),

    /// Evaluate a quest-variable expression
    Eval(Eval),

    /// Read a parameter from a design note
    Param(Param),

    /// Describe an object
    Describe(Describe),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SCRIPT_DATA_DIR and friends)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = CliConfig::from_env().with_overrides(&cli.paths);
    tracing::debug!("Data directory: {}", config.data_dir.display());

    match cli.command {
        Command::Resolve(cmd) => cmd.execute(&config),
        Command::Eval(cmd) => cmd.execute(&config),
        Command::Param(cmd) => cmd.execute(&config),
        Command::Describe(cmd) => cmd.execute(&config),
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}
