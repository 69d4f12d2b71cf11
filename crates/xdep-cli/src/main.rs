//! xdep CLI
//!
//! Command-line front end for extension descriptor resolution.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!("Verbose mode enabled");
    }

    let config = commands::load_resolver_config(cli.config.as_deref())?;

    match cli.command {
        Some(cmd) => execute_command(&config, cmd),
        None => {
            println!("{} extension dependency inspector", "xdep".green().bold());
            println!();
            println!("Run {} for available commands.", "xdep --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(config: &xdep_extensions::ResolverConfig, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Inspect { path, coords, json } => {
            commands::run_inspect(config, &path, coords.as_deref(), json)
        }
        Commands::Resolve {
            artifacts,
            parallel,
            json,
        } => commands::run_resolve(config, &artifacts, parallel, json),
    }
}
