//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// xdep - Inspect framework extensions among resolved build artifacts
#[derive(Parser, Debug)]
#[command(name = "xdep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Resolver configuration file (TOML, JSON or YAML)
    #[arg(short, long, global = true, env = "XDEP_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the extension descriptor of a single artifact
    ///
    /// Examples:
    ///   xdep inspect libs/widgets-1.0.jar
    ///   xdep inspect build/classes --coords io.acme:widgets:1.0-SNAPSHOT
    Inspect {
        /// Artifact directory or archive
        path: PathBuf,

        /// Coordinates of the artifact (derived from the file name if omitted)
        #[arg(long)]
        coords: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Resolve descriptors for a list of runtime artifacts and plan
    /// conditional dependency activation
    ///
    /// The artifact list is a TOML, JSON or YAML file with an `artifacts`
    /// array of `{ coords, path }` entries. Relative paths are resolved
    /// against the list's directory.
    Resolve {
        /// Resolved artifact list
        #[arg(short, long)]
        artifacts: PathBuf,

        /// Resolve on multiple threads as configured
        #[arg(long)]
        parallel: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
