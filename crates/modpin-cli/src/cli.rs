//! CLI argument definitions for modpin.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "modpin",
    version,
    about = "Resolve dependency version constraints against a module registry",
    long_about = "modpin picks the highest version listed in a module registry that \
                  satisfies a version constraint, and prints the module path and version.",
    after_help = "Example:\n  modpin resolve -r registry.json -d k6/x/output-kafka -c '>v0.7.0'\n  \
                  github.com/grafana/xk6-output-kafka v0.8.0"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a dependency to a module path and version
    Resolve {
        /// Registry file path or http(s) URL
        #[arg(short, long, env = "MODPIN_REGISTRY")]
        registry: Option<String>,
        /// Name of the dependency
        #[arg(short = 'd', long)]
        name: String,
        /// Version constraint
        #[arg(short, long, default_value = "*", allow_hyphen_values = true)]
        constraint: String,
        /// Print the resolved module as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the versions a registry knows for a dependency, newest first
    Versions {
        /// Registry file path or http(s) URL
        #[arg(short, long, env = "MODPIN_REGISTRY")]
        registry: Option<String>,
        /// Name of the dependency
        #[arg(short = 'd', long)]
        name: String,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
