use clap::{Parser, Subcommand};

use crate::cli::{GenerateArgs, NodeCommands, PathCommands};

/// Terminal client for the learning path generator
///
/// Sends a prompt to the path generation backend and shows the resulting
/// learning path and its exercises. Without a subcommand the empty prompt
/// form is printed.
#[derive(Parser)]
#[command(version, about, name = "pathgen")]
pub struct Args {
    /// Base URL of the backend API. Defaults to $PATHGEN_API_BASE_URL, then
    /// http://localhost:8000/api
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds (default: 30)
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a learning path from a prompt
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Inspect generated paths
    #[command(alias = "p")]
    Path {
        #[command(subcommand)]
        command: PathCommands,
    },
    /// Work on a single exercise of a path
    #[command(alias = "n")]
    Node {
        #[command(subcommand)]
        command: NodeCommands,
    },
}
