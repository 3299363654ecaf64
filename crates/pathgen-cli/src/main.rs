//! pathgen CLI Application
//!
//! Command-line front-end for the learning path generator backend.

mod args;
mod cli;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use pathgen_core::ApiClientBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        api_url,
        timeout,
        no_color,
        command,
    } = Args::parse();

    let client = ApiClientBuilder::new()
        .with_base_url(api_url)
        .with_timeout(timeout.map(Duration::from_secs))
        .build()
        .context("Failed to initialize API client")?;

    info!("pathgen started against {}", client.config().base_url());

    let cli = Cli::new(client, TerminalRenderer::new(!no_color));
    match command {
        Some(Generate(args)) => cli.generate(args).await,
        Some(Path { command }) => cli.handle_path_command(command).await,
        Some(Node { command }) => cli.handle_node_command(command).await,
        None => cli.show_shell(),
    }
}
