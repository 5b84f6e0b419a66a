//! Stride CLI Application
//!
//! Command-line interface and MCP server for the stride training plan
//! generator.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, StrideMcpServer};
use renderer::TerminalRenderer;
use stride_core::PlannerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        runs_file,
        today,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_runs_path(runs_file)
        .with_today(today)
        .build()
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Stride started, run history at {}", planner.runs_path().display());

    match command {
        Some(Pace(args)) => Cli::new(planner, renderer).estimate_pace(args).await,
        Some(Plan(args)) => Cli::new(planner, renderer).generate_plan(args).await,
        Some(Serve) => {
            info!("Starting Stride MCP server");
            run_stdio_server(StrideMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        Some(Analyze) | None => Cli::new(planner, renderer).analyze().await,
    }
}
