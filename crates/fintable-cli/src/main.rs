//! `fintab`: a company's income statements as a filterable, sortable table.
//!
//! Reads the endpoint and API key from `--base-url`/`FMP_BASE_URL` and
//! `--api-key`/`FMP_API_KEY`, fetches the statements once, and prints the
//! filtered and sorted table. With `--interactive` it keeps reading commands
//! from stdin and redraws after each one.

mod cli;
mod commands;
mod config;
mod interactive;
mod logging;
mod render;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use fintable::{Dashboard, View};

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::logging::Verbosity;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet), cli.no_color);

    match run(cli).await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::from_cli(&cli);
    tracing::debug!(?config, "Configuration loaded");

    let state = config::initial_state(&cli).context("invalid filter or sort option")?;
    let provider = config.provider().context("failed to build HTTP client")?;
    let mut dashboard = Dashboard::new(provider)
        .with_symbol(config.symbol.clone())
        .with_period(config.period_type)
        .with_state(state);

    if cli.interactive {
        interactive::run(dashboard).await?;
        return Ok(ExitCode::SUCCESS);
    }

    dashboard.load().await;
    let view = dashboard.view();

    match cli.format {
        OutputFormat::Table => {
            println!("{}", render::render(dashboard.state(), dashboard.symbol()));
        }
        OutputFormat::Json => match &view {
            View::Failed(message) => eprintln!("Error: {message}"),
            _ => println!("{}", render::render_json(&view)?),
        },
    }

    Ok(if matches!(view, View::Failed(_)) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
