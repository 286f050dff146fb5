//! CLI entrypoint for cat-facts
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use catfact_application::{EmitFactInput, EmitFactUseCase};
use catfact_infrastructure::{CatFactClient, ConfigLoader, FileConfig, GithubOutputFile};
use catfact_presentation::{Cli, ConsoleFactPrinter};
use clap::Parser;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stdout carries the fact only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;
    debug!("Effective configuration: {:?}", config);

    // === Dependency Injection ===
    let sink = match &config.output.path {
        Some(path) => GithubOutputFile::new(path),
        None => GithubOutputFile::from_env(&config.output.env_var)?,
    };
    info!("Step output file: {}", sink.path().display());

    let source = CatFactClient::new(config.api.url.as_str(), config.api.timeout())?
        .with_field(config.api.field.as_str());

    let input = EmitFactInput::new()
        .with_query(config.fact_query())
        .with_output_key(config.output_key()?);

    let use_case = EmitFactUseCase::new(Arc::new(source));
    use_case.execute(input, &ConsoleFactPrinter, &sink).await?;

    Ok(())
}

/// Apply command-line flags on top of the loaded configuration
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(url) = &cli.url {
        config.api.url = url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.api.timeout_seconds = timeout;
    }
    if let Some(max_length) = cli.max_length {
        config.api.max_length = Some(max_length);
    }
    if let Some(path) = &cli.output_file {
        config.output.path = Some(path.clone());
    }
    if let Some(key) = &cli.output_key {
        config.output.key = key.clone();
    }
}
