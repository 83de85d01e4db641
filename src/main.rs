use anyhow::Context;
use clap::Parser;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use zensearch::{
    cli::{self, Cli},
    config::{Config, ObservabilityConfig},
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });
    cli.apply_overrides(&mut config);

    init_tracing(&config.observability);
    tracing::debug!(data = ?config.data, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    cli::execute(&cli, &config, &mut out)
        .map_err(|e| {
            tracing::error!(error_code = e.error_code(), message = %e, "Command failed");
            e
        })
        .context("zensearch command failed")
}

/// Logs go to stderr so stdout only ever carries results
fn init_tracing(config: &ObservabilityConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}
