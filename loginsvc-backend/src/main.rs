//! Login Service Backend
//!
//! Entry point: configuration loading, user store loading, and HTTP server startup.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use loginsvc_backend::state::AppState;

mod cli;
mod config_helpers;
mod tracing_setup;

use cli::CliArgs;
use config_helpers::{parse_bind_address, user_store_from_config};
use tracing_setup::install_tracing_from_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse().inspect_err(|_| CliArgs::print_help())?;

    if args.help_requested {
        CliArgs::print_help();
        return Ok(());
    }

    // Resolve config path: CLI > environment variable
    let config_path = args
        .config_path
        .or_else(|| std::env::var("LOGINSVC_CONFIG_PATH").ok());

    let config = load_config(config_path.as_deref())?;

    install_tracing_from_config(&config.logging)?;
    tracing::info!(
        config_path = config_path.as_deref().unwrap_or("-"),
        log_level = %config.logging.level,
        log_json = config.logging.json,
        "configuration loaded"
    );

    let users = user_store_from_config(&config)
        .with_context(|| format!("failed to load users from {}", config.users.path))?;
    tracing::info!(
        users_path = %config.users.path,
        user_count = users.len(),
        "user store loaded"
    );
    if users.is_empty() {
        tracing::warn!(users_path = %config.users.path, "user store is empty; every login will fail");
    }

    let state = Arc::new(AppState::new(users));
    let app = loginsvc_backend::build_router(state);

    let addr = parse_bind_address(&config.server.host, config.server.port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Load and validate configuration from file (if any) and environment.
fn load_config(path: Option<&str>) -> anyhow::Result<loginsvc_config::Config> {
    let config = loginsvc_config::load_config(path).with_context(|| match path {
        Some(p) => format!("failed to load configuration from {p}"),
        None => "failed to load configuration".to_string(),
    })?;
    loginsvc_config::validate_config(&config).context("invalid configuration")?;
    Ok(config)
}
