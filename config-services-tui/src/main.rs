//! Configuration Services admin TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: events (`message/`)
//! - **Update**: state changes (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: config file and admin API calls (`backend/`)
//!
//! main():
//!     parse CLI, load config file, apply CLI overrides
//!     init logging (file only)
//!     build the AdminClient (HTTP, or in-memory with --demo)
//!     start the tokio runtime the fetches run on
//!     init_terminal() → app::run() → restore_terminal()

mod app;
mod backend;
mod cli;
mod event;
mod i18n;
mod logging;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;

use config_services_client::{AdminClient, HttpAdminClient, HttpClientOptions, InMemoryAdminClient};

use backend::{AdminService, AppConfig, ConfigService, JsonConfigService};
use cli::Cli;
use i18n::Language;
use util::{init_terminal, install_panic_hook, restore_terminal};

/// Simulated round trip in demo mode, so the loading indicator is visible.
const DEMO_LATENCY: Duration = Duration::from_millis(400);

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. configuration
    let config_service = cli
        .config
        .clone()
        .map_or_else(JsonConfigService::default, JsonConfigService::new);
    let mut config = config_service.load()?;
    cli.apply(&mut config);

    if cli.write_config {
        config_service.save(&config)?;
        println!("Wrote {}", config_service.path().display());
        return Ok(());
    }

    // 2. logging
    let _log_guard = logging::init(&config, config_service.path(), cli.log_level.as_deref())?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        demo = cli.demo,
        "Starting config-admin"
    );

    // 3. look and feel
    view::theme::set_theme(config.theme);
    match Language::from_code(&config.language) {
        Some(lang) => {
            i18n::set_language(lang);
            log::debug!("Language: {}", lang.code());
        }
        None => log::warn!("Unknown language '{}', using en-US", config.language),
    }

    // 4. admin client and the runtime it runs on
    let client = build_client(&config, cli.demo)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("starting async runtime")?;
    let (tx, rx) = mpsc::unbounded_channel();
    let admin = AdminService::new(client, runtime.handle().clone(), tx);

    // 5. terminal and main loop
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let mut app = model::App::new(config.columns.clone());
    let result = app::run(&mut terminal, &mut app, &admin, rx);

    // Restore even when the loop failed
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("Exited with error: {e:#}");
    }
    result
}

fn build_client(config: &AppConfig, demo: bool) -> Result<Arc<dyn AdminClient>> {
    if demo {
        log::info!("Demo mode: serving sample records");
        return Ok(Arc::new(
            InMemoryAdminClient::with_sample_data().with_latency(DEMO_LATENCY),
        ));
    }

    let options = HttpClientOptions {
        configs_path: config.configs_path.clone(),
        api_token: config.api_token.clone(),
        request_timeout: Duration::from_secs(config.timeout_secs),
        max_retries: config.max_retries,
        ..HttpClientOptions::new(config.base_url.clone())
    };
    let client = HttpAdminClient::new(options)
        .with_context(|| format!("configuring admin client for {}", config.base_url))?;
    Ok(Arc::new(client))
}
