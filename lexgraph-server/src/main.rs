//! lexgraph-server - serves lexical relation queries over HTTP.
//!
//! Reads config from env vars:
//!   LEXGRAPH_CONFIG    - YAML config path (default: config/lexgraph.yaml;
//!                        built-in defaults if the file does not exist)
//!   LEXGRAPH_DATA_DIR  - overrides `data.dir`
//!   LEXGRAPH_BIND_ADDR - overrides `server.bind_addr`

use std::path::Path;

use anyhow::Context;
use lexgraph_core::{Lexicon, LexiconConfig};
use lexgraph_server::{build_router, AppState};
use tokio::net::TcpListener;

/// Default configuration path
const DEFAULT_CONFIG_PATH: &str = "config/lexgraph.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "lexgraph_server=info,lexgraph_core=info,tower_http=debug".into()
            }),
        )
        .init();

    tracing::info!("Starting lexgraph server");

    let config = load_config()?;

    // The store is loaded once, before the listener opens
    let lexicon = Lexicon::from_config(&config).context("failed to load relation store")?;
    tracing::info!(words = lexicon.store().word_count(), "Lexicon ready");

    let static_dir = config.server.static_dir.as_path();
    let static_dir = if static_dir.is_dir() {
        tracing::info!(dir = %static_dir.display(), "Serving static files");
        Some(static_dir)
    } else {
        tracing::warn!(dir = %static_dir.display(), "Static directory not found, not serving assets");
        None
    };

    let app = build_router(AppState::new(lexicon), static_dir);

    let bind_addr = &config.server.bind_addr;
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;
    tracing::info!("lexgraph-server listening on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("lexgraph-server stopped");
    Ok(())
}

fn load_config() -> anyhow::Result<LexiconConfig> {
    let config_path =
        std::env::var("LEXGRAPH_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut config = if Path::new(&config_path).exists() {
        tracing::info!(path = %config_path, "Loading configuration");
        LexiconConfig::from_file(&config_path)?
    } else {
        tracing::info!(path = %config_path, "No configuration file, using defaults");
        LexiconConfig::default()
    };

    if let Ok(dir) = std::env::var("LEXGRAPH_DATA_DIR") {
        config.data.dir = dir.into();
    }
    if let Ok(addr) = std::env::var("LEXGRAPH_BIND_ADDR") {
        config.server.bind_addr = addr;
    }

    tracing::info!(
        data_dir = %config.data.dir.display(),
        max_depth = config.traversal.max_depth,
        max_nodes = config.traversal.max_nodes,
        "Configuration loaded"
    );

    Ok(config)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
