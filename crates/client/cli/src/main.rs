//! Terminal client entry point.
mod app;
mod config;
mod input;
mod presentation;

use std::path::{Path, PathBuf};

use anyhow::Result;
use app::CliApp;
use config::CliConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
    setup_logging(&log_dir)?;

    CliApp::new(config)?.run().await
}

/// Setup file logging; the terminal belongs to the UI.
fn setup_logging(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, "minimon.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep file writer alive
    std::mem::forget(guard);

    tracing::info!("Log file: {}/minimon.log", log_dir.display());

    Ok(())
}

/// Platform cache directory for logs, falling back to the system temp dir.
fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "minimon")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("minimon"))
        .join("logs")
}
