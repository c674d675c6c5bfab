//! Terminal client entry point.
mod app;
mod config;
mod input;
mod presentation;

use std::path::PathBuf;

use anyhow::Result;
use app::CliApp;
use config::CliConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    // The guard flushes the file writer when main returns.
    let _guard = setup_logging(&config)?;

    CliApp::new(config).run()
}

/// Route logs to a per-session file; the TUI owns stdout and stderr.
fn setup_logging(config: &CliConfig) -> Result<WorkerGuard> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let session_id = config.session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });

    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_directory);
    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}

fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "tactics")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("tactics").join("logs"))
}
