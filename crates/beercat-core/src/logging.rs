//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "BEERCAT_LOG";

const LOG_FILE_PREFIX: &str = "beercat.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/beercat/logs/` so they never
/// interfere with the terminal UI.
/// Log level is controlled by `BEERCAT_LOG` environment variable.
///
/// # Examples
/// ```bash
/// BEERCAT_LOG=debug cargo run
/// BEERCAT_LOG=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    // Default to info for our crates, allow override via BEERCAT_LOG
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("beercat=info,beer_catalog=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Beer catalog starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("beercat").join("logs")
}

/// Get the log file path for the current day.
///
/// The daily appender suffixes the file name with the UTC date.
pub fn get_current_log_file() -> PathBuf {
    let date = chrono::Utc::now().format("%Y-%m-%d");
    get_log_directory().join(format!("{LOG_FILE_PREFIX}.{date}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_beercat_dir() {
        let path = get_current_log_file();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("beercat.log."));
        assert!(path.parent().unwrap().ends_with("beercat/logs"));
    }
}
