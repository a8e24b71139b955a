//! Application entry points: startup, settings resolution and mode selection

use std::path::PathBuf;
use std::sync::Arc;

use beercat_app::config::{
    default_config_path, init_config_file, load_settings, load_settings_strict, validate_endpoint,
    Settings,
};
use beercat_app::HttpBeerSource;
use beercat_core::logging;
use beercat_core::prelude::*;

use crate::headless;

/// Startup options, as given on the command line
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Overrides `source.endpoint`
    pub endpoint: Option<String>,
    /// Explicit config file; must exist
    pub config: Option<PathBuf>,
    /// Initial search string
    pub search: Option<String>,
    /// Print NDJSON events instead of running the TUI
    pub headless: bool,
}

/// Main application entry point
pub async fn run(options: LaunchOptions) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, the TUI owns stdout
    logging::init()?;

    let result = launch(options).await;
    if let Err(ref e) = result {
        report_error(e);
    }

    info!("Beer catalog exiting");
    result
}

async fn launch(options: LaunchOptions) -> Result<()> {
    let settings = resolve_settings(&options)?;
    info!(
        "Endpoint: {} (headless: {})",
        settings.source.endpoint, options.headless
    );

    let source = Arc::new(
        HttpBeerSource::new(&settings.source).context("Failed to create catalog source")?,
    );

    if options.headless {
        headless::runner::run_headless(settings, source, options.search).await
    } else {
        beercat_tui::run(settings, source, options.search).await
    }
}

/// Startup errors are the user's to fix; anything else points at the log
fn report_error(e: &Error) {
    if e.is_fatal() {
        error!("Startup failed: {}", e);
        eprintln!("beercat: {e}");
    } else {
        error!("Application error: {:?}", e);
        eprintln!("See log: {}", logging::get_current_log_file().display());
    }
}

/// Load settings and apply command-line overrides.
///
/// The default config file may be absent; an explicitly named one may not.
/// The resulting endpoint must be an http(s) URL.
pub fn resolve_settings(options: &LaunchOptions) -> Result<Settings> {
    let mut settings = match &options.config {
        Some(path) => load_settings_strict(path)?,
        None => default_config_path()
            .map(|path| load_settings(&path))
            .unwrap_or_default(),
    };

    if let Some(endpoint) = &options.endpoint {
        settings.source.endpoint = endpoint.clone();
    }

    validate_endpoint(&settings.source.endpoint)?;
    Ok(settings)
}

/// Write a default config file at `path` (or the default location).
///
/// Returns the path written, or the existing file left untouched.
pub fn init_config(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = path
        .or_else(default_config_path)
        .ok_or_else(|| Error::config("No config directory available on this platform"))?;
    init_config_file(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use beercat_app::config::DEFAULT_ENDPOINT;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_config_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[source]\nendpoint = \"http://localhost:8080/beers\"\n\n[ui]\nshow_load_errors = true\n",
        )
        .unwrap();

        let settings = resolve_settings(&LaunchOptions {
            config: Some(path),
            ..LaunchOptions::default()
        })
        .unwrap();

        assert_eq!(settings.source.endpoint, "http://localhost:8080/beers");
        assert!(settings.ui.show_load_errors);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempdir().unwrap();
        let result = resolve_settings(&LaunchOptions {
            config: Some(dir.path().join("nope.toml")),
            ..LaunchOptions::default()
        });

        assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
    }

    #[test]
    fn test_endpoint_override_wins() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, format!("[source]\nendpoint = \"{DEFAULT_ENDPOINT}\"\n")).unwrap();

        let settings = resolve_settings(&LaunchOptions {
            config: Some(path),
            endpoint: Some("https://beers.example/stouts".into()),
            ..LaunchOptions::default()
        })
        .unwrap();

        assert_eq!(settings.source.endpoint, "https://beers.example/stouts");
    }

    #[test]
    fn test_invalid_endpoint_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let result = resolve_settings(&LaunchOptions {
            config: Some(path),
            endpoint: Some("ftp://beers.example".into()),
            ..LaunchOptions::default()
        });

        let err = result.unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_init_config_writes_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let written = init_config(Some(path.clone())).unwrap();
        assert_eq!(written, path);
        let first = std::fs::read_to_string(&path).unwrap();
        assert!(first.contains("[source]"));

        std::fs::write(&path, "# edited\n").unwrap();
        init_config(Some(path.clone())).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# edited\n");
    }
}
