//! Configuration types for the beer catalog
//!
//! Defines:
//! - `Settings` - Global application settings (config.toml)
//! - `SourceSettings` - Where the catalog is fetched from
//! - `UiSettings` - Presentation options

use serde::{Deserialize, Serialize};

/// Default catalog endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.sampleapis.com/beers/ale";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Data source settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SourceSettings {
    /// Beer-listing endpoint (GET, JSON array response)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds. Unset means the transport default (none).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Image reference shown when a beer has no image or its image failed
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    /// Append the load diagnostic to the empty-state message.
    /// Off by default: a failed load looks like an empty catalog.
    #[serde(default)]
    pub show_load_errors: bool,

    /// Check every image URL after load and fall back to the placeholder on failure
    #[serde(default)]
    pub probe_images: bool,

    /// Maximum number of image checks in flight
    #[serde(default = "default_probe_concurrency")]
    pub probe_concurrency: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
            show_load_errors: false,
            probe_images: false,
            probe_concurrency: default_probe_concurrency(),
        }
    }
}

fn default_placeholder_image() -> String {
    beercat_core::DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

fn default_probe_concurrency() -> usize {
    8
}
