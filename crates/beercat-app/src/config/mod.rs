//! Configuration file parsing for the beer catalog
//!
//! Supports `<config_dir>/beercat/config.toml` (or an explicit `--config`
//! path); command-line flags override file values.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, load_settings_strict, validate_endpoint,
};
pub use types::*;
