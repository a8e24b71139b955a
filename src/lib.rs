//! Beer Catalog Library
//!
//! A terminal browser for a craft beer catalog, with a headless NDJSON mode.

pub mod app;
pub mod headless;

// Re-export main entry points
pub use app::{run, LaunchOptions};
pub use headless::runner::run_headless;
