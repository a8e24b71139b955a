//! beercat-tui - Terminal UI for the beer catalog
//!
//! This crate provides the ratatui-based terminal interface on top of
//! beercat-app: terminal setup, event polling, the card grid and its overlays.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
