//! beercat-app - Application state and orchestration for the beer catalog
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the catalog
//! screen, the data source trait with its HTTP implementation, background task
//! management, and configuration loading.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod source;
pub mod state;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Re-export primary types
pub use actions::BackgroundTasks;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{GridNav, Message};
pub use source::{BeerSource, HttpBeerSource, LocalBeerSource};
pub use state::{AppState, LoadGeneration, LoadPhase, UiMode};
