//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `catalog`: Load completion and image fallback handlers
//! - `search`: Search input handlers
//! - `grid`: Selection and details overlay handlers

pub(crate) mod catalog;
pub(crate) mod grid;
pub(crate) mod keys;
pub(crate) mod search;
pub(crate) mod update;


use crate::message::Message;
use crate::state::LoadGeneration;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Fetch the catalog in a background task
    LoadCatalog { generation: LoadGeneration },

    /// Check image URLs in the background; failures come back as
    /// `Message::ImageLoadFailed`
    ProbeImages {
        generation: LoadGeneration,
        /// (record id, image url) pairs to check
        images: Vec<(u64, String)>,
        /// Maximum concurrent checks
        concurrency: usize,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
