//! Headless mode - JSON event output instead of the TUI
//!
//! Runs the same load and filter as the TUI and writes NDJSON
//! (newline-delimited JSON) to stdout, one event per line. Each event has an
//! "event" field naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"load_started","endpoint":"https://api.sampleapis.com/beers/ale","timestamp":1704700001000}
//! {"event":"load_succeeded","count":2,"timestamp":1704700001400}
//! {"event":"beer","id":1,"name":"Amber Ale","price":"$5","rating":"4.2","reviews":"10 reviews","image":"u1","placeholder":false,"timestamp":1704700001401}
//! {"event":"catalog","state":"populated","shown":1,"total":2,"timestamp":1704700001401}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use beercat_core::{BeerCard, CatalogView};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The catalog request was dispatched
    LoadStarted { endpoint: String, timestamp: i64 },

    LoadSucceeded { count: usize, timestamp: i64 },

    /// The request failed; the catalog renders as empty
    LoadFailed { error: String, timestamp: i64 },

    /// One rendered card, in list order
    Beer {
        id: u64,
        name: String,
        price: String,
        rating: String,
        reviews: String,
        image: String,
        placeholder: bool,
        timestamp: i64,
    },

    /// Final render state: "loading", "empty" or "populated"
    Catalog {
        state: String,
        shown: usize,
        total: usize,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn load_started(endpoint: &str) -> Self {
        Self::LoadStarted {
            endpoint: endpoint.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn load_succeeded(count: usize) -> Self {
        Self::LoadSucceeded {
            count,
            timestamp: Self::now(),
        }
    }

    pub fn load_failed(error: String) -> Self {
        Self::LoadFailed {
            error,
            timestamp: Self::now(),
        }
    }

    pub fn beer(card: &BeerCard<'_>) -> Self {
        Self::Beer {
            id: card.id,
            name: card.name.to_string(),
            price: card.price.to_string(),
            rating: card.rating.clone(),
            reviews: card.reviews.clone(),
            image: card.image.url().to_string(),
            placeholder: card.image.is_placeholder(),
            timestamp: Self::now(),
        }
    }

    pub fn catalog(view: &CatalogView<'_>, total: usize) -> Self {
        Self::Catalog {
            state: view.label().to_string(),
            shown: view.card_count(),
            total,
            timestamp: Self::now(),
        }
    }

    /// The event's type tag, as serialized
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LoadStarted { .. } => "load_started",
            Self::LoadSucceeded { .. } => "load_succeeded",
            Self::LoadFailed { .. } => "load_failed",
            Self::Beer { .. } => "beer",
            Self::Catalog { .. } => "catalog",
        }
    }
}
