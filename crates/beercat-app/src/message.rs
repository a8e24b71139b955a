//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::LoadGeneration;
use beercat_core::BeerRecord;

/// Grid navigation directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridNav {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    First,
    Last,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit immediately (Ctrl+C, signal handler, Esc with nothing to dismiss)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Catalog Load Messages
    // ─────────────────────────────────────────────────────────
    /// The catalog screen was displayed; starts the one and only load
    Mount,
    /// Load finished with a list of beers
    CatalogLoaded {
        generation: LoadGeneration,
        beers: Vec<BeerRecord>,
    },
    /// Load failed (network, status or body); carries the diagnostic
    CatalogLoadFailed {
        generation: LoadGeneration,
        error: String,
    },
    /// An image URL could not be loaded; switch that card to the placeholder
    ImageLoadFailed { generation: LoadGeneration, id: u64 },

    // ─────────────────────────────────────────────────────────
    // Search Messages
    // ─────────────────────────────────────────────────────────
    /// Replace the search text
    SearchInput { text: String },
    /// Reset the search to the empty string
    ClearSearch,

    // ─────────────────────────────────────────────────────────
    // Grid Messages
    // ─────────────────────────────────────────────────────────
    /// Move the card selection
    Navigate(GridNav),
    /// Show the details overlay for the selected card
    OpenDetails,
    /// Hide the details overlay
    CloseDetails,
}
