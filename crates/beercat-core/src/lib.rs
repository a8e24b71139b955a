//! # beercat-core - Core Domain Types
//!
//! Foundation crate for the beer catalog. Provides the beer record model, the
//! search filter, the catalog view state machine, card presentation helpers,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`BeerRecord`] - A single beer as received from the data source
//! - [`Rating`] - Optional average rating and review count
//!
//! ### Search (`filter`)
//! - [`filter_beers()`] - Case-insensitive substring filter over a beer list
//! - [`matches_search()`] - Single-record predicate used by the filter
//!
//! ### Catalog (`catalog`)
//! - [`CatalogState`] - Loaded beers, search string and loading flag
//! - [`CatalogView`] - Loading / Empty / Populated render state
//!
//! ### Cards (`card`)
//! - [`BeerCard`] - Display strings for one record (price, rating, reviews, image)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with load-failure vs fatal classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use beercat_core::prelude::*;
//! ```

pub mod card;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all beercat crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use card::{BeerCard, DEFAULT_PLACEHOLDER_IMAGE};
pub use catalog::{CatalogState, CatalogView};
pub use error::{Error, Result, ResultExt};
pub use filter::{filter_beers, matches_search};
pub use types::{BeerRecord, Rating};
