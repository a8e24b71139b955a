//! Catalog state and the derived render state machine
//!
//! `CatalogState` owns the three catalog fields. Each field has exactly one
//! writer: `beers` and `is_loading` change only through [`CatalogState::finish_load`]
//! and [`CatalogState::fail_load`], `search` only through the search setters.
//! The filtered list and the view are always derived, never stored.

use crate::filter::filter_beers;
use crate::types::BeerRecord;

/// Loaded beers, current search string and loading flag for one screen lifetime
#[derive(Debug, Clone)]
pub struct CatalogState {
    beers: Vec<BeerRecord>,
    search: String,
    is_loading: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    /// Fresh state: no beers, empty search, loading.
    pub fn new() -> Self {
        Self {
            beers: Vec::new(),
            search: String::new(),
            is_loading: true,
        }
    }

    pub fn beers(&self) -> &[BeerRecord] {
        &self.beers
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Store a successful load verbatim and clear the loading flag.
    ///
    /// Returns false (and changes nothing) if the load already settled.
    pub fn finish_load(&mut self, beers: Vec<BeerRecord>) -> bool {
        if !self.is_loading {
            return false;
        }
        self.beers = beers;
        self.is_loading = false;
        true
    }

    /// Settle a failed load: the list stays empty, loading ends.
    ///
    /// Returns false (and changes nothing) if the load already settled.
    pub fn fail_load(&mut self) -> bool {
        if !self.is_loading {
            return false;
        }
        self.is_loading = false;
        true
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Whether the clear affordance should be visible
    pub fn can_clear_search(&self) -> bool {
        !self.search.is_empty()
    }

    /// Beers matching the current search, in source order
    pub fn filtered(&self) -> Vec<&BeerRecord> {
        filter_beers(&self.beers, &self.search)
    }

    /// The render state for the current inputs
    pub fn view(&self) -> CatalogView<'_> {
        CatalogView::derive(self.is_loading, self.filtered())
    }
}

/// The three mutually exclusive render states of the catalog
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView<'a> {
    /// Fetch in flight; no list is shown
    Loading,
    /// Settled with zero matching records
    Empty,
    /// Settled with at least one matching record, in list order
    Populated(Vec<&'a BeerRecord>),
}

impl<'a> CatalogView<'a> {
    /// Pure mapping from (loading flag, filtered list) to a view state
    pub fn derive(is_loading: bool, filtered: Vec<&'a BeerRecord>) -> Self {
        if is_loading {
            CatalogView::Loading
        } else if filtered.is_empty() {
            CatalogView::Empty
        } else {
            CatalogView::Populated(filtered)
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            CatalogView::Populated(beers) => beers.len(),
            _ => 0,
        }
    }

    /// Short lowercase name, used in headless output and logs
    pub fn label(&self) -> &'static str {
        match self {
            CatalogView::Loading => "loading",
            CatalogView::Empty => "empty",
            CatalogView::Populated(_) => "populated",
        }
    }
}
