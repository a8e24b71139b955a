//! Application state (Model in TEA pattern)

use std::collections::HashSet;

use beercat_core::{BeerCard, BeerRecord, CatalogState, CatalogView};

use crate::config::Settings;
use crate::message::GridNav;

/// Identifies one load request.
///
/// Results are applied only when they carry the generation of the load the
/// state is waiting for; anything else is a late or foreign result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadGeneration(pub u64);

impl std::fmt::Display for LoadGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of the single catalog load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Screen created, load not dispatched yet
    #[default]
    NotStarted,
    /// Request in flight
    InFlight(LoadGeneration),
    /// Load finished (success or failure); never restarted
    Settled(LoadGeneration),
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Search input + card grid
    #[default]
    Browse,

    /// Details overlay for the selected card
    Details,
}

/// Selection and scroll position of the card grid.
///
/// `columns` and `visible_rows` are written by the renderer after each frame
/// so navigation moves in the layout the user actually sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    pub selected: usize,
    pub scroll_row: usize,
    pub columns: usize,
    pub visible_rows: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            selected: 0,
            scroll_row: 0,
            columns: 1,
            visible_rows: 1,
        }
    }
}

impl GridState {
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_row = 0;
    }

    /// Keep the selection inside a list of `len` cards
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        self.selected = self.selected.min(len - 1);
        self.ensure_visible();
    }

    /// Record the layout of the last rendered frame
    pub fn set_layout(&mut self, columns: usize, visible_rows: usize) {
        self.columns = columns.max(1);
        self.visible_rows = visible_rows.max(1);
        self.ensure_visible();
    }

    pub fn selected_row(&self) -> usize {
        self.selected / self.columns.max(1)
    }

    /// Move the selection within a list of `len` cards
    pub fn navigate(&mut self, nav: GridNav, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        let columns = self.columns.max(1);
        let last = len - 1;
        let page = columns * self.visible_rows.max(1);

        self.selected = match nav {
            GridNav::Left => self.selected.saturating_sub(1),
            GridNav::Right => (self.selected + 1).min(last),
            GridNav::Up => {
                if self.selected >= columns {
                    self.selected - columns
                } else {
                    self.selected
                }
            }
            GridNav::Down => {
                // Only move when a row below exists; land on its last card if short
                if self.selected / columns < last / columns {
                    (self.selected + columns).min(last)
                } else {
                    self.selected
                }
            }
            GridNav::PageUp => self.selected.saturating_sub(page),
            GridNav::PageDown => (self.selected + page).min(last),
            GridNav::First => 0,
            GridNav::Last => last,
        };
        self.ensure_visible();
    }

    fn ensure_visible(&mut self) {
        let row = self.selected_row();
        let visible = self.visible_rows.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible {
            self.scroll_row = row + 1 - visible;
        }
    }
}

/// Complete application state (Model in TEA pattern)
#[derive(Debug)]
pub struct AppState {
    /// Beers, search and loading flag
    pub catalog: CatalogState,

    /// Loaded settings
    pub settings: Settings,

    /// Current UI mode
    pub ui_mode: UiMode,

    /// Card grid selection/scroll
    pub grid: GridState,

    /// Where the single load is in its lifecycle
    pub load_phase: LoadPhase,

    /// Diagnostic of a failed load, kept for the log and the optional UI hint
    pub load_error: Option<String>,

    /// Records whose image failed and now show the placeholder
    pub image_fallbacks: HashSet<u64>,

    /// Spinner animation frame (advanced by Tick while loading)
    pub spinner_frame: usize,

    next_generation: u64,
    should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            catalog: CatalogState::new(),
            settings,
            ui_mode: UiMode::Browse,
            grid: GridState::default(),
            load_phase: LoadPhase::NotStarted,
            load_error: None,
            image_fallbacks: HashSet::new(),
            spinner_frame: 0,
            next_generation: 1,
            should_quit: false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_loading(&self) -> bool {
        self.catalog.is_loading()
    }

    /// Start the load if it has never been started.
    ///
    /// Returns the generation to dispatch, or None when a load already ran.
    pub fn begin_load(&mut self) -> Option<LoadGeneration> {
        if self.load_phase != LoadPhase::NotStarted {
            return None;
        }
        let generation = LoadGeneration(self.next_generation);
        self.next_generation += 1;
        self.load_phase = LoadPhase::InFlight(generation);
        Some(generation)
    }

    /// Whether a load result with `generation` may be applied
    pub fn awaiting(&self, generation: LoadGeneration) -> bool {
        self.load_phase == LoadPhase::InFlight(generation)
    }

    /// Apply a successful load. Returns false for stale results.
    pub fn complete_load(&mut self, generation: LoadGeneration, beers: Vec<BeerRecord>) -> bool {
        if !self.awaiting(generation) {
            return false;
        }
        self.catalog.finish_load(beers);
        self.load_phase = LoadPhase::Settled(generation);
        self.grid.reset();
        true
    }

    /// Apply a failed load. Returns false for stale results.
    pub fn fail_load(&mut self, generation: LoadGeneration, error: String) -> bool {
        if !self.awaiting(generation) {
            return false;
        }
        self.catalog.fail_load();
        self.load_phase = LoadPhase::Settled(generation);
        self.load_error = Some(error);
        true
    }

    // ─────────────────────────────────────────────────────────
    // Images
    // ─────────────────────────────────────────────────────────

    /// Switch a card to the placeholder after its image failed.
    ///
    /// Returns false if the result is stale or the card already fell back,
    /// so the substitution happens at most once per record.
    pub fn mark_image_failed(&mut self, generation: LoadGeneration, id: u64) -> bool {
        if self.load_phase != LoadPhase::Settled(generation) {
            return false;
        }
        if !self.catalog.beers().iter().any(|b| b.id == id) {
            return false;
        }
        self.image_fallbacks.insert(id)
    }

    // ─────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────

    pub fn view(&self) -> CatalogView<'_> {
        self.catalog.view()
    }

    pub fn filtered_len(&self) -> usize {
        self.catalog.filtered().len()
    }

    /// Card display strings for `beer`
    pub fn card<'a>(&'a self, beer: &'a BeerRecord) -> BeerCard<'a> {
        BeerCard::new(
            beer,
            self.image_fallbacks.contains(&beer.id),
            &self.settings.ui.placeholder_image,
        )
    }

    /// The beer under the grid selection, if any card is shown
    pub fn selected_beer(&self) -> Option<&BeerRecord> {
        if self.is_loading() {
            return None;
        }
        self.catalog.filtered().get(self.grid.selected).copied()
    }

    /// Empty-state text; includes the load diagnostic only when configured
    pub fn empty_message(&self) -> String {
        const NO_RESULTS: &str = "No beers found matching your search.";
        match (&self.load_error, self.settings.ui.show_load_errors) {
            (Some(error), true) => format!("{NO_RESULTS} (load failed: {error})"),
            _ => NO_RESULTS.to_string(),
        }
    }

    /// "Showing N of M beers" once loaded
    pub fn result_summary(&self) -> Option<String> {
        if self.is_loading() {
            return None;
        }
        Some(format!(
            "Showing {} of {} beers",
            self.filtered_len(),
            self.catalog.beers().len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beers(n: u64) -> Vec<BeerRecord> {
        (1..=n)
            .map(|i| BeerRecord::new(i, format!("Beer {i}"), "$1"))
            .collect()
    }

    #[test]
    fn test_begin_load_only_once() {
        let mut state = AppState::new();
        let gen = state.begin_load();
        assert_eq!(gen, Some(LoadGeneration(1)));
        assert!(state.begin_load().is_none());

        state.complete_load(LoadGeneration(1), beers(2));
        assert!(state.begin_load().is_none());
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let mut state = AppState::new();
        let gen = state.begin_load().unwrap();
        assert!(!state.complete_load(LoadGeneration(gen.0 + 7), beers(3)));
        assert!(state.is_loading());
        assert!(state.catalog.beers().is_empty());
    }

    #[test]
    fn test_result_before_begin_is_ignored() {
        let mut state = AppState::new();
        assert!(!state.fail_load(LoadGeneration(1), "boom".into()));
        assert!(state.is_loading());
        assert!(state.load_error.is_none());
    }

    #[test]
    fn test_fail_load_records_error() {
        let mut state = AppState::new();
        let gen = state.begin_load().unwrap();
        assert!(state.fail_load(gen, "connection refused".into()));
        assert!(!state.is_loading());
        assert_eq!(state.load_error.as_deref(), Some("connection refused"));
        assert_eq!(state.view(), CatalogView::Empty);
    }

    #[test]
    fn test_empty_message_hides_error_by_default() {
        let mut state = AppState::new();
        let gen = state.begin_load().unwrap();
        state.fail_load(gen, "timeout".into());
        assert_eq!(state.empty_message(), "No beers found matching your search.");

        state.settings.ui.show_load_errors = true;
        assert!(state.empty_message().contains("load failed: timeout"));
    }

    #[test]
    fn test_image_fallback_happens_once() {
        let mut state = AppState::new();
        let gen = state.begin_load().unwrap();
        state.complete_load(gen, vec![BeerRecord::new(1, "Ale", "$1").with_image("u1")]);

        assert!(state.mark_image_failed(gen, 1));
        assert!(!state.mark_image_failed(gen, 1));

        let beer = state.catalog.beers()[0].clone();
        assert!(state.card(&beer).image.is_placeholder());
    }

    #[test]
    fn test_image_failure_for_unknown_id_ignored() {
        let mut state = AppState::new();
        let gen = state.begin_load().unwrap();
        state.complete_load(gen, beers(1));
        assert!(!state.mark_image_failed(gen, 99));
        assert!(!state.mark_image_failed(LoadGeneration(42), 1));
    }

    #[test]
    fn test_selected_beer_follows_filter() {
        let mut state = AppState::new();
        let gen = state.begin_load().unwrap();
        state.complete_load(gen, beers(3));
        state.grid.selected = 2;
        assert_eq!(state.selected_beer().map(|b| b.id), Some(3));

        state.catalog.set_search("Beer 1");
        state.grid.clamp(state.filtered_len());
        assert_eq!(state.selected_beer().map(|b| b.id), Some(1));
    }

    #[test]
    fn test_result_summary() {
        let mut state = AppState::new();
        assert!(state.result_summary().is_none());
        let gen = state.begin_load().unwrap();
        state.complete_load(gen, beers(4));
        state.catalog.set_search("Beer 2");
        assert_eq!(state.result_summary().as_deref(), Some("Showing 1 of 4 beers"));
    }

    #[test]
    fn test_grid_navigation_in_columns() {
        let mut grid = GridState::default();
        grid.set_layout(3, 2);

        grid.navigate(GridNav::Right, 7);
        assert_eq!(grid.selected, 1);
        grid.navigate(GridNav::Down, 7);
        assert_eq!(grid.selected, 4);
        grid.navigate(GridNav::Down, 7);
        // Last row has a single card at index 6
        assert_eq!(grid.selected, 6);
        assert_eq!(grid.scroll_row, 1);
        grid.navigate(GridNav::Down, 7);
        assert_eq!(grid.selected, 6);
        grid.navigate(GridNav::Up, 7);
        assert_eq!(grid.selected, 3);
        grid.navigate(GridNav::First, 7);
        assert_eq!(grid.selected, 0);
        assert_eq!(grid.scroll_row, 0);
        grid.navigate(GridNav::Last, 7);
        assert_eq!(grid.selected, 6);
    }

    #[test]
    fn test_grid_paging() {
        let mut grid = GridState::default();
        grid.set_layout(2, 2);
        grid.navigate(GridNav::PageDown, 10);
        assert_eq!(grid.selected, 4);
        assert_eq!(grid.scroll_row, 1);
        grid.navigate(GridNav::PageUp, 10);
        assert_eq!(grid.selected, 0);
        assert_eq!(grid.scroll_row, 0);
    }

    #[test]
    fn test_grid_clamp_on_shrink() {
        let mut grid = GridState::default();
        grid.selected = 8;
        grid.clamp(3);
        assert_eq!(grid.selected, 2);
        grid.clamp(0);
        assert_eq!(grid.selected, 0);
    }

    #[test]
    fn test_grid_navigation_on_empty_list() {
        let mut grid = GridState::default();
        grid.navigate(GridNav::Down, 0);
        assert_eq!(grid.selected, 0);
    }
}
