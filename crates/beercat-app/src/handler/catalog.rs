//! Catalog load handlers
//!
//! Mount dispatches the single load; completion messages settle it. Results
//! whose generation does not match the in-flight load are dropped.

use beercat_core::prelude::*;
use beercat_core::BeerRecord;

use crate::state::{AppState, LoadGeneration};

use super::{UpdateAction, UpdateResult};

/// Handle the screen being displayed: start the load exactly once
pub fn handle_mount(state: &mut AppState) -> UpdateResult {
    match state.begin_load() {
        Some(generation) => {
            info!(
                "Loading catalog {} from {}",
                generation, state.settings.source.endpoint
            );
            UpdateResult::action(UpdateAction::LoadCatalog { generation })
        }
        None => {
            debug!("Catalog load already dispatched, ignoring mount");
            UpdateResult::none()
        }
    }
}

/// Handle a successful load
pub fn handle_catalog_loaded(
    state: &mut AppState,
    generation: LoadGeneration,
    beers: Vec<BeerRecord>,
) -> UpdateResult {
    let count = beers.len();
    if !state.complete_load(generation, beers) {
        debug!("Discarding stale catalog result {}", generation);
        return UpdateResult::none();
    }
    info!("Catalog {} loaded: {} beers", generation, count);

    if !state.settings.ui.probe_images {
        return UpdateResult::none();
    }

    let images: Vec<(u64, String)> = state
        .catalog
        .beers()
        .iter()
        .filter_map(|beer| beer.image_url().map(|url| (beer.id, url.to_string())))
        .collect();

    if images.is_empty() {
        return UpdateResult::none();
    }

    UpdateResult::action(UpdateAction::ProbeImages {
        generation,
        images,
        concurrency: state.settings.ui.probe_concurrency.max(1),
    })
}

/// Handle a failed load: log the diagnostic and settle with an empty list
pub fn handle_catalog_load_failed(
    state: &mut AppState,
    generation: LoadGeneration,
    error: String,
) -> UpdateResult {
    if !state.awaiting(generation) {
        debug!("Discarding stale catalog failure {}: {}", generation, error);
        return UpdateResult::none();
    }
    error!("Error fetching catalog {}: {}", generation, error);
    state.fail_load(generation, error);
    UpdateResult::none()
}

/// Handle an image that failed to load
pub fn handle_image_load_failed(
    state: &mut AppState,
    generation: LoadGeneration,
    id: u64,
) -> UpdateResult {
    if state.mark_image_failed(generation, id) {
        debug!("Image for beer {} failed, using placeholder", id);
    }
    UpdateResult::none()
}
