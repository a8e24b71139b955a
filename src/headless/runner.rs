//! Headless mode runner - event loop without TUI
//!
//! Mounts the catalog, waits for the load (and the image probe, when
//! enabled) to settle, then reports the rendered cards as JSON events.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use beercat_app::actions::BackgroundTasks;
use beercat_app::config::Settings;
use beercat_app::message::Message;
use beercat_app::process::process_message;
use beercat_app::signals;
use beercat_app::source::BeerSource;
use beercat_app::state::AppState;
use beercat_core::prelude::*;
use beercat_core::CatalogView;

use super::HeadlessEvent;

/// How long to wait for a message before checking whether work remains
const IDLE_POLL: Duration = Duration::from_millis(25);

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless<S>(
    settings: Settings,
    source: Arc<S>,
    initial_search: Option<String>,
) -> Result<()>
where
    S: BeerSource + Sync + 'static,
{
    info!("Starting in headless mode, endpoint {}", settings.source.endpoint);

    let state = drive(settings, source, initial_search, true, |event| event.emit()).await;

    info!(
        "Headless mode exiting: {} of {} beers shown",
        state.filtered_len(),
        state.catalog.beers().len()
    );
    Ok(())
}

/// Drive one catalog lifecycle, handing every event to `sink`.
///
/// Returns the final state. A quit request (signal) ends the run early; the
/// closing `catalog` event is still reported.
pub async fn drive<S, F>(
    settings: Settings,
    source: Arc<S>,
    initial_search: Option<String>,
    handle_signals: bool,
    mut sink: F,
) -> AppState
where
    S: BeerSource + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    let mut state = AppState::with_settings(settings);
    if let Some(search) = initial_search {
        state.catalog.set_search(search);
    }

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);
    if handle_signals {
        signals::spawn_signal_handler(msg_tx.clone());
    }
    let mut tasks = BackgroundTasks::new();

    sink(HeadlessEvent::load_started(&state.settings.source.endpoint));
    process_message(&mut state, Message::Mount, &source, &msg_tx, &mut tasks);

    let mut reported = false;
    while !state.should_quit() {
        match tokio::time::timeout(IDLE_POLL, msg_rx.recv()).await {
            Ok(Some(msg)) => process_message(&mut state, msg, &source, &msg_tx, &mut tasks),
            Ok(None) => break,
            Err(_) if !state.is_loading() && tasks.active() == 0 => break,
            Err(_) => {}
        }

        if !reported && !state.is_loading() {
            reported = true;
            match &state.load_error {
                Some(error) => sink(HeadlessEvent::load_failed(error.clone())),
                None => sink(HeadlessEvent::load_succeeded(state.catalog.beers().len())),
            }
        }
    }

    tasks.shutdown();

    let view = state.view();
    if let CatalogView::Populated(beers) = &view {
        for beer in beers {
            sink(HeadlessEvent::beer(&state.card(beer)));
        }
    }
    sink(HeadlessEvent::catalog(&view, state.catalog.beers().len()));

    state
}
