//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use beercat_app::actions::BackgroundTasks;
use beercat_app::config::Settings;
use beercat_app::message::Message;
use beercat_app::process::process_message;
use beercat_app::signals;
use beercat_app::source::BeerSource;
use beercat_app::state::AppState;
use beercat_core::prelude::*;

use super::{event, render, terminal};

/// Run the catalog TUI until the user quits
pub async fn run<S>(settings: Settings, source: Arc<S>, initial_search: Option<String>) -> Result<()>
where
    S: BeerSource + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let mut state = AppState::with_settings(settings);
    if let Some(search) = initial_search {
        state.catalog.set_search(search);
    }

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let mut tasks = BackgroundTasks::new();

    // The screen exists: start the one and only load
    process_message(&mut state, Message::Mount, &source, &msg_tx, &mut tasks);

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &source, &mut tasks);

    // Late results must not reach a torn-down screen
    tasks.shutdown();
    ratatui::restore();

    info!("Exiting after {} beers loaded", state.catalog.beers().len());
    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    source: &Arc<S>,
    tasks: &mut BackgroundTasks,
) -> Result<()>
where
    S: BeerSource + Sync + 'static,
{
    while !state.should_quit() {
        // Messages from background tasks and the signal handler
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, source, msg_tx, tasks);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, source, msg_tx, tasks);
        }
    }
    Ok(())
}
