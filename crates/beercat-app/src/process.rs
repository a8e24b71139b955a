//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::{handle_action, BackgroundTasks};
use crate::handler;
use crate::message::Message;
use crate::source::BeerSource;
use crate::state::AppState;

/// Process a message and its follow-ups through the update function,
/// spawning a background task for every action produced
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    source: &Arc<S>,
    msg_tx: &mpsc::Sender<Message>,
    tasks: &mut BackgroundTasks,
) where
    S: BeerSource + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, source, msg_tx, tasks);
        }

        msg = result.message;
    }
}
