//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every spawned task is registered in [`BackgroundTasks`]. At teardown the
//! registry flips the shutdown watch channel and aborts whatever is still
//! running, so no result is ever applied to a state that no longer exists.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::message::Message;
use crate::source::BeerSource;
use crate::UpdateAction;

pub mod images;
pub mod load;

pub use images::spawn_image_probe;
pub use load::spawn_catalog_load;

/// Handles of spawned background tasks plus the shutdown signal they watch
#[derive(Debug)]
pub struct BackgroundTasks {
    handles: Vec<JoinHandle<()>>,
    shutdown_tx: watch::Sender<bool>,
}

impl Default for BackgroundTasks {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundTasks {
    pub fn new() -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self {
            handles: Vec::new(),
            shutdown_tx,
        }
    }

    /// A receiver that flips to `true` at teardown
    pub fn shutdown_rx(&self) -> watch::Receiver<bool> {
        self.shutdown_tx.subscribe()
    }

    pub fn track(&mut self, handle: JoinHandle<()>) {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle);
    }

    /// Number of tracked tasks that have not finished yet
    pub fn active(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    /// Signal shutdown and abort every task still running
    pub fn shutdown(&mut self) {
        let _ = self.shutdown_tx.send(true);
        for handle in self.handles.drain(..) {
            if !handle.is_finished() {
                handle.abort();
            }
        }
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<S>(
    action: UpdateAction,
    source: &Arc<S>,
    msg_tx: &mpsc::Sender<Message>,
    tasks: &mut BackgroundTasks,
) where
    S: BeerSource + Sync + 'static,
{
    let handle = match action {
        UpdateAction::LoadCatalog { generation } => spawn_catalog_load(
            Arc::clone(source),
            generation,
            msg_tx.clone(),
            tasks.shutdown_rx(),
        ),

        UpdateAction::ProbeImages {
            generation,
            images,
            concurrency,
        } => spawn_image_probe(
            Arc::clone(source),
            generation,
            images,
            concurrency,
            msg_tx.clone(),
            tasks.shutdown_rx(),
        ),
    };
    tasks.track(handle);
}

/// Resolves once shutdown is signalled or the registry is gone
pub(crate) async fn shutdown_requested(shutdown_rx: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown_rx.borrow() {
            return;
        }
        if shutdown_rx.changed().await.is_err() {
            return;
        }
    }
}
