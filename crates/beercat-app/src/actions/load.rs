//! Catalog load task

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use beercat_core::prelude::*;

use crate::message::Message;
use crate::source::BeerSource;
use crate::state::LoadGeneration;

use super::shutdown_requested;

/// Spawn the single catalog fetch for `generation`.
///
/// The outcome is reported as `CatalogLoaded` or `CatalogLoadFailed`. Nothing
/// is sent once shutdown has been signalled.
pub fn spawn_catalog_load<S>(
    source: Arc<S>,
    generation: LoadGeneration,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    S: BeerSource + Sync + 'static,
{
    tokio::spawn(async move {
        debug!("Catalog load {} started", generation);

        let outcome = tokio::select! {
            biased;
            _ = shutdown_requested(&mut shutdown_rx) => {
                debug!("Catalog load {} cancelled", generation);
                return;
            }
            outcome = source.fetch_beers() => outcome,
        };

        if *shutdown_rx.borrow() {
            debug!("Catalog load {} finished after shutdown, dropping result", generation);
            return;
        }

        let message = match outcome {
            Ok(beers) => {
                info!("Catalog load {} fetched {} records", generation, beers.len());
                Message::CatalogLoaded { generation, beers }
            }
            Err(e) => {
                if e.is_load_failure() {
                    debug!("Catalog load {} failed: {}", generation, e);
                } else {
                    warn!("Catalog load {} failed outside the request: {:?}", generation, e);
                }
                Message::CatalogLoadFailed {
                    generation,
                    error: e.to_string(),
                }
            }
        };

        if msg_tx.send(message).await.is_err() {
            debug!("Catalog load {} finished after the screen closed", generation);
        }
    })
}
