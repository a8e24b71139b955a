//! Image availability probe
//!
//! Checks card image URLs with bounded concurrency and reports each one that
//! cannot be loaded, so the card can fall back to the placeholder.

use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use beercat_core::prelude::*;

use crate::message::Message;
use crate::source::BeerSource;
use crate::state::LoadGeneration;

use super::shutdown_requested;

pub fn spawn_image_probe<S>(
    source: Arc<S>,
    generation: LoadGeneration,
    images: Vec<(u64, String)>,
    concurrency: usize,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    S: BeerSource + Sync + 'static,
{
    tokio::spawn(async move {
        let total = images.len();
        debug!("Probing {} images for load {}", total, generation);

        let checks = stream::iter(images)
            .map(|(id, url)| {
                let source = Arc::clone(&source);
                async move { (id, source.image_available(&url).await) }
            })
            .buffer_unordered(concurrency.max(1));
        let mut checks = std::pin::pin!(checks);

        let mut failed = 0usize;
        loop {
            let next = tokio::select! {
                biased;
                _ = shutdown_requested(&mut shutdown_rx) => {
                    debug!("Image probe for load {} cancelled", generation);
                    return;
                }
                next = checks.next() => next,
            };

            let Some((id, available)) = next else {
                break;
            };
            if available {
                continue;
            }

            failed += 1;
            if msg_tx
                .send(Message::ImageLoadFailed { generation, id })
                .await
                .is_err()
            {
                debug!("Image probe stopped, screen closed");
                return;
            }
        }

        debug!("Image probe done: {} of {} unavailable", failed, total);
    })
}
