//! Test utilities: fixture records and an in-memory data source
//!
//! Available to other crates' tests through the `test-helpers` feature.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use beercat_core::{BeerRecord, Error, Result};

use crate::source::BeerSource;

/// The two-record catalog used across scenario tests
pub fn fixture_beers() -> Vec<BeerRecord> {
    vec![
        BeerRecord::new(1, "Amber Ale", "$5")
            .with_image("u1")
            .with_rating(Some(4.2), Some(10)),
        BeerRecord::new(2, "Pale Lager", "$4").with_image("u2"),
    ]
}

/// A data source that answers from memory.
///
/// The first fetch returns the configured outcome; later fetches return an
/// empty list. An optional gate holds the fetch until [`StaticBeerSource::release`].
/// Image URLs containing "broken" are reported as unavailable.
#[derive(Debug)]
pub struct StaticBeerSource {
    outcome: Mutex<Option<Result<Vec<BeerRecord>>>>,
    gate: Option<Arc<Notify>>,
    fetches: AtomicUsize,
    image_checks: AtomicUsize,
}

impl StaticBeerSource {
    pub fn with_beers(beers: Vec<BeerRecord>) -> Self {
        Self::with_outcome(Ok(beers))
    }

    pub fn failing(error: Error) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<Vec<BeerRecord>>) -> Self {
        Self {
            outcome: Mutex::new(Some(outcome)),
            gate: None,
            fetches: AtomicUsize::new(0),
            image_checks: AtomicUsize::new(0),
        }
    }

    /// Hold every fetch until `release` is called
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    /// Let one held fetch through; a release before the fetch starts is kept
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn image_check_count(&self) -> usize {
        self.image_checks.load(Ordering::SeqCst)
    }
}

impl BeerSource for StaticBeerSource {
    async fn fetch_beers(&self) -> Result<Vec<BeerRecord>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let outcome = self.outcome.lock().ok().and_then(|mut slot| slot.take());
        outcome.unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn image_available(&self, url: &str) -> bool {
        self.image_checks.fetch_add(1, Ordering::SeqCst);
        !url.contains("broken")
    }
}
