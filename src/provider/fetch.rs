//! Off-thread snapshot reads.

use super::{load_snapshot, DataProvider, ProviderError};
use crate::model::Snapshot;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// Result of one refresh request, tagged with the generation that asked for it.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<Snapshot, ProviderError>,
}

/// Runs provider reads on worker threads and hands the results back over a channel.
pub struct Fetcher {
    provider: Arc<dyn DataProvider>,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

impl Fetcher {
    #[must_use]
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { provider, tx, rx }
    }

    #[must_use]
    pub fn provider(&self) -> &Arc<dyn DataProvider> {
        &self.provider
    }

    /// Starts a read for `generation`. Requests are never cancelled; stale answers are
    /// filtered by whoever consumes them.
    pub fn request(&self, generation: u64) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let spawned = thread::Builder::new()
            .name(format!("stall-map-fetch-{generation}"))
            .spawn(move || {
                let result = load_snapshot(provider.as_ref());
                // The UI may have quit in the meantime.
                let _ = tx.send(FetchOutcome { generation, result });
            });

        if let Err(err) = spawned {
            let _ = self.tx.send(FetchOutcome {
                generation,
                result: Err(ProviderError::Unavailable {
                    message: format!("could not start fetch: {err}"),
                }),
            });
        }
    }

    /// Completed reads, without blocking.
    pub fn drain(&self) -> Vec<FetchOutcome> {
        self.rx.try_iter().collect()
    }

    /// Blocks for the next completed read.
    pub fn recv(&self) -> Option<FetchOutcome> {
        self.rx.recv().ok()
    }
}
