//! Simulated asynchronous data source.
//!
//! One tokio task sleeps for the configured latency, generates the whole
//! batch, and sends it back once. There is no error path and no
//! cancellation: if the event loop is gone, the send fails and the batch
//! is dropped.

use crate::config::TuiConfig;
use crate::events::TuiEvent;
use hub_core::{generate, Record, Variant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSource {
    pub variant: Variant,
    pub count: usize,
    pub seed: Option<u64>,
    pub latency: Duration,
}

impl DataSource {
    pub fn from_config(config: &TuiConfig) -> Self {
        Self {
            variant: config.variant,
            count: config.record_count,
            seed: config.seed,
            latency: config.load_latency(),
        }
    }

    /// Generate the batch synchronously.
    pub fn generate(&self) -> Vec<Record> {
        match self.seed {
            Some(seed) => generate(self.variant, self.count, &mut StdRng::seed_from_u64(seed)),
            None => generate(self.variant, self.count, &mut rand::rng()),
        }
    }

    /// Resolve after the simulated latency with the full batch.
    pub async fn fetch(self) -> Vec<Record> {
        tokio::time::sleep(self.latency).await;
        self.generate()
    }
}

pub fn spawn_loader(source: DataSource, sender: mpsc::Sender<TuiEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let records = source.fetch().await;
        tracing::info!(
            variant = %source.variant,
            count = records.len(),
            seeded = source.seed.is_some(),
            "Simulated fetch resolved"
        );
        if sender.send(TuiEvent::Loaded(records)).await.is_err() {
            tracing::debug!("Event loop closed before load completed; batch discarded");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(seed: Option<u64>) -> DataSource {
        DataSource {
            variant: Variant::Cyber,
            count: 20,
            seed,
            latency: Duration::from_millis(600),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_loader_delivers_once_after_latency() {
        let (tx, mut rx) = mpsc::channel(4);
        let handle = spawn_loader(source(Some(5)), tx);

        tokio::time::sleep(Duration::from_millis(599)).await;
        assert!(rx.try_recv().is_err());

        match rx.recv().await {
            Some(TuiEvent::Loaded(records)) => assert_eq!(records.len(), 20),
            other => panic!("Expected Loaded event, got {:?}", other),
        }
        assert!(handle.await.is_ok());
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_loader_tolerates_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let handle = spawn_loader(source(None), tx);
        assert!(handle.await.is_ok());
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        assert_eq!(source(Some(9)).generate(), source(Some(9)).generate());
    }
}
