//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real I/O operations.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use routewatch::core::models::Observation;
use routewatch::core::ports::{AlertSink, FeedProvider};

/// Feed that returns a fixed batch, or fails on demand
pub struct MockFeed {
    batch: Vec<Observation>,
    fail: bool,
    fetches: AtomicUsize,
}

impl MockFeed {
    pub fn with_batch(batch: Vec<Observation>) -> Self {
        Self {
            batch,
            fail: false,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            batch: Vec::new(),
            fail: true,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl FeedProvider for MockFeed {
    fn fetch(&self) -> anyhow::Result<Vec<Observation>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("feed unavailable");
        }
        Ok(self.batch.clone())
    }
}

/// Sink that records every published alert
#[derive(Default)]
pub struct MockSink {
    published: Mutex<Vec<(String, String)>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<(String, String)> {
        self.published.lock().unwrap().clone()
    }
}

impl AlertSink for MockSink {
    fn publish(&self, user: &str, message: &str) {
        self.published.lock().unwrap().push((user.to_string(), message.to_string()));
    }
}
