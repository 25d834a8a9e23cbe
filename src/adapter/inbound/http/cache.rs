//! Short-lived in-memory cache of upstream quote bodies.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde_json::Value;

struct Entry {
    stored_at: Instant,
    body: Value,
}

/// Successful quote bodies keyed by uppercase symbol, each valid for `ttl`.
///
/// A zero TTL disables caching.
pub struct QuoteCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, Entry>>,
}

impl QuoteCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh body for `symbol`, evicting it if expired.
    pub fn get(&self, symbol: &str) -> Option<Value> {
        if self.ttl.is_zero() {
            return None;
        }
        let mut entries = self.entries.lock();
        let fresh = entries
            .get(symbol)
            .map(|entry| (entry.stored_at.elapsed() < self.ttl).then(|| entry.body.clone()))?;
        if fresh.is_none() {
            entries.remove(symbol);
        }
        fresh
    }

    pub fn insert(&self, symbol: &str, body: Value) {
        if self.ttl.is_zero() {
            return;
        }
        let mut entries = self.entries.lock();
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
        entries.insert(
            symbol.to_string(),
            Entry {
                stored_at: Instant::now(),
                body,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
