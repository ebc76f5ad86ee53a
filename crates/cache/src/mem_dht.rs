//! A memory-backed DHT client.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use swarmview_api::*;

/// A memory-backed [DhtClient].
///
/// Honors record time-to-live and can be switched "offline" so that the
/// cache's degraded paths (skipped cycles, stale serving) can be exercised
/// without a real swarm. Also useful for running the server standalone
/// before a real DHT client is attached at the [DhtClient] seam.
#[derive(Debug)]
pub struct MemDhtClient {
    inner: Mutex<Inner>,
    offline: AtomicBool,
}

#[derive(Debug, Default)]
struct Inner {
    store: HashMap<String, Record>,
}

#[derive(Debug)]
struct Record {
    value: bytes::Bytes,
    expires_at: Option<std::time::Instant>,
}

impl Default for MemDhtClient {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            offline: AtomicBool::new(false),
        }
    }
}

impl MemDhtClient {
    /// Construct a new MemDhtClient.
    pub fn create() -> DynDhtClient {
        let out: DynDhtClient = Arc::new(Self::default());
        out
    }

    /// Simulate the DHT being unreachable. While offline, both `get` and
    /// `store` fail with [CacheError::DhtUnavailable]; stored records are
    /// kept and become visible again once back online.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Encode `value` as JSON and store it without expiration. Seeding
    /// helper for tests and offline development.
    pub fn insert_json<T: serde::Serialize>(
        &self,
        key: &str,
        value: &T,
    ) -> CacheResult<()> {
        let encoded = serde_json::to_vec(value)
            .map_err(|e| CacheError::dht_unavailable_src("encode record", e))?;
        self.inner.lock().unwrap().store.insert(
            key.to_string(),
            Record {
                value: encoded.into(),
                expires_at: None,
            },
        );
        Ok(())
    }

    /// Delete the record at `key`, as a remote expiry or deletion would.
    pub fn remove(&self, key: &str) {
        self.inner.lock().unwrap().store.remove(key);
    }

    fn check_offline(&self) -> CacheResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(CacheError::dht_unavailable("dht offline"))
        } else {
            Ok(())
        }
    }
}

impl Inner {
    fn get(&mut self, key: &str) -> Option<bytes::Bytes> {
        let now = std::time::Instant::now();
        if let Some(record) = self.store.get(key) {
            match record.expires_at {
                Some(expires_at) if expires_at <= now => {
                    self.store.remove(key);
                    None
                }
                _ => Some(record.value.clone()),
            }
        } else {
            None
        }
    }
}

impl DhtClient for MemDhtClient {
    fn get(&self, key: &str) -> BoxFut<'_, CacheResult<Option<bytes::Bytes>>> {
        let r = self
            .check_offline()
            .map(|_| self.inner.lock().unwrap().get(key));
        Box::pin(async move { r })
    }

    fn store(
        &self,
        key: &str,
        value: bytes::Bytes,
        ttl: std::time::Duration,
    ) -> BoxFut<'_, CacheResult<()>> {
        let r = self.check_offline().map(|_| {
            self.inner.lock().unwrap().store.insert(
                key.to_string(),
                Record {
                    value,
                    expires_at: Some(std::time::Instant::now() + ttl),
                },
            );
        });
        Box::pin(async move { r })
    }
}

#[cfg(test)]
mod test;
