//! The DHT client boundary.

use crate::*;
use std::sync::Arc;

/// Represents the ability to read and write the swarm's shared DHT state.
///
/// The cache treats the DHT purely as a key-addressable, eventually
/// consistent store; routing, peer discovery, and record replication are
/// the client implementation's concern. Both operations may be slow or
/// fail outright. The refresh engine bounds every call with its
/// configured per-query timeout, and nothing on the read path ever calls
/// through this trait.
pub trait DhtClient: 'static + Send + Sync + std::fmt::Debug {
    /// Fetch the record stored at `key`. `Ok(None)` means the key is
    /// absent, which for most records is a normal condition rather than
    /// an error.
    fn get(&self, key: &str) -> BoxFut<'_, CacheResult<Option<bytes::Bytes>>>;

    /// Store `value` at `key` with the given time-to-live.
    fn store(
        &self,
        key: &str,
        value: bytes::Bytes,
        ttl: std::time::Duration,
    ) -> BoxFut<'_, CacheResult<()>>;
}

/// Trait-object [DhtClient].
pub type DynDhtClient = Arc<dyn DhtClient>;
