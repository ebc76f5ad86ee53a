//! Snapshot-store related types.

use crate::*;
use std::sync::Arc;

/// Represents the ability to hold the current published [Snapshot] and
/// hand it to any number of concurrent readers.
///
/// Unlike the DHT boundary this contract is synchronous on purpose:
/// `read` must return in O(1) without ever blocking on a concurrent
/// `publish`, and `publish` must replace the snapshot atomically. A
/// reader observes either the entirely-old or the entirely-new value,
/// never a mix of two cycles. An implementation that needs I/O to satisfy
/// `read` cannot meet the contract.
pub trait SnapshotStore: 'static + Send + Sync + std::fmt::Debug {
    /// Replace the current snapshot. Visible to all subsequent `read`
    /// calls. Only the single refresh engine instance may call this.
    fn publish(&self, snapshot: Snapshot);

    /// Get the latest published snapshot, or the empty initial snapshot
    /// if none has been published yet.
    fn read(&self) -> Arc<Snapshot>;
}

/// Trait-object [SnapshotStore].
pub type DynSnapshotStore = Arc<dyn SnapshotStore>;
