//! A memory-backed snapshot store.

use std::sync::{Arc, Mutex};
use swarmview_api::*;

/// A memory-backed [SnapshotStore].
///
/// The current snapshot lives behind a single mutex as an `Arc`, so both
/// operations hold the lock only long enough to swap or clone a pointer.
/// Readers that obtained an `Arc` before a publish keep their old snapshot
/// alive until they drop it; readers after the publish see the new one.
/// There is no state in which a reader can observe fields from two
/// different cycles.
#[derive(Debug)]
pub struct MemSnapshotStore(Mutex<Arc<Snapshot>>);

impl Default for MemSnapshotStore {
    fn default() -> Self {
        Self(Mutex::new(Arc::new(Snapshot::empty())))
    }
}

impl MemSnapshotStore {
    /// Construct a new MemSnapshotStore holding the empty initial snapshot.
    pub fn create() -> DynSnapshotStore {
        let out: DynSnapshotStore = Arc::new(Self::default());
        out
    }
}

impl SnapshotStore for MemSnapshotStore {
    fn publish(&self, snapshot: Snapshot) {
        *self.0.lock().unwrap() = Arc::new(snapshot);
    }

    fn read(&self) -> Arc<Snapshot> {
        self.0.lock().unwrap().clone()
    }
}
