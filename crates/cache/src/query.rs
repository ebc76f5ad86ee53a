//! The read-side query facade over the published snapshot.
//!
//! Every operation here is a pure function of the current snapshot: no
//! side effects, no DHT access, no lock held beyond the store's pointer
//! clone. Safe to call from any number of concurrent readers.

use swarmview_api::*;

/// Staleness and shape metadata for the current snapshot. Readers that
/// care can compare `refreshed_at` against their own clock to detect a
/// stalled refresh loop.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatus {
    /// The round frontier the snapshot was built against.
    pub round: i64,

    /// The stage within the frontier round.
    pub stage: i64,

    /// When the snapshot was assembled.
    pub refreshed_at: Timestamp,

    /// Number of peers on the leaderboard.
    pub peer_count: usize,

    /// Number of retained gossip messages.
    pub gossip_count: usize,
}

/// The current leaderboard, ranked.
///
/// Sorted by score descending, peer id ascending on ties, with 1-based
/// ranks attached. O(n log n) in leaderboard size; never touches the DHT.
pub fn leaderboard(store: &DynSnapshotStore) -> Vec<RankedEntry> {
    let snapshot = store.read();

    let mut entries = snapshot.leaderboard.clone();
    entries.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.peer_id.cmp(&b.peer_id))
    });

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry::new(entry, i + 1))
        .collect()
}

/// The retained gossip with `round >= since_round`, in log order.
///
/// A `since_round` below the retention window starts from the oldest
/// retained round; completeness beyond the window is not available. A
/// `since_round` beyond the latest round yields an empty sequence.
pub fn gossip_since(
    store: &DynSnapshotStore,
    since_round: i64,
) -> Vec<GossipMessage> {
    store.read().gossip.since(since_round).to_vec()
}

/// Metadata about the current snapshot.
pub fn status(store: &DynSnapshotStore) -> CacheStatus {
    let snapshot = store.read();
    CacheStatus {
        round: snapshot.round,
        stage: snapshot.stage,
        refreshed_at: snapshot.refreshed_at,
        peer_count: snapshot.leaderboard.len(),
        gossip_count: snapshot.gossip.len(),
    }
}

#[cfg(test)]
mod test;
