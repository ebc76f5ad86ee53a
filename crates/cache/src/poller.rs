//! The scheduler driving periodic refresh cycles.

use crate::refresh::refresh_once;
use swarmview_api::*;

/// Drives the refresh engine on a fixed interval, independent of and
/// concurrent with any number of readers.
///
/// A poller is the sole writer of its snapshot store: construct exactly
/// one per server lifetime and hand read-only [DynSnapshotStore] handles
/// to everything else. The polling task is aborted when the poller is
/// dropped; there is no state to flush on shutdown.
#[derive(Debug)]
pub struct Poller {
    poll_task: tokio::task::JoinHandle<()>,
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.poll_task.abort();
    }
}

impl Poller {
    /// Spawn the polling task. The first cycle runs immediately so the
    /// cache warms without waiting a full interval.
    pub fn new(
        config: CacheConfig,
        dht: DynDhtClient,
        store: DynSnapshotStore,
    ) -> Self {
        let poll_task = tokio::task::spawn(poll_task(config, dht, store));
        Self { poll_task }
    }
}

async fn poll_task(
    config: CacheConfig,
    dht: DynDhtClient,
    store: DynSnapshotStore,
) {
    let mut interval = tokio::time::interval(config.refresh_interval());
    // a tick that lands while a refresh is still in flight is dropped,
    // not queued
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        interval.tick().await;

        let prev = store.read();

        match tokio::time::timeout(
            config.refresh_timeout(),
            refresh_once(&dht, &prev, &config),
        )
        .await
        {
            Err(_) => {
                let err = CacheError::refresh_timeout(config.refresh_timeout());
                tracing::warn!(%err, "abandoning refresh cycle");
            }
            Ok(Err(err)) => {
                tracing::debug!(
                    ?err,
                    "refresh cycle failed, continuing to serve prior snapshot"
                );
            }
            Ok(Ok(outcome)) => {
                if outcome.skipped_peers > 0 || outcome.skipped_rounds > 0 {
                    tracing::warn!(
                        skipped_peers = outcome.skipped_peers,
                        skipped_rounds = outcome.skipped_rounds,
                        "partial refresh cycle"
                    );
                }
                tracing::info!(
                    round = outcome.snapshot.round,
                    stage = outcome.snapshot.stage,
                    peers = outcome.snapshot.leaderboard.len(),
                    "publishing refreshed snapshot"
                );
                store.publish(outcome.snapshot);
            }
        }
    }
}
