//! The refresh engine: one complete DHT poll cycle.

use swarmview_api::*;

/// The product of a successful refresh cycle.
#[derive(Debug)]
pub struct RefreshOutcome {
    /// The freshly assembled snapshot, ready to publish.
    pub snapshot: Snapshot,

    /// Peers whose progress records were absent, malformed, or timed out
    /// this cycle.
    pub skipped_peers: usize,

    /// Gossip rounds whose records were malformed or timed out this cycle.
    pub skipped_rounds: usize,
}

/// Run one complete poll cycle against the DHT.
///
/// The frontier pointer query is the only fatal step: if it fails, errors
/// out, or decodes to garbage, the cycle returns
/// [CacheError::DhtUnavailable] and the caller keeps serving `prev`. Every
/// other failure is contained to the record it occurred on; a single
/// peer's bad data never aborts the cycle.
///
/// Gossip is merged with `prev`'s log rather than rebuilt: records the
/// DHT has already dropped survive as long as their round stays inside
/// the retention window.
pub async fn refresh_once(
    dht: &DynDhtClient,
    prev: &Snapshot,
    config: &CacheConfig,
) -> CacheResult<RefreshOutcome> {
    let frontier = fetch_round_stage(dht, config).await?;

    let peers = fetch_peer_directory(dht, config).await;

    let mut leaderboard = Vec::with_capacity(peers.len());
    let mut skipped_peers = 0;
    for peer_id in &peers {
        match fetch_progress(dht, config, peer_id).await {
            Ok(entry) => leaderboard.push(entry),
            Err(err) => {
                tracing::debug!(?err, "skipping peer record");
                skipped_peers += 1;
            }
        }
    }

    let oldest_round = config.oldest_retained_round(frontier.round);
    let mut fresh = Vec::new();
    let mut skipped_rounds = 0;
    for round in oldest_round..=frontier.round {
        match fetch_gossip_round(dht, config, round).await {
            Ok(messages) => fresh.extend(messages),
            Err(err) => {
                tracing::debug!(round, ?err, "skipping gossip round");
                skipped_rounds += 1;
            }
        }
    }
    let gossip = GossipLog::merge(&prev.gossip, fresh, oldest_round);

    Ok(RefreshOutcome {
        snapshot: Snapshot {
            leaderboard,
            gossip,
            round: frontier.round,
            stage: frontier.stage,
            // refreshed_at never regresses, even if the wall clock does
            refreshed_at: Timestamp::now().max(prev.refreshed_at),
        },
        skipped_peers,
        skipped_rounds,
    })
}

/// One DHT query, bounded by the configured per-query timeout.
async fn dht_get(
    dht: &DynDhtClient,
    config: &CacheConfig,
    key: &str,
) -> CacheResult<Option<bytes::Bytes>> {
    match tokio::time::timeout(config.dht_timeout(), dht.get(key)).await {
        Ok(r) => r,
        Err(_) => Err(CacheError::dht_unavailable(format!(
            "query for {key} timed out"
        ))),
    }
}

async fn fetch_round_stage(
    dht: &DynDhtClient,
    config: &CacheConfig,
) -> CacheResult<records::RoundStage> {
    let raw = dht_get(dht, config, keys::ROUND_STAGE_KEY)
        .await?
        .ok_or_else(|| {
            CacheError::dht_unavailable("round/stage pointer record absent")
        })?;

    serde_json::from_slice(&raw).map_err(|e| {
        CacheError::dht_unavailable_src("malformed round/stage pointer", e)
    })
}

/// The active-peer directory. The frontier query is the only fatal step,
/// so a missing or malformed directory degrades to an empty peer set for
/// this cycle rather than an error.
async fn fetch_peer_directory(
    dht: &DynDhtClient,
    config: &CacheConfig,
) -> Vec<String> {
    let raw = match dht_get(dht, config, keys::PEER_DIRECTORY_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("peer directory record absent");
            return Vec::new();
        }
        Err(err) => {
            tracing::debug!(?err, "peer directory unavailable");
            return Vec::new();
        }
    };

    match serde_json::from_slice::<Vec<String>>(&raw) {
        Ok(mut peers) => {
            // a duplicated directory entry must not produce two
            // leaderboard entries for the same peer
            peers.sort();
            peers.dedup();
            peers
        }
        Err(err) => {
            tracing::debug!(?err, "malformed peer directory");
            Vec::new()
        }
    }
}

async fn fetch_progress(
    dht: &DynDhtClient,
    config: &CacheConfig,
    peer_id: &str,
) -> CacheResult<LeaderboardEntry> {
    let key = keys::progress_key(peer_id);
    let raw = dht_get(dht, config, &key)
        .await
        .map_err(|e| CacheError::peer_record(peer_id, e))?
        .ok_or_else(|| {
            CacheError::peer_record(peer_id, "progress record absent")
        })?;

    let progress: records::PeerProgress = serde_json::from_slice(&raw)
        .map_err(|e| CacheError::peer_record(peer_id, e))?;

    Ok(progress.into())
}

/// The gossip accumulated for one round. An absent record is a round with
/// no gossip, not a failure.
async fn fetch_gossip_round(
    dht: &DynDhtClient,
    config: &CacheConfig,
    round: i64,
) -> CacheResult<Vec<GossipMessage>> {
    let key = keys::gossip_key(round);
    let raw = match dht_get(dht, config, &key).await? {
        Some(raw) => raw,
        None => return Ok(Vec::new()),
    };

    serde_json::from_slice(&raw).map_err(|e| {
        CacheError::dht_unavailable_src(
            format!("malformed gossip record for round {round}"),
            e,
        )
    })
}
