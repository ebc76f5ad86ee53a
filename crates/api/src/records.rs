//! Wire shapes for the raw DHT records the refresh engine consumes.
//!
//! All records are canonically JSON encoded. Anything that fails to decode
//! into these shapes is treated per the refresh engine's failure rules: a
//! bad frontier pointer skips the cycle, a bad peer or gossip record skips
//! only itself.

use crate::*;

/// The frontier pointer: the highest round/stage known to have active
/// records in the DHT. Stored at [keys::ROUND_STAGE_KEY].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct RoundStage {
    /// The current round.
    pub round: i64,

    /// The current stage within the round.
    pub stage: i64,
}

/// A peer's latest self-reported progress. Stored at
/// [keys::progress_key]`(peer_id)`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerProgress {
    /// The peer publishing this record.
    pub peer_id: String,

    /// The round the peer last completed work in.
    pub round: i64,

    /// The stage within that round.
    pub stage: i64,

    /// The peer's score.
    pub score: f64,
}

impl From<PeerProgress> for LeaderboardEntry {
    fn from(p: PeerProgress) -> Self {
        Self {
            peer_id: p.peer_id,
            round: p.round,
            stage: p.stage,
            score: p.score,
        }
    }
}
