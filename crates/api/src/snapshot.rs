//! The snapshot data model: the query-ready shape the refresh engine
//! builds from raw DHT records and the store publishes to readers.

use crate::Timestamp;
use std::collections::HashSet;

/// One peer's standing in the swarm, aggregated from its latest known
/// progress record. At most one entry exists per peer in any snapshot.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// The peer this entry belongs to.
    pub peer_id: String,

    /// The round the peer last reported progress for.
    pub round: i64,

    /// The stage within that round.
    pub stage: i64,

    /// The peer's score.
    pub score: f64,
}

/// A [LeaderboardEntry] with its read-time rank attached.
///
/// Rank is never stored; it is computed when a reader asks, by sorting on
/// score descending with peer id ascending breaking ties.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    /// The peer this entry belongs to.
    pub peer_id: String,

    /// The round the peer last reported progress for.
    pub round: i64,

    /// The stage within that round.
    pub stage: i64,

    /// The peer's score.
    pub score: f64,

    /// 1-based position in the sorted leaderboard.
    pub rank: usize,
}

impl RankedEntry {
    /// Attach a rank to a leaderboard entry.
    pub fn new(entry: LeaderboardEntry, rank: usize) -> Self {
        Self {
            peer_id: entry.peer_id,
            round: entry.round,
            stage: entry.stage,
            score: entry.score,
            rank,
        }
    }
}

/// A single gossip message observed in the swarm.
///
/// Gossip is an append-only log, not a keyed map: the identity of a message
/// is the full `(round, stage, peer_id, timestamp)` tuple.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GossipMessage {
    /// The round the message was produced in.
    pub round: i64,

    /// The stage within that round.
    pub stage: i64,

    /// The peer that produced the message.
    pub peer_id: String,

    /// The message content.
    pub message: String,

    /// When the peer produced the message.
    pub timestamp: Timestamp,
}

impl GossipMessage {
    /// The identity tuple used for deduplication when merging logs.
    pub fn identity(&self) -> (i64, i64, &str, Timestamp) {
        (self.round, self.stage, self.peer_id.as_str(), self.timestamp)
    }
}

/// An ordered, bounded view of recent gossip.
///
/// Messages are ordered by round ascending then timestamp ascending, and
/// the log is bounded to the most recent K rounds. Eviction happens per
/// whole round, never per message.
#[derive(
    Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct GossipLog(Vec<GossipMessage>);

impl GossipLog {
    /// Build a log from an unordered batch of messages, sorting into the
    /// ordering invariant and dropping identity duplicates.
    pub fn from_messages(messages: Vec<GossipMessage>) -> Self {
        Self::merge(&GossipLog::default(), messages, i64::MIN)
    }

    /// Merge a previous log with freshly fetched messages.
    ///
    /// Messages with `round < oldest_round` are evicted, duplicates by
    /// identity are dropped (the previous log wins), and the result is
    /// re-sorted into `(round, timestamp)` order. This is the only way a
    /// log grows or shrinks, so the ordering and retention invariants hold
    /// for every log a reader can observe.
    pub fn merge(
        prev: &GossipLog,
        fresh: Vec<GossipMessage>,
        oldest_round: i64,
    ) -> Self {
        let mut seen: HashSet<(i64, i64, String, Timestamp)> = HashSet::new();
        let mut out = Vec::with_capacity(prev.0.len() + fresh.len());

        for msg in prev.0.iter().cloned().chain(fresh) {
            if msg.round < oldest_round {
                continue;
            }
            let key =
                (msg.round, msg.stage, msg.peer_id.clone(), msg.timestamp);
            if seen.insert(key) {
                out.push(msg);
            }
        }

        out.sort_by(|a, b| {
            (a.round, a.timestamp).cmp(&(b.round, b.timestamp))
        });

        Self(out)
    }

    /// The messages with `round >= since_round`, in log order.
    ///
    /// A `since_round` below the retention window simply starts from the
    /// oldest retained round; callers cannot recover evicted rounds.
    pub fn since(&self, since_round: i64) -> &[GossipMessage] {
        let start = self.0.partition_point(|m| m.round < since_round);
        &self.0[start..]
    }

    /// All retained messages in log order.
    pub fn messages(&self) -> &[GossipMessage] {
        &self.0
    }

    /// The oldest retained round, if the log is non-empty.
    pub fn oldest_round(&self) -> Option<i64> {
        self.0.first().map(|m| m.round)
    }

    /// The newest retained round, if the log is non-empty.
    pub fn latest_round(&self) -> Option<i64> {
        self.0.last().map(|m| m.round)
    }

    /// Number of retained messages.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no messages are retained.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One immutable, internally consistent published view of the swarm:
/// leaderboard and gossip from the same poll cycle, plus the frontier and
/// refresh time observed by that cycle.
///
/// Snapshots are replaced wholesale by the refresh engine and never
/// mutated field by field after publication.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// The aggregated per-peer entries. Unordered; ranking is read-time.
    pub leaderboard: Vec<LeaderboardEntry>,

    /// The retained gossip log.
    pub gossip: GossipLog,

    /// The round frontier observed at poll time.
    pub round: i64,

    /// The stage within the frontier round.
    pub stage: i64,

    /// When this snapshot was assembled. Monotonically non-decreasing
    /// across published snapshots.
    pub refreshed_at: Timestamp,
}

impl Snapshot {
    /// The empty-but-valid snapshot served before the first successful
    /// refresh. Round and stage carry the -1 sentinel.
    pub fn empty() -> Self {
        Self {
            leaderboard: Vec::new(),
            gossip: GossipLog::default(),
            round: -1,
            stage: -1,
            refreshed_at: Timestamp::UNIX_EPOCH,
        }
    }
}
