//! Well-known DHT key derivation.
//!
//! The swarm publishes its state under a small family of string keys. The
//! pointer and directory keys are fixed; progress and gossip keys are
//! derived per peer and per round. Keeping derivation here means a
//! different swarm key schema is a change to this module only.

/// The frontier pointer record: the current round/stage of the swarm.
pub const ROUND_STAGE_KEY: &str = "swarm:rs";

/// The active-peer directory record.
pub const PEER_DIRECTORY_KEY: &str = "swarm:peers";

/// The key under which `peer_id` publishes its latest progress record.
pub fn progress_key(peer_id: &str) -> String {
    format!("swarm:progress:{peer_id}")
}

/// The key under which the gossip record for `round` accumulates.
pub fn gossip_key(round: i64) -> String {
    format!("swarm:gossip:{round}")
}
