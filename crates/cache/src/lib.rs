#![deny(missing_docs)]
//! Swarmview cache core: the polling cache that pulls raw swarm state out
//! of a slow, eventually consistent DHT, normalizes it into query-ready
//! snapshots, and serves those snapshots to concurrent readers without
//! ever blocking a reader on DHT I/O.
//!
//! The pieces, leaves first:
//!
//! - [MemSnapshotStore] holds the current published snapshot and swaps it
//!   atomically on publish.
//! - [refresh_once] runs one poll cycle: frontier pointer, peer progress
//!   records, windowed gossip merge.
//! - [leaderboard] / [gossip_since] / [status] are the read operations;
//!   pure functions of the current snapshot.
//! - [Poller] drives refresh cycles on a fixed interval as the store's
//!   sole writer.
//! - [MemDhtClient] is a memory-backed DHT usable for tests and offline
//!   development.

mod store;
pub use store::*;

mod refresh;
pub use refresh::*;

mod query;
pub use query::*;

mod poller;
pub use poller::*;

mod mem_dht;
pub use mem_dht::*;
