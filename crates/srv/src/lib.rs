#![deny(missing_docs)]
//! Swarmview server is an HTTP REST server exposing the polling cache's
//! read view of a decentralized computation swarm: the current
//! leaderboard and the recent gossip log.
//!
//! The server process owns the one snapshot store and the one poller
//! (the store's sole writer). Request handlers, and readers in other
//! processes consuming this API, only ever see atomically published
//! snapshots; no request ever waits on DHT I/O.
//!
//! #### REST API
//!
//! None of the routes fail under normal operation; they serve whatever
//! snapshot is current, however stale.
//!
//! - `GET /api/leaderboard`
//!   - Response Body: JSON array of
//!     `{ "peerId", "round", "stage", "score", "rank" }`, ordered by rank.
//! - `GET /api/gossip?since_round=<int>`
//!   - `since_round` defaults to 0. A value below the retention window
//!     starts from the oldest retained round.
//!   - Response Body: JSON array of
//!     `{ "round", "stage", "peerId", "message", "timestamp" }`, ordered
//!     by round then timestamp.
//! - `GET /api/status`
//!   - Response Body:
//!     `{ "round", "stage", "refreshedAt", "peerCount", "gossipCount" }`.
//!     `refreshedAt` is microseconds since the unix epoch; 0 means no
//!     refresh cycle has completed yet.
//! - `GET /health`
//!   - Response Body: `{}`.

mod config;
pub use config::*;

mod http;
pub use http::*;

mod server;
pub use server::*;
