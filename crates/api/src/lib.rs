#![deny(missing_docs)]
//! Swarmview API contains the trait seams and basic types required to run
//! the swarmview polling cache: the DHT client boundary, the snapshot store
//! contract, and the data model served to readers.
//!
//! If you want to run the cache itself, please see the swarmview_cache and
//! swarmview_srv crates.

/// Boxed future type.
pub type BoxFut<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

mod error;
pub use error::*;

mod timestamp;
pub use timestamp::*;

mod snapshot;
pub use snapshot::*;

mod dht;
pub use dht::*;

mod store;
pub use store::*;

mod config;
pub use config::*;

pub mod keys;

pub mod records;
