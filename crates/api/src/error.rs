//! Swarmview error types.

use std::sync::Arc;

/// The core swarmview error type.
///
/// The variants mirror the ways a refresh cycle can degrade. None of them
/// is ever surfaced to a reader: a failed cycle leaves the previously
/// published snapshot in place and readers keep being served stale data.
///
/// This type is required to implement `Clone` to ease the use of
/// shared futures, which require the entire `Result` to be `Clone`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    /// The round/stage frontier could not be determined, either because the
    /// DHT was unreachable or because the pointer record was absent or
    /// malformed. The cycle is skipped wholesale.
    #[error("dht unavailable - {ctx}")]
    DhtUnavailable {
        /// Context describing the failed query.
        ctx: Arc<str>,
    },

    /// A single peer's progress record was absent or could not be parsed.
    /// The peer is skipped for this cycle; the cycle continues.
    #[error("bad record for peer {peer_id} - {ctx}")]
    PeerRecordMalformed {
        /// The peer whose record was rejected.
        peer_id: Arc<str>,

        /// Context describing the rejection.
        ctx: Arc<str>,
    },

    /// A refresh cycle exceeded its deadline and was abandoned, discarding
    /// the partially built snapshot.
    #[error("refresh cycle exceeded {timeout_ms}ms deadline")]
    RefreshTimeout {
        /// The configured deadline in milliseconds.
        timeout_ms: u64,
    },
}

impl CacheError {
    /// Construct a [CacheError::DhtUnavailable] error.
    pub fn dht_unavailable<C: std::fmt::Display>(ctx: C) -> Self {
        Self::DhtUnavailable {
            ctx: ctx.to_string().into_boxed_str().into(),
        }
    }

    /// Construct a [CacheError::DhtUnavailable] error with a source error.
    pub fn dht_unavailable_src<
        C: std::fmt::Display,
        S: std::error::Error + 'static + Send + Sync,
    >(
        ctx: C,
        src: S,
    ) -> Self {
        Self::DhtUnavailable {
            ctx: format!("{ctx} (src: {src})").into_boxed_str().into(),
        }
    }

    /// Construct a [CacheError::PeerRecordMalformed] error.
    pub fn peer_record<P: std::fmt::Display, C: std::fmt::Display>(
        peer_id: P,
        ctx: C,
    ) -> Self {
        Self::PeerRecordMalformed {
            peer_id: peer_id.to_string().into_boxed_str().into(),
            ctx: ctx.to_string().into_boxed_str().into(),
        }
    }

    /// Construct a [CacheError::RefreshTimeout] error from the configured
    /// cycle deadline.
    pub fn refresh_timeout(timeout: std::time::Duration) -> Self {
        Self::RefreshTimeout {
            timeout_ms: timeout.as_millis() as u64,
        }
    }
}

/// The core swarmview result type.
pub type CacheResult<T> = Result<T, CacheError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            "dht unavailable - no route",
            CacheError::dht_unavailable("no route").to_string().as_str(),
        );
        assert_eq!(
            "dht unavailable - decode (src: bad json)",
            CacheError::dht_unavailable_src(
                "decode",
                std::io::Error::other("bad json"),
            )
            .to_string()
            .as_str(),
        );
        assert_eq!(
            "bad record for peer alice - progress record absent",
            CacheError::peer_record("alice", "progress record absent")
                .to_string()
                .as_str(),
        );
        assert_eq!(
            "refresh cycle exceeded 30000ms deadline",
            CacheError::refresh_timeout(std::time::Duration::from_secs(30))
                .to_string()
                .as_str(),
        );
    }

    #[test]
    fn ensure_error_type_is_send_and_sync() {
        fn ensure<T: std::fmt::Display + Send + Sync>(_t: T) {}
        ensure(CacheError::dht_unavailable("bla"));
    }
}
