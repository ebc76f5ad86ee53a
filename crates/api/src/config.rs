//! Configuration for the polling cache.

/// Configuration parameters for the polling cache.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CacheConfig {
    /// The interval in seconds between refresh cycles. A tick that lands
    /// while a cycle is still in flight is dropped, not queued, so a slow
    /// DHT stretches the effective period instead of stacking cycles.
    ///
    /// Default: 10s.
    pub refresh_interval_s: u32,

    /// The number of most recent rounds of gossip retained in a snapshot.
    /// Older rounds are evicted wholesale when the frontier advances.
    ///
    /// Default: 20.
    pub gossip_retention_rounds: u32,

    /// Timeout in ms applied to each individual DHT query. A frontier
    /// query that exceeds it skips the cycle; a per-peer or per-round
    /// query that exceeds it skips only that record.
    ///
    /// Default: 2000 (2s).
    pub dht_timeout_ms: u32,

    /// Deadline in ms for a whole refresh cycle. A cycle exceeding it is
    /// abandoned and its partial snapshot discarded.
    ///
    /// Default: 30000 (30s).
    pub refresh_timeout_ms: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            refresh_interval_s: 10,
            gossip_retention_rounds: 20,
            dht_timeout_ms: 2_000,
            refresh_timeout_ms: 30_000,
        }
    }
}

impl CacheConfig {
    /// Get the refresh interval as a [std::time::Duration].
    pub fn refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.refresh_interval_s as u64)
    }

    /// Get the per-query DHT timeout as a [std::time::Duration].
    pub fn dht_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.dht_timeout_ms as u64)
    }

    /// Get the whole-cycle deadline as a [std::time::Duration].
    pub fn refresh_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.refresh_timeout_ms as u64)
    }

    /// The oldest round retained when the frontier sits at `frontier`:
    /// `frontier - K + 1`, clamped at round zero.
    pub fn oldest_retained_round(&self, frontier: i64) -> i64 {
        (frontier - self.gossip_retention_rounds as i64 + 1).max(0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn retention_window_clamps_at_round_zero() {
        let config = CacheConfig {
            gossip_retention_rounds: 3,
            ..Default::default()
        };
        assert_eq!(5, config.oldest_retained_round(7));
        assert_eq!(0, config.oldest_retained_round(1));
        assert_eq!(0, config.oldest_retained_round(-1));
    }

    #[test]
    fn missing_properties_fall_back_to_defaults() {
        let config: CacheConfig =
            serde_json::from_str("{\"refreshIntervalS\":3}").unwrap();
        assert_eq!(3, config.refresh_interval_s);
        assert_eq!(20, config.gossip_retention_rounds);
        assert_eq!(2_000, config.dht_timeout_ms);
    }
}
