//! config types.

use swarmview_api::CacheConfig;

/// Configuration for running a SwarmviewSrv.
#[derive(Debug, Clone)]
pub struct Config {
    /// The address(es) at which to listen.
    ///
    /// Defaults:
    /// - `testing = "[127.0.0.1:0]"`
    /// - `production = "[0.0.0.0:8000, [::]:8000]"`
    pub listen_address_list: Vec<std::net::SocketAddr>,

    /// Polling cache configuration.
    ///
    /// Defaults:
    /// - `testing` = 1s refresh interval with tight timeouts, so tests
    ///   observe cycles quickly.
    /// - `production` = the [CacheConfig] defaults (10s refresh interval,
    ///   20 round gossip retention).
    pub cache: CacheConfig,
}

impl Config {
    /// Get a swarmview_srv config suitable for testing.
    pub fn testing() -> Self {
        Self {
            listen_address_list: vec![(std::net::Ipv4Addr::LOCALHOST, 0).into()],
            cache: CacheConfig {
                refresh_interval_s: 1,
                dht_timeout_ms: 250,
                refresh_timeout_ms: 2_000,
                ..Default::default()
            },
        }
    }

    /// Get a swarmview_srv config suitable for production.
    pub fn production() -> Self {
        Self {
            listen_address_list: vec![
                (std::net::Ipv4Addr::UNSPECIFIED, 8000).into(),
                (std::net::Ipv6Addr::UNSPECIFIED, 8000).into(),
            ],
            cache: CacheConfig::default(),
        }
    }
}
