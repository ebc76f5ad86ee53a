//! The http read api surface.

use axum::{extract, routing, Json, Router};
use swarmview_api::*;
use swarmview_cache::{gossip_since, leaderboard, status, CacheStatus};

/// State injected into every request handler: the read-only handle to the
/// one snapshot store. Constructed once at startup and passed in
/// explicitly rather than living in a process-wide global.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the published snapshot.
    pub store: DynSnapshotStore,
}

/// Build the read api router.
///
/// Every handler is a pure read of the current snapshot; none of them can
/// block on DHT I/O or fail under normal operation. A stalled refresh
/// loop degrades to serving stale data, observable via `refreshedAt`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/leaderboard", routing::get(handle_leaderboard_get))
        .route("/api/gossip", routing::get(handle_gossip_get))
        .route("/api/status", routing::get(handle_status_get))
        .route("/health", routing::get(handle_health_get))
        .with_state(state)
}

#[derive(Debug, serde::Deserialize)]
struct GossipQuery {
    #[serde(default)]
    since_round: i64,
}

async fn handle_leaderboard_get(
    extract::State(state): extract::State<AppState>,
) -> Json<Vec<RankedEntry>> {
    Json(leaderboard(&state.store))
}

async fn handle_gossip_get(
    extract::Query(query): extract::Query<GossipQuery>,
    extract::State(state): extract::State<AppState>,
) -> Json<Vec<GossipMessage>> {
    Json(gossip_since(&state.store, query.since_round))
}

async fn handle_status_get(
    extract::State(state): extract::State<AppState>,
) -> Json<CacheStatus> {
    Json(status(&state.store))
}

async fn handle_health_get() -> Json<serde_json::Value> {
    Json(serde_json::json!({}))
}
