//! Liveness, readiness and build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct ProbeStatus {
    status: &'static str,
    store: &'static str,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn health(State(state): State<AppState>) -> Json<ProbeStatus> {
    Json(ProbeStatus {
        status: "ok",
        store: state.students.store().backend(),
    })
}

/// 200 when the store answers a round trip, 503 otherwise.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ProbeStatus>) {
    let store = state.students.store();
    match store.ping().await {
        Ok(()) => (StatusCode::OK, Json(ProbeStatus { status: "ok", store: store.backend() })),
        Err(e) => {
            tracing::warn!(error = %e, store = store.backend(), "store not ready");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ProbeStatus {
                    status: "unavailable",
                    store: store.backend(),
                }),
            )
        }
    }
}

async fn version() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn probe_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
