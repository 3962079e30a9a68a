//! Route tables and the assembled application router.

pub mod probe;
pub mod student;

pub use probe::probe_routes;
pub use student::student_routes;

use crate::config::ServerConfig;
use crate::error::ConfigError;
use crate::state::AppState;
use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

const BODY_LIMIT_BYTES: usize = 64 * 1024;

fn allowed_origin(origin: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
        var: "ALLOWED_ORIGIN",
        reason: e.to_string(),
    })
}

/// CORS response headers for the single allowed front-end origin.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

/// Answers 403 to any request whose `Origin` is set and differs from the allowed one,
/// preflight included. Requests without `Origin` (same-origin, curl) pass through.
async fn reject_foreign_origin(State(allowed): State<HeaderValue>, req: Request, next: Next) -> Response {
    let foreign = req.headers().get(header::ORIGIN).filter(|o| **o != allowed).cloned();
    if let Some(origin) = foreign {
        tracing::warn!(origin = ?origin, method = %req.method(), uri = %req.uri(), "rejected cross-origin request");
        return (StatusCode::FORBIDDEN, "Invalid CORS request").into_response();
    }
    next.run(req).await
}

/// Full router: probes plus student CRUD, wrapped in the origin guard, CORS, body limit and request tracing.
pub fn app(state: AppState, config: &ServerConfig) -> Result<Router, ConfigError> {
    let origin = allowed_origin(&config.allowed_origin)?;
    Ok(Router::new()
        .merge(probe_routes(state.clone()))
        .merge(student_routes(state))
        .layer(cors_layer(origin.clone()))
        .layer(middleware::from_fn_with_state(origin, reject_foreign_origin))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http()))
}
