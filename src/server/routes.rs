//! Route Handlers
//!
//! - `GET /api/` - Links to every resource
//! - `GET /api/{resource}/` - List one resource
//! - `GET /health` - Liveness and uptime

use axum::{
    extract::{Path, State},
    http::{header::HOST, HeaderMap},
    Json,
};
use serde_json::{json, Map, Value};
use std::sync::Arc;

use super::error::{ServerError, ServerResult};
use super::state::AppState;
use crate::endpoint::Resource;

/// GET /api/{resource}/
///
/// Bare array, or a page envelope when pagination is on.
pub async fn list_resource(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ServerResult<Json<Value>> {
    let resource = Resource::ALL
        .into_iter()
        .find(|r| r.route().trim_start_matches('/') == name)
        .ok_or_else(|| ServerError::NotFound(format!("resource '{}'", name)))?;

    let records = state.seed.records(resource);
    tracing::debug!(resource = %resource, count = records.len(), "Listing records");

    let body = if state.config.paginate {
        envelope(records)
    } else {
        Value::Array(records.to_vec())
    };
    Ok(Json(body))
}

/// Single page holding every record
pub fn envelope(records: &[Value]) -> Value {
    json!({
        "count": records.len(),
        "next": null,
        "previous": null,
        "results": records,
    })
}

/// GET /api/
pub async fn api_root(headers: HeaderMap) -> Json<Value> {
    let base = headers
        .get(HOST)
        .and_then(|h| h.to_str().ok())
        .map(|host| format!("http://{}", host))
        .unwrap_or_default();

    let links: Map<String, Value> = Resource::ALL
        .into_iter()
        .map(|r| {
            (
                r.route().trim_start_matches('/').to_string(),
                Value::String(format!("{}{}", base, r.api_path())),
            )
        })
        .collect();
    Json(Value::Object(links))
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "paginate": state.config.paginate,
        "uptime_seconds": state.uptime_seconds(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Anything unrouted
pub async fn not_found(uri: axum::http::Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}
