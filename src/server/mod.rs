//! Development Backend
//!
//! A read-only stand-in for the real backend, built with Axum and serving
//! the seed fixtures.
//!
//! # Endpoints
//!
//! - `GET /api/` - Resource links
//! - `GET /api/activities/`
//! - `GET /api/leaderboard/`
//! - `GET /api/teams/`
//! - `GET /api/users/`
//! - `GET /api/workouts/`
//! - `GET /health` - Health status
//!
//! Trailing slashes are optional. With `paginate` on, lists come back as
//! `{count, next, previous, results}`; otherwise as bare arrays.

pub mod error;
pub mod routes;
pub mod seed;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use seed::SeedData;
pub use state::AppState;

use axum::{http::HeaderValue, routing::get, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/api", get(routes::api_root))
        .route("/api/", get(routes::api_root))
        .route("/api/:resource", get(routes::list_resource))
        .route("/api/:resource/", get(routes::list_resource))
        .route("/health", get(routes::health))
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the server on the configured address until Ctrl+C or SIGTERM
pub async fn serve(state: AppState) -> Result<(), ServerError> {
    let addr = state.config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    serve_with_shutdown(listener, state, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    let paginate = state.config.paginate;
    let router = build_router(state);

    tracing::info!(paginate, "OctoFit API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("OctoFit API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app(paginate: bool) -> Router {
        let config = ServerConfig {
            paginate,
            ..ServerConfig::default()
        };
        build_router(AppState::new(config))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header("Host", "localhost:8000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_paginated_list() {
        let (status, body) = get_json(create_test_app(true), "/api/users/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 4);
        assert!(body["next"].is_null());
        assert_eq!(body["results"][0]["name"], "Spider-Man");
        assert_eq!(body["results"][0]["team"]["name"], "Marvel");
    }

    #[tokio::test]
    async fn test_bare_list() {
        let (status, body) = get_json(create_test_app(false), "/api/leaderboard/").await;

        assert_eq!(status, StatusCode::OK);
        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1]["points"], 800);
    }

    #[tokio::test]
    async fn test_without_trailing_slash() {
        let (status, body) = get_json(create_test_app(false), "/api/workouts").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "Cardio Blast");
    }

    #[tokio::test]
    async fn test_unknown_resource() {
        let (status, body) = get_json(create_test_app(true), "/api/badges/").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["request_id"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_unrouted_path() {
        let (status, body) = get_json(create_test_app(true), "/nowhere").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Not found: /nowhere");
    }

    #[tokio::test]
    async fn test_api_root_links() {
        let (status, body) = get_json(create_test_app(true), "/api/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["teams"], "http://localhost:8000/api/teams/");
        assert_eq!(body.as_object().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(create_test_app(false), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["paginate"], false);
    }

    #[test]
    fn test_envelope() {
        let body = routes::envelope(&[serde_json::json!({"name": "x"})]);
        assert_eq!(body["count"], 1);
        assert!(body["previous"].is_null());
        assert_eq!(body["results"][0]["name"], "x");
    }
}
