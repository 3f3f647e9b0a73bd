//! HTTP server: router assembly and serve loop

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tiers::TiersModule;
use tokio::signal;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full application router: module routes, health, OpenAPI, tracing
pub fn build_router(tiers: &TiersModule, cfg: &ServerConfig) -> Result<Router> {
    let openapi = tiers.openapi();

    let router = tiers
        .register_rest(Router::new())?
        .route("/health", get(health_check))
        .route("/openapi.json", get(move || async move { Json(openapi) }))
        .layer(TimeoutLayer::new(cfg.request_timeout))
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

/// Bind and serve until Ctrl+C or SIGTERM
pub async fn serve(router: Router, cfg: &ServerConfig) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", cfg.bind_addr))?;

    info!("Listening on http://{}", cfg.bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
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
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::util::ServiceExt;

    async fn test_router() -> Router {
        let cfg = crate::config::DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        };
        let db = crate::db::connect(&cfg).await.unwrap();
        let module = TiersModule::default();
        module.migrate(&db).await.unwrap();
        module.init(tiers::Config::default(), Arc::new(db)).unwrap();
        build_router(&module, &ServerConfig::default()).unwrap()
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let (status, body) = get_json(test_router().await, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "orchid-server");
    }

    #[tokio::test]
    async fn openapi_document_lists_tier_routes() {
        let (status, body) = get_json(test_router().await, "/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/tiers"].is_object());
        assert!(body["paths"]["/tiers/{id}"]["patch"].is_object());
        assert!(body["paths"]["/tiers/{id}/edit"]["get"].is_object());
    }

    #[tokio::test]
    async fn tier_routes_are_mounted() {
        let (status, body) = get_json(test_router().await, "/tiers").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
    }
}
