use crate::infra::{load_catalog_file, AppState};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use rcn_engine::costing::{valuation_router, CostRequest, CostingEngine, RowOutcome};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BatchRequest {
    pub(crate) requests: Vec<CostRequest>,
    #[serde(default)]
    pub(crate) catalog_version: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BatchResponse {
    pub(crate) catalog_version: String,
    pub(crate) outcomes: Vec<RowOutcome>,
    pub(crate) succeeded: usize,
    pub(crate) failed: usize,
}

pub(crate) fn with_valuation_routes(engine: Arc<CostingEngine>) -> axum::Router {
    valuation_router(engine)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/valuation/batch",
            axum::routing::post(batch_endpoint),
        )
        .route(
            "/api/v1/catalog/reload",
            axum::routing::post(reload_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Price a list of requests against a single catalog snapshot.
pub(crate) async fn batch_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<BatchRequest>,
) -> Response {
    let BatchRequest {
        requests,
        catalog_version,
    } = payload;

    let snapshot = match state.registry.snapshot(catalog_version.as_deref()) {
        Ok(snapshot) => snapshot,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let mut outcomes = Vec::with_capacity(requests.len());
    let mut succeeded = 0;
    let mut failed = 0;
    for (index, request) in requests.iter().enumerate() {
        let row = index + 1;
        match CostingEngine::calculate_with(&snapshot, request) {
            Ok(result) => {
                succeeded += 1;
                outcomes.push(RowOutcome::Success { row, result });
            }
            Err(error) => {
                failed += 1;
                outcomes.push(RowOutcome::Error {
                    row,
                    error: error.to_string(),
                });
            }
        }
    }

    let response = BatchResponse {
        catalog_version: snapshot.version().to_string(),
        outcomes,
        succeeded,
        failed,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Re-read the configured catalog document, register it, and activate it.
pub(crate) async fn reload_endpoint(Extension(state): Extension<AppState>) -> Response {
    let path = match &state.catalog_path {
        Some(path) => path.clone(),
        None => {
            let payload = json!({ "error": "no catalog document path configured" });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match load_catalog_file(&state.registry, &path) {
        Ok(version) => match state.registry.set_active(&version) {
            Ok(()) => {
                let payload = json!({ "status": "reloaded", "version": version });
                (StatusCode::OK, Json(payload)).into_response()
            }
            Err(error) => {
                let payload = json!({ "error": error.to_string() });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
            }
        },
        Err(error) => error.into_response(),
    }
}
