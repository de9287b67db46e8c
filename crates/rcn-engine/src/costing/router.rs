use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::catalog::RegistryError;

use super::domain::CostRequest;
use super::{CostError, CostingEngine};

/// Router builder exposing the calculation and catalog inventory endpoints.
pub fn valuation_router(engine: Arc<CostingEngine>) -> Router {
    Router::new()
        .route("/api/v1/valuation/cost", post(cost_handler))
        .route("/api/v1/catalog/versions", get(versions_handler))
        .with_state(engine)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CostQuery {
    #[serde(rename = "catalogVersion")]
    pub(crate) catalog_version: Option<String>,
}

pub(crate) async fn cost_handler(
    State(engine): State<Arc<CostingEngine>>,
    Query(query): Query<CostQuery>,
    axum::Json(request): axum::Json<CostRequest>,
) -> Response {
    match engine.calculate(&request, query.catalog_version.as_deref()) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(CostError::Lookup(error)) => {
            let payload = json!({
                "error": error.to_string(),
                "category": error.category.label(),
                "code": error.code,
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(CostError::Input(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(CostError::Registry(RegistryError::UnknownVersion(version))) => {
            let payload = json!({
                "error": format!("unknown catalog version '{version}'"),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn versions_handler(State(engine): State<Arc<CostingEngine>>) -> Response {
    let versions = engine.registry().versions();
    (StatusCode::OK, axum::Json(versions)).into_response()
}
