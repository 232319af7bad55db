use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::catalog::UnknownCategory;
use crate::service::CatalogService;
use crate::validation::ListingSubmission;

/// Router exposing the catalog and the authoritative submission validator.
pub fn catalog_router(service: Arc<CatalogService>) -> Router {
    Router::new()
        .route("/api/v1/catalog", get(index_handler))
        .route("/api/v1/catalog/:category", get(schema_handler))
        .route("/api/v1/catalog/:category/validate", post(validate_handler))
        .with_state(service)
}

pub(crate) async fn index_handler(State(service): State<Arc<CatalogService>>) -> Response {
    (StatusCode::OK, Json(service.index())).into_response()
}

pub(crate) async fn schema_handler(
    State(service): State<Arc<CatalogService>>,
    Path(category): Path<String>,
) -> Response {
    match service.schema(&category) {
        Ok(schema) => (StatusCode::OK, Json(schema)).into_response(),
        Err(error) => unknown_category_response(error),
    }
}

pub(crate) async fn validate_handler(
    State(service): State<Arc<CatalogService>>,
    Path(category): Path<String>,
    Json(submission): Json<ListingSubmission>,
) -> Response {
    match service.validate(&category, &submission) {
        Ok(verdict) if verdict.valid => (StatusCode::OK, Json(verdict)).into_response(),
        Ok(verdict) => (StatusCode::UNPROCESSABLE_ENTITY, Json(verdict)).into_response(),
        Err(error) => unknown_category_response(error),
    }
}

fn unknown_category_response(error: UnknownCategory) -> Response {
    let payload = json!({
        "error": error.to_string(),
        "category": error.category,
    });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}
