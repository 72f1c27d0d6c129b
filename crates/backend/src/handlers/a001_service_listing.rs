use axum::{extract::Path, Json};
use contracts::domain::a001_service_listing::aggregate::{ServiceListing, ServiceListingDto};
use serde_json::json;

use crate::domain::a001_service_listing::service;

/// GET /api/services
pub async fn list_all() -> Result<Json<Vec<ServiceListing>>, axum::http::StatusCode> {
    match service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list services: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/services/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<ServiceListing>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load service {}: {}", id, e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/admin/services
pub async fn create(
    Json(dto): Json<ServiceListingDto>,
) -> Result<Json<ServiceListing>, axum::http::StatusCode> {
    match service::create(dto).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::warn!("Service create rejected: {}", e);
            Err(axum::http::StatusCode::BAD_REQUEST)
        }
    }
}

/// PUT /api/admin/services/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<ServiceListingDto>,
) -> Result<Json<ServiceListing>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match service::update(uuid, dto).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::warn!("Service update rejected for {}: {}", id, e);
            Err(axum::http::StatusCode::BAD_REQUEST)
        }
    }
}

/// DELETE /api/admin/services/:id
pub async fn delete(
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match service::delete(uuid).await {
        Ok(true) => Ok(Json(json!({ "success": true }))),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete service {}: {}", id, e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
