use axum::Json;
use contracts::domain::a002_contact_message::aggregate::{ContactMessage, ContactMessageDto};
use serde_json::json;

use crate::domain::a002_contact_message::service;

/// POST /api/contact
pub async fn create(
    Json(dto): Json<ContactMessageDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match service::create(dto).await {
        Ok(_) => Ok(Json(json!({ "success": true }))),
        Err(e) => {
            tracing::warn!("Contact form rejected: {}", e);
            Err(axum::http::StatusCode::BAD_REQUEST)
        }
    }
}

/// GET /api/admin/contact-messages
pub async fn list_all() -> Result<Json<Vec<ContactMessage>>, axum::http::StatusCode> {
    match service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list contact messages: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
