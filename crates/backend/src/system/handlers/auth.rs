use axum::{extract::Json, http::StatusCode, Extension};
use contracts::system::auth::{LoginRequest, LoginResponse, TokenClaims, UserInfo};

use crate::system::{auth::jwt, users::service as user_service};

/// POST /api/admin/login
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, StatusCode> {
    let user = user_service::verify_credentials(&request.username, &request.password)
        .await
        .map_err(|e| {
            tracing::error!("Credential check failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let access_token = jwt::generate_access_token(&user.id, &user.username, user.is_admin)
        .await
        .map_err(|e| {
            tracing::error!("Token generation failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(LoginResponse { access_token, user }))
}

/// GET /api/admin/me (за require_admin middleware)
pub async fn current_user(
    Extension(claims): Extension<TokenClaims>,
) -> Result<Json<UserInfo>, StatusCode> {
    let user = user_service::get_by_id(&claims.sub)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    Ok(Json(user))
}
