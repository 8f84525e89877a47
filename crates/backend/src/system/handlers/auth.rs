use axum::{extract::Json, http::StatusCode};
use contracts::system::auth::{LoginRequest, LoginResponse, SessionUser};

use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::{jwt, password};
use crate::system::users::repository;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

fn unauthorized() -> (StatusCode, String) {
    (StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS.to_string())
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    tracing::error!("Login failed: {:#}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Login failed".to_string())
}

/// POST /api/system/auth/login
pub async fn login(
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, String)> {
    let user = repository::get_by_username(request.username.trim())
        .await
        .map_err(internal)?
        .filter(|u| u.is_active)
        .ok_or_else(unauthorized)?;

    if !password::verify_password(&request.password, &user.password_hash).map_err(internal)? {
        tracing::info!("Failed login for '{}'", user.username);
        return Err(unauthorized());
    }

    let access_token = jwt::generate_access_token(&user).await.map_err(internal)?;
    tracing::info!("User '{}' signed in", user.username);

    Ok(Json(LoginResponse {
        access_token,
        user: SessionUser {
            username: user.username,
            name: user.full_name,
            role: user.role,
        },
    }))
}

/// GET /api/system/auth/me
pub async fn me(CurrentUser(claims): CurrentUser) -> Json<SessionUser> {
    Json(claims.session_user())
}
