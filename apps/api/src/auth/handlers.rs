//! Axum route handlers for login and logout.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::models::{User, UserView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub user: UserView,
    pub expires_at: DateTime<Utc>,
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let username = request.username.trim();
    let password = request.password.trim();

    let user = state
        .store
        .list::<User>()
        .await
        .into_iter()
        .find(|u| u.username == username && u.password == password)
        .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

    let session = state.sessions.create(user.id).await;
    info!(user_id = user.id, role = ?user.role, "User logged in");

    Ok(Json(LoginResponse {
        token: session.token,
        user: UserView::from(&user),
        expires_at: session.expires_at,
    }))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    current: CurrentUser,
) -> StatusCode {
    state.sessions.revoke(current.session.token).await;
    StatusCode::NO_CONTENT
}

/// GET /api/v1/auth/me
pub async fn handle_me(current: CurrentUser) -> Json<UserView> {
    Json(UserView::from(&current.user))
}
