use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::storage::Theme;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeBody {
    pub theme: Theme,
}

/// GET /api/v1/settings/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: state.store.theme().await,
    })
}

/// PUT /api/v1/settings/theme
pub async fn handle_set_theme(
    State(state): State<AppState>,
    Json(body): Json<ThemeBody>,
) -> Result<Json<ThemeBody>, AppError> {
    let theme = state.store.set_theme(body.theme).await?;
    Ok(Json(ThemeBody { theme }))
}

/// POST /api/v1/settings/reset
///
/// Wipes every record and preference, restores the demo data and logs
/// everyone out.
pub async fn handle_reset(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<StatusCode, AppError> {
    state.store.reset().await?;
    state.sessions.clear().await;
    info!(user_id = current.user.id, "Demo data reset");
    Ok(StatusCode::NO_CONTENT)
}
