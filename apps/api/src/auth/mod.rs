//! Login sessions and the `CurrentUser` extractor.
//!
//! Credentials are a plain lookup against the stored users; a successful
//! login hands out a bearer token that every other `/api/v1` route expects.

pub mod handlers;
pub mod session;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::User;
use crate::state::AppState;

pub use session::{Session, SessionStore};

/// The logged-in user behind the request's bearer token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub session: Session,
}

impl CurrentUser {
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.user.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Only Admin can manage users.".to_string(),
            ))
        }
    }
}

fn bearer_token(parts: &Parts) -> Option<Uuid> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

        let session = state
            .sessions
            .resolve(token)
            .await
            .ok_or_else(|| AppError::Unauthorized("Session expired or unknown".to_string()))?;

        // The account may have been deleted since login.
        let user = state
            .store
            .get::<User>(session.user_id)
            .await
            .map_err(|_| AppError::Unauthorized("Account no longer exists".to_string()))?;

        Ok(CurrentUser { user, session })
    }
}
