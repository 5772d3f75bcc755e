//! Axum route handlers for resumes, jobs and user accounts.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::models::{Job, JobDraft, Resume, ResumeDraft, User, UserDraft, UserView};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Resumes
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    _current: CurrentUser,
) -> Json<Vec<Resume>> {
    Json(state.store.list::<Resume>().await)
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<u64>,
) -> Result<Json<Resume>, AppError> {
    Ok(Json(state.store.get::<Resume>(id).await?))
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    _current: CurrentUser,
    Json(draft): Json<ResumeDraft>,
) -> Result<(StatusCode, Json<Resume>), AppError> {
    let draft = draft.validated()?;
    let resume = state
        .store
        .insert(|id| Resume::from_draft(id, draft))
        .await?;
    info!(resume_id = resume.id, "Resume created");
    Ok((StatusCode::CREATED, Json(resume)))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_update_resume(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<u64>,
    Json(draft): Json<ResumeDraft>,
) -> Result<Json<Resume>, AppError> {
    let draft = draft.validated()?;
    let resume = state
        .store
        .update::<Resume>(id, |r| *r = Resume::from_draft(id, draft))
        .await?;
    Ok(Json(resume))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.store.delete::<Resume>(id).await?;
    info!(resume_id = id, "Resume deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Jobs
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    _current: CurrentUser,
) -> Json<Vec<Job>> {
    Json(state.store.list::<Job>().await)
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<u64>,
) -> Result<Json<Job>, AppError> {
    Ok(Json(state.store.get::<Job>(id).await?))
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    _current: CurrentUser,
    Json(draft): Json<JobDraft>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let draft = draft.validated()?;
    let job = state.store.insert(|id| Job::from_draft(id, draft)).await?;
    info!(job_id = job.id, "Job created");
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/v1/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<u64>,
    Json(draft): Json<JobDraft>,
) -> Result<Json<Job>, AppError> {
    let draft = draft.validated()?;
    let job = state
        .store
        .update::<Job>(id, |j| *j = Job::from_draft(id, draft))
        .await?;
    Ok(Json(job))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.store.delete::<Job>(id).await?;
    info!(job_id = id, "Job deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Users (Admin only)
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/users
pub async fn handle_list_users(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Vec<UserView>>, AppError> {
    current.require_admin()?;
    let users = state.store.list::<User>().await;
    Ok(Json(users.iter().map(UserView::from).collect()))
}

/// POST /api/v1/users
pub async fn handle_create_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(draft): Json<UserDraft>,
) -> Result<(StatusCode, Json<UserView>), AppError> {
    current.require_admin()?;
    let draft = draft.validated()?;

    // The store rejects a taken username under its write lock.
    let user = state.store.insert(|id| User::from_draft(id, draft)).await?;
    info!(user_id = user.id, role = ?user.role, "User created");
    Ok((StatusCode::CREATED, Json(UserView::from(&user))))
}

/// PUT /api/v1/users/:id
pub async fn handle_update_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<u64>,
    Json(draft): Json<UserDraft>,
) -> Result<Json<UserView>, AppError> {
    current.require_admin()?;
    let draft = draft.validated()?;
    let user = state
        .store
        .update::<User>(id, |u| *u = User::from_draft(id, draft))
        .await?;
    Ok(Json(UserView::from(&user)))
}

/// DELETE /api/v1/users/:id
pub async fn handle_delete_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    current.require_admin()?;
    if current.user.id == id {
        return Err(AppError::Conflict(
            "You cannot delete the currently logged-in user.".to_string(),
        ));
    }

    state.store.delete::<User>(id).await?;
    state.sessions.revoke_user(id).await;
    info!(user_id = id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
