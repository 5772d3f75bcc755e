use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub resume_count: usize,
    pub job_count: usize,
    pub user_count: usize,
    pub activity: Vec<String>,
}

fn activity_lines(resumes: usize, jobs: usize, users: usize) -> Vec<String> {
    vec![
        format!("Demo: {resumes} resumes loaded from local storage."),
        format!("Demo: {jobs} job descriptions configured."),
        format!("Demo: {users} users available (Admin + HR)."),
        "Use the Matching API to see scoring across resumes and jobs.".to_string(),
    ]
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    _current: CurrentUser,
) -> Json<DashboardResponse> {
    let (resume_count, job_count, user_count) = state
        .store
        .read(|s| (s.resumes.len(), s.jobs.len(), s.users.len()))
        .await;

    Json(DashboardResponse {
        resume_count,
        job_count,
        user_count,
        activity: activity_lines(resume_count, job_count, user_count),
    })
}
