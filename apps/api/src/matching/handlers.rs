//! Axum route handlers for the Matching API.
//!
//! Scores are computed from the current store contents on every request.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::matching::lookup::find_and_score;
use crate::matching::ranker::{rank_all_matches, RankedRow};
use crate::matching::scorer::{explain_match, MatchBreakdown};
use crate::models::{Job, Resume};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MatchTableResponse {
    pub rows: Vec<RankedRow>,
    pub scorer_backend: String,
}

#[derive(Debug, Deserialize)]
pub struct PairQuery {
    pub resume_id: u64,
    pub job_id: u64,
}

#[derive(Debug, Serialize)]
pub struct PairMatchResponse {
    pub score: u32,
    pub resume: Resume,
    pub job: Job,
    pub breakdown: MatchBreakdown,
    pub scorer_backend: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MatchOption {
    pub id: u64,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct MatchOptionsResponse {
    pub resumes: Vec<MatchOption>,
    pub jobs: Vec<MatchOption>,
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn resume_option(resume: &Resume) -> MatchOption {
    MatchOption {
        id: resume.id,
        label: format!(
            "{} – {}",
            resume.name,
            or_placeholder(&resume.headline, "No headline")
        ),
    }
}

fn job_option(job: &Job) -> MatchOption {
    MatchOption {
        id: job.id,
        label: format!("{} – {}", job.title, or_placeholder(&job.location, "-")),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/matches
///
/// Top resume/job pairs across the whole store.
pub async fn handle_match_table(
    State(state): State<AppState>,
    _current: CurrentUser,
) -> Json<MatchTableResponse> {
    let scorer = state.scorer.as_ref();
    let rows = state
        .store
        .read(|s| rank_all_matches(scorer, &s.resumes, &s.jobs))
        .await;

    Json(MatchTableResponse {
        rows,
        scorer_backend: scorer.backend().to_string(),
    })
}

/// GET /api/v1/matches/pair?resume_id=&job_id=
pub async fn handle_match_pair(
    State(state): State<AppState>,
    _current: CurrentUser,
    Query(query): Query<PairQuery>,
) -> Result<Json<PairMatchResponse>, AppError> {
    let scorer = state.scorer.as_ref();
    let response = state
        .store
        .read(|s| {
            find_and_score(scorer, &s.resumes, &s.jobs, query.resume_id, query.job_id).map(
                |pair| PairMatchResponse {
                    score: pair.score,
                    resume: pair.resume.clone(),
                    job: pair.job.clone(),
                    breakdown: explain_match(pair.resume, pair.job),
                    scorer_backend: scorer.backend().to_string(),
                },
            )
        })
        .await?;

    Ok(Json(response))
}

/// GET /api/v1/matches/options
///
/// Labels for the resume and job pickers, in store order.
pub async fn handle_match_options(
    State(state): State<AppState>,
    _current: CurrentUser,
) -> Json<MatchOptionsResponse> {
    let response = state
        .store
        .read(|s| MatchOptionsResponse {
            resumes: s.resumes.iter().map(resume_option).collect(),
            jobs: s.jobs.iter().map(job_option).collect(),
        })
        .await;
    Json(response)
}
