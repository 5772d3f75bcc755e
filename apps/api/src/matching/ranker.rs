use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::scorer::MatchScorer;
use crate::models::{Job, Resume};

/// Rows kept in the ranked match table.
pub const MATCH_TABLE_LIMIT: usize = 20;

/// One scored (resume, job) pair, projected for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    pub resume_id: u64,
    pub resume_name: String,
    pub resume_headline: String,
    pub job_id: u64,
    pub job_title: String,
    pub job_location: String,
    pub score: u32,
}

impl RankedRow {
    fn new(resume: &Resume, job: &Job, score: u32) -> Self {
        Self {
            resume_id: resume.id,
            resume_name: resume.name.clone(),
            resume_headline: resume.headline.clone(),
            job_id: job.id,
            job_title: job.title.clone(),
            job_location: job.location.clone(),
            score,
        }
    }
}

/// Scores every resume against every job and returns the best
/// [`MATCH_TABLE_LIMIT`] pairs, highest score first.
///
/// Pairs are generated resumes-outer, jobs-inner; equal scores keep that order.
pub fn rank_all_matches(
    scorer: &dyn MatchScorer,
    resumes: &[Resume],
    jobs: &[Job],
) -> Vec<RankedRow> {
    let mut rows = Vec::with_capacity(resumes.len() * jobs.len());
    for resume in resumes {
        for job in jobs {
            rows.push(RankedRow::new(resume, job, scorer.score(resume, job)));
        }
    }

    let total = rows.len();
    // sort_by is stable: ties stay in generation order
    rows.sort_by(|a, b| b.score.cmp(&a.score));
    rows.truncate(MATCH_TABLE_LIMIT);

    debug!(pairs = total, kept = rows.len(), "Ranked resume/job pairs");
    rows
}
