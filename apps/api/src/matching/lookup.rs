use thiserror::Error;

use crate::matching::scorer::MatchScorer;
use crate::models::{Job, Resume};

/// The pair a caller asked for does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("resume {0} not found")]
    ResumeNotFound(u64),

    #[error("job {0} not found")]
    JobNotFound(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPair<'a> {
    pub score: u32,
    pub resume: &'a Resume,
    pub job: &'a Job,
}

/// Finds one resume and one job by id and scores them.
/// The resume is looked up first.
pub fn find_and_score<'a>(
    scorer: &dyn MatchScorer,
    resumes: &'a [Resume],
    jobs: &'a [Job],
    resume_id: u64,
    job_id: u64,
) -> Result<ScoredPair<'a>, LookupError> {
    let resume = resumes
        .iter()
        .find(|r| r.id == resume_id)
        .ok_or(LookupError::ResumeNotFound(resume_id))?;
    let job = jobs
        .iter()
        .find(|j| j.id == job_id)
        .ok_or(LookupError::JobNotFound(job_id))?;

    Ok(ScoredPair {
        score: scorer.score(resume, job),
        resume,
        job,
    })
}
