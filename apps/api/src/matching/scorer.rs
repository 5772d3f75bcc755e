//! Match Scoring — keyword overlap between a resume and a job.
//!
//! Default and only backend: `KeywordOverlapScorer`. `AppState` holds an
//! `Arc<dyn MatchScorer>` so handlers never name the backend.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::tokenizer::{token_set, tokenize};
use crate::models::{Job, Resume};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores one (resume, job) pair as an integer percentage in `0..=100`.
pub trait MatchScorer: Send + Sync {
    fn score(&self, resume: &Resume, job: &Job) -> u32;

    /// Label reported to clients, e.g. "keyword".
    fn backend(&self) -> &'static str;
}

pub struct KeywordOverlapScorer;

impl MatchScorer for KeywordOverlapScorer {
    fn score(&self, resume: &Resume, job: &Job) -> u32 {
        compute_match_score(resume, job)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core overlap algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Share of the job's tokens (repeats included) that appear anywhere in the
/// resume, rounded to a whole percent.
///
/// Returns 0 when either side has no tokens.
pub fn compute_match_score(resume: &Resume, job: &Job) -> u32 {
    let resume_tokens = token_set(&resume.match_text());
    let job_tokens = tokenize(&job.match_text());
    overlap_score(&resume_tokens, &job_tokens)
}

fn overlap_score(resume_tokens: &HashSet<String>, job_tokens: &[String]) -> u32 {
    if job_tokens.is_empty() || resume_tokens.is_empty() {
        return 0;
    }

    let matches = job_tokens
        .iter()
        .filter(|t| resume_tokens.contains(t.as_str()))
        .count();

    // f64::round rounds half away from zero; the ratio is never negative.
    ((matches as f64 / job_tokens.len() as f64) * 100.0).round() as u32
}

/// Which job keywords a resume covers. Display helper for the single-pair view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub score: u32,
    pub job_token_count: usize,
    pub matched_tokens: Vec<String>, // first-seen order, deduplicated
    pub missing_tokens: Vec<String>,
}

pub fn explain_match(resume: &Resume, job: &Job) -> MatchBreakdown {
    let resume_tokens = token_set(&resume.match_text());
    let job_tokens = tokenize(&job.match_text());

    let mut seen = HashSet::new();
    let mut matched_tokens = Vec::new();
    let mut missing_tokens = Vec::new();
    for token in &job_tokens {
        if !seen.insert(token.as_str()) {
            continue;
        }
        if resume_tokens.contains(token.as_str()) {
            matched_tokens.push(token.clone());
        } else {
            missing_tokens.push(token.clone());
        }
    }

    MatchBreakdown {
        score: overlap_score(&resume_tokens, &job_tokens),
        job_token_count: job_tokens.len(),
        matched_tokens,
        missing_tokens,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn analyst_resume() -> Resume {
        Resume {
            id: 1,
            name: "Praveen Kumar".to_string(),
            email: "praveen@example.com".to_string(),
            headline: "Junior Data Analyst".to_string(),
            skills: "Excel, Power BI, SQL, Google Sheets".to_string(),
            summary: "1+ years experience working with dashboards, reports and data cleaning."
                .to_string(),
        }
    }

    fn analyst_job(description: &str) -> Job {
        Job {
            id: 1,
            title: "Junior Data Analyst".to_string(),
            department: "Analytics".to_string(),
            location: "Jaipur".to_string(),
            skills: "Excel, Power BI, SQL".to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_analyst_pair_short_description() {
        // 14 job tokens, 9 present in the resume: 64.28 → 64
        let job = analyst_job("Support business intelligence reporting using Excel and Power BI.");
        assert_eq!(compute_match_score(&analyst_resume(), &job), 64);
    }

    #[test]
    fn test_analyst_pair_full_description() {
        // 21 job tokens, 13 present: 61.9 → 62
        let job = analyst_job(
            "Support business intelligence reporting using Excel and Power BI. \
             Work on data cleaning, dashboards and ad-hoc analysis.",
        );
        assert_eq!(compute_match_score(&analyst_resume(), &job), 62);
    }

    #[test]
    fn test_empty_job_scores_zero() {
        let job = Job {
            id: 2,
            title: "QA".to_string(),
            ..Default::default()
        };
        assert_eq!(compute_match_score(&analyst_resume(), &job), 0);
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        let resume = Resume {
            id: 2,
            name: "No Text".to_string(),
            ..Default::default()
        };
        assert_eq!(compute_match_score(&resume, &analyst_job("Excel")), 0);
    }

    #[test]
    fn test_full_coverage_scores_hundred() {
        let resume = Resume {
            skills: "rust tokio axum".to_string(),
            ..Default::default()
        };
        let job = Job {
            title: "Rust".to_string(),
            skills: "tokio, axum, rust".to_string(),
            ..Default::default()
        };
        assert_eq!(compute_match_score(&resume, &job), 100);
    }

    #[test]
    fn test_repeated_job_tokens_count_each_time() {
        let resume = Resume {
            skills: "excel".to_string(),
            ..Default::default()
        };
        // excel, excel, excel, tally → 3/4
        let job = Job {
            title: "Excel".to_string(),
            skills: "Excel".to_string(),
            description: "Excel Tally".to_string(),
            ..Default::default()
        };
        assert_eq!(compute_match_score(&resume, &job), 75);
    }

    #[test]
    fn test_half_rounds_up() {
        let resume = Resume {
            skills: "one".to_string(),
            ..Default::default()
        };
        // 1 of 8 tokens → 12.5 → 13
        let job = Job {
            skills: "one two three four five six seven eight".to_string(),
            ..Default::default()
        };
        assert_eq!(compute_match_score(&resume, &job), 13);
    }

    #[test]
    fn test_score_is_stable_across_calls() {
        let resume = analyst_resume();
        let job = analyst_job("Excel reporting");
        let first = compute_match_score(&resume, &job);
        assert_eq!(first, compute_match_score(&resume, &job));
        assert!(first <= 100);
    }

    #[test]
    fn test_keyword_scorer_delegates() {
        let resume = analyst_resume();
        let job = analyst_job("Support business intelligence reporting using Excel and Power BI.");
        let scorer = KeywordOverlapScorer;
        assert_eq!(scorer.score(&resume, &job), 64);
        assert_eq!(scorer.backend(), "keyword");
    }

    #[test]
    fn test_breakdown_agrees_with_score() {
        let resume = analyst_resume();
        let job = analyst_job("Support business intelligence reporting using Excel and Power BI.");
        let breakdown = explain_match(&resume, &job);
        assert_eq!(breakdown.score, compute_match_score(&resume, &job));
        assert_eq!(breakdown.job_token_count, 14);
        assert_eq!(
            breakdown.matched_tokens,
            vec!["junior", "data", "analyst", "excel", "power", "sql", "and"]
        );
        assert_eq!(
            breakdown.missing_tokens,
            vec!["support", "business", "intelligence", "reporting", "using"]
        );
    }
}
