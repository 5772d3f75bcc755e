//! Scripted help assistant. Answers from a fixed FAQ table by phrase lookup.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

struct Faq {
    phrases: &'static [&'static str],
    answer: &'static str,
}

/// Checked in order; the first entry with a phrase contained in the question wins.
const FAQS: &[Faq] = &[
    Faq {
        phrases: &["add resume", "resume add", "candidate"],
        answer: "Create a resume with POST /api/v1/resumes, or import a .txt/.pdf file \
                 through /api/v1/import and paste the text into the summary.",
    },
    Faq {
        phrases: &["upload resume", "resume upload"],
        answer: "Upload the file to /api/v1/import. Text files and PDFs come back as plain \
                 text; for Word documents copy the key text into the summary manually.",
    },
    Faq {
        phrases: &["job description", "add jd", "add job"],
        answer: "Create a job with POST /api/v1/jobs, or import a .txt/.pdf JD through \
                 /api/v1/import and use the text as the description.",
    },
    Faq {
        phrases: &["match", "score", "matching"],
        answer: "Use /api/v1/matches for the ranked table or /api/v1/matches/pair for one \
                 resume and job. Scores are based on overlapping keywords in skills, \
                 headline and description.",
    },
    Faq {
        phrases: &["user", "admin", "hr"],
        answer: "Only Admin users can manage logins under /api/v1/users. HR users can add \
                 resumes, jobs and run matching.",
    },
    Faq {
        phrases: &["reset data", "clear data"],
        answer: "POST /api/v1/settings/reset clears everything and restores the demo data.",
    },
];

const FALLBACK: &str = "I didn't fully catch that. Try asking things like 'How to upload \
                        resume', 'How matching works', or 'How to add a job description'.";

pub fn reply_to(message: &str) -> &'static str {
    let question = message.to_lowercase();
    FAQS.iter()
        .find(|faq| faq.phrases.iter().any(|p| question.contains(p)))
        .map_or(FALLBACK, |faq| faq.answer)
}

#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub reply: String,
}

/// POST /api/v1/assistant
pub async fn handle_assistant(
    Json(request): Json<AssistantRequest>,
) -> Result<Json<AssistantResponse>, AppError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    Ok(Json(AssistantResponse {
        reply: reply_to(message).to_string(),
    }))
}
