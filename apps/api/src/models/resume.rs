use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::null_as_default;

/// A candidate resume as held by the local store.
///
/// Text fields default to `""` when absent or `null` in stored JSON so that
/// scoring never has to special-case a missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
}

impl Resume {
    pub fn from_draft(id: u64, draft: ResumeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            headline: draft.headline,
            skills: draft.skills,
            summary: draft.summary,
        }
    }

    /// Text scored against a job: headline, skills, summary.
    pub fn match_text(&self) -> String {
        format!("{} {} {}", self.headline, self.skills, self.summary)
    }
}

/// Create/update payload for a resume.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeDraft {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
}

impl ResumeDraft {
    /// Trims every field and rejects a draft without a candidate name.
    pub fn validated(self) -> Result<Self, AppError> {
        let draft = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            headline: self.headline.trim().to_string(),
            skills: self.skills.trim().to_string(),
            summary: self.summary.trim().to_string(),
        };
        if draft.name.is_empty() {
            return Err(AppError::Validation(
                "Candidate name is required.".to_string(),
            ));
        }
        Ok(draft)
    }
}
