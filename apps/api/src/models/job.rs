use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::null_as_default;

/// An open position the resumes are matched against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, alias = "dept", deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl Job {
    pub fn from_draft(id: u64, draft: JobDraft) -> Self {
        Self {
            id,
            title: draft.title,
            department: draft.department,
            location: draft.location,
            skills: draft.skills,
            description: draft.description,
        }
    }

    /// Text a resume is scored against: title, skills, description.
    pub fn match_text(&self) -> String {
        format!("{} {} {}", self.title, self.skills, self.description)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobDraft {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, alias = "dept", deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl JobDraft {
    pub fn validated(self) -> Result<Self, AppError> {
        let draft = Self {
            title: self.title.trim().to_string(),
            department: self.department.trim().to_string(),
            location: self.location.trim().to_string(),
            skills: self.skills.trim().to_string(),
            description: self.description.trim().to_string(),
        };
        if draft.title.is_empty() {
            return Err(AppError::Validation("Job title is required.".to_string()));
        }
        Ok(draft)
    }
}
