//! Completed inspection checklist
//!
//! Submissions are append-only. Once written, `submitted_at` never changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::FormId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub plant_id: String,
    pub form_id: FormId,
    pub submitted_at: DateTime<Utc>,
    pub submitted_by: Option<String>,
    #[serde(default)]
    pub answers: Vec<ChecklistAnswer>,
    pub notes: Option<String>,
}

/// Outcome recorded against one checklist line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistAnswer {
    pub section: Option<String>,
    pub item: String,
    pub result: AnswerResult,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerResult {
    #[serde(rename = "pass")]
    Pass,
    #[serde(rename = "fail")]
    Fail,
    #[serde(rename = "na")]
    NotApplicable,
}

impl Submission {
    /// Answers marked as failed; each becomes a defect
    pub fn failed_answers(&self) -> impl Iterator<Item = &ChecklistAnswer> {
        self.answers
            .iter()
            .filter(|a| a.result == AnswerResult::Fail)
    }
}

/// `SUB-<epoch millis>`, moved forward a millisecond at a time until it does
/// not collide with an existing id.
pub fn unique_timestamp_id<'a>(
    prefix: &str,
    now: DateTime<Utc>,
    existing: impl IntoIterator<Item = &'a str> + Clone,
) -> String {
    let mut millis = now.timestamp_millis();
    loop {
        let candidate = format!("{}-{}", prefix, millis);
        if !existing.clone().into_iter().any(|id| id == candidate) {
            return candidate;
        }
        millis += 1;
    }
}
