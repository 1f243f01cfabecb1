//! SubmissionLog port
//!
//! Append-only log of completed checklists, newest first.

use chrono::{DateTime, Utc};

use super::repository::RepoResult;
use crate::domain::entities::Submission;
use crate::domain::services::{same_calendar_day, within_window};
use crate::domain::value_objects::FormId;

pub trait SubmissionLog: Send + Sync {
    /// Every submission, newest first
    fn list_submissions(&self) -> RepoResult<Vec<Submission>>;

    /// Add a submission at the front of the log
    fn append_submission(&self, submission: Submission) -> RepoResult<()>;

    /// Submissions strictly inside the trailing `days` window ending at `now`
    fn submissions_within(&self, now: DateTime<Utc>, days: i64) -> RepoResult<Vec<Submission>> {
        Ok(self
            .list_submissions()?
            .into_iter()
            .filter(|s| within_window(s.submitted_at, now, days))
            .collect())
    }

    fn submissions_for_plant(&self, plant_id: &str) -> RepoResult<Vec<Submission>> {
        Ok(self
            .list_submissions()?
            .into_iter()
            .filter(|s| s.plant_id == plant_id)
            .collect())
    }

    /// Whether `form_id` was completed for the plant on the UTC date of `now`
    fn submitted_today(&self, plant_id: &str, form_id: FormId, now: DateTime<Utc>) -> RepoResult<bool> {
        Ok(self.list_submissions()?.iter().any(|s| {
            s.plant_id == plant_id && s.form_id == form_id && same_calendar_day(s.submitted_at, now)
        }))
    }
}
