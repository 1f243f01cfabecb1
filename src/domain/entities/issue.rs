//! Compliance issue
//!
//! Derived output of the compliance engine. Issues are never stored; they are
//! recomputed on every evaluation.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Severity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub kind: IssueKind,
    pub subject_id: String,
    pub subject_label: String,
    pub description: String,
    pub severity: Severity,
}

/// Which check produced an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    WeeklyFormMissing,
    DailyFormMissing,
    StaticInspectionDue,
    ThoroughExamDue,
    ColourMismatch,
}

/// Issue counts per severity, as shown on the dashboard tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IssueSummary {
    pub danger: usize,
    pub warning: usize,
    pub info: usize,
}

impl IssueSummary {
    pub fn from_issues(issues: &[Issue]) -> Self {
        issues.iter().fold(Self::default(), |mut acc, issue| {
            match issue.severity {
                Severity::Danger => acc.danger += 1,
                Severity::Warning => acc.warning += 1,
                Severity::Info => acc.info += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.danger + self.warning + self.info
    }

    pub fn is_compliant(&self) -> bool {
        self.total() == 0
    }
}
