//! Compliance Engine
//!
//! Derives the outstanding compliance issues for a site from a snapshot of
//! its registers and recent submissions. Evaluation is a pure function of the
//! snapshot and the supplied instant: nothing is cached or written, and two
//! evaluations of the same inputs give the same issues in the same order.
//!
//! Issues are emitted in generation order:
//! 1. per plant (register order): weekly form, then daily form
//! 2. GA1 due dates (register order)
//! 3. lifting thorough-exam due dates (register order)
//! 4. lifting colour-tag mismatches (register order)
//!
//! Bad data never aborts an evaluation. A due date that cannot be parsed is
//! logged and that single check is skipped.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Issue, IssueKind, LiftingItem, Plant, StaticSafetyRecord, Submission};
use crate::domain::value_objects::{FormId, Severity};

use super::colour_rule::{colour_mismatches, current_quarter_colour};
use super::date_math::{days_between, parse_instant, same_calendar_day, within_window};

/// The weekly hazard assessment every plant must complete
pub const WEEKLY_FORM: FormId = FormId::HazardAssessment;

/// Thresholds applied by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplianceRules {
    /// Trailing window, in days, in which the weekly form must appear
    pub weekly_window_days: i64,
    /// GA1 inspections due within this many days are flagged
    pub static_due_soon_days: i64,
    /// Lifting thorough exams due within this many days are flagged
    pub lifting_due_soon_days: i64,
    /// Stable sort danger → warning → info instead of generation order
    pub sort_by_severity: bool,
}

impl Default for ComplianceRules {
    fn default() -> Self {
        Self {
            weekly_window_days: 7,
            static_due_soon_days: 14,
            lifting_due_soon_days: 30,
            sort_by_severity: false,
        }
    }
}

/// Everything the engine reads, captured at one point in time.
///
/// `submissions` may be the whole log or only the recent part of it; the
/// engine applies the weekly window itself.
#[derive(Debug, Clone, Copy)]
pub struct ComplianceSnapshot<'a> {
    pub plants: &'a [Plant],
    pub static_records: &'a [StaticSafetyRecord],
    pub lifting_items: &'a [LiftingItem],
    pub submissions: &'a [Submission],
}

/// Where a due date stands relative to now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "days", rename_all = "kebab-case")]
pub enum DueStatus {
    /// Passed by this many days
    Overdue(i64),
    /// Due within the warning window, in this many days
    DueSoon(i64),
}

impl DueStatus {
    /// Classify a day count against a due-soon window.
    ///
    /// `None` when the date is further away than the window.
    pub fn classify(days: i64, due_soon_days: i64) -> Option<Self> {
        if days < 0 {
            Some(DueStatus::Overdue(days.abs()))
        } else if days <= due_soon_days {
            Some(DueStatus::DueSoon(days))
        } else {
            None
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            DueStatus::Overdue(_) => Severity::Danger,
            DueStatus::DueSoon(_) => Severity::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ComplianceEngine {
    rules: ComplianceRules,
}

impl ComplianceEngine {
    pub fn new(rules: ComplianceRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ComplianceRules {
        &self.rules
    }

    /// Compute every outstanding issue at `now`
    pub fn evaluate(&self, snapshot: ComplianceSnapshot<'_>, now: DateTime<Utc>) -> Vec<Issue> {
        let recent: Vec<&Submission> = snapshot
            .submissions
            .iter()
            .filter(|s| within_window(s.submitted_at, now, self.rules.weekly_window_days))
            .collect();

        let mut issues = Vec::new();

        for plant in snapshot.plants {
            self.plant_issues(plant, &recent, now, &mut issues);
        }

        issues.extend(
            snapshot
                .static_records
                .iter()
                .filter_map(|record| self.static_record_issue(record, now)),
        );

        issues.extend(
            snapshot
                .lifting_items
                .iter()
                .filter_map(|item| self.thorough_exam_issue(item, now)),
        );

        let quarter = current_quarter_colour(now);
        issues.extend(
            colour_mismatches(snapshot.lifting_items, quarter.colour).map(|item| Issue {
                kind: IssueKind::ColourMismatch,
                subject_id: item.id.clone(),
                subject_label: item.description.clone(),
                description: format!(
                    "Wrong colour tag — should be {} ({})",
                    quarter.colour.as_str().to_uppercase(),
                    quarter.label
                ),
                severity: Severity::Warning,
            }),
        );

        if self.rules.sort_by_severity {
            issues.sort_by(|a, b| b.severity.cmp(&a.severity));
        }

        tracing::debug!(count = issues.len(), "compliance evaluated");
        issues
    }

    fn plant_issues(
        &self,
        plant: &Plant,
        recent: &[&Submission],
        now: DateTime<Utc>,
        issues: &mut Vec<Issue>,
    ) {
        let daily_form = plant.daily_form();
        let weekly_done = recent
            .iter()
            .any(|s| s.plant_id == plant.id && s.form_id == WEEKLY_FORM);
        let daily_done = recent.iter().any(|s| {
            s.plant_id == plant.id
                && s.form_id == daily_form
                && same_calendar_day(s.submitted_at, now)
        });

        if !weekly_done {
            issues.push(Issue {
                kind: IssueKind::WeeklyFormMissing,
                subject_id: plant.id.clone(),
                subject_label: plant.name.clone(),
                description: format!("{} hazard assessment not completed this week", WEEKLY_FORM),
                severity: Severity::Warning,
            });
        }

        if !daily_done {
            issues.push(Issue {
                kind: IssueKind::DailyFormMissing,
                subject_id: plant.id.clone(),
                subject_label: plant.name.clone(),
                description: format!("{} pre-start not completed today", daily_form),
                severity: Severity::Info,
            });
        }
    }

    fn static_record_issue(&self, record: &StaticSafetyRecord, now: DateTime<Utc>) -> Option<Issue> {
        let days = due_in_days(
            record.next_inspection_due.as_deref(),
            now,
            &record.plant_id,
            "nextInspectionDue",
        )?;
        let status = DueStatus::classify(days, self.rules.static_due_soon_days)?;

        let message = match status {
            DueStatus::Overdue(n) => format!("Inspection overdue by {} day(s)", n),
            DueStatus::DueSoon(n) => format!("Inspection due in {} day(s)", n),
        };

        Some(Issue {
            kind: IssueKind::StaticInspectionDue,
            subject_id: record.plant_id.clone(),
            subject_label: record.plant_name.clone(),
            description: format!("GA1: {}", message),
            severity: status.severity(),
        })
    }

    fn thorough_exam_issue(&self, item: &LiftingItem, now: DateTime<Utc>) -> Option<Issue> {
        let days = due_in_days(
            item.next_thorough_exam.as_deref(),
            now,
            &item.id,
            "nextThoroughExam",
        )?;
        let status = DueStatus::classify(days, self.rules.lifting_due_soon_days)?;

        let message = match status {
            DueStatus::Overdue(n) => format!("Thorough exam overdue by {} day(s)", n),
            DueStatus::DueSoon(n) => format!("Thorough exam due in {} day(s)", n),
        };

        Some(Issue {
            kind: IssueKind::ThoroughExamDue,
            subject_id: item.id.clone(),
            subject_label: item.description.clone(),
            description: format!("Lifting: {}", message),
            severity: status.severity(),
        })
    }
}

/// Day count for a stored due date. Blank means no obligation; an
/// unparseable value is reported once and skipped.
fn due_in_days(raw: Option<&str>, now: DateTime<Utc>, subject: &str, field: &str) -> Option<i64> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty())?;
    match parse_instant(raw) {
        Some(due) => Some(days_between(now, due)),
        None => {
            tracing::warn!(subject, field, value = raw, "skipping unparseable due date");
            None
        }
    }
}
