//! Compliance Use Case
//!
//! Reads a snapshot through the storage ports and hands it to the pure
//! [`ComplianceEngine`]. Evaluation never writes; only `notify_danger` does.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::notifications;
use crate::domain::entities::{Issue, IssueSummary, Notification, NotificationKind};
use crate::domain::ports::SiteStore;
use crate::domain::services::{
    current_quarter_colour, ComplianceEngine, ComplianceRules, ComplianceSnapshot, QuarterColour,
};
use crate::domain::value_objects::Severity;
use crate::error::PlantsafeResult;

/// Everything the compliance page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub evaluated_at: DateTime<Utc>,
    pub quarter: QuarterColour,
    pub summary: IssueSummary,
    pub issues: Vec<Issue>,
}

pub struct ComplianceUseCase {
    store: Arc<dyn SiteStore>,
    engine: ComplianceEngine,
}

impl ComplianceUseCase {
    pub fn new(store: Arc<dyn SiteStore>, rules: ComplianceRules) -> Self {
        Self {
            store,
            engine: ComplianceEngine::new(rules),
        }
    }

    pub fn evaluate(&self, now: DateTime<Utc>) -> PlantsafeResult<Vec<Issue>> {
        let plants = self.store.list_plants()?;
        let static_records = self.store.list_static_records()?;
        let lifting_items = self.store.list_lifting_items()?;
        let submissions = self
            .store
            .submissions_within(now, self.engine.rules().weekly_window_days)?;

        Ok(self.engine.evaluate(
            ComplianceSnapshot {
                plants: &plants,
                static_records: &static_records,
                lifting_items: &lifting_items,
                submissions: &submissions,
            },
            now,
        ))
    }

    pub fn report(&self, now: DateTime<Utc>) -> PlantsafeResult<ComplianceReport> {
        let issues = self.evaluate(now)?;
        Ok(ComplianceReport {
            evaluated_at: now,
            quarter: current_quarter_colour(now),
            summary: IssueSummary::from_issues(&issues),
            issues,
        })
    }

    /// Post one alert per danger issue
    pub fn notify_danger(&self, now: DateTime<Utc>) -> PlantsafeResult<Vec<Notification>> {
        let mut posted = Vec::new();
        for issue in self.evaluate(now)? {
            if issue.severity != Severity::Danger {
                continue;
            }
            posted.push(notifications::push(
                self.store.as_ref(),
                format!("Compliance Alert — {}", issue.subject_label),
                issue.description,
                NotificationKind::Error,
                now,
            )?);
        }

        if !posted.is_empty() {
            tracing::info!(count = posted.len(), "danger alerts posted");
        }
        Ok(posted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        IssueKind, NewPlant, Plant, StaticSafetyRecord, Submission,
    };
    use crate::domain::ports::{EquipmentRegistry, SiteRecords, SubmissionLog};
    use crate::domain::value_objects::{FormId, FormType, SiteId};
    use crate::infrastructure::InMemorySiteStore;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 20, 12, 0, 0).unwrap()
    }

    fn setup() -> (Arc<InMemorySiteStore>, ComplianceUseCase) {
        let store = Arc::new(InMemorySiteStore::new(SiteId::default()));
        store
            .save_plants(&[Plant::register(
                "PLT-003".to_string(),
                NewPlant {
                    name: "Overhead Crane #1".to_string(),
                    location: "Main Hall".to_string(),
                    category: "Crane".to_string(),
                    form_type: Some(FormType::Crane),
                },
            )])
            .unwrap();
        let mut record = StaticSafetyRecord::new("PLT-003", "Overhead Crane #1");
        record.next_inspection_due = Some((now() - Duration::days(5)).to_rfc3339());
        store.save_static_records(&[record]).unwrap();

        let use_case = ComplianceUseCase::new(store.clone(), ComplianceRules::default());
        (store, use_case)
    }

    #[test]
    fn report_counts_by_severity() {
        let (_, compliance) = setup();
        let report = compliance.report(now()).unwrap();

        assert_eq!(report.issues.len(), 3);
        assert_eq!(report.summary.danger, 1);
        assert_eq!(report.summary.warning, 1);
        assert_eq!(report.summary.info, 1);
        assert_eq!(report.quarter.label, "Q3 — Jul / Aug / Sep");
    }

    #[test]
    fn old_submissions_fall_outside_the_week() {
        let (store, compliance) = setup();
        store
            .append_submission(Submission {
                id: "SUB-1".to_string(),
                plant_id: "PLT-003".to_string(),
                form_id: FormId::HazardAssessment,
                submitted_at: now() - Duration::days(8),
                submitted_by: None,
                answers: Vec::new(),
                notes: None,
            })
            .unwrap();

        let issues = compliance.evaluate(now()).unwrap();
        assert!(issues.iter().any(|i| i.kind == IssueKind::WeeklyFormMissing));
    }

    #[test]
    fn danger_issues_become_notifications() {
        let (store, compliance) = setup();
        let posted = compliance.notify_danger(now()).unwrap();

        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].title, "Compliance Alert — Overhead Crane #1");
        assert_eq!(posted[0].message, "GA1: Inspection overdue by 5 day(s)");
        assert_eq!(store.list_notifications().unwrap().len(), 1);
    }

    #[test]
    fn evaluation_leaves_the_store_untouched() {
        let (store, compliance) = setup();
        compliance.evaluate(now()).unwrap();
        compliance.report(now()).unwrap();
        assert!(store.list_notifications().unwrap().is_empty());
    }
}
