//! Submission Use Case
//!
//! Records a completed checklist. A submission is committed locally in one
//! pass: appended to the log, the plant's `last_inspected` advanced, a defect
//! raised per failed answer, an alert posted and the lot queued for sync.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::notifications;
use crate::domain::entities::{
    unique_timestamp_id, ChecklistAnswer, Defect, DefectStatus, Notification, NotificationKind,
    Submission,
};
use crate::domain::ports::SiteStore;
use crate::domain::value_objects::FormId;
use crate::error::{PlantsafeError, PlantsafeResult};

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub plant_id: String,
    pub form_id: FormId,
    pub answers: Vec<ChecklistAnswer>,
    pub submitted_by: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitOutcome {
    pub submission: Submission,
    pub defects: Vec<Defect>,
    pub notification: Notification,
}

pub struct SubmissionUseCase {
    store: Arc<dyn SiteStore>,
}

impl SubmissionUseCase {
    pub fn new(store: Arc<dyn SiteStore>) -> Self {
        Self { store }
    }

    pub fn submit(&self, request: SubmitRequest, now: DateTime<Utc>) -> PlantsafeResult<SubmitOutcome> {
        let plant = self
            .store
            .list_plants()?
            .into_iter()
            .find(|p| p.id == request.plant_id)
            .ok_or_else(|| PlantsafeError::PlantNotFound {
                id: request.plant_id.clone(),
            })?;

        // The daily form counts even when the checklist map omits it (GA2 for untyped plant).
        let allowed = plant.applicable_forms().contains(&request.form_id)
            || plant.daily_form() == request.form_id;
        if !allowed {
            return Err(PlantsafeError::FormNotApplicable {
                form_id: request.form_id,
                plant_id: plant.id,
            });
        }

        let log = self.store.list_submissions()?;
        let id = unique_timestamp_id("SUB", now, log.iter().map(|s| s.id.as_str()));
        let submission = Submission {
            id,
            plant_id: plant.id.clone(),
            form_id: request.form_id,
            submitted_at: now,
            submitted_by: request.submitted_by,
            answers: request.answers,
            notes: request.notes,
        };

        self.store.append_submission(submission.clone())?;
        self.store.record_inspection(&plant.id, now)?;

        let defects = self.raise_defects(&submission, now)?;

        let (title, message, kind) = if defects.is_empty() {
            (
                format!("{} Submitted — {}", submission.form_id, plant.name),
                format!(
                    "Completed by {}",
                    submission.submitted_by.as_deref().unwrap_or("unknown")
                ),
                NotificationKind::Success,
            )
        } else {
            (
                format!("Defects Reported — {}", plant.name),
                format!("{} item(s) failed on {}", defects.len(), submission.form_id),
                NotificationKind::Warning,
            )
        };
        let notification = notifications::push(self.store.as_ref(), title, message, kind, now)?;

        self.store.modify_sync_queue(Box::new(|queue| {
            queue.enqueue(
                submission.clone(),
                defects.clone(),
                Some(notification.clone()),
                now,
            );
            true
        }))?;

        tracing::info!(
            id = %submission.id,
            plant_id = %submission.plant_id,
            form_id = %submission.form_id,
            defects = defects.len(),
            "submission recorded"
        );

        Ok(SubmitOutcome {
            submission,
            defects,
            notification,
        })
    }

    fn raise_defects(&self, submission: &Submission, now: DateTime<Utc>) -> PlantsafeResult<Vec<Defect>> {
        let failed: Vec<&ChecklistAnswer> = submission.failed_answers().collect();
        if failed.is_empty() {
            return Ok(Vec::new());
        }

        let mut raised = Vec::with_capacity(failed.len());
        self.store.modify_defects(Box::new(|defects| {
            for answer in failed {
                let id = unique_timestamp_id(
                    "DEF",
                    now,
                    defects
                        .iter()
                        .chain(raised.iter())
                        .map(|d| d.id.as_str()),
                );
                let description = match answer.note.as_deref().map(str::trim) {
                    Some(note) if !note.is_empty() => format!("{}: {}", answer.item, note),
                    _ => answer.item.clone(),
                };
                raised.push(Defect {
                    id,
                    plant_id: submission.plant_id.clone(),
                    submission_id: Some(submission.id.clone()),
                    description,
                    reported_by: submission.submitted_by.clone(),
                    reported_at: now,
                    status: DefectStatus::Open,
                    resolved_at: None,
                    resolved_by: None,
                    resolve_notes: None,
                });
            }
            defects.splice(0..0, raised.iter().cloned());
            true
        }))?;
        Ok(raised)
    }

    pub fn list(&self) -> PlantsafeResult<Vec<Submission>> {
        Ok(self.store.list_submissions()?)
    }

    pub fn for_plant(&self, plant_id: &str) -> PlantsafeResult<Vec<Submission>> {
        Ok(self.store.submissions_for_plant(plant_id)?)
    }

    pub fn within(&self, now: DateTime<Utc>, days: i64) -> PlantsafeResult<Vec<Submission>> {
        Ok(self.store.submissions_within(now, days)?)
    }

    pub fn submitted_today(
        &self,
        plant_id: &str,
        form_id: FormId,
        now: DateTime<Utc>,
    ) -> PlantsafeResult<bool> {
        Ok(self.store.submitted_today(plant_id, form_id, now)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AnswerResult, NewPlant, Plant};
    use crate::domain::ports::{EquipmentRegistry, SiteRecords};
    use crate::domain::value_objects::{FormType, SiteId};
    use crate::infrastructure::InMemorySiteStore;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 3, 6, 45, 0).unwrap()
    }

    fn setup(form_type: Option<FormType>) -> (Arc<InMemorySiteStore>, SubmissionUseCase) {
        let store = Arc::new(InMemorySiteStore::new(SiteId::default()));
        store
            .save_plants(&[Plant::register(
                "PLT-005".to_string(),
                NewPlant {
                    name: "Excavator EX-05".to_string(),
                    location: "South Compound".to_string(),
                    category: "Excavator".to_string(),
                    form_type,
                },
            )])
            .unwrap();
        let use_case = SubmissionUseCase::new(store.clone());
        (store, use_case)
    }

    fn request(form_id: FormId, answers: Vec<ChecklistAnswer>) -> SubmitRequest {
        SubmitRequest {
            plant_id: "PLT-005".to_string(),
            form_id,
            answers,
            submitted_by: Some("Operator".to_string()),
            notes: None,
        }
    }

    fn answer(item: &str, result: AnswerResult, note: Option<&str>) -> ChecklistAnswer {
        ChecklistAnswer {
            section: Some("Hydraulic System".to_string()),
            item: item.to_string(),
            result,
            note: note.map(str::to_string),
        }
    }

    #[test]
    fn clean_submission_is_logged_and_queued() {
        let (store, submissions) = setup(Some(FormType::Excavator));
        let outcome = submissions
            .submit(request(FormId::PreStart(FormType::Excavator), Vec::new()), now())
            .unwrap();

        assert_eq!(outcome.submission.id, format!("SUB-{}", now().timestamp_millis()));
        assert!(outcome.defects.is_empty());
        assert_eq!(outcome.notification.kind, NotificationKind::Success);
        assert_eq!(outcome.notification.title, "GA2-EXC Submitted — Excavator EX-05");

        assert_eq!(store.list_plants().unwrap()[0].last_inspected, Some(now()));
        let queue = store.load_sync_queue().unwrap();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.items()[0].id, outcome.submission.id);
        assert!(submissions
            .submitted_today("PLT-005", FormId::PreStart(FormType::Excavator), now())
            .unwrap());
    }

    #[test]
    fn failed_answers_raise_defects() {
        let (store, submissions) = setup(Some(FormType::Excavator));
        let outcome = submissions
            .submit(
                request(
                    FormId::Maintenance,
                    vec![
                        answer("Cylinder rod seals checked", AnswerResult::Fail, Some("weeping")),
                        answer("Hydraulic tank breather cleaned", AnswerResult::Pass, None),
                        answer("Hydraulic return filter replaced", AnswerResult::Fail, None),
                    ],
                ),
                now(),
            )
            .unwrap();

        assert_eq!(outcome.defects.len(), 2);
        assert_eq!(outcome.defects[0].description, "Cylinder rod seals checked: weeping");
        assert_eq!(outcome.defects[1].description, "Hydraulic return filter replaced");
        assert_ne!(outcome.defects[0].id, outcome.defects[1].id);
        assert!(outcome
            .defects
            .iter()
            .all(|d| d.submission_id.as_deref() == Some(outcome.submission.id.as_str())));
        assert_eq!(outcome.notification.kind, NotificationKind::Warning);

        let stored = store.list_defects().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(store.load_sync_queue().unwrap().items()[0].defects.len(), 2);
    }

    #[test]
    fn form_outside_checklist_map_is_refused() {
        let (_, submissions) = setup(Some(FormType::Excavator));
        let err = submissions
            .submit(request(FormId::PreLift, Vec::new()), now())
            .unwrap_err();
        assert!(matches!(err, PlantsafeError::FormNotApplicable { .. }));
    }

    #[test]
    fn untyped_plant_accepts_generic_daily_form() {
        let (_, submissions) = setup(None);
        submissions
            .submit(request(FormId::GenericPreStart, Vec::new()), now())
            .unwrap();
    }

    #[test]
    fn late_submission_does_not_rewind_last_inspected() {
        let (store, submissions) = setup(Some(FormType::Excavator));
        submissions
            .submit(request(FormId::HazardAssessment, Vec::new()), now())
            .unwrap();
        submissions
            .submit(
                request(FormId::HazardAssessment, Vec::new()),
                now() - Duration::hours(3),
            )
            .unwrap();

        assert_eq!(store.list_plants().unwrap()[0].last_inspected, Some(now()));
        assert_eq!(submissions.list().unwrap().len(), 2);
        assert_eq!(submissions.within(now(), 7).unwrap().len(), 2);
        assert_eq!(submissions.for_plant("PLT-001").unwrap().len(), 0);
    }
}
