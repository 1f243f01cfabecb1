//! Defect Use Case

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{unique_timestamp_id, Defect, DefectStatus};
use crate::domain::ports::SiteStore;
use crate::error::{PlantsafeError, PlantsafeResult};

pub struct DefectUseCase {
    store: Arc<dyn SiteStore>,
}

impl DefectUseCase {
    pub fn new(store: Arc<dyn SiteStore>) -> Self {
        Self { store }
    }

    /// Every defect, newest first
    pub fn list(&self) -> PlantsafeResult<Vec<Defect>> {
        Ok(self.store.list_defects()?)
    }

    pub fn open_defects(&self) -> PlantsafeResult<Vec<Defect>> {
        Ok(self
            .store
            .list_defects()?
            .into_iter()
            .filter(Defect::is_open)
            .collect())
    }

    pub fn defects_for_plant(&self, plant_id: &str) -> PlantsafeResult<Vec<Defect>> {
        Ok(self
            .store
            .list_defects()?
            .into_iter()
            .filter(|d| d.plant_id == plant_id)
            .collect())
    }

    /// Log a defect found outside a checklist
    pub fn report(
        &self,
        plant_id: &str,
        description: &str,
        reported_by: Option<String>,
        now: DateTime<Utc>,
    ) -> PlantsafeResult<Defect> {
        if !self.store.list_plants()?.iter().any(|p| p.id == plant_id) {
            return Err(PlantsafeError::PlantNotFound {
                id: plant_id.to_string(),
            });
        }

        let mut defect = Defect {
            id: String::new(),
            plant_id: plant_id.to_string(),
            submission_id: None,
            description: description.to_string(),
            reported_by,
            reported_at: now,
            status: DefectStatus::Open,
            resolved_at: None,
            resolved_by: None,
            resolve_notes: None,
        };
        self.store.modify_defects(Box::new(|defects| {
            defect.id = unique_timestamp_id("DEF", now, defects.iter().map(|d| d.id.as_str()));
            defects.insert(0, defect.clone());
            true
        }))?;

        tracing::info!(id = %defect.id, plant_id, "defect reported");
        Ok(defect)
    }

    /// Mark a defect resolved. Unknown ids are ignored and return `false`.
    pub fn resolve(
        &self,
        id: &str,
        resolved_by: &str,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> PlantsafeResult<bool> {
        Ok(self.store.modify_defects(Box::new(|defects| {
            let Some(defect) = defects.iter_mut().find(|d| d.id == id) else {
                return false;
            };
            defect.resolve(resolved_by, notes, now);
            true
        }))?)
    }
}
