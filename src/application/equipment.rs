//! Equipment Use Case
//!
//! Maintains the three registers the compliance engine reads: plant, GA1
//! static records and lifting gear.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::notifications;
use crate::domain::entities::{
    next_sequential_id, upsert_static_record, FormTemplate, LiftingItem, LiftingItemUpdate,
    NewLiftingItem, NewPlant, NotificationKind, OutOfService, Plant, PlantUpdate,
    StaticSafetyRecord,
};
use crate::domain::ports::SiteStore;
use crate::domain::value_objects::FormId;
use crate::error::{PlantsafeError, PlantsafeResult};

pub struct EquipmentUseCase {
    store: Arc<dyn SiteStore>,
}

impl EquipmentUseCase {
    pub fn new(store: Arc<dyn SiteStore>) -> Self {
        Self { store }
    }

    // --- plant register ---

    pub fn list_plants(&self) -> PlantsafeResult<Vec<Plant>> {
        Ok(self.store.list_plants()?)
    }

    pub fn plant(&self, id: &str) -> PlantsafeResult<Plant> {
        self.store
            .list_plants()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PlantsafeError::PlantNotFound { id: id.to_string() })
    }

    pub fn add_plant(&self, new: NewPlant) -> PlantsafeResult<Plant> {
        if new.name.trim().is_empty() {
            return Err(PlantsafeError::InvalidInput {
                message: "plant name is required".to_string(),
            });
        }

        let mut plant = Plant::register(String::new(), new);
        self.store.modify_plants(Box::new(|plants| {
            plant.id = next_sequential_id("PLT", plants.iter().map(|p| p.id.as_str()));
            plants.push(plant.clone());
            true
        }))?;

        tracing::info!(id = %plant.id, name = %plant.name, "plant added");
        Ok(plant)
    }

    pub fn update_plant(&self, id: &str, update: PlantUpdate) -> PlantsafeResult<Plant> {
        self.modify_plant(id, |plant| plant.apply(update))
    }

    pub fn remove_plant(&self, id: &str) -> PlantsafeResult<Plant> {
        let mut removed = None;
        self.store.modify_plants(Box::new(|plants| {
            let Some(index) = plants.iter().position(|p| p.id == id) else {
                return false;
            };
            removed = Some(plants.remove(index));
            true
        }))?;
        let removed = removed.ok_or_else(|| PlantsafeError::PlantNotFound { id: id.to_string() })?;

        tracing::info!(id, "plant removed");
        Ok(removed)
    }

    /// Take a plant out of service, or return it, and post the matching alert.
    pub fn set_out_of_service(
        &self,
        id: &str,
        out_of_service: bool,
        reason: &str,
        by: &str,
        now: DateTime<Utc>,
    ) -> PlantsafeResult<Plant> {
        let plant = self.modify_plant(id, |plant| {
            plant.out_of_service = out_of_service.then(|| OutOfService {
                reason: reason.to_string(),
                set_by: by.to_string(),
                set_at: now,
            });
        })?;

        let (title, message, kind) = if out_of_service {
            (
                format!("Plant Out of Service — {}", plant.name),
                format!("Marked out of service by {}. Reason: {}", by, reason),
                NotificationKind::Error,
            )
        } else {
            (
                format!("Plant Returned to Service — {}", plant.name),
                format!("Returned to service by {}", by),
                NotificationKind::Success,
            )
        };
        notifications::push(self.store.as_ref(), title, message, kind, now)?;

        Ok(plant)
    }

    /// Max-wins update of `last_inspected`; `false` for unknown plants
    pub fn record_inspection(&self, plant_id: &str, at: DateTime<Utc>) -> PlantsafeResult<bool> {
        Ok(self.store.record_inspection(plant_id, at)?)
    }

    /// Templates a plant may be inspected against, in checklist-map order
    pub fn forms_for_plant(&self, plant_id: &str) -> PlantsafeResult<Vec<FormTemplate>> {
        let plant = self.plant(plant_id)?;
        let templates = self.store.list_form_templates()?;
        Ok(plant
            .applicable_forms()
            .into_iter()
            .filter_map(|id| templates.iter().find(|t| t.id == id).cloned())
            .collect())
    }

    pub fn form_templates(&self) -> PlantsafeResult<Vec<FormTemplate>> {
        Ok(self.store.list_form_templates()?)
    }

    pub fn form_template(&self, id: FormId) -> PlantsafeResult<Option<FormTemplate>> {
        Ok(self
            .store
            .list_form_templates()?
            .into_iter()
            .find(|t| t.id == id))
    }

    fn modify_plant(&self, id: &str, f: impl FnOnce(&mut Plant)) -> PlantsafeResult<Plant> {
        let mut updated = None;
        self.store.modify_plants(Box::new(|plants| {
            let Some(plant) = plants.iter_mut().find(|p| p.id == id) else {
                return false;
            };
            f(plant);
            updated = Some(plant.clone());
            true
        }))?;
        updated.ok_or_else(|| PlantsafeError::PlantNotFound { id: id.to_string() })
    }

    // --- GA1 static records ---

    pub fn list_static_records(&self) -> PlantsafeResult<Vec<StaticSafetyRecord>> {
        Ok(self.store.list_static_records()?)
    }

    pub fn static_record(&self, plant_id: &str) -> PlantsafeResult<Option<StaticSafetyRecord>> {
        Ok(self
            .store
            .list_static_records()?
            .into_iter()
            .find(|r| r.plant_id == plant_id))
    }

    /// Insert or merge the GA1 record for a registered plant
    pub fn save_static_record(
        &self,
        mut record: StaticSafetyRecord,
        now: DateTime<Utc>,
    ) -> PlantsafeResult<StaticSafetyRecord> {
        let plant = self.plant(&record.plant_id)?;
        if record.plant_name.is_empty() {
            record.plant_name = plant.name;
        }

        let mut saved = record.clone();
        self.store.modify_static_records(Box::new(|records| {
            saved = upsert_static_record(records, record, now);
            true
        }))?;

        tracing::info!(plant_id = %saved.plant_id, "GA1 record saved");
        Ok(saved)
    }

    pub fn remove_static_record(&self, plant_id: &str) -> PlantsafeResult<()> {
        let removed = self.store.modify_static_records(Box::new(|records| {
            let before = records.len();
            records.retain(|r| r.plant_id != plant_id);
            records.len() != before
        }))?;
        if !removed {
            return Err(PlantsafeError::StaticRecordNotFound {
                plant_id: plant_id.to_string(),
            });
        }
        Ok(())
    }

    // --- lifting register ---

    pub fn list_lifting_items(&self) -> PlantsafeResult<Vec<LiftingItem>> {
        Ok(self.store.list_lifting_items()?)
    }

    pub fn add_lifting_item(
        &self,
        new: NewLiftingItem,
        now: DateTime<Utc>,
    ) -> PlantsafeResult<LiftingItem> {
        if new.description.trim().is_empty() {
            return Err(PlantsafeError::InvalidInput {
                message: "lifting item description is required".to_string(),
            });
        }

        let mut item = LiftingItem::register(String::new(), new, now);
        self.store.modify_lifting_items(Box::new(|items| {
            item.id = next_sequential_id("LFT", items.iter().map(|i| i.id.as_str()));
            items.push(item.clone());
            true
        }))?;

        tracing::info!(id = %item.id, "lifting item added");
        Ok(item)
    }

    pub fn update_lifting_item(
        &self,
        id: &str,
        update: LiftingItemUpdate,
        now: DateTime<Utc>,
    ) -> PlantsafeResult<LiftingItem> {
        let mut updated = None;
        self.store.modify_lifting_items(Box::new(|items| {
            let Some(item) = items.iter_mut().find(|i| i.id == id) else {
                return false;
            };
            item.apply(update, now);
            updated = Some(item.clone());
            true
        }))?;
        updated.ok_or_else(|| PlantsafeError::LiftingItemNotFound { id: id.to_string() })
    }

    pub fn remove_lifting_item(&self, id: &str) -> PlantsafeResult<LiftingItem> {
        let mut removed = None;
        self.store.modify_lifting_items(Box::new(|items| {
            let Some(index) = items.iter().position(|i| i.id == id) else {
                return false;
            };
            removed = Some(items.remove(index));
            true
        }))?;
        removed.ok_or_else(|| PlantsafeError::LiftingItemNotFound { id: id.to_string() })
    }
}
