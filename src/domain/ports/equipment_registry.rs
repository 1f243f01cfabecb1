//! EquipmentRegistry port
//!
//! The plant register, GA1 static records and the lifting gear register.
//! The list methods are the compliance engine's read surface; each returns
//! the whole collection in register order.
//!
//! `save_*` replaces a collection wholesale. Edits that depend on the current
//! contents go through `modify_*`, which reads and writes in one locked step.

use chrono::{DateTime, Utc};

use super::repository::{Edit, RepoResult};
use crate::domain::entities::{LiftingItem, Plant, StaticSafetyRecord};

pub trait EquipmentRegistry: Send + Sync {
    fn list_plants(&self) -> RepoResult<Vec<Plant>>;

    /// Replace the plant register. A stored `last_inspected` later than the
    /// incoming one is kept.
    fn save_plants(&self, plants: &[Plant]) -> RepoResult<()>;
    fn modify_plants(&self, edit: Edit<'_, Vec<Plant>>) -> RepoResult<bool>;

    fn list_static_records(&self) -> RepoResult<Vec<StaticSafetyRecord>>;
    fn save_static_records(&self, records: &[StaticSafetyRecord]) -> RepoResult<()>;
    fn modify_static_records(&self, edit: Edit<'_, Vec<StaticSafetyRecord>>) -> RepoResult<bool>;

    fn list_lifting_items(&self) -> RepoResult<Vec<LiftingItem>>;
    fn save_lifting_items(&self, items: &[LiftingItem]) -> RepoResult<()>;
    fn modify_lifting_items(&self, edit: Edit<'_, Vec<LiftingItem>>) -> RepoResult<bool>;

    /// Move a plant's `last_inspected` forward to `at` (max-wins).
    ///
    /// Returns `false` for an unknown plant or when a later inspection is
    /// already recorded.
    fn record_inspection(&self, plant_id: &str, at: DateTime<Utc>) -> RepoResult<bool> {
        self.modify_plants(Box::new(move |plants| {
            plants
                .iter_mut()
                .find(|p| p.id == plant_id)
                .map(|p| p.record_inspection(at))
                .unwrap_or(false)
        }))
    }
}
