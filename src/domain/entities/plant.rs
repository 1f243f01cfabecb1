//! Plant entity
//!
//! A piece of powered or mobile equipment on site that needs recurring
//! inspection. `last_inspected` is owned by the submission log: it only ever
//! moves forward and always equals the latest submission for the plant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{FormId, FormType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub category: String,
    pub form_type: Option<FormType>,
    pub last_inspected: Option<DateTime<Utc>>,
    pub out_of_service: Option<OutOfService>,
}

/// Why and by whom a plant was taken out of service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutOfService {
    pub reason: String,
    pub set_by: String,
    pub set_at: DateTime<Utc>,
}

/// Fields supplied when registering a plant; the id is allocated by the register.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewPlant {
    pub name: String,
    pub location: String,
    pub category: String,
    pub form_type: Option<FormType>,
}

/// Partial update; `None` keeps the current value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlantUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub form_type: Option<Option<FormType>>,
}

impl Plant {
    pub fn register(id: String, new: NewPlant) -> Self {
        Self {
            id,
            name: new.name,
            location: new.location,
            category: new.category,
            form_type: new.form_type,
            last_inspected: None,
            out_of_service: None,
        }
    }

    /// The daily pre-start form this plant must complete each day
    pub fn daily_form(&self) -> FormId {
        FormId::daily_for(self.form_type)
    }

    /// Every form that may be completed against this plant
    pub fn applicable_forms(&self) -> Vec<FormId> {
        FormType::applicable_forms(self.form_type)
    }

    pub fn is_out_of_service(&self) -> bool {
        self.out_of_service.is_some()
    }

    /// Advance `last_inspected` to `at` unless a later inspection is already
    /// recorded. Returns `true` when the stored value changed.
    pub fn record_inspection(&mut self, at: DateTime<Utc>) -> bool {
        match self.last_inspected {
            Some(current) if current >= at => false,
            _ => {
                self.last_inspected = Some(at);
                true
            }
        }
    }

    pub fn apply(&mut self, update: PlantUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(form_type) = update.form_type {
            self.form_type = form_type;
        }
    }
}

/// Keep the later `last_inspected` of the stored copy of each plant.
///
/// `last_inspected` only ever moves forward, so a register written from an
/// older snapshot must not roll back an inspection recorded since.
pub fn carry_forward_inspections(incoming: &mut [Plant], stored: &[Plant]) {
    for plant in incoming {
        if let Some(at) = stored
            .iter()
            .find(|s| s.id == plant.id)
            .and_then(|s| s.last_inspected)
        {
            plant.record_inspection(at);
        }
    }
}

/// Allocate the next `PREFIX-NNN` id: one past the highest numeric suffix in
/// use, so ids of deleted records are never handed out again while a higher
/// id survives.
pub fn next_sequential_id<'a>(prefix: &str, existing: impl IntoIterator<Item = &'a str>) -> String {
    let head = format!("{}-", prefix);
    let max = existing
        .into_iter()
        .filter_map(|id| id.strip_prefix(&head))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{:03}", head, max + 1)
}
