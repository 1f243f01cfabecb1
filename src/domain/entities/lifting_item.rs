//! Lifting equipment register entry
//!
//! Slings, shackles, hooks, chain blocks and cranes tracked separately from
//! plant. Each carries a quarterly colour tag from its last thorough exam.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ColourCode, LiftingStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftingItem {
    pub id: String,
    pub category: String,
    pub description: String,
    pub swl: Option<f64>,
    pub swl_unit: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub serial_no: Option<String>,
    pub year_of_manufacture: Option<String>,
    pub last_thorough_exam: Option<String>,
    pub next_thorough_exam: Option<String>,
    pub colour_code: ColourCode,
    #[serde(default)]
    pub status: LiftingStatus,
    pub location: Option<String>,
    pub cert_ref: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLiftingItem {
    pub category: String,
    pub description: String,
    pub swl: Option<f64>,
    pub swl_unit: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub serial_no: Option<String>,
    pub year_of_manufacture: Option<String>,
    pub last_thorough_exam: Option<String>,
    pub next_thorough_exam: Option<String>,
    pub colour_code: ColourCode,
    pub location: Option<String>,
    pub cert_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LiftingItemUpdate {
    pub description: Option<String>,
    pub location: Option<String>,
    pub last_thorough_exam: Option<String>,
    pub next_thorough_exam: Option<String>,
    pub colour_code: Option<ColourCode>,
    pub status: Option<LiftingStatus>,
    pub cert_ref: Option<String>,
    pub notes: Option<String>,
}

impl LiftingItem {
    pub fn register(id: String, new: NewLiftingItem, now: DateTime<Utc>) -> Self {
        Self {
            id,
            category: new.category,
            description: new.description,
            swl: new.swl,
            swl_unit: new.swl_unit,
            make: new.make,
            model: new.model,
            serial_no: new.serial_no,
            year_of_manufacture: new.year_of_manufacture,
            last_thorough_exam: new.last_thorough_exam,
            next_thorough_exam: new.next_thorough_exam,
            colour_code: new.colour_code,
            status: LiftingStatus::Active,
            location: new.location,
            cert_ref: new.cert_ref,
            notes: None,
            created_at: Some(now),
            updated_at: None,
        }
    }

    pub fn apply(&mut self, update: LiftingItemUpdate, now: DateTime<Utc>) {
        if let Some(v) = update.description {
            self.description = v;
        }
        if let Some(v) = update.location {
            self.location = Some(v);
        }
        if let Some(v) = update.last_thorough_exam {
            self.last_thorough_exam = Some(v);
        }
        if let Some(v) = update.next_thorough_exam {
            self.next_thorough_exam = Some(v);
        }
        if let Some(v) = update.colour_code {
            self.colour_code = v;
        }
        if let Some(v) = update.status {
            self.status = v;
        }
        if let Some(v) = update.cert_ref {
            self.cert_ref = Some(v);
        }
        if let Some(v) = update.notes {
            self.notes = Some(v);
        }
        self.updated_at = Some(now);
    }

    /// "2000 kg" style safe working load, when known
    pub fn swl_display(&self) -> Option<String> {
        self.swl.map(|swl| match &self.swl_unit {
            Some(unit) => format!("{} {}", swl, unit),
            None => swl.to_string(),
        })
    }
}
