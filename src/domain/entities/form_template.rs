//! Checklist templates
//!
//! Read-only reference data. The compliance engine never looks inside a
//! template; it only needs the form ids.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::FormId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormTemplate {
    pub id: FormId,
    pub name: String,
    pub description: String,
    pub sections: Vec<FormSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSection {
    pub title: String,
    pub items: Vec<String>,
}

impl FormTemplate {
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}
