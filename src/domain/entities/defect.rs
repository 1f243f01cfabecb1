//! Defect tracker entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defect {
    pub id: String,
    pub plant_id: String,
    pub submission_id: Option<String>,
    pub description: String,
    pub reported_by: Option<String>,
    pub reported_at: DateTime<Utc>,
    pub status: DefectStatus,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolved_by: Option<String>,
    pub resolve_notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefectStatus {
    #[default]
    Open,
    Resolved,
}

impl Defect {
    pub fn is_open(&self) -> bool {
        self.status == DefectStatus::Open
    }

    pub fn resolve(&mut self, by: impl Into<String>, notes: Option<String>, at: DateTime<Utc>) {
        self.status = DefectStatus::Resolved;
        self.resolved_at = Some(at);
        self.resolved_by = Some(by.into());
        self.resolve_notes = Some(notes.unwrap_or_default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn resolve_closes_defect() {
        let at = Utc.with_ymd_and_hms(2026, 2, 3, 10, 0, 0).unwrap();
        let mut defect = Defect {
            id: "DEF-1".to_string(),
            plant_id: "PLT-004".to_string(),
            submission_id: None,
            description: "Cracked mirror".to_string(),
            reported_by: Some("Operator".to_string()),
            reported_at: at,
            status: DefectStatus::Open,
            resolved_at: None,
            resolved_by: None,
            resolve_notes: None,
        };
        assert!(defect.is_open());

        defect.resolve("Site Manager", None, at);
        assert!(!defect.is_open());
        assert_eq!(defect.resolved_by.as_deref(), Some("Site Manager"));
        assert_eq!(defect.resolve_notes.as_deref(), Some(""));
    }
}
