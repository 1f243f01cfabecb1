//! GA1 static safety record
//!
//! The registration file kept for each plant: certification, insurance and
//! statutory inspection dates plus free-text references. There is at most one
//! record per plant, keyed by `plant_id`.
//!
//! Date fields are kept as the strings operators entered. They are parsed only
//! when due dates are evaluated, so one badly typed date cannot make the
//! whole register unreadable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticSafetyRecord {
    pub plant_id: String,
    pub plant_name: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub serial_no: Option<String>,
    pub year_of_manufacture: Option<String>,
    pub last_inspection_date: Option<String>,
    pub next_inspection_due: Option<String>,
    pub inspector_name: Option<String>,
    pub insurance_expiry: Option<String>,
    pub cert_expiry: Option<String>,
    pub cert_ref: Option<String>,
    pub risk_assessment_ref: Option<String>,
    pub licence_required: Option<String>,
    pub notes: Option<String>,
    pub saved_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

macro_rules! merge_fields {
    ($target:expr, $source:expr, $($field:ident),+ $(,)?) => {
        $(
            if $source.$field.is_some() {
                $target.$field = $source.$field;
            }
        )+
    };
}

impl StaticSafetyRecord {
    pub fn new(plant_id: impl Into<String>, plant_name: impl Into<String>) -> Self {
        Self {
            plant_id: plant_id.into(),
            plant_name: plant_name.into(),
            ..Self::default()
        }
    }

    /// Overlay every populated field of `incoming` onto this record.
    ///
    /// `plant_id` and `created_at` are never replaced.
    pub fn merge_from(&mut self, incoming: StaticSafetyRecord) {
        if !incoming.plant_name.is_empty() {
            self.plant_name = incoming.plant_name;
        }
        merge_fields!(
            self,
            incoming,
            make,
            model,
            serial_no,
            year_of_manufacture,
            last_inspection_date,
            next_inspection_due,
            inspector_name,
            insurance_expiry,
            cert_expiry,
            cert_ref,
            risk_assessment_ref,
            licence_required,
            notes,
            saved_by,
        );
    }
}

/// Insert or merge `record` into `records` by plant id.
///
/// Returns the stored record after the upsert.
pub fn upsert_static_record(
    records: &mut Vec<StaticSafetyRecord>,
    mut record: StaticSafetyRecord,
    now: DateTime<Utc>,
) -> StaticSafetyRecord {
    if let Some(existing) = records.iter_mut().find(|r| r.plant_id == record.plant_id) {
        existing.merge_from(record);
        existing.updated_at = Some(now);
        return existing.clone();
    }

    record.created_at = Some(now);
    record.updated_at = Some(now);
    records.push(record.clone());
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap()
    }

    #[test]
    fn upsert_inserts_when_absent() {
        let mut records = Vec::new();
        let mut record = StaticSafetyRecord::new("PLT-001", "Diesel Generator A");
        record.next_inspection_due = Some("2026-03-16".to_string());

        let stored = upsert_static_record(&mut records, record, now());
        assert_eq!(records.len(), 1);
        assert_eq!(stored.created_at, Some(now()));
        assert_eq!(stored.updated_at, Some(now()));
    }

    #[test]
    fn upsert_merges_when_present() {
        let mut records = Vec::new();
        let mut first = StaticSafetyRecord::new("PLT-001", "Diesel Generator A");
        first.cert_ref = Some("CERT-PLT001-2025".to_string());
        first.next_inspection_due = Some("2026-03-16".to_string());
        upsert_static_record(&mut records, first, now());

        let later = now() + chrono::Duration::days(1);
        let mut second = StaticSafetyRecord::new("PLT-001", "");
        second.next_inspection_due = Some("2026-09-16".to_string());
        let stored = upsert_static_record(&mut records, second, later);

        assert_eq!(records.len(), 1);
        assert_eq!(stored.plant_name, "Diesel Generator A");
        assert_eq!(stored.cert_ref.as_deref(), Some("CERT-PLT001-2025"));
        assert_eq!(stored.next_inspection_due.as_deref(), Some("2026-09-16"));
        assert_eq!(stored.created_at, Some(now()));
        assert_eq!(stored.updated_at, Some(later));
    }

    #[test]
    fn json_roundtrip_preserves_nulls() {
        let record = StaticSafetyRecord::new("PLT-002", "Air Compressor Unit");
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["nextInspectionDue"].is_null());
        assert!(json["insuranceExpiry"].is_null());
        assert_eq!(json["plantId"], "PLT-002");

        let back: StaticSafetyRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
