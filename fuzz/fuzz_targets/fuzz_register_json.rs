#![no_main]

use chrono::{TimeZone, Utc};
use libfuzzer_sys::fuzz_target;

use plantsafe::{
    ComplianceEngine, ComplianceSnapshot, LiftingItem, Plant, StaticSafetyRecord, Submission,
};

// Whatever a register file decodes to, evaluating it must not panic
fuzz_target!(|data: &[u8]| {
    let plants: Vec<Plant> = serde_json::from_slice(data).unwrap_or_default();
    let static_records: Vec<StaticSafetyRecord> = serde_json::from_slice(data).unwrap_or_default();
    let lifting_items: Vec<LiftingItem> = serde_json::from_slice(data).unwrap_or_default();
    let submissions: Vec<Submission> = serde_json::from_slice(data).unwrap_or_default();

    if let Some(now) = Utc.with_ymd_and_hms(2026, 5, 6, 9, 0, 0).single() {
        let _ = ComplianceEngine::default().evaluate(
            ComplianceSnapshot {
                plants: &plants,
                static_records: &static_records,
                lifting_items: &lifting_items,
                submissions: &submissions,
            },
            now,
        );
    }
});
