#![no_main]

use chrono::{TimeZone, Utc};
use libfuzzer_sys::fuzz_target;

use plantsafe::domain::services::{days_until, parse_instant};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_instant(text);
        if let Some(now) = Utc.with_ymd_and_hms(2026, 5, 6, 9, 0, 0).single() {
            let _ = days_until(Some(text), now);
        }
    }
});
