//! Property tests for day counting.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use plantsafe::domain::services::{days_between, parse_instant, DueStatus};

fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    // 2000-01-01 .. 2100-01-01
    (946_684_800_000i64..4_102_444_800_000i64)
        .prop_map(|ms| Utc.timestamp_millis_opt(ms).single().unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Whole-day offsets count exactly; any extra millisecond rounds up.
    #[test]
    fn property_days_between_rounds_up(
        now in instant(),
        days in -400i64..400,
        extra_ms in 1i64..86_400_000,
    ) {
        let exact = now + Duration::days(days);
        prop_assert_eq!(days_between(now, exact), days);
        prop_assert_eq!(days_between(now, exact + Duration::milliseconds(extra_ms)), days + 1);
    }

    /// PROPERTY: A date never counts as due later than a later date.
    #[test]
    fn property_days_between_is_monotonic(now in instant(), a in instant(), b in instant()) {
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(days_between(now, early) <= days_between(now, late));
    }

    /// PROPERTY: Stored dates round-trip through the parser at UTC midnight.
    #[test]
    fn property_plain_dates_parse_to_midnight(at in instant()) {
        let text = at.format("%Y-%m-%d").to_string();
        let parsed = parse_instant(&text).unwrap();
        prop_assert_eq!(parsed.date_naive(), at.date_naive());
        prop_assert_eq!(parsed.timestamp() % 86_400, 0);
    }

    /// PROPERTY: Classification is overdue below zero, due soon up to the window, silent after.
    #[test]
    fn property_classify_partitions_days(days in -1000i64..1000, window in 0i64..120) {
        match DueStatus::classify(days, window) {
            Some(DueStatus::Overdue(n)) => {
                prop_assert!(days < 0);
                prop_assert_eq!(n, -days);
            }
            Some(DueStatus::DueSoon(n)) => {
                prop_assert!((0..=window).contains(&days));
                prop_assert_eq!(n, days);
            }
            None => prop_assert!(days > window),
        }
    }

    /// PROPERTY: Arbitrary text never panics the parser.
    #[test]
    fn property_parse_instant_never_panics(text in "\\PC{0,40}") {
        let _ = parse_instant(&text);
    }
}
