//! Property tests for the quarterly tag colour.

use chrono::{Datelike, TimeZone, Utc};
use proptest::prelude::*;

use plantsafe::domain::services::current_quarter_colour;
use plantsafe::ColourCode;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every month in a quarter maps to the same colour.
    #[test]
    fn property_quarter_months_share_colour(year in 2000i32..2100, month in 1u32..=12, day in 1u32..=28) {
        let date = Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap();
        let first_of_quarter = Utc
            .with_ymd_and_hms(year, (date.month0() / 3) * 3 + 1, 1, 0, 0, 0)
            .unwrap();
        prop_assert_eq!(
            current_quarter_colour(date).colour,
            current_quarter_colour(first_of_quarter).colour
        );
    }

    /// PROPERTY: Stepping back a quarter gives the previous colour.
    #[test]
    fn property_previous_follows_calendar(year in 2001i32..2100, quarter in 0u32..4) {
        let date = Utc.with_ymd_and_hms(year, quarter * 3 + 1, 15, 0, 0, 0).unwrap();
        let before = if quarter == 0 {
            Utc.with_ymd_and_hms(year - 1, 11, 15, 0, 0, 0).unwrap()
        } else {
            Utc.with_ymd_and_hms(year, quarter * 3 - 1, 15, 0, 0, 0).unwrap()
        };
        let colour: ColourCode = current_quarter_colour(date).colour;
        prop_assert_eq!(colour.previous(), current_quarter_colour(before).colour);
    }
}
