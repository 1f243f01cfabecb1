//! Quarterly colour-code rule for lifting gear

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::domain::entities::LiftingItem;
use crate::domain::value_objects::ColourCode;

/// The tag colour mandated for a quarter, with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuarterColour {
    pub colour: ColourCode,
    pub label: &'static str,
}

impl QuarterColour {
    pub fn of(colour: ColourCode) -> Self {
        Self {
            colour,
            label: colour.quarter_label(),
        }
    }
}

/// Colour that active lifting gear must carry on `date`
pub fn current_quarter_colour(date: DateTime<Utc>) -> QuarterColour {
    QuarterColour::of(ColourCode::for_month0(date.month0()))
}

/// Active items whose tag does not match `current`.
///
/// Retired and out-of-service gear is never reported.
pub fn colour_mismatches<'a>(
    items: &'a [LiftingItem],
    current: ColourCode,
) -> impl Iterator<Item = &'a LiftingItem> {
    items
        .iter()
        .filter(move |item| item.status.is_active() && item.colour_code != current)
}
