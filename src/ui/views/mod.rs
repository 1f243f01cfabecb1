pub mod activity;
pub mod compliance;
pub mod dashboard;
pub mod plants;
pub mod registers;

use chrono::{DateTime, Utc};

use plantsafe::domain::services::{days_until, DueStatus};

use crate::ui::primitives::text::ColoredText;

fn stamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or("-")
}

/// A stored due date with its status: "2026-05-20 (in 8d)", "2026-05-01 (5d overdue)"
fn due_cell(value: Option<&str>, now: DateTime<Utc>, due_soon_days: i64, supports_color: bool) -> String {
    let Some(raw) = value.filter(|v| !v.trim().is_empty()) else {
        return "-".to_string();
    };
    let Some(days) = days_until(Some(raw), now) else {
        return ColoredText::dim(format!("{} (unreadable)", raw)).render(supports_color);
    };

    match DueStatus::classify(days, due_soon_days) {
        Some(DueStatus::Overdue(d)) => {
            ColoredText::error(format!("{} ({}d overdue)", raw, d)).render(supports_color)
        }
        Some(DueStatus::DueSoon(d)) => {
            ColoredText::warning(format!("{} (in {}d)", raw, d)).render(supports_color)
        }
        None => raw.to_string(),
    }
}
