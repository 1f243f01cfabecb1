//! Domain Services
//!
//! Pure business logic over domain entities. Nothing here reads the clock or
//! touches storage; the current instant is always passed in.

pub mod colour_rule;
pub mod compliance;
pub mod date_math;

pub use colour_rule::{colour_mismatches, current_quarter_colour, QuarterColour};
pub use compliance::{ComplianceEngine, ComplianceRules, ComplianceSnapshot, DueStatus, WEEKLY_FORM};
pub use date_math::{days_between, days_until, parse_instant, same_calendar_day, within_window};
