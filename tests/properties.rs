//! Property tests for the due-date and colour rules.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/date_math.rs"]
mod date_math;

#[path = "properties/colour_rule.rs"]
mod colour_rule;
