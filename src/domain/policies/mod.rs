//! Domain Policies
//!
//! Access rules: which role may open which page, and how PINs are checked.

pub mod access_policy;
pub mod pin_policy;

pub use access_policy::{can, can_manage_pins, pages_for};
pub use pin_policy::{hash_pin, validate_pin, PinError, PinTable, MIN_PIN_LENGTH};
