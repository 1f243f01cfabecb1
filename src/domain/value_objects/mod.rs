//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts. String codes from
//! the paper forms (colours, form ids, roles) are closed enums here so an
//! invalid value cannot be stored.

mod colour_code;
mod form_id;
mod lifting_status;
mod role;
mod severity;
mod site_id;

pub use colour_code::{ColourCode, UnknownColourCode};
pub use form_id::{FormId, FormType, UnknownFormId};
pub use lifting_status::{LiftingStatus, UnknownLiftingStatus};
pub use role::{Page, Role, UnknownRole};
pub use severity::Severity;
pub use site_id::{InvalidSiteId, SiteId};
