//! plantsafe - site plant inspection register and compliance checker
//!
//! plantsafe keeps the plant, GA1 and lifting gear registers of a
//! construction site, records completed checklists, and works out which
//! inspections are missing, overdue or carrying the wrong colour tag.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{Issue, IssueKind, LiftingItem, Plant, StaticSafetyRecord, Submission};
pub use domain::services::{ComplianceEngine, ComplianceRules, ComplianceSnapshot};
pub use domain::value_objects::{ColourCode, FormId, Severity, SiteId};
pub use error::{PlantsafeError, PlantsafeResult};
