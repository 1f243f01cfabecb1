//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `EquipmentUseCase` - Plant, GA1 and lifting gear registers
//! - `SubmissionUseCase` - Checklist submission with defects and sync queueing
//! - `ComplianceUseCase` - Loads a snapshot and runs the compliance engine
//! - `DefectUseCase` - Defect reporting and resolution
//! - `NotificationUseCase` - The site notification feed
//! - `AuthUseCase` - PIN sign-in and page permissions
//! - `SyncUseCase` - Drains the offline queue
//!
//! ## Services
//!
//! - `provisioning` - First-run seeding and the site directory

pub mod auth;
pub mod compliance;
pub mod defects;
pub mod equipment;
pub mod notifications;
pub mod provisioning;
pub mod submission;
pub mod sync;

pub use auth::AuthUseCase;
pub use compliance::{ComplianceReport, ComplianceUseCase};
pub use defects::DefectUseCase;
pub use equipment::EquipmentUseCase;
pub use notifications::NotificationUseCase;
pub use provisioning::{DemoFixture, ProvisionReport};
pub use submission::{SubmissionUseCase, SubmitOutcome, SubmitRequest};
pub use sync::SyncUseCase;
