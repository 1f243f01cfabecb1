//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod equipment_registry;
pub mod reference_data;
pub mod repository;
pub mod site_records;
pub mod site_store;
pub mod submission_log;
pub mod sync_sink;

pub use clock::Clock;
pub use equipment_registry::EquipmentRegistry;
pub use reference_data::ReferenceData;
pub use repository::{Edit, RepoResult, RepositoryError};
pub use site_records::SiteRecords;
pub use site_store::SiteStore;
pub use submission_log::SubmissionLog;
pub use sync_sink::{SyncError, SyncSink};
