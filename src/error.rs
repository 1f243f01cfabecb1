//! Error types for plantsafe
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::policies::PinError;
use crate::domain::ports::{RepositoryError, SyncError};
use crate::domain::value_objects::{FormId, Page, Role, SiteId};

/// Result type alias for plantsafe operations
pub type PlantsafeResult<T> = Result<T, PlantsafeError>;

/// Main error type for plantsafe operations
#[derive(Error, Debug)]
pub enum PlantsafeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("{0}")]
    Pin(#[from] PinError),

    #[error("plant not found: {id}")]
    PlantNotFound { id: String },

    #[error("no GA1 record for plant {plant_id}")]
    StaticRecordNotFound { plant_id: String },

    #[error("lifting item not found: {id}")]
    LiftingItemNotFound { id: String },

    #[error("defect not found: {id}")]
    DefectNotFound { id: String },

    /// The form is not part of the plant's checklist set
    #[error("form {form_id} does not apply to plant {plant_id}")]
    FormNotApplicable { form_id: FormId, plant_id: String },

    #[error("incorrect PIN for {role}")]
    IncorrectPin { role: Role },

    #[error("not signed in\n  → Run: plantsafe login")]
    NotSignedIn,

    #[error("{role} may not open {page}")]
    PermissionDenied { role: Role, page: Page },

    #[error("site '{site}' is not set up\n  → Run: plantsafe init --site {site}")]
    NotProvisioned { site: SiteId },

    #[error("site '{site}' already exists")]
    SiteExists { site: SiteId },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
