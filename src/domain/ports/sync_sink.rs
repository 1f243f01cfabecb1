//! SyncSink port
//!
//! The remote store queued submissions are delivered to.

use crate::domain::entities::PendingSync;
use crate::domain::value_objects::SiteId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyncError {
    #[error("remote store unavailable: {message}")]
    Unavailable { message: String },

    #[error("remote store rejected {id}: {message}")]
    Rejected { id: String, message: String },
}

pub trait SyncSink: Send + Sync {
    fn push(&self, site: &SiteId, item: &PendingSync) -> Result<(), SyncError>;
}
