//! SiteRecords port
//!
//! Per-site operational state that is not part of the equipment register.

use super::repository::{Edit, RepoResult};
use crate::domain::entities::{Defect, Notification, SyncQueue};

pub trait SiteRecords: Send + Sync {
    fn list_defects(&self) -> RepoResult<Vec<Defect>>;
    fn save_defects(&self, defects: &[Defect]) -> RepoResult<()>;
    fn modify_defects(&self, edit: Edit<'_, Vec<Defect>>) -> RepoResult<bool>;

    /// Notification feed, newest first
    fn list_notifications(&self) -> RepoResult<Vec<Notification>>;
    fn save_notifications(&self, feed: &[Notification]) -> RepoResult<()>;
    fn modify_notifications(&self, edit: Edit<'_, Vec<Notification>>) -> RepoResult<bool>;

    fn load_sync_queue(&self) -> RepoResult<SyncQueue>;
    fn save_sync_queue(&self, queue: &SyncQueue) -> RepoResult<()>;
    fn modify_sync_queue(&self, edit: Edit<'_, SyncQueue>) -> RepoResult<bool>;
}
