//! SiteStore port
//!
//! Everything a use case may need, scoped to one site.

use super::repository::RepoResult;
use super::{EquipmentRegistry, ReferenceData, SiteRecords, SubmissionLog};
use crate::domain::value_objects::SiteId;

pub trait SiteStore: EquipmentRegistry + SubmissionLog + SiteRecords + ReferenceData {
    fn site(&self) -> &SiteId;

    /// Delete every site-scoped collection. Reference data is kept.
    fn clear_site(&self) -> RepoResult<()>;
}
