//! ReferenceData port
//!
//! Data shared by every site: checklist templates, the site directory, the
//! PIN table and the signed-in session.

use super::repository::RepoResult;
use crate::domain::entities::{FormTemplate, Session, Site};
use crate::domain::policies::PinTable;

pub trait ReferenceData: Send + Sync {
    fn list_form_templates(&self) -> RepoResult<Vec<FormTemplate>>;
    fn save_form_templates(&self, templates: &[FormTemplate]) -> RepoResult<()>;

    fn list_sites(&self) -> RepoResult<Vec<Site>>;
    fn save_sites(&self, sites: &[Site]) -> RepoResult<()>;

    /// `None` until provisioning has written a table
    fn load_pins(&self) -> RepoResult<Option<PinTable>>;
    fn save_pins(&self, pins: &PinTable) -> RepoResult<()>;

    fn load_session(&self) -> RepoResult<Option<Session>>;
    /// `None` signs out
    fn save_session(&self, session: Option<&Session>) -> RepoResult<()>;
}
