//! In-memory site store, for tests and embedding

use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{
    carry_forward_inspections, Defect, FormTemplate, LiftingItem, Notification, Plant, Session,
    Site, StaticSafetyRecord, Submission, SyncQueue,
};
use crate::domain::policies::PinTable;
use crate::domain::ports::{
    Edit, EquipmentRegistry, ReferenceData, RepoResult, RepositoryError, SiteRecords, SiteStore,
    SubmissionLog,
};
use crate::domain::value_objects::SiteId;

#[derive(Debug, Default)]
struct State {
    plants: Vec<Plant>,
    static_records: Vec<StaticSafetyRecord>,
    lifting_items: Vec<LiftingItem>,
    submissions: Vec<Submission>,
    defects: Vec<Defect>,
    notifications: Vec<Notification>,
    sync_queue: SyncQueue,
    form_templates: Vec<FormTemplate>,
    sites: Vec<Site>,
    pins: Option<PinTable>,
    session: Option<Session>,
}

#[derive(Debug, Default)]
pub struct InMemorySiteStore {
    site: SiteId,
    state: Mutex<State>,
}

impl InMemorySiteStore {
    pub fn new(site: SiteId) -> Self {
        Self {
            site,
            state: Mutex::default(),
        }
    }

    fn state(&self) -> RepoResult<MutexGuard<'_, State>> {
        self.state.lock().map_err(|e| RepositoryError::AccessError {
            message: e.to_string(),
        })
    }
}

impl EquipmentRegistry for InMemorySiteStore {
    fn list_plants(&self) -> RepoResult<Vec<Plant>> {
        Ok(self.state()?.plants.clone())
    }

    fn save_plants(&self, plants: &[Plant]) -> RepoResult<()> {
        let mut state = self.state()?;
        let mut plants = plants.to_vec();
        carry_forward_inspections(&mut plants, &state.plants);
        state.plants = plants;
        Ok(())
    }

    fn modify_plants(&self, edit: Edit<'_, Vec<Plant>>) -> RepoResult<bool> {
        Ok(edit(&mut self.state()?.plants))
    }

    fn list_static_records(&self) -> RepoResult<Vec<StaticSafetyRecord>> {
        Ok(self.state()?.static_records.clone())
    }

    fn save_static_records(&self, records: &[StaticSafetyRecord]) -> RepoResult<()> {
        self.state()?.static_records = records.to_vec();
        Ok(())
    }

    fn modify_static_records(&self, edit: Edit<'_, Vec<StaticSafetyRecord>>) -> RepoResult<bool> {
        Ok(edit(&mut self.state()?.static_records))
    }

    fn list_lifting_items(&self) -> RepoResult<Vec<LiftingItem>> {
        Ok(self.state()?.lifting_items.clone())
    }

    fn save_lifting_items(&self, items: &[LiftingItem]) -> RepoResult<()> {
        self.state()?.lifting_items = items.to_vec();
        Ok(())
    }

    fn modify_lifting_items(&self, edit: Edit<'_, Vec<LiftingItem>>) -> RepoResult<bool> {
        Ok(edit(&mut self.state()?.lifting_items))
    }
}

impl SubmissionLog for InMemorySiteStore {
    fn list_submissions(&self) -> RepoResult<Vec<Submission>> {
        Ok(self.state()?.submissions.clone())
    }

    fn append_submission(&self, submission: Submission) -> RepoResult<()> {
        self.state()?.submissions.insert(0, submission);
        Ok(())
    }
}

impl SiteRecords for InMemorySiteStore {
    fn list_defects(&self) -> RepoResult<Vec<Defect>> {
        Ok(self.state()?.defects.clone())
    }

    fn save_defects(&self, defects: &[Defect]) -> RepoResult<()> {
        self.state()?.defects = defects.to_vec();
        Ok(())
    }

    fn modify_defects(&self, edit: Edit<'_, Vec<Defect>>) -> RepoResult<bool> {
        Ok(edit(&mut self.state()?.defects))
    }

    fn list_notifications(&self) -> RepoResult<Vec<Notification>> {
        Ok(self.state()?.notifications.clone())
    }

    fn save_notifications(&self, feed: &[Notification]) -> RepoResult<()> {
        self.state()?.notifications = feed.to_vec();
        Ok(())
    }

    fn modify_notifications(&self, edit: Edit<'_, Vec<Notification>>) -> RepoResult<bool> {
        Ok(edit(&mut self.state()?.notifications))
    }

    fn load_sync_queue(&self) -> RepoResult<SyncQueue> {
        Ok(self.state()?.sync_queue.clone())
    }

    fn save_sync_queue(&self, queue: &SyncQueue) -> RepoResult<()> {
        self.state()?.sync_queue = queue.clone();
        Ok(())
    }

    fn modify_sync_queue(&self, edit: Edit<'_, SyncQueue>) -> RepoResult<bool> {
        Ok(edit(&mut self.state()?.sync_queue))
    }
}

impl ReferenceData for InMemorySiteStore {
    fn list_form_templates(&self) -> RepoResult<Vec<FormTemplate>> {
        Ok(self.state()?.form_templates.clone())
    }

    fn save_form_templates(&self, templates: &[FormTemplate]) -> RepoResult<()> {
        self.state()?.form_templates = templates.to_vec();
        Ok(())
    }

    fn list_sites(&self) -> RepoResult<Vec<Site>> {
        Ok(self.state()?.sites.clone())
    }

    fn save_sites(&self, sites: &[Site]) -> RepoResult<()> {
        self.state()?.sites = sites.to_vec();
        Ok(())
    }

    fn load_pins(&self) -> RepoResult<Option<PinTable>> {
        Ok(self.state()?.pins.clone())
    }

    fn save_pins(&self, pins: &PinTable) -> RepoResult<()> {
        self.state()?.pins = Some(pins.clone());
        Ok(())
    }

    fn load_session(&self) -> RepoResult<Option<Session>> {
        Ok(self.state()?.session.clone())
    }

    fn save_session(&self, session: Option<&Session>) -> RepoResult<()> {
        self.state()?.session = session.cloned();
        Ok(())
    }
}

impl SiteStore for InMemorySiteStore {
    fn site(&self) -> &SiteId {
        &self.site
    }

    fn clear_site(&self) -> RepoResult<()> {
        let mut state = self.state()?;
        state.plants.clear();
        state.static_records.clear();
        state.lifting_items.clear();
        state.submissions.clear();
        state.defects.clear();
        state.notifications.clear();
        state.sync_queue = SyncQueue::new();
        Ok(())
    }
}
