//! JSON Site Store
//!
//! Persists each collection as a pretty-printed JSON file:
//!
//! ```text
//! <root>/
//!   form_templates.json  sites.json  auth_pins.json  session.json
//!   sites/<site>/plants.json  ga1_records.json  lifting_items.json
//!               submissions.json  defects.json  notifications.json
//!               sync_queue.json
//! ```
//!
//! Writes take an exclusive `fs2` lock on `<root>/.lock` and replace the
//! target through a temporary file, so a reader never sees a half-written
//! collection. `modify_*` holds the lock across its read and write.
//!
//! The plant register and the submission log are decoded record by record.
//! A record that fails to decode is skipped with a warning and written back
//! untouched, after the readable ones, on the next save.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

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

const PLANTS: &str = "plants";
const GA1_RECORDS: &str = "ga1_records";
const LIFTING_ITEMS: &str = "lifting_items";
const SUBMISSIONS: &str = "submissions";
const DEFECTS: &str = "defects";
const NOTIFICATIONS: &str = "notifications";
const SYNC_QUEUE: &str = "sync_queue";

const FORM_TEMPLATES: &str = "form_templates";
const SITES: &str = "sites";
const AUTH_PINS: &str = "auth_pins";
const SESSION: &str = "session";

/// A collection decoded record by record
struct Records<T> {
    readable: Vec<T>,
    unreadable: Vec<Value>,
}

pub struct JsonSiteStore {
    root: PathBuf,
    site: SiteId,
}

impl JsonSiteStore {
    pub fn new(root: impl Into<PathBuf>, site: SiteId) -> Self {
        Self {
            root: root.into(),
            site,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn site_dir(&self) -> PathBuf {
        self.root.join("sites").join(self.site.as_str())
    }

    fn collection_path(&self, name: &str) -> PathBuf {
        self.site_dir().join(format!("{}.json", name))
    }

    fn global_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }

    fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }

    fn with_lock<R>(&self, f: impl FnOnce() -> RepoResult<R>) -> RepoResult<R> {
        fs::create_dir_all(&self.root).map_err(access_error)?;
        let lock_file = fs::File::create(self.lock_path()).map_err(access_error)?;
        lock_file.lock_exclusive().map_err(access_error)?;

        let result = f();

        let _ = lock_file.unlock();
        result
    }

    fn read_optional<T: DeserializeOwned>(&self, path: &Path) -> RepoResult<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(access_error)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let value = serde_json::from_str(&content).map_err(|e| RepositoryError::Corrupted {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded");
        Ok(Some(value))
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, path: &Path) -> RepoResult<T> {
        Ok(self.read_optional(path)?.unwrap_or_default())
    }

    fn write_unlocked<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> RepoResult<()> {
        let parent = path.parent().unwrap_or(self.root.as_path());
        fs::create_dir_all(parent).map_err(access_error)?;

        let mut content =
            serde_json::to_string_pretty(value).map_err(|e| RepositoryError::SerializationError {
                message: e.to_string(),
            })?;
        content.push('\n');

        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(access_error)?;
        tmp.write_all(content.as_bytes()).map_err(access_error)?;
        tmp.persist(path).map_err(|e| access_error(e.error))?;

        tracing::debug!(path = %path.display(), "saved");
        Ok(())
    }

    fn write<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> RepoResult<()> {
        self.with_lock(|| self.write_unlocked(path, value))
    }

    fn modify<T>(&self, path: &Path, edit: Edit<'_, T>) -> RepoResult<bool>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        self.with_lock(|| {
            let mut value: T = self.read_or_default(path)?;
            let changed = edit(&mut value);
            if changed {
                self.write_unlocked(path, &value)?;
            }
            Ok(changed)
        })
    }

    fn read_records<T: DeserializeOwned>(&self, path: &Path) -> RepoResult<Records<T>> {
        let raw: Vec<Value> = self.read_or_default(path)?;
        let mut records = Records {
            readable: Vec::with_capacity(raw.len()),
            unreadable: Vec::new(),
        };
        for (index, value) in raw.into_iter().enumerate() {
            match T::deserialize(&value) {
                Ok(record) => records.readable.push(record),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        index,
                        error = %e,
                        "skipping unreadable record"
                    );
                    records.unreadable.push(value);
                }
            }
        }
        Ok(records)
    }

    fn write_records_unlocked<T: Serialize>(
        &self,
        path: &Path,
        readable: &[T],
        unreadable: &[Value],
    ) -> RepoResult<()> {
        let mut values = readable
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<Value>, _>>()
            .map_err(|e| RepositoryError::SerializationError {
                message: e.to_string(),
            })?;
        values.extend_from_slice(unreadable);
        self.write_unlocked(path, &values)
    }

    fn modify_records<T>(&self, path: &Path, edit: Edit<'_, Vec<T>>) -> RepoResult<bool>
    where
        T: Serialize + DeserializeOwned,
    {
        self.with_lock(|| {
            let Records {
                mut readable,
                unreadable,
            } = self.read_records(path)?;
            let changed = edit(&mut readable);
            if changed {
                self.write_records_unlocked(path, &readable, &unreadable)?;
            }
            Ok(changed)
        })
    }
}

fn access_error(e: std::io::Error) -> RepositoryError {
    RepositoryError::AccessError {
        message: e.to_string(),
    }
}

impl EquipmentRegistry for JsonSiteStore {
    fn list_plants(&self) -> RepoResult<Vec<Plant>> {
        Ok(self.read_records(&self.collection_path(PLANTS))?.readable)
    }

    fn save_plants(&self, plants: &[Plant]) -> RepoResult<()> {
        let path = self.collection_path(PLANTS);
        self.with_lock(|| {
            let stored = self.read_records::<Plant>(&path)?;
            let mut plants = plants.to_vec();
            carry_forward_inspections(&mut plants, &stored.readable);
            self.write_records_unlocked(&path, &plants, &stored.unreadable)
        })
    }

    fn modify_plants(&self, edit: Edit<'_, Vec<Plant>>) -> RepoResult<bool> {
        self.modify_records(&self.collection_path(PLANTS), edit)
    }

    fn list_static_records(&self) -> RepoResult<Vec<StaticSafetyRecord>> {
        self.read_or_default(&self.collection_path(GA1_RECORDS))
    }

    fn save_static_records(&self, records: &[StaticSafetyRecord]) -> RepoResult<()> {
        self.write(&self.collection_path(GA1_RECORDS), records)
    }

    fn modify_static_records(&self, edit: Edit<'_, Vec<StaticSafetyRecord>>) -> RepoResult<bool> {
        self.modify(&self.collection_path(GA1_RECORDS), edit)
    }

    fn list_lifting_items(&self) -> RepoResult<Vec<LiftingItem>> {
        self.read_or_default(&self.collection_path(LIFTING_ITEMS))
    }

    fn save_lifting_items(&self, items: &[LiftingItem]) -> RepoResult<()> {
        self.write(&self.collection_path(LIFTING_ITEMS), items)
    }

    fn modify_lifting_items(&self, edit: Edit<'_, Vec<LiftingItem>>) -> RepoResult<bool> {
        self.modify(&self.collection_path(LIFTING_ITEMS), edit)
    }
}

impl SubmissionLog for JsonSiteStore {
    fn list_submissions(&self) -> RepoResult<Vec<Submission>> {
        Ok(self.read_records(&self.collection_path(SUBMISSIONS))?.readable)
    }

    fn append_submission(&self, submission: Submission) -> RepoResult<()> {
        self.modify_records(
            &self.collection_path(SUBMISSIONS),
            Box::new(move |log: &mut Vec<Submission>| {
                log.insert(0, submission);
                true
            }),
        )?;
        Ok(())
    }
}

impl SiteRecords for JsonSiteStore {
    fn list_defects(&self) -> RepoResult<Vec<Defect>> {
        self.read_or_default(&self.collection_path(DEFECTS))
    }

    fn save_defects(&self, defects: &[Defect]) -> RepoResult<()> {
        self.write(&self.collection_path(DEFECTS), defects)
    }

    fn modify_defects(&self, edit: Edit<'_, Vec<Defect>>) -> RepoResult<bool> {
        self.modify(&self.collection_path(DEFECTS), edit)
    }

    fn list_notifications(&self) -> RepoResult<Vec<Notification>> {
        self.read_or_default(&self.collection_path(NOTIFICATIONS))
    }

    fn save_notifications(&self, feed: &[Notification]) -> RepoResult<()> {
        self.write(&self.collection_path(NOTIFICATIONS), feed)
    }

    fn modify_notifications(&self, edit: Edit<'_, Vec<Notification>>) -> RepoResult<bool> {
        self.modify(&self.collection_path(NOTIFICATIONS), edit)
    }

    fn load_sync_queue(&self) -> RepoResult<SyncQueue> {
        self.read_or_default(&self.collection_path(SYNC_QUEUE))
    }

    fn save_sync_queue(&self, queue: &SyncQueue) -> RepoResult<()> {
        self.write(&self.collection_path(SYNC_QUEUE), queue)
    }

    fn modify_sync_queue(&self, edit: Edit<'_, SyncQueue>) -> RepoResult<bool> {
        self.modify(&self.collection_path(SYNC_QUEUE), edit)
    }
}

impl ReferenceData for JsonSiteStore {
    fn list_form_templates(&self) -> RepoResult<Vec<FormTemplate>> {
        self.read_or_default(&self.global_path(FORM_TEMPLATES))
    }

    fn save_form_templates(&self, templates: &[FormTemplate]) -> RepoResult<()> {
        self.write(&self.global_path(FORM_TEMPLATES), templates)
    }

    fn list_sites(&self) -> RepoResult<Vec<Site>> {
        self.read_or_default(&self.global_path(SITES))
    }

    fn save_sites(&self, sites: &[Site]) -> RepoResult<()> {
        self.write(&self.global_path(SITES), sites)
    }

    fn load_pins(&self) -> RepoResult<Option<PinTable>> {
        self.read_optional(&self.global_path(AUTH_PINS))
    }

    fn save_pins(&self, pins: &PinTable) -> RepoResult<()> {
        self.write(&self.global_path(AUTH_PINS), pins)
    }

    fn load_session(&self) -> RepoResult<Option<Session>> {
        self.read_optional(&self.global_path(SESSION))
    }

    fn save_session(&self, session: Option<&Session>) -> RepoResult<()> {
        let path = self.global_path(SESSION);
        match session {
            Some(session) => self.write(&path, session),
            None => self.with_lock(|| match fs::remove_file(&path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(access_error(e)),
            }),
        }
    }
}

impl SiteStore for JsonSiteStore {
    fn site(&self) -> &SiteId {
        &self.site
    }

    fn clear_site(&self) -> RepoResult<()> {
        let dir = self.site_dir();
        self.with_lock(|| {
            if dir.exists() {
                fs::remove_dir_all(&dir).map_err(access_error)?;
            }
            tracing::info!(site = %self.site, "site data cleared");
            Ok(())
        })
    }
}
