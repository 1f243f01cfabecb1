//! Outbox Sync Sink
//!
//! Mirrors queued submissions into a local directory, one JSON document per
//! item at `<outbox>/<site>/<id>.json`. Whatever collects the outbox owns
//! delivery from there.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::PendingSync;
use crate::domain::ports::{SyncError, SyncSink};
use crate::domain::value_objects::SiteId;

pub struct OutboxSyncSink {
    dir: PathBuf,
}

impl OutboxSyncSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn unavailable(e: impl std::fmt::Display) -> SyncError {
    SyncError::Unavailable {
        message: e.to_string(),
    }
}

impl SyncSink for OutboxSyncSink {
    fn push(&self, site: &SiteId, item: &PendingSync) -> Result<(), SyncError> {
        let site_dir = self.dir.join(site.as_str());
        fs::create_dir_all(&site_dir).map_err(unavailable)?;

        let body = serde_json::to_string_pretty(item).map_err(|e| SyncError::Rejected {
            id: item.id.clone(),
            message: e.to_string(),
        })?;

        let path = site_dir.join(format!("{}.json", item.id));
        fs::write(&path, body).map_err(unavailable)?;
        tracing::debug!(path = %path.display(), "pushed to outbox");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Submission, SyncQueue};
    use crate::domain::value_objects::FormId;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    #[test]
    fn writes_one_file_per_item() {
        let dir = tempdir().unwrap();
        let sink = OutboxSyncSink::new(dir.path());
        let at = Utc.with_ymd_and_hms(2026, 3, 9, 7, 30, 0).unwrap();

        let mut queue = SyncQueue::new();
        queue.enqueue(
            Submission {
                id: "SUB-1773041400000".to_string(),
                plant_id: "PLT-002".to_string(),
                form_id: FormId::HazardAssessment,
                submitted_at: at,
                submitted_by: Some("Operator".to_string()),
                answers: Vec::new(),
                notes: None,
            },
            Vec::new(),
            None,
            at,
        );

        let site = SiteId::default();
        let report = queue.drain(10, |item| sink.push(&site, item));
        assert_eq!(report.synced, 1);

        let written = dir.path().join("default/SUB-1773041400000.json");
        let body = std::fs::read_to_string(written).unwrap();
        assert!(body.contains("\"plantId\": \"PLT-002\""));
    }
}
