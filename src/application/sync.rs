//! Sync Use Case
//!
//! Drains the offline queue into a [`SyncSink`]. Nothing here blocks
//! compliance evaluation; a failed drain only leaves items queued.
//!
//! The queue stays locked while it drains, so a submission recorded
//! meanwhile waits and is queued after it rather than overwritten.

use std::sync::Arc;

use crate::domain::entities::{SyncReport, DEFAULT_MAX_SYNC_ATTEMPTS};
use crate::domain::ports::{SiteStore, SyncSink};
use crate::error::PlantsafeResult;

pub struct SyncUseCase {
    store: Arc<dyn SiteStore>,
    sink: Arc<dyn SyncSink>,
    max_attempts: u32,
}

impl SyncUseCase {
    pub fn new(store: Arc<dyn SiteStore>, sink: Arc<dyn SyncSink>) -> Self {
        Self {
            store,
            sink,
            max_attempts: DEFAULT_MAX_SYNC_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn pending(&self) -> PlantsafeResult<usize> {
        Ok(self.store.load_sync_queue()?.len())
    }

    pub fn drain(&self) -> PlantsafeResult<SyncReport> {
        let site = self.store.site().clone();
        let mut report = SyncReport::default();
        self.store.modify_sync_queue(Box::new(|queue| {
            if queue.is_empty() {
                return false;
            }
            report = queue.drain(self.max_attempts, |item| {
                self.sink.push(&site, item).inspect_err(|e| {
                    tracing::warn!(id = %item.id, attempts = item.attempts + 1, error = %e, "sync failed");
                })
            });
            true
        }))?;
        if report == SyncReport::default() {
            return Ok(report);
        }

        tracing::info!(
            synced = report.synced,
            failed = report.failed,
            dropped = report.dropped,
            "sync queue drained"
        );
        Ok(report)
    }
}
