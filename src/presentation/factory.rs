//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::{
    AuthUseCase, ComplianceUseCase, DefectUseCase, EquipmentUseCase, NotificationUseCase,
    SubmissionUseCase, SyncUseCase,
};
use crate::config::Config;
use crate::domain::ports::{Clock, SiteStore};
use crate::domain::value_objects::SiteId;
use crate::infrastructure::{FixedClock, JsonSiteStore, OutboxSyncSink, SystemClock};

/// One site's store, clock and configuration
pub struct AppContext {
    config: Config,
    store: Arc<dyn SiteStore>,
    clock: Arc<dyn Clock>,
}

impl AppContext {
    /// Wire the JSON store under the configured data directory
    pub fn from_config(config: Config) -> Self {
        let store = Arc::new(JsonSiteStore::new(config.data_dir(), config.site.id.clone()));
        Self::with_store(config, store)
    }

    /// `PLANTSAFE_NOW` freezes the clock; otherwise the wall clock is used
    pub fn with_store(config: Config, store: Arc<dyn SiteStore>) -> Self {
        let clock: Arc<dyn Clock> = match config.fixed_now {
            Some(now) => Arc::new(FixedClock(now)),
            None => Arc::new(SystemClock),
        };
        Self {
            config,
            store,
            clock,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &dyn SiteStore {
        self.store.as_ref()
    }

    pub fn site(&self) -> &SiteId {
        self.store.site()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn equipment(&self) -> EquipmentUseCase {
        EquipmentUseCase::new(self.store.clone())
    }

    pub fn submissions(&self) -> SubmissionUseCase {
        SubmissionUseCase::new(self.store.clone())
    }

    pub fn compliance(&self) -> ComplianceUseCase {
        ComplianceUseCase::new(self.store.clone(), self.config.rules())
    }

    pub fn defects(&self) -> DefectUseCase {
        DefectUseCase::new(self.store.clone())
    }

    pub fn notifications(&self) -> NotificationUseCase {
        NotificationUseCase::new(self.store.clone())
    }

    pub fn auth(&self) -> AuthUseCase {
        AuthUseCase::new(self.store.clone())
    }

    pub fn sync(&self) -> SyncUseCase {
        let sink = Arc::new(OutboxSyncSink::new(self.config.outbox_dir()));
        SyncUseCase::new(self.store.clone(), sink).with_max_attempts(self.config.sync.max_attempts)
    }
}
