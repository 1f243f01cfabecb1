//! Auth Use Case
//!
//! PIN sign-in per role and page permission checks against the stored
//! session.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::Session;
use crate::domain::policies::{self, PinTable};
use crate::domain::ports::SiteStore;
use crate::domain::value_objects::{Page, Role};
use crate::error::{PlantsafeError, PlantsafeResult};

pub struct AuthUseCase {
    store: Arc<dyn SiteStore>,
}

impl AuthUseCase {
    pub fn new(store: Arc<dyn SiteStore>) -> Self {
        Self { store }
    }

    fn pins(&self) -> PlantsafeResult<PinTable> {
        Ok(self.store.load_pins()?.unwrap_or_default())
    }

    pub fn login(
        &self,
        role: Role,
        pin: &str,
        name: Option<String>,
        now: DateTime<Utc>,
    ) -> PlantsafeResult<Session> {
        if !self.pins()?.verify(role, pin) {
            tracing::warn!(%role, "sign-in refused");
            return Err(PlantsafeError::IncorrectPin { role });
        }

        let session = Session {
            role,
            name: name.unwrap_or_else(|| role.label().to_string()),
            login_at: now,
        };
        self.store.save_session(Some(&session))?;
        tracing::info!(%role, "signed in");
        Ok(session)
    }

    pub fn logout(&self) -> PlantsafeResult<()> {
        self.store.save_session(None)?;
        Ok(())
    }

    pub fn current(&self) -> PlantsafeResult<Option<Session>> {
        Ok(self.store.load_session()?)
    }

    pub fn require_session(&self) -> PlantsafeResult<Session> {
        self.current()?.ok_or(PlantsafeError::NotSignedIn)
    }

    /// The current session, provided its role may open `page`
    pub fn require(&self, page: Page) -> PlantsafeResult<Session> {
        let session = self.require_session()?;
        if !policies::can(session.role, page) {
            return Err(PlantsafeError::PermissionDenied {
                role: session.role,
                page,
            });
        }
        Ok(session)
    }

    pub fn change_pin(&self, role: Role, old: &str, new: &str) -> PlantsafeResult<()> {
        let mut pins = self.pins()?;
        pins.change(role, old, new)?;
        self.store.save_pins(&pins)?;
        tracing::info!(%role, "PIN changed");
        Ok(())
    }

    pub fn admin_change_pin(&self, actor: Role, target: Role, new: &str) -> PlantsafeResult<()> {
        let mut pins = self.pins()?;
        pins.set_by(actor, target, new)?;
        self.store.save_pins(&pins)?;
        tracing::info!(%actor, %target, "PIN reset");
        Ok(())
    }
}
