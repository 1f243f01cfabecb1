//! Site provisioning
//!
//! Seeds reference data the first time a site is opened and manages the site
//! directory. Every step is idempotent: existing data is never overwritten.

mod demo;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{FormTemplate, Site};
use crate::domain::policies::PinTable;
use crate::domain::ports::{RepositoryError, SiteStore};
use crate::domain::value_objects::SiteId;
use crate::error::{PlantsafeError, PlantsafeResult};

pub use demo::{demo_fixture, DemoFixture};

const BUILTIN_FORM_TEMPLATES: &str = include_str!("form_templates.json");

/// The checklist templates shipped with the tool
pub fn builtin_form_templates() -> PlantsafeResult<Vec<FormTemplate>> {
    serde_json::from_str(BUILTIN_FORM_TEMPLATES).map_err(|e| {
        PlantsafeError::from(RepositoryError::SerializationError {
            message: format!("built-in form templates: {}", e),
        })
    })
}

/// What a provisioning pass actually wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionReport {
    pub templates_installed: usize,
    pub pins_installed: bool,
    pub site_registered: bool,
    pub demo_loaded: bool,
}

impl ProvisionReport {
    pub fn changed_anything(&self) -> bool {
        self.templates_installed > 0 || self.pins_installed || self.site_registered || self.demo_loaded
    }
}

/// Install whatever the site is missing.
///
/// Demo data only goes into an empty plant register.
pub fn provision(
    store: &dyn SiteStore,
    site_name: Option<&str>,
    demo: bool,
    now: DateTime<Utc>,
) -> PlantsafeResult<ProvisionReport> {
    let mut report = ProvisionReport::default();

    if store.list_form_templates()?.is_empty() {
        let templates = builtin_form_templates()?;
        store.save_form_templates(&templates)?;
        report.templates_installed = templates.len();
    }

    if store.load_pins()?.is_none() {
        store.save_pins(&PinTable::default())?;
        report.pins_installed = true;
    }

    let site = store.site().clone();
    let mut sites = store.list_sites()?;
    if !sites.iter().any(|s| s.id == site) {
        sites.push(Site {
            name: site_name.unwrap_or(site.as_str()).to_string(),
            id: site,
            created_at: now,
        });
        store.save_sites(&sites)?;
        report.site_registered = true;
    }

    if demo {
        if store.list_plants()?.is_empty() {
            let fixture = demo_fixture(now);
            store.save_plants(&fixture.plants)?;
            store.save_static_records(&fixture.static_records)?;
            store.save_lifting_items(&fixture.lifting_items)?;
            report.demo_loaded = true;
        } else {
            tracing::warn!(site = %store.site(), "plant register not empty, demo data skipped");
        }
    }

    tracing::info!(
        site = %store.site(),
        templates = report.templates_installed,
        pins = report.pins_installed,
        registered = report.site_registered,
        demo = report.demo_loaded,
        "site provisioned"
    );
    Ok(report)
}

/// Whether the store's site has been through [`provision`]
pub fn is_provisioned(store: &dyn SiteStore) -> PlantsafeResult<bool> {
    let registered = store.list_sites()?.iter().any(|s| &s.id == store.site());
    Ok(registered && !store.list_form_templates()?.is_empty())
}

pub fn list_sites(store: &dyn SiteStore) -> PlantsafeResult<Vec<Site>> {
    Ok(store.list_sites()?)
}

/// Add an entry to the site directory without touching its data
pub fn add_site(
    store: &dyn SiteStore,
    id: SiteId,
    name: &str,
    now: DateTime<Utc>,
) -> PlantsafeResult<Site> {
    let mut sites = store.list_sites()?;
    if sites.iter().any(|s| s.id == id) {
        return Err(PlantsafeError::SiteExists { site: id });
    }
    let name = name.trim();
    let site = Site {
        name: if name.is_empty() { id.to_string() } else { name.to_string() },
        id,
        created_at: now,
    };
    sites.push(site.clone());
    store.save_sites(&sites)?;
    Ok(site)
}

/// Delete every register of the store's site. Reference data is kept.
pub fn reset_site(store: &dyn SiteStore) -> PlantsafeResult<()> {
    store.clear_site()?;
    tracing::warn!(site = %store.site(), "site data reset");
    Ok(())
}
