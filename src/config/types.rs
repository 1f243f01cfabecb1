//! Configuration type definitions

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::DEFAULT_MAX_SYNC_ATTEMPTS;
use crate::domain::services::ComplianceRules;
use crate::domain::value_objects::SiteId;
use crate::error::PlantsafeResult;

use super::loader::{self, ConfigWarning};

/// Where registers are kept
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Defaults to `~/.plantsafe`
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Site selection
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub id: SiteId,

    /// Display name used when the site is first provisioned
    #[serde(default)]
    pub name: Option<String>,
}

/// Compliance engine thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComplianceConfig {
    #[serde(default = "default_weekly_window")]
    pub weekly_window_days: i64,

    #[serde(default = "default_static_due_soon")]
    pub static_due_soon_days: i64,

    #[serde(default = "default_lifting_due_soon")]
    pub lifting_due_soon_days: i64,

    #[serde(default)]
    pub sort_by_severity: bool,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            weekly_window_days: default_weekly_window(),
            static_due_soon_days: default_static_due_soon(),
            lifting_due_soon_days: default_lifting_due_soon(),
            sort_by_severity: false,
        }
    }
}

/// Longest window or warning lead time accepted from config, in days
pub const MAX_THRESHOLD_DAYS: i64 = 3650;

impl ComplianceConfig {
    /// Reject thresholds outside `0..=MAX_THRESHOLD_DAYS`; the weekly window
    /// must also be at least one day.
    pub fn validate(&self) -> Result<(), String> {
        let checks = [
            ("weekly_window_days", self.weekly_window_days, 1),
            ("static_due_soon_days", self.static_due_soon_days, 0),
            ("lifting_due_soon_days", self.lifting_due_soon_days, 0),
        ];
        for (key, value, min) in checks {
            if !(min..=MAX_THRESHOLD_DAYS).contains(&value) {
                return Err(format!(
                    "compliance.{} = {} is out of range ({}..={})",
                    key, value, min, MAX_THRESHOLD_DAYS
                ));
            }
        }
        Ok(())
    }

    pub fn rules(&self) -> ComplianceRules {
        ComplianceRules {
            weekly_window_days: self.weekly_window_days,
            static_due_soon_days: self.static_due_soon_days,
            lifting_due_soon_days: self.lifting_due_soon_days,
            sort_by_severity: self.sort_by_severity,
        }
    }
}

fn default_weekly_window() -> i64 {
    ComplianceRules::default().weekly_window_days
}

fn default_static_due_soon() -> i64 {
    ComplianceRules::default().static_due_soon_days
}

fn default_lifting_due_soon() -> i64 {
    ComplianceRules::default().lifting_due_soon_days
}

/// Offline queue delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Defaults to `<data_dir>/outbox`
    #[serde(default)]
    pub outbox_dir: Option<PathBuf>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            outbox_dir: None,
        }
    }
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_SYNC_ATTEMPTS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Check the signed-in role before each command
    #[serde(default = "default_true")]
    pub require_login: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            require_login: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub compliance: ComplianceConfig,

    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Frozen clock from `PLANTSAFE_NOW`; never read from a file
    #[serde(skip)]
    pub fixed_now: Option<DateTime<Utc>>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PlantsafeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PlantsafeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from `./plantsafe.toml`, the user config, or defaults
    pub fn load_or_default(working_dir: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(working_dir)
    }

    /// Apply environment variable overrides (PLANTSAFE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    pub fn outbox_dir(&self) -> PathBuf {
        self.sync
            .outbox_dir
            .clone()
            .unwrap_or_else(|| self.data_dir().join("outbox"))
    }

    pub fn rules(&self) -> ComplianceRules {
        self.compliance.rules()
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".plantsafe")
}
