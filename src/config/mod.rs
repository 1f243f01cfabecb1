//! Configuration module for plantsafe
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PLANTSAFE_*)
//! 3. Working directory config (./plantsafe.toml)
//! 4. User config (<config dir>/plantsafe/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{config_paths, parse_with_warnings, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    AuthConfig, ColorMode, ComplianceConfig, Config, OutputConfig, SiteConfig, StorageConfig,
    SyncConfig,
};
