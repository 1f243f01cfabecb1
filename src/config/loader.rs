//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::services::parse_instant;
use crate::domain::value_objects::SiteId;
use crate::error::{PlantsafeError, PlantsafeResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config};

pub const PROJECT_CONFIG_FILE: &str = "plantsafe.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect unknown keys as warnings
pub fn load_with_warnings(path: &Path) -> PlantsafeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub fn parse_with_warnings(content: &str, path: &Path) -> PlantsafeResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown.push(p.to_string());
    })
    .map_err(|e| PlantsafeError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config
        .compliance
        .validate()
        .map_err(|message| PlantsafeError::Config {
            path: path.to_path_buf(),
            message,
        })?;

    let warnings = unknown
        .into_iter()
        .map(|dotted| {
            let key = dotted
                .rsplit('.')
                .next()
                .unwrap_or(dotted.as_str())
                .to_string();
            ConfigWarning {
                line: content
                    .lines()
                    .position(|l| l.contains(key.as_str()))
                    .map(|i| i + 1),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Candidate config files, highest priority first
pub fn config_paths(working_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = working_dir {
        paths.push(dir.join(PROJECT_CONFIG_FILE));
    }
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("plantsafe").join("config.toml"));
    }
    paths
}

/// The first config file that exists, else defaults, then env overrides.
///
/// A file that fails to parse is reported as a warning and skipped.
pub fn load_or_default(working_dir: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    for path in config_paths(working_dir) {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                tracing::debug!(path = %path.display(), "config loaded");
                return (with_env_overrides(config), warnings);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            }
        }
    }

    (with_env_overrides(Config::default()), Vec::new())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

const BOOL_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no"];

/// Apply environment variable overrides (PLANTSAFE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |name| std::env::var(name).ok())
}

pub(crate) fn with_env_overrides_from<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = get_env("PLANTSAFE_DATA_DIR").filter(|v| !v.is_empty()) {
        config.storage.data_dir = Some(PathBuf::from(dir));
    }

    if let Some(site) = get_env("PLANTSAFE_SITE") {
        match SiteId::new(site) {
            Ok(id) => config.site.id = id,
            Err(e) => tracing::warn!(error = %e, "ignoring PLANTSAFE_SITE"),
        }
    }

    if let Some(now) = get_env("PLANTSAFE_NOW") {
        config.fixed_now = parse_instant(&now);
        if config.fixed_now.is_none() {
            tracing::warn!(value = %now, "ignoring unparseable PLANTSAFE_NOW");
        }
    }

    if let Some(value) = get_env("PLANTSAFE_REQUIRE_LOGIN") {
        config.auth.require_login = EnvVarValidator::new("PLANTSAFE_REQUIRE_LOGIN", BOOL_VALUES)
            .parse(&value, parse_bool, config.auth.require_login);
    }

    if let Some(value) = get_env("PLANTSAFE_SORT_BY_SEVERITY") {
        config.compliance.sort_by_severity =
            EnvVarValidator::new("PLANTSAFE_SORT_BY_SEVERITY", BOOL_VALUES).parse(
                &value,
                parse_bool,
                config.compliance.sort_by_severity,
            );
    }

    if get_env("NO_COLOR").is_some() {
        config.output.color = ColorMode::Never;
    }

    config
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "data_dir",
        "site",
        "id",
        "name",
        "compliance",
        "weekly_window_days",
        "static_due_soon_days",
        "lifting_due_soon_days",
        "sort_by_severity",
        "sync",
        "max_attempts",
        "outbox_dir",
        "auth",
        "require_login",
        "output",
        "color",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
