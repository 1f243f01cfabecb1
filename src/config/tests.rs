//! Tests for the config module

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use tempfile::tempdir;

use super::loader::{load_with_warnings, parse_with_warnings, with_env_overrides_from};
use super::types::*;
use crate::domain::value_objects::SiteId;
use crate::error::PlantsafeError;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.site.id, SiteId::default());
    assert_eq!(config.compliance.static_due_soon_days, 14);
    assert_eq!(config.compliance.lifting_due_soon_days, 30);
    assert_eq!(config.compliance.weekly_window_days, 7);
    assert!(!config.compliance.sort_by_severity);
    assert_eq!(config.sync.max_attempts, 10);
    assert!(config.auth.require_login);
    assert!(config.data_dir().ends_with(".plantsafe"));
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[storage]
data_dir = "/srv/plantsafe"

[site]
id = "north-yard"
name = "North Yard"

[compliance]
static_due_soon_days = 21
sort_by_severity = true

[sync]
max_attempts = 3

[auth]
require_login = false
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.data_dir(), PathBuf::from("/srv/plantsafe"));
    assert_eq!(config.outbox_dir(), PathBuf::from("/srv/plantsafe/outbox"));
    assert_eq!(config.site.id.as_str(), "north-yard");
    assert_eq!(config.site.name.as_deref(), Some("North Yard"));

    let rules = config.rules();
    assert_eq!(rules.static_due_soon_days, 21);
    assert_eq!(rules.lifting_due_soon_days, 30);
    assert!(rules.sort_by_severity);

    assert_eq!(config.sync.max_attempts, 3);
    assert!(!config.auth.require_login);
}

#[test]
fn test_invalid_site_id_is_an_error() {
    let err = parse_with_warnings("[site]\nid = \"North Yard\"\n", Path::new("plantsafe.toml"))
        .unwrap_err();
    assert!(matches!(err, PlantsafeError::Config { .. }));
    assert!(err.to_string().contains("plantsafe.toml"));
}

#[test]
fn test_out_of_range_threshold_is_an_error() {
    let err = parse_with_warnings(
        "[compliance]\nweekly_window_days = 200000000\n",
        Path::new("plantsafe.toml"),
    )
    .unwrap_err();
    assert!(matches!(err, PlantsafeError::Config { .. }));
    assert!(err.to_string().contains("compliance.weekly_window_days"), "{}", err);

    let err = parse_with_warnings("[compliance]\nweekly_window_days = 0\n", Path::new("plantsafe.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("out of range"), "{}", err);

    let (config, _) = parse_with_warnings(
        "[compliance]\nstatic_due_soon_days = 0\nlifting_due_soon_days = 3650\n",
        Path::new("plantsafe.toml"),
    )
    .unwrap();
    assert_eq!(config.compliance.lifting_due_soon_days, 3650);
}

#[test]
fn test_unknown_keys_become_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plantsafe.toml");
    fs::write(&path, "[sync]\nmax_attempts = 4\noutbx_dir = \"/tmp/out\"\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();
    assert_eq!(config.sync.max_attempts, 4);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "outbx_dir");
    assert_eq!(warnings[0].line, Some(3));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("outbox_dir"));
}

#[test]
fn test_env_overrides() {
    let config = with_env_overrides_from(
        Config::default(),
        env(&[
            ("PLANTSAFE_DATA_DIR", "/data"),
            ("PLANTSAFE_SITE", "tower-b"),
            ("PLANTSAFE_NOW", "2026-05-04T09:30:00Z"),
            ("PLANTSAFE_REQUIRE_LOGIN", "0"),
            ("PLANTSAFE_SORT_BY_SEVERITY", "yes"),
        ]),
    );

    assert_eq!(config.data_dir(), PathBuf::from("/data"));
    assert_eq!(config.site.id.as_str(), "tower-b");
    assert_eq!(
        config.fixed_now,
        Some(Utc.with_ymd_and_hms(2026, 5, 4, 9, 30, 0).unwrap())
    );
    assert!(!config.auth.require_login);
    assert!(config.compliance.sort_by_severity);
}

#[test]
fn test_bad_env_values_keep_current_settings() {
    let config = with_env_overrides_from(
        Config::default(),
        env(&[
            ("PLANTSAFE_SITE", "Not A Slug"),
            ("PLANTSAFE_NOW", "tomorrow"),
            ("PLANTSAFE_REQUIRE_LOGIN", "maybe"),
        ]),
    );

    assert_eq!(config.site.id, SiteId::default());
    assert_eq!(config.fixed_now, None);
    assert!(config.auth.require_login);
}

#[test]
fn test_no_color_env() {
    let config = with_env_overrides_from(Config::default(), env(&[("NO_COLOR", "1")]));
    assert_eq!(config.output.color, ColorMode::Never);
}
