//! Lifting item status

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a lifting item is in use on site.
///
/// Only `Active` items are checked for colour-tag compliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiftingStatus {
    #[default]
    Active,
    OutOfService,
    Retired,
}

impl LiftingStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, LiftingStatus::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LiftingStatus::Active => "active",
            LiftingStatus::OutOfService => "out-of-service",
            LiftingStatus::Retired => "retired",
        }
    }
}

impl fmt::Display for LiftingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lifting status '{0}' (expected active, out-of-service or retired)")]
pub struct UnknownLiftingStatus(pub String);

impl FromStr for LiftingStatus {
    type Err = UnknownLiftingStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "active" => Ok(LiftingStatus::Active),
            "out-of-service" | "oos" => Ok(LiftingStatus::OutOfService),
            "retired" => Ok(LiftingStatus::Retired),
            _ => Err(UnknownLiftingStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_is_active() {
        assert!(LiftingStatus::Active.is_active());
        assert!(!LiftingStatus::Retired.is_active());
        assert!(!LiftingStatus::OutOfService.is_active());
    }

    #[test]
    fn serde_kebab_case() {
        let json = serde_json::to_string(&LiftingStatus::OutOfService).unwrap();
        assert_eq!(json, r#""out-of-service""#);
    }
}
