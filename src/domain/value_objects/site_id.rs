//! Site identifier
//!
//! All site data lives under a directory named after the site, so the id is
//! restricted to a filesystem-safe slug.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SiteId(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid site id '{0}': use lowercase letters, digits, '-' or '_'")]
pub struct InvalidSiteId(pub String);

impl SiteId {
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidSiteId> {
        let value = value.into();
        let valid = !value.is_empty()
            && value.len() <= 64
            && !value.starts_with(['-', '_'])
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
        if valid {
            Ok(Self(value))
        } else {
            Err(InvalidSiteId(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SiteId {
    fn default() -> Self {
        Self("default".to_string())
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SiteId {
    type Err = InvalidSiteId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SiteId {
    type Error = InvalidSiteId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SiteId> for String {
    fn from(value: SiteId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_slugs() {
        assert!(SiteId::new("dublin-north_2").is_ok());
        assert_eq!(SiteId::default().as_str(), "default");
    }

    #[test]
    fn rejects_paths_and_uppercase() {
        assert!(SiteId::new("").is_err());
        assert!(SiteId::new("../etc").is_err());
        assert!(SiteId::new("Site A").is_err());
        assert!(SiteId::new("-lead").is_err());
    }
}
