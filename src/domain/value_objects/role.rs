//! Roles and pages
//!
//! Every user signs in as one of a fixed set of roles. Pages are the areas of
//! the register a role may open.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    ProjectManager,
    SiteManager,
    SafetyOfficer,
    Operator,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::ProjectManager,
        Role::SiteManager,
        Role::SafetyOfficer,
        Role::Operator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::ProjectManager => "project_manager",
            Role::SiteManager => "site_manager",
            Role::SafetyOfficer => "safety_officer",
            Role::Operator => "operator",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::ProjectManager => "Project Manager",
            Role::SiteManager => "Site Manager",
            Role::SafetyOfficer => "Safety Officer",
            Role::Operator => "Operator",
        }
    }

    /// Seniority, 5 for admin down to 1 for operator
    pub fn level(&self) -> u8 {
        match self {
            Role::Admin => 5,
            Role::ProjectManager => 4,
            Role::SiteManager => 3,
            Role::SafetyOfficer => 2,
            Role::Operator => 1,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == normalized)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Area of the register guarded by role permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Dashboard,
    Plants,
    QrCodes,
    Submissions,
    FormTemplates,
    Compliance,
    Defects,
    Notifications,
    Settings,
    PinManagement,
    Form,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Plants => "plants",
            Page::QrCodes => "qr-codes",
            Page::Submissions => "submissions",
            Page::FormTemplates => "form-templates",
            Page::Compliance => "compliance",
            Page::Defects => "defects",
            Page::Notifications => "notifications",
            Page::Settings => "settings",
            Page::PinManagement => "pin-management",
            Page::Form => "form",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_dashes() {
        assert_eq!(
            "project-manager".parse::<Role>().unwrap(),
            Role::ProjectManager
        );
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert!("visitor".parse::<Role>().is_err());
    }

    #[test]
    fn levels_descend() {
        let levels: Vec<u8> = Role::ALL.iter().map(Role::level).collect();
        assert_eq!(levels, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn role_serde_snake_case() {
        let json = serde_json::to_string(&Role::SafetyOfficer).unwrap();
        assert_eq!(json, r#""safety_officer""#);
    }
}
