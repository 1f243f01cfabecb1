//! PIN Policy
//!
//! PINs are short numeric codes, one per role. Only their SHA-256 digests are
//! ever stored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::value_objects::Role;

pub const MIN_PIN_LENGTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PinError {
    #[error("Current PIN incorrect")]
    IncorrectPin,

    #[error("PIN must be at least 4 digits")]
    TooShort,

    #[error("PIN must be numbers only")]
    NotNumeric,

    #[error("Admin/Project Manager only")]
    NotPermitted,
}

/// Check the shape of a new PIN
pub fn validate_pin(pin: &str) -> Result<(), PinError> {
    if pin.chars().count() < MIN_PIN_LENGTH {
        return Err(PinError::TooShort);
    }
    if !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err(PinError::NotNumeric);
    }
    Ok(())
}

pub fn hash_pin(pin: &str) -> String {
    let digest = Sha256::digest(pin.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

fn default_pin(role: Role) -> &'static str {
    match role {
        Role::Admin => "0000",
        Role::ProjectManager => "4444",
        Role::SiteManager => "1111",
        Role::SafetyOfficer => "2222",
        Role::Operator => "3333",
    }
}

/// Role to PIN digest table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinTable {
    digests: BTreeMap<Role, String>,
}

impl Default for PinTable {
    fn default() -> Self {
        Self {
            digests: Role::ALL
                .into_iter()
                .map(|role| (role, hash_pin(default_pin(role))))
                .collect(),
        }
    }
}

impl PinTable {
    /// A role missing from a stored table falls back to its factory PIN.
    pub fn verify(&self, role: Role, pin: &str) -> bool {
        let expected = self
            .digests
            .get(&role)
            .cloned()
            .unwrap_or_else(|| hash_pin(default_pin(role)));
        expected == hash_pin(pin)
    }

    /// Change a role's own PIN, proving knowledge of the current one
    pub fn change(&mut self, role: Role, old: &str, new: &str) -> Result<(), PinError> {
        if !self.verify(role, old) {
            return Err(PinError::IncorrectPin);
        }
        validate_pin(new)?;
        self.digests.insert(role, hash_pin(new));
        Ok(())
    }

    /// Set any role's PIN on behalf of a senior role
    pub fn set_by(&mut self, actor: Role, target: Role, new: &str) -> Result<(), PinError> {
        if !super::access_policy::can_manage_pins(actor) {
            return Err(PinError::NotPermitted);
        }
        validate_pin(new)?;
        self.digests.insert(target, hash_pin(new));
        Ok(())
    }
}
