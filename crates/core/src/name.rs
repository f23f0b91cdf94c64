//! Item names: the case-insensitive key of the store.

use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Characters the flat comma-delimited files cannot carry inside a field.
const FORBIDDEN: &[char] = &[',', '\n', '\r'];

/// Reject text that would break the one-record-per-line, comma-delimited layout.
pub fn check_field(field: &str, value: &str) -> Result<(), DomainError> {
    if let Some(c) = value.chars().find(|c| FORBIDDEN.contains(c)) {
        return Err(DomainError::validation(format!(
            "{field} cannot contain {c:?}"
        )));
    }
    Ok(())
}

/// Name of a stocked item.
///
/// The original spelling is kept for display and persistence, while equality
/// and hashing fold case, so `"Aspirin"`, `"aspirin"` and `"ASPIRIN"` are the
/// same key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Validate and build a name. Surrounding whitespace is trimmed.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        check_field("name", trimmed)?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw lookup string.
    pub fn matches(&self, other: &str) -> bool {
        fold(&self.0) == fold(other.trim())
    }
}

fn fold(s: &str) -> String {
    s.to_lowercase()
}

impl PartialEq for ItemName {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for ItemName {}

impl Hash for ItemName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        fold(&self.0).hash(state);
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ItemName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}
