// src/domain/tag/value_objects.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Client-supplied tag identifier. Unknown or foreign identifiers are not
/// an error at this level; the tag service filters them out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(String);

impl TagId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TagId> for String {
    fn from(value: TagId) -> Self {
        value.0
    }
}

impl From<&str> for TagId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TagId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
