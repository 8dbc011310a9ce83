use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque type descriptor as reported by the type-info collaborator.
///
/// Only the name and (optional) byte size are carried; no lattice or
/// compatibility rules are defined here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl TypeInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), size: None }
    }

    pub fn sized(name: impl Into<String>, size: u32) -> Self {
        Self { name: name.into(), size: Some(size) }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
