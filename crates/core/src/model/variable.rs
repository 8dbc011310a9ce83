use std::fmt;

use serde::{Deserialize, Serialize};

use super::TypeInfo;

/// A declared variable: name, type, and whether the name was chosen by a
/// programmer (`user`) or synthesized by a tool.
///
/// Equality and hashing are structural over all three fields, so the same
/// location can hold several distinct variables while exact duplicates
/// collapse inside a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Variable {
    name: String,
    typ: TypeInfo,
    user: bool,
}

impl Variable {
    pub fn new(name: impl Into<String>, typ: TypeInfo, user: bool) -> Self {
        Self { name: name.into(), typ, user }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn typ(&self) -> &TypeInfo {
        &self.typ
    }

    /// True when the name is an authentic, human-chosen identifier.
    pub fn user(&self) -> bool {
        self.user
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.typ, self.name)?;
        if !self.user {
            f.write_str(" (synthetic)")?;
        }
        Ok(())
    }
}
