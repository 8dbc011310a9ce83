use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a variable's storage lives during part of a function's execution.
///
/// Used as a map key, so it is hashable and totally ordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// A named machine register (e.g. `rax`).
    Register(String),
    /// A stack-frame slot, identified by its signed offset.
    Stack(i64),
}

impl Location {
    pub fn register(name: impl Into<String>) -> Self {
        Location::Register(name.into())
    }

    pub fn stack(offset: i64) -> Self {
        Location::Stack(offset)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Register(name) => write!(f, "reg:{name}"),
            Location::Stack(offset) if *offset < 0 => write!(f, "stk:-{:#x}", offset.unsigned_abs()),
            Location::Stack(offset) => write!(f, "stk:{offset:#x}"),
        }
    }
}
