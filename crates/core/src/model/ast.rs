use serde::{Deserialize, Serialize};

/// Decompiler AST for a function body, kept as the JSON tree the AST builder
/// emits. Node semantics belong to the builder; this type only carries it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ast(serde_json::Value);

impl Ast {
    pub fn new(tree: serde_json::Value) -> Self {
        Self(tree)
    }

    pub fn empty() -> Self {
        Self(serde_json::Value::Null)
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_null()
    }
}

impl From<serde_json::Value> for Ast {
    fn from(tree: serde_json::Value) -> Self {
        Self::new(tree)
    }
}
