use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::debug;

use super::{Ast, Function};

/// Error raised by the checked [`CollectedFunction::try_new`] constructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectError {
    /// Both views carry an entry address and they disagree, so they do not
    /// describe the same routine.
    #[error("debug function {name} at {debug:#x} does not match decompiler function at {decompiler:#x}")]
    AddressMismatch { name: String, debug: u64, decompiler: u64 },
}

/// Debug-info and decompiler views of one routine, plus the decompiler's AST
/// and raw source text. One of these is one training example.
///
/// The debug name is canonical: `name` is copied from `debug` at construction
/// and never follows `decompiler`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectedFunction {
    name: String,
    ast: Ast,
    debug: Function,
    decompiler: Function,
    raw_code: String,
}

impl CollectedFunction {
    /// Bundle the two views without checking that they describe the same
    /// routine; the collection pipeline is responsible for the pairing.
    pub fn new(ast: Ast, debug: Function, decompiler: Function, raw_code: impl Into<String>) -> Self {
        Self { name: debug.name().to_string(), ast, debug, decompiler, raw_code: raw_code.into() }
    }

    /// Like [`CollectedFunction::new`], but rejects pairs whose entry
    /// addresses are both known and differ.
    pub fn try_new(
        ast: Ast,
        debug: Function,
        decompiler: Function,
        raw_code: impl Into<String>,
    ) -> Result<Self, CollectError> {
        if let (Some(d), Some(c)) = (debug.address(), decompiler.address()) {
            if d != c {
                let name = debug.name().to_string();
                debug!(%name, debug = d, decompiler = c, "entry address mismatch");
                return Err(CollectError::AddressMismatch { name, debug: d, decompiler: c });
            }
        }
        Ok(Self::new(ast, debug, decompiler, raw_code))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    /// Ground-truth view from debug information.
    pub fn debug(&self) -> &Function {
        &self.debug
    }

    /// Decompiler-recovered view of the same routine.
    pub fn decompiler(&self) -> &Function {
        &self.decompiler
    }

    /// Decompiled source text, verbatim.
    pub fn raw_code(&self) -> &str {
        &self.raw_code
    }

    /// Consume the bundle into `(ast, debug, decompiler, raw_code)`.
    pub fn into_parts(self) -> (Ast, Function, Function, String) {
        (self.ast, self.debug, self.decompiler, self.raw_code)
    }
}

impl<'de> Deserialize<'de> for CollectedFunction {
    /// Any serialized `name` is ignored and re-derived from `debug`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Parts {
            #[serde(default)]
            ast: Ast,
            debug: Function,
            decompiler: Function,
            raw_code: String,
        }

        let parts = Parts::deserialize(deserializer)?;
        Ok(Self::new(parts.ast, parts.debug, parts.decompiler, parts.raw_code))
    }
}
