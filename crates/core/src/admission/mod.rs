//! Corpus admission: deciding whether a collected function is usable as a
//! training example.
//!
//! Construction of `CollectedFunction` never validates anything. Consumers
//! that need stronger guarantees run an `AdmissionPolicy` over each function;
//! a failed rule means "leave this function out", never a pipeline failure.

mod config;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::model::{CollectedFunction, VariableMap};

/// Why a collected function was left out of the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    #[error("debug info for {name} carries no user-chosen variable names")]
    NoUserNames { name: String },

    #[error("debug name {debug} does not match decompiler name {decompiler}")]
    NameMismatch { debug: String, decompiler: String },

    /// Either side may be missing its address; that counts as a mismatch.
    #[error("debug address {debug:?} does not match decompiler address {decompiler:?}")]
    AddressMismatch { debug: Option<u64>, decompiler: Option<u64> },

    #[error("debug function has {debug} arguments, decompiler has {decompiler}")]
    ArityMismatch { debug: usize, decompiler: usize },

    #[error("raw code is {len} bytes, limit is {max}")]
    RawCodeTooLarge { len: usize, max: usize },
}

impl Rejection {
    /// Short stable label, used when tallying rejections.
    pub fn kind(&self) -> &'static str {
        match self {
            Rejection::NoUserNames { .. } => "no_user_names",
            Rejection::NameMismatch { .. } => "name_mismatch",
            Rejection::AddressMismatch { .. } => "address_mismatch",
            Rejection::ArityMismatch { .. } => "arity_mismatch",
            Rejection::RawCodeTooLarge { .. } => "raw_code_too_large",
        }
    }
}

/// Rules a collected function must pass to enter the corpus.
///
/// Serialized as JSON for `--policy` files; every field is optional there and
/// falls back to `Default`. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdmissionPolicy {
    /// Debug view must contain at least one user-named variable.
    pub require_user_names: bool,
    /// Debug and decompiler views must report the same function name.
    pub require_matching_names: bool,
    /// Both views must carry an entry address, and they must agree.
    pub require_matching_addresses: bool,
    /// Both views must declare the same number of distinct argument
    /// variables. A parameter that lives in several locations counts once.
    pub require_matching_arity: bool,
    /// Upper bound on the decompiled source size, in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_raw_code_bytes: Option<usize>,
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        Self {
            require_user_names: true,
            require_matching_names: false,
            require_matching_addresses: false,
            require_matching_arity: false,
            max_raw_code_bytes: None,
        }
    }
}

/// Outcome of running a policy over a batch.
#[derive(Debug, Default)]
pub struct Admission {
    pub admitted: Vec<CollectedFunction>,
    pub rejected: Vec<(CollectedFunction, Rejection)>,
}

impl AdmissionPolicy {
    /// A policy that admits everything.
    pub fn permissive() -> Self {
        Self { require_user_names: false, ..Self::default() }
    }

    /// Return the first rule `function` violates, checked in field order.
    pub fn check(&self, function: &CollectedFunction) -> Result<(), Rejection> {
        let debug = function.debug();
        let decompiler = function.decompiler();

        if self.require_user_names && !debug.has_user_names() {
            return Err(Rejection::NoUserNames { name: function.name().to_string() });
        }

        if self.require_matching_names && debug.name() != decompiler.name() {
            return Err(Rejection::NameMismatch {
                debug: debug.name().to_string(),
                decompiler: decompiler.name().to_string(),
            });
        }

        if self.require_matching_addresses {
            match (debug.address(), decompiler.address()) {
                (Some(d), Some(c)) if d == c => {}
                (d, c) => return Err(Rejection::AddressMismatch { debug: d, decompiler: c }),
            }
        }

        if self.require_matching_arity {
            let (d, c) = (arity(debug.arguments()), arity(decompiler.arguments()));
            if d != c {
                return Err(Rejection::ArityMismatch { debug: d, decompiler: c });
            }
        }

        if let Some(max) = self.max_raw_code_bytes {
            let len = function.raw_code().len();
            if len > max {
                return Err(Rejection::RawCodeTooLarge { len, max });
            }
        }

        Ok(())
    }

    /// Split a batch into admitted and rejected functions, preserving order.
    pub fn partition<I>(&self, functions: I) -> Admission
    where
        I: IntoIterator<Item = CollectedFunction>,
    {
        let mut out = Admission::default();
        for function in functions {
            match self.check(&function) {
                Ok(()) => out.admitted.push(function),
                Err(rejection) => {
                    debug!(name = function.name(), %rejection, "function rejected");
                    out.rejected.push((function, rejection));
                }
            }
        }
        info!(admitted = out.admitted.len(), rejected = out.rejected.len(), "admission complete");
        out
    }
}

/// Distinct variables across all argument locations.
fn arity(arguments: &VariableMap) -> usize {
    arguments.variables().collect::<BTreeSet<_>>().len()
}
