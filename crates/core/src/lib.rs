//! varpair-core
//!
//! Core data model for datasets that pair ground-truth debug information about
//! a compiled function with what a decompiler recovered for the same function.
//!
//! This crate defines the value types handed over by the extraction
//! collaborators (locations, types, variables, ASTs), the `Function` and
//! `CollectedFunction` entities built from them, and the admission policy a
//! corpus builder uses to decide which collected functions are worth keeping.
//!
//! Binary loading, debug-info parsing and decompiler invocation live elsewhere;
//! everything here is plain immutable data plus a few derived views.

pub mod admission;
pub mod model;

pub use admission::{Admission, AdmissionPolicy, Rejection};
pub use model::{
    Ast, CollectError, CollectedFunction, Function, FunctionBuilder, Location, TypeInfo, Variable,
    VariableMap,
};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
