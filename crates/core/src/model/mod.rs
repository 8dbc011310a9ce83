//! Core data model for collected functions.
//!
//! - `Location`, `TypeInfo`, `Variable`, `Ast`: value types supplied by the
//!   extraction collaborators.
//! - `Function` / `VariableMap` / `FunctionBuilder`: one view of a routine's
//!   arguments and locals, keyed by storage location.
//! - `CollectedFunction`: the debug view and the decompiler view of the same
//!   routine, bundled as a single training example.

mod ast;
mod collected;
mod function;
mod location;
mod typeinfo;
mod variable;

pub use ast::Ast;
pub use collected::{CollectError, CollectedFunction};
pub use function::{Function, FunctionBuilder, VariableMap};
pub use location::Location;
pub use typeinfo::TypeInfo;
pub use variable::Variable;
