//! # sord-base
//!
//! Name resolvability oracle for signature generation from YARD documentation.
//!
//! Given a type reference such as `Foo::Bar` written at some point inside
//! the module/class tree, decide whether Ruby's lexical constant lookup would
//! find exactly one thing. Signature generators use the answer to choose
//! between the short name and a fully qualified path.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! resolve → Name index, builtin classes, resolvability queries
//!   ↓
//! model   → Documentation model interface + in-memory Registry
//!   ↓
//! base    → Primitives (ObjectId, qualified path helpers)
//! ```

/// Foundation types: ObjectId, path helpers
pub mod base;

/// Documentation model: the namespace tree being documented
pub mod model;

/// Resolution: name index and the resolvability oracle
pub mod resolve;

pub use base::ObjectId;
pub use model::{DocModel, KindSet, ObjectKind, Registry, RegistryError};
pub use resolve::{
    BuiltinError, BuiltinProvider, NameIndex, Resolvability, Resolver, ResolverConfig, RubyCore,
};
