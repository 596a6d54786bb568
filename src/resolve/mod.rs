//! Name resolution — can a type name be written as-is at a given point?
//!
//! # Architecture
//!
//! 1. **Builtins** - [`BuiltinProvider`] lists the host's global classes
//! 2. **Name Index** - [`NameIndex`] maps bare names to every qualified path
//!    sharing them, built once and cached by the resolver
//! 3. **Scope Walk** - [`Resolver`] follows a name through the enclosing
//!    namespaces of a context and decides whether exactly one target wins
//!
//! ## Usage
//!
//! ```
//! use sord::{ObjectKind, Registry, Resolver};
//!
//! let mut reg = Registry::new();
//! let outer = reg.define_path("Outer", ObjectKind::Module).unwrap();
//! reg.define_path("Outer::Inner", ObjectKind::Class).unwrap();
//! reg.define_path("Other", ObjectKind::Module).unwrap();
//! reg.define_path("Other::Inner", ObjectKind::Class).unwrap();
//!
//! let resolver = Resolver::new();
//! assert!(resolver.resolvable(&reg, "Inner", outer));
//! assert!(!resolver.resolvable(&reg, "Inner", reg.root()));
//! assert_eq!(resolver.display_name(&reg, "Inner", reg.root()), "Inner");
//! ```

mod builtins;
mod config;
mod index;
mod resolver;

pub use builtins::{BuiltinError, BuiltinProvider, CORE_CLASSES, CoreClass, RubyCore, builtin_classes};
pub use config::ResolverConfig;
pub use index::NameIndex;
pub use resolver::{Resolvability, Resolver};
