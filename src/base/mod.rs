//! Foundation types for the resolver.
//!
//! This module provides:
//! - [`ObjectId`] - Handles into the in-memory [`Registry`](crate::model::Registry)
//! - [`path`] - Helpers for `::`-delimited qualified paths
//!
//! This module has NO dependencies on other sord modules.

mod object_id;
pub mod path;

pub use object_id::ObjectId;
pub use path::{bare_name, join_path, method_path, segments};
