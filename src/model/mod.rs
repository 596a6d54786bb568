//! Documentation model — the namespace tree the resolver navigates.
//!
//! The resolver never owns documentation data. It reads through
//! [`DocModel`], which any documentation store can implement. [`Registry`]
//! is the in-memory implementation shipped with this crate.

mod registry;

pub use registry::{CodeObject, Registry, RegistryError};

use bitflags::bitflags;
use std::fmt;

// ============================================================================
// OBJECT KINDS
// ============================================================================

/// The kind of a documented code object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// The top-level namespace.
    Root,
    Module,
    Class,
    Method,
    Constant,
}

impl ObjectKind {
    /// Check if objects of this kind can contain other objects.
    pub fn is_namespace(&self) -> bool {
        matches!(self, ObjectKind::Root | ObjectKind::Module | ObjectKind::Class)
    }

    /// The [`KindSet`] flag for this kind. The root belongs to no set.
    pub fn as_set(&self) -> KindSet {
        match self {
            ObjectKind::Root => KindSet::empty(),
            ObjectKind::Module => KindSet::MODULE,
            ObjectKind::Class => KindSet::CLASS,
            ObjectKind::Method => KindSet::METHOD,
            ObjectKind::Constant => KindSet::CONSTANT,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ObjectKind::Root => "root",
            ObjectKind::Module => "module",
            ObjectKind::Class => "class",
            ObjectKind::Method => "method",
            ObjectKind::Constant => "constant",
        };
        f.write_str(s)
    }
}

bitflags! {
    /// A set of object kinds, used to constrain child lookups.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KindSet: u8 {
        const MODULE = 1 << 0;
        const CLASS = 1 << 1;
        const METHOD = 1 << 2;
        const CONSTANT = 1 << 3;
    }
}

impl KindSet {
    /// Kinds a name segment may step into during a scope walk.
    pub const LOOKUP: KindSet = KindSet::CLASS.union(KindSet::METHOD).union(KindSet::MODULE);

    /// Check if `kind` is a member of this set.
    #[inline]
    pub fn admits(self, kind: ObjectKind) -> bool {
        !kind.as_set().is_empty() && self.contains(kind.as_set())
    }
}

impl Default for KindSet {
    fn default() -> Self {
        KindSet::LOOKUP
    }
}

// ============================================================================
// DOCUMENTATION MODEL
// ============================================================================

/// Read access to a documentation model.
///
/// Handles are cheap positions in the namespace tree. Every handle reaches
/// the root by following [`parent`](DocModel::parent), and the tree holds
/// no cycles.
pub trait DocModel {
    /// A position in the namespace tree.
    type Handle: Copy + fmt::Debug;

    /// All known classes as `(bare name, qualified path)` pairs.
    fn classes(&self) -> impl Iterator<Item = (&str, &str)> + '_;

    /// The enclosing object, or `None` at the root.
    fn parent(&self, handle: Self::Handle) -> Option<Self::Handle>;

    /// The kind of the object at `handle`.
    fn kind(&self, handle: Self::Handle) -> ObjectKind;

    /// A direct child called `name` whose kind is in `kinds`.
    fn child(&self, handle: Self::Handle, name: &str, kinds: KindSet) -> Option<Self::Handle>;

    /// The qualified path of the object at `handle` (`""` for the root).
    fn path(&self, handle: Self::Handle) -> &str;

    /// Check if the object at `handle` can contain other objects.
    fn is_namespace(&self, handle: Self::Handle) -> bool {
        self.kind(handle).is_namespace()
    }

    /// Check if `handle` is the root namespace.
    fn is_root(&self, handle: Self::Handle) -> bool {
        self.parent(handle).is_none()
    }
}
