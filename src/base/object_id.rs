//! Identifiers for documented code objects.

use std::fmt;

/// A handle to a code object stored in a [`Registry`](crate::model::Registry).
///
/// Objects are never removed from a registry, so an id stays valid for as
/// long as the registry that issued it. The root namespace is always id 0.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ObjectId(u32);

impl ObjectId {
    /// The root namespace.
    pub const ROOT: ObjectId = ObjectId(0);

    /// Create an id from a vector index, `None` past `u32::MAX`.
    #[inline]
    pub(crate) fn try_from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    /// Create an id for an index already known to fit.
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(u32::try_from(index).is_ok(), "object index {index} overflows u32");
        Self(index as u32)
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.0)
    }
}
