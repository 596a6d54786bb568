//! Resolver configuration.

use smol_str::SmolStr;

use crate::model::KindSet;

/// Options for a [`Resolver`](super::Resolver).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Kinds each name segment may step into during the scope walk.
    pub lookup_kinds: KindSet,
    /// Names treated as built-in classes on top of the provider's list.
    pub extra_builtins: Vec<SmolStr>,
}

impl ResolverConfig {
    /// Create a config with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the kinds a scope walk may step into.
    pub fn with_lookup_kinds(mut self, kinds: KindSet) -> Self {
        self.lookup_kinds = kinds;
        self
    }

    /// Add a name to the built-in set.
    pub fn with_builtin(mut self, name: impl Into<SmolStr>) -> Self {
        self.extra_builtins.push(name.into());
        self
    }
}
