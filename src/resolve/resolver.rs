//! Resolvability queries over a documentation model.

use std::sync::Arc;

use indexmap::IndexSet;
use parking_lot::RwLock;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::builtins::{BuiltinProvider, RubyCore, builtin_classes};
use super::config::ResolverConfig;
use super::index::NameIndex;
use crate::base::{path, segments};
use crate::model::DocModel;

// ============================================================================
// RESOLVABILITY
// ============================================================================

/// What Ruby's lexical lookup would make of a name written at some point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolvability {
    /// The name is a segment of the enclosing namespace's own path.
    InScope,
    /// Exactly one object is reachable through the scope chain.
    Unique(SmolStr),
    /// A built-in class with nothing in scope shadowing it.
    Builtin,
    /// A built-in class shadowed by objects in scope.
    Shadowed(Vec<SmolStr>),
    /// Several objects are reachable through the scope chain.
    Ambiguous(Vec<SmolStr>),
    /// Nothing is reachable and the name is not built in.
    Unknown,
}

impl Resolvability {
    /// Check if the name can be emitted as written.
    pub fn is_resolvable(&self) -> bool {
        matches!(
            self,
            Resolvability::InScope | Resolvability::Unique(_) | Resolvability::Builtin
        )
    }

    /// Paths found by the scope walk, if it ran and found any.
    pub fn matches(&self) -> &[SmolStr] {
        match self {
            Resolvability::Unique(path) => std::slice::from_ref(path),
            Resolvability::Shadowed(paths) | Resolvability::Ambiguous(paths) => paths,
            Resolvability::InScope | Resolvability::Builtin | Resolvability::Unknown => &[],
        }
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Decides whether type names can be written unqualified.
///
/// Owns the [`NameIndex`] cache. The index is built from the model on the
/// first query (or [`prepare`](Resolver::prepare)) and reused until
/// [`clear`](Resolver::clear), so a model changed between runs must be
/// followed by a `clear`.
#[derive(Debug)]
pub struct Resolver<B = RubyCore> {
    provider: B,
    config: ResolverConfig,
    index: RwLock<Option<Arc<NameIndex>>>,
}

impl Resolver<RubyCore> {
    /// Create a resolver for Ruby core builtins with default options.
    pub fn new() -> Self {
        Self::with_provider(RubyCore)
    }
}

impl Default for Resolver<RubyCore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BuiltinProvider> Resolver<B> {
    /// Create a resolver that takes its builtin classes from `provider`.
    pub fn with_provider(provider: B) -> Self {
        Self {
            provider,
            config: ResolverConfig::default(),
            index: RwLock::new(None),
        }
    }

    /// Replace the options. Drops any cached index.
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        *self.index.get_mut() = None;
        self
    }

    /// Get the current options.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Build the name index from `model` unless it is already built.
    pub fn prepare<M: DocModel>(&self, model: &M) -> Arc<NameIndex> {
        // Fast path: already built (read lock)
        if let Some(index) = self.index.read().as_ref() {
            return Arc::clone(index);
        }

        // Slow path: need to build (write lock)
        let mut slot = self.index.write();

        // Double-check after acquiring write lock
        if let Some(index) = slot.as_ref() {
            return Arc::clone(index);
        }

        let index = Arc::new(self.build_index(model));
        *slot = Some(Arc::clone(&index));
        index
    }

    /// Drop the cached index so the next query rebuilds it.
    pub fn clear(&self) {
        if self.index.write().take().is_some() {
            tracing::debug!("cleared name index");
        }
    }

    /// Check if an index is currently cached.
    pub fn is_prepared(&self) -> bool {
        self.index.read().is_some()
    }

    fn build_index<M: DocModel>(&self, model: &M) -> NameIndex {
        let mut builtins = builtin_classes(&self.provider).unwrap_or_else(|err| {
            tracing::warn!(%err, "continuing without builtin classes");
            FxHashSet::default()
        });
        builtins.extend(self.config.extra_builtins.iter().cloned());
        NameIndex::build(model, builtins)
    }

    /// All known paths `name` could refer to. See [`NameIndex::paths_for`].
    pub fn paths_for<M: DocModel>(&self, model: &M, name: &str) -> Vec<SmolStr> {
        self.prepare(model).paths_for(name)
    }

    /// The unique path `name` refers to, if there is exactly one.
    pub fn path_for<M: DocModel>(&self, model: &M, name: &str) -> Option<SmolStr> {
        self.prepare(model).path_for(name)
    }

    /// Check if `name`, written verbatim at `context`, names exactly one thing.
    pub fn resolvable<M: DocModel>(&self, model: &M, name: &str, context: M::Handle) -> bool {
        self.classify(model, name, context).is_resolvable()
    }

    /// Work out how `name` would resolve if written at `context`.
    ///
    /// 1. Move `context` out to its nearest enclosing namespace.
    /// 2. An unqualified name that is a segment of that namespace's path is
    ///    always found by Ruby.
    /// 3. Otherwise follow the name's segments as nested children from the
    ///    namespace and from each ancestor up to the root, collecting every
    ///    object reached.
    /// 4. A builtin resolves only when nothing was reached. A non-builtin
    ///    resolves only when exactly one object was reached.
    pub fn classify<M: DocModel>(&self, model: &M, name: &str, context: M::Handle) -> Resolvability {
        let index = self.prepare(model);
        let scope = enclosing_namespace(model, context);

        if !path::is_qualified(name) && segments(model.path(scope)).contains(&name) {
            tracing::trace!(name, scope = model.path(scope), "name is part of the enclosing path");
            return Resolvability::InScope;
        }

        let parts = segments(name);
        // Unlike the Ruby lookup, an empty chain does not count as reaching the scope
        if parts.is_empty() {
            return Resolvability::Unknown;
        }

        let matches = self.scope_walk(model, scope, &parts);
        let builtin = index.is_builtin(name);
        let mut matches: Vec<SmolStr> = matches.into_iter().collect();

        let outcome = match (builtin, matches.len()) {
            (true, 0) => Resolvability::Builtin,
            (true, _) => Resolvability::Shadowed(matches),
            (false, 0) => Resolvability::Unknown,
            (false, 1) => matches.pop().map_or(Resolvability::Unknown, Resolvability::Unique),
            (false, _) => Resolvability::Ambiguous(matches),
        };
        tracing::trace!(name, ?outcome, "classified");
        outcome
    }

    /// The form of `name` to write at `context`: `name` itself when it
    /// resolves there, else its unique qualified path, else `name` unchanged.
    pub fn display_name<M: DocModel>(&self, model: &M, name: &str, context: M::Handle) -> SmolStr {
        if self.resolvable(model, name, context) {
            return SmolStr::new(name);
        }
        self.path_for(model, name).unwrap_or_else(|| SmolStr::new(name))
    }

    /// Follow `parts` as nested children from `scope` and each of its
    /// ancestors, root included.
    fn scope_walk<M: DocModel>(&self, model: &M, scope: M::Handle, parts: &[&str]) -> IndexSet<SmolStr> {
        let kinds = self.config.lookup_kinds;
        let mut matches = IndexSet::new();
        let mut level = scope;

        loop {
            let found = parts
                .iter()
                .try_fold(level, |handle, part| model.child(handle, part, kinds));

            tracing::trace!(
                scope = model.path(level),
                found = found.map(|handle| model.path(handle)),
                "scope walk level"
            );
            if let Some(handle) = found {
                matches.insert(SmolStr::new(model.path(handle)));
            }

            if model.is_root(level) {
                break;
            }
            match model.parent(level) {
                Some(parent) => level = parent,
                None => break,
            }
        }

        matches
    }
}

/// Walk up from `handle` to the first namespace-shaped object.
fn enclosing_namespace<M: DocModel>(model: &M, mut handle: M::Handle) -> M::Handle {
    while !model.is_namespace(handle) {
        match model.parent(handle) {
            Some(parent) => handle = parent,
            None => break,
        }
    }
    handle
}
