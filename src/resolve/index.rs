//! Name index — bare class names to every path that ends in them.

use indexmap::IndexSet;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use crate::base::bare_name;
use crate::model::DocModel;

/// Maps each bare (last-segment) class name to all qualified paths sharing it.
///
/// Seeded from the documentation model's classes and from the built-in
/// global classes, each builtin mapping to itself. The index is a pure
/// cache: rebuilding it from the same two sources gives the same contents.
///
/// # Example
///
/// With classes `A::Foo`, `B::Foo` and a builtin `Foo`, the entry for
/// `Foo` is `{A::Foo, B::Foo, Foo}`.
#[derive(Clone, Debug, Default)]
pub struct NameIndex {
    /// Bare name → qualified paths, model classes before builtins.
    names_to_paths: FxHashMap<SmolStr, IndexSet<SmolStr>>,
    /// The builtin class names this index was seeded with.
    builtins: FxHashSet<SmolStr>,
}

impl NameIndex {
    /// Build an index from the classes in `model` plus `builtins`.
    pub fn build<M: DocModel>(model: &M, builtins: FxHashSet<SmolStr>) -> Self {
        let mut names_to_paths: FxHashMap<SmolStr, IndexSet<SmolStr>> = FxHashMap::default();

        let mut class_count = 0usize;
        for (name, path) in model.classes() {
            names_to_paths
                .entry(SmolStr::new(name))
                .or_default()
                .insert(SmolStr::new(path));
            class_count += 1;
        }

        for builtin in &builtins {
            names_to_paths
                .entry(builtin.clone())
                .or_default()
                .insert(builtin.clone());
        }

        tracing::debug!(
            classes = class_count,
            builtins = builtins.len(),
            names = names_to_paths.len(),
            "built name index"
        );

        Self {
            names_to_paths,
            builtins,
        }
    }

    /// All known paths that `name` could refer to.
    ///
    /// Candidates come from the entry for `name`'s last segment and are kept
    /// only when they end with the whole of `name`, so `Baz::Qux` matches
    /// `X::Baz::Qux` but not `X::Qux`.
    pub fn paths_for(&self, name: &str) -> Vec<SmolStr> {
        let Some(candidates) = bare_name(name).and_then(|bare| self.names_to_paths.get(bare)) else {
            return Vec::new();
        };
        candidates
            .iter()
            .filter(|path| path.ends_with(name))
            .cloned()
            .collect()
    }

    /// The single path `name` refers to, or `None` when there are zero or
    /// several candidates.
    pub fn path_for(&self, name: &str) -> Option<SmolStr> {
        let mut paths = self.paths_for(name);
        if paths.len() == 1 { paths.pop() } else { None }
    }

    /// Check if `name` is exactly a built-in global class name.
    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains(name)
    }

    /// Check if any path has `bare` as its last segment.
    pub fn contains_name(&self, bare: &str) -> bool {
        self.names_to_paths.contains_key(bare)
    }

    /// Get iterator over the builtin class names.
    pub fn builtins(&self) -> impl Iterator<Item = &SmolStr> {
        self.builtins.iter()
    }

    /// Number of distinct bare names.
    pub fn len(&self) -> usize {
        self.names_to_paths.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.names_to_paths.is_empty()
    }
}

impl PartialEq for NameIndex {
    fn eq(&self, other: &Self) -> bool {
        self.builtins == other.builtins
            && self.names_to_paths.len() == other.names_to_paths.len()
            && self.names_to_paths.iter().all(|(name, paths)| {
                other
                    .names_to_paths
                    .get(name)
                    .is_some_and(|other_paths| paths == other_paths)
            })
    }
}

impl Eq for NameIndex {}
