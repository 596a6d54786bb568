//! In-memory documentation model.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use thiserror::Error;

use super::{DocModel, KindSet, ObjectKind};
use crate::base::{ObjectId, join_path, method_path, path};

/// Errors raised while populating a [`Registry`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The parent path or id names no object.
    #[error("no namespace at `{0}`")]
    UnknownParent(SmolStr),
    /// The parent exists but cannot contain children.
    #[error("`{path}` is a {kind} and cannot contain `{name}`")]
    NotANamespace {
        path: SmolStr,
        kind: ObjectKind,
        name: SmolStr,
    },
    /// The path is already taken by an object of another kind.
    #[error("`{path}` is already defined as a {existing}, not a {requested}")]
    KindConflict {
        path: SmolStr,
        existing: ObjectKind,
        requested: ObjectKind,
    },
    /// The name is not a legal Ruby name for its kind.
    #[error("`{name}` is not a valid {kind} name")]
    InvalidName { name: SmolStr, kind: ObjectKind },
    /// Every [`ObjectId`] is taken.
    #[error("registry is full, cannot define `{0}`")]
    Full(SmolStr),
}

/// A documented code object.
#[derive(Clone, Debug)]
pub struct CodeObject {
    /// Simple name (last segment). Empty for the root.
    pub name: SmolStr,
    /// Fully qualified path.
    pub path: SmolStr,
    pub kind: ObjectKind,
    /// Enclosing namespace, `None` for the root.
    pub parent: Option<ObjectId>,
    children: Vec<ObjectId>,
}

impl CodeObject {
    /// Direct children in definition order.
    pub fn children(&self) -> &[ObjectId] {
        &self.children
    }
}

/// A tree of documented modules, classes and methods.
///
/// Objects are stored in a single vector and referenced by [`ObjectId`]
/// everywhere else, the root always at [`ObjectId::ROOT`]. Defining an
/// object that already exists with the same kind reopens it, the way a
/// second `class Foo` body reopens `Foo` in Ruby.
///
/// # Panics
///
/// The [`DocModel`] methods panic when given an [`ObjectId`] issued by a
/// different registry.
#[derive(Clone, Debug)]
pub struct Registry {
    objects: Vec<CodeObject>,
    by_path: FxHashMap<SmolStr, ObjectId>,
}

impl Registry {
    /// Create a registry holding only the root namespace.
    pub fn new() -> Self {
        let root = CodeObject {
            name: SmolStr::default(),
            path: SmolStr::default(),
            kind: ObjectKind::Root,
            parent: None,
            children: Vec::new(),
        };
        let mut by_path = FxHashMap::default();
        by_path.insert(SmolStr::default(), ObjectId::ROOT);
        Self {
            objects: vec![root],
            by_path,
        }
    }

    /// The root namespace.
    #[inline]
    pub fn root(&self) -> ObjectId {
        ObjectId::ROOT
    }

    /// Define `name` as a child of `parent`.
    pub fn define(
        &mut self,
        parent: ObjectId,
        name: &str,
        kind: ObjectKind,
    ) -> Result<ObjectId, RegistryError> {
        let parent_obj = self
            .get(parent)
            .ok_or_else(|| RegistryError::UnknownParent(smol_str::format_smolstr!("{parent}")))?;

        if !parent_obj.kind.is_namespace() {
            return Err(RegistryError::NotANamespace {
                path: parent_obj.path.clone(),
                kind: parent_obj.kind,
                name: SmolStr::new(name),
            });
        }

        let valid = match kind {
            ObjectKind::Root => false,
            ObjectKind::Method => path::is_method_name(name),
            ObjectKind::Module | ObjectKind::Class | ObjectKind::Constant => {
                path::is_constant_name(name)
            }
        };
        if !valid {
            return Err(RegistryError::InvalidName {
                name: SmolStr::new(name),
                kind,
            });
        }

        let full_path = match kind {
            ObjectKind::Method => method_path(&parent_obj.path, name),
            _ => join_path(&parent_obj.path, name),
        };

        // Reopening an existing definition
        if let Some(&existing) = self.by_path.get(&full_path) {
            let existing_kind = self.objects[existing.index()].kind;
            if existing_kind == kind {
                return Ok(existing);
            }
            return Err(RegistryError::KindConflict {
                path: full_path,
                existing: existing_kind,
                requested: kind,
            });
        }

        let id = ObjectId::try_from_index(self.objects.len())
            .ok_or_else(|| RegistryError::Full(full_path.clone()))?;
        self.objects.push(CodeObject {
            name: SmolStr::new(name),
            path: full_path.clone(),
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.objects[parent.index()].children.push(id);
        self.by_path.insert(full_path, id);
        Ok(id)
    }

    /// Define an object by its full path. The parent must already exist.
    ///
    /// Method paths use `#` before the method name (`Foo::Bar#call`).
    pub fn define_path(&mut self, full_path: &str, kind: ObjectKind) -> Result<ObjectId, RegistryError> {
        let (parent_path, name) = match kind {
            ObjectKind::Method => full_path.rsplit_once('#'),
            _ => full_path.rsplit_once(path::SEPARATOR),
        }
        .unwrap_or(("", full_path));

        let parent = self
            .at(parent_path)
            .ok_or_else(|| RegistryError::UnknownParent(SmolStr::new(parent_path)))?;
        self.define(parent, name, kind)
    }

    /// Look up an object by its qualified path.
    pub fn at(&self, path: &str) -> Option<ObjectId> {
        self.by_path.get(path).copied()
    }

    /// Get the object for an id issued by this registry.
    pub fn get(&self, id: ObjectId) -> Option<&CodeObject> {
        self.objects.get(id.index())
    }

    /// Iterate over every object, root first.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &CodeObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(idx, obj)| (ObjectId::from_index(idx), obj))
    }

    /// Number of objects, not counting the root.
    pub fn len(&self) -> usize {
        self.objects.len() - 1
    }

    /// Check if nothing besides the root is defined.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn object(&self, id: ObjectId) -> &CodeObject {
        &self.objects[id.index()]
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl DocModel for Registry {
    type Handle = ObjectId;

    fn classes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.objects
            .iter()
            .filter(|obj| obj.kind == ObjectKind::Class)
            .map(|obj| (obj.name.as_str(), obj.path.as_str()))
    }

    fn parent(&self, handle: ObjectId) -> Option<ObjectId> {
        self.object(handle).parent
    }

    fn kind(&self, handle: ObjectId) -> ObjectKind {
        self.object(handle).kind
    }

    fn child(&self, handle: ObjectId, name: &str, kinds: KindSet) -> Option<ObjectId> {
        self.object(handle).children.iter().copied().find(|&id| {
            let child = self.object(id);
            child.name == name && kinds.admits(child.kind)
        })
    }

    fn path(&self, handle: ObjectId) -> &str {
        &self.object(handle).path
    }
}
