//! Type lookup used when walking a value type's supertype hierarchy.

use crate::{
    node::{TypeDecl, TypeRef},
    well_known::*,
};
use std::{collections::BTreeMap, sync::LazyLock};

///
/// TypeResolver
///
/// Read-only lookup of declarations by qualified name. Hosts implement this
/// over their own type system; `(A, B)` tries `A` first and falls back to `B`.
///

pub trait TypeResolver {
    fn declaration(&self, name: &str) -> Option<&TypeDecl>;
}

impl<T: TypeResolver + ?Sized> TypeResolver for &T {
    fn declaration(&self, name: &str) -> Option<&TypeDecl> {
        (**self).declaration(name)
    }
}

impl<A: TypeResolver, B: TypeResolver> TypeResolver for (A, B) {
    fn declaration(&self, name: &str) -> Option<&TypeDecl> {
        self.0.declaration(name).or_else(|| self.1.declaration(name))
    }
}

///
/// TypeTable
///
/// An owned set of declarations, keyed by qualified name.
///

#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    decls: BTreeMap<String, TypeDecl>,
}

impl TypeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a declaration, replacing any previous one of the same name.
    pub fn insert(&mut self, decl: TypeDecl) {
        self.decls.insert(decl.name.clone(), decl);
    }

    #[must_use]
    pub fn with(mut self, decl: TypeDecl) -> Self {
        self.insert(decl);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl FromIterator<TypeDecl> for TypeTable {
    fn from_iter<I: IntoIterator<Item = TypeDecl>>(iter: I) -> Self {
        let mut table = Self::new();
        for decl in iter {
            table.insert(decl);
        }
        table
    }
}

impl TypeResolver for TypeTable {
    fn declaration(&self, name: &str) -> Option<&TypeDecl> {
        self.decls.get(name)
    }
}

///
/// JavaUtil
///
/// The `java.util` map hierarchy, so hosts only need to describe their own
/// types.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct JavaUtil;

static JAVA_UTIL: LazyLock<TypeTable> = LazyLock::new(|| {
    let kv = || [TypeRef::new("K"), TypeRef::new("V")];
    let generic = |name: &str| TypeDecl::new(name).params(["K", "V"]);

    [
        generic(MAP),
        generic(ABSTRACT_MAP).extends(TypeRef::with_args(MAP, kv())),
        generic(SORTED_MAP).extends(TypeRef::with_args(MAP, kv())),
        generic(NAVIGABLE_MAP).extends(TypeRef::with_args(SORTED_MAP, kv())),
        generic(HASH_MAP)
            .extends(TypeRef::with_args(ABSTRACT_MAP, kv()))
            .extends(TypeRef::with_args(MAP, kv())),
        generic(LINKED_HASH_MAP)
            .extends(TypeRef::with_args(HASH_MAP, kv()))
            .extends(TypeRef::with_args(MAP, kv())),
        generic(TREE_MAP)
            .extends(TypeRef::with_args(ABSTRACT_MAP, kv()))
            .extends(TypeRef::with_args(NAVIGABLE_MAP, kv())),
        generic(CONCURRENT_MAP).extends(TypeRef::with_args(MAP, kv())),
        generic(CONCURRENT_HASH_MAP)
            .extends(TypeRef::with_args(ABSTRACT_MAP, kv()))
            .extends(TypeRef::with_args(CONCURRENT_MAP, kv())),
        TypeDecl::new(OBJECT),
        TypeDecl::new(STRING).extends(TypeRef::new(OBJECT)),
    ]
    .into_iter()
    .collect()
});

impl TypeResolver for JavaUtil {
    fn declaration(&self, name: &str) -> Option<&TypeDecl> {
        JAVA_UTIL.declaration(name)
    }
}
