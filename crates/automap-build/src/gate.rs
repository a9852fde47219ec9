//! Applicability: which value types automap handles, and which dictionary
//! members it implements for them.

use automap_schema::{
    contract::dictionary_contract,
    node::{MethodSig, TypeRef, ValueType},
    resolve::TypeResolver,
    well_known::{MAP, OBJECT, STRING},
};
use std::{
    collections::{BTreeSet, HashSet},
    sync::LazyLock,
};
use derive_more::Display;
use tracing::debug;

/// Dictionary members automap implements on the host's behalf. `remove` is
/// consumed only in its one-argument form.
pub const CAPABILITIES: [&str; 12] = [
    "clear",
    "containsKey",
    "containsValue",
    "entrySet",
    "get",
    "isEmpty",
    "keySet",
    "put",
    "putAll",
    "remove",
    "size",
    "values",
];

static CONSUMED: LazyLock<BTreeSet<MethodSig>> = LazyLock::new(|| {
    dictionary_contract()
        .iter()
        .filter(|method| consumes(method))
        .cloned()
        .collect()
});

/// `java.util.Map<java.lang.String, java.lang.Object>`
#[must_use]
pub fn map_type() -> TypeRef {
    TypeRef::with_args(MAP, [TypeRef::new(STRING), TypeRef::new(OBJECT)])
}

///
/// MapUsage
///
/// How a value type reaches `java.util.Map`. A raw `Map` is implemented with
/// erased signatures.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum MapUsage {
    #[display("Map<String, Object>")]
    Parameterized,

    #[display("raw Map")]
    Raw,
}

impl MapUsage {
    #[must_use]
    pub const fn is_raw(self) -> bool {
        matches!(self, Self::Raw)
    }
}

/// Whether `value_type` is assignable to [`map_type`].
#[must_use]
pub fn applicable(value_type: &ValueType, types: &impl TypeResolver) -> bool {
    map_usage(value_type, types).is_some()
}

/// How `value_type` is assignable to [`map_type`], if it is.
///
/// Walks the supertype hierarchy through `types`. A `java.util.Map` found on
/// the way matches when it is raw or carries exactly `<String, Object>`;
/// declarations `types` does not know end their branch.
#[must_use]
pub fn map_usage(value_type: &ValueType, types: &impl TypeResolver) -> Option<MapUsage> {
    let usage = reaches(&value_type.supertypes, &map_type(), types);

    debug!(
        value_type = %value_type.qualified_name(),
        applicable = usage.is_some(),
        usage = ?usage,
        "applicability checked"
    );

    usage
}

// Each declaration is expanded once: Java forbids inheriting one generic
// type with two different argument lists, so a second visit adds nothing.
fn reaches(
    supertypes: &[TypeRef],
    target: &TypeRef,
    types: &impl TypeResolver,
) -> Option<MapUsage> {
    let mut visited = HashSet::new();
    let mut stack: Vec<TypeRef> = supertypes.iter().rev().cloned().collect();

    while let Some(current) = stack.pop() {
        if current.name == target.name {
            if current.is_raw() {
                return Some(MapUsage::Raw);
            }
            if current.args == target.args {
                return Some(MapUsage::Parameterized);
            }
            continue;
        }

        if !visited.insert(current.name.clone()) {
            continue;
        }

        if let Some(decl) = types.declaration(&current.name) {
            stack.extend(decl.supertypes_for(&current).into_iter().rev());
        }
    }

    None
}

/// The fixed set of contract members automap implements.
#[must_use]
pub fn consumed_methods() -> &'static BTreeSet<MethodSig> {
    &CONSUMED
}

fn consumes(method: &MethodSig) -> bool {
    // default, static and Object members stay with the contract
    if !method.kind.is_abstract() {
        return false;
    }

    match method.name.as_str() {
        "remove" => method.arity() == 1,
        name => CAPABILITIES.contains(&name),
    }
}
