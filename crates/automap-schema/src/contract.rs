//! Members of the dictionary contract (`java.util.Map<K, V>`).

use crate::{node::MethodSig, types::MethodKind};
use std::sync::LazyLock;

static DICTIONARY_CONTRACT: LazyLock<Vec<MethodSig>> = LazyLock::new(|| {
    use MethodKind::{Abstract, Default, ObjectInherited, Static};

    let none: [&str; 0] = [];

    vec![
        // abstract
        MethodSig::new(Abstract, "int", "size", none),
        MethodSig::new(Abstract, "boolean", "isEmpty", none),
        MethodSig::new(Abstract, "boolean", "containsKey", ["Object"]),
        MethodSig::new(Abstract, "boolean", "containsValue", ["Object"]),
        MethodSig::new(Abstract, "V", "get", ["Object"]),
        MethodSig::new(Abstract, "V", "put", ["K", "V"]),
        MethodSig::new(Abstract, "V", "remove", ["Object"]),
        MethodSig::new(Abstract, "void", "putAll", ["Map<? extends K, ? extends V>"]),
        MethodSig::new(Abstract, "void", "clear", none),
        MethodSig::new(Abstract, "Set<K>", "keySet", none),
        MethodSig::new(Abstract, "Collection<V>", "values", none),
        MethodSig::new(Abstract, "Set<Map.Entry<K, V>>", "entrySet", none),
        // redeclared from Object
        MethodSig::new(ObjectInherited, "boolean", "equals", ["Object"]),
        MethodSig::new(ObjectInherited, "int", "hashCode", none),
        // default
        MethodSig::new(Default, "V", "getOrDefault", ["Object", "V"]),
        MethodSig::new(Default, "void", "forEach", ["BiConsumer<? super K, ? super V>"]),
        MethodSig::new(
            Default,
            "void",
            "replaceAll",
            ["BiFunction<? super K, ? super V, ? extends V>"],
        ),
        MethodSig::new(Default, "V", "putIfAbsent", ["K", "V"]),
        MethodSig::new(Default, "boolean", "remove", ["Object", "Object"]),
        MethodSig::new(Default, "boolean", "replace", ["K", "V", "V"]),
        MethodSig::new(Default, "V", "replace", ["K", "V"]),
        MethodSig::new(
            Default,
            "V",
            "computeIfAbsent",
            ["K", "Function<? super K, ? extends V>"],
        ),
        MethodSig::new(
            Default,
            "V",
            "computeIfPresent",
            ["K", "BiFunction<? super K, ? super V, ? extends V>"],
        ),
        MethodSig::new(
            Default,
            "V",
            "compute",
            ["K", "BiFunction<? super K, ? super V, ? extends V>"],
        ),
        MethodSig::new(
            Default,
            "V",
            "merge",
            ["K", "V", "BiFunction<? super V, ? super V, ? extends V>"],
        ),
        // static
        MethodSig::new(Static, "Map<K, V>", "of", none),
        MethodSig::new(Static, "Map<K, V>", "of", ["K", "V"]),
        MethodSig::new(Static, "Map<K, V>", "ofEntries", ["Map.Entry<? extends K, ? extends V>..."]),
        MethodSig::new(Static, "Map.Entry<K, V>", "entry", ["K", "V"]),
        MethodSig::new(Static, "Map<K, V>", "copyOf", ["Map<? extends K, ? extends V>"]),
    ]
});

/// Every member the dictionary contract declares, in declaration order.
#[must_use]
pub fn dictionary_contract() -> &'static [MethodSig] {
    &DICTIONARY_CONTRACT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_declares_both_remove_overloads() {
        let removes: Vec<_> = dictionary_contract()
            .iter()
            .filter(|m| m.name == "remove")
            .map(MethodSig::arity)
            .collect();

        assert_eq!(removes, vec![1, 2]);
    }

    #[test]
    fn contract_has_twelve_abstract_members() {
        let count = dictionary_contract()
            .iter()
            .filter(|m| m.kind.is_abstract())
            .count();

        assert_eq!(count, 12);
    }
}
