//! Qualified names of the `java.lang` / `java.util` types automap reasons about.

pub const OBJECT: &str = "java.lang.Object";
pub const STRING: &str = "java.lang.String";

pub const MAP: &str = "java.util.Map";
pub const ABSTRACT_MAP: &str = "java.util.AbstractMap";
pub const SORTED_MAP: &str = "java.util.SortedMap";
pub const NAVIGABLE_MAP: &str = "java.util.NavigableMap";
pub const HASH_MAP: &str = "java.util.HashMap";
pub const LINKED_HASH_MAP: &str = "java.util.LinkedHashMap";
pub const TREE_MAP: &str = "java.util.TreeMap";
pub const CONCURRENT_MAP: &str = "java.util.concurrent.ConcurrentMap";
pub const CONCURRENT_HASH_MAP: &str = "java.util.concurrent.ConcurrentHashMap";
