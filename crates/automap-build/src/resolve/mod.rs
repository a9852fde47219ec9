//! Property resolution: one accessor in, one `PropertySpec` out.
//!
//! Markers are scanned in declaration order and dispatched on their simple
//! name through a `MarkerTable`. Key-bearing markers stage a pending key and
//! the last one scanned wins; a map-key marker then overrides whatever was
//! staged, regardless of where it sits in the scan.

#[cfg(test)]
mod tests;

use automap_config::MarkerConfig;
use automap_schema::node::{Accessor, Marker};
use derive_more::Display;
use serde::Serialize;
use std::{collections::BTreeMap, sync::LazyLock};
use tracing::{debug, trace};

///
/// PropertySpec
///
/// One resolved property, serialized with the field names the template uses.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PropertySpec {
    pub key: String,
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    pub value: String,
    pub nullable: String,
}

impl PropertySpec {
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        !self.nullable.is_empty()
    }
}

///
/// KeyAttribute
///
/// The marker attribute a key-bearing marker stores its key in.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyAttribute {
    Name,
    Value,
}

impl KeyAttribute {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Value => "value",
        }
    }
}

///
/// MarkerRule
///
/// What a recognised marker contributes to a property.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum MarkerRule {
    #[display("nullable")]
    Nullable,

    #[display("key({})", _0.as_str())]
    Key(KeyAttribute),

    #[display("map-key")]
    MapKey,
}

impl MarkerRule {
    /// Key override carried by `marker`, if it carries a usable one.
    ///
    /// Key-bearing markers only yield non-blank text. A map-key marker always
    /// yields something: missing or blank values come back empty so that the
    /// caller falls back to the property name.
    #[must_use]
    pub fn key_override(self, marker: &Marker) -> Option<String> {
        match self {
            Self::Nullable => None,
            Self::Key(attr) => marker
                .attribute(attr.as_str())
                .map(|value| value.to_string().trim().to_string())
                .filter(|key| !key.is_empty()),
            Self::MapKey => Some(
                marker
                    .attribute(KeyAttribute::Value.as_str())
                    .map(|value| value.to_string().trim().to_string())
                    .unwrap_or_default(),
            ),
        }
    }
}

///
/// MarkerTable
///
/// Marker simple name -> rule.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarkerTable {
    rules: BTreeMap<String, MarkerRule>,
}

const BUILTIN_RULES: [(&str, MarkerRule); 8] = [
    ("Nullable", MarkerRule::Nullable),
    ("Json", MarkerRule::Key(KeyAttribute::Name)),
    ("Field", MarkerRule::Key(KeyAttribute::Value)),
    ("Header", MarkerRule::Key(KeyAttribute::Value)),
    ("Part", MarkerRule::Key(KeyAttribute::Value)),
    ("Query", MarkerRule::Key(KeyAttribute::Value)),
    ("SerializedName", MarkerRule::Key(KeyAttribute::Value)),
    ("MapKey", MarkerRule::MapKey),
];

static BUILTIN: LazyLock<MarkerTable> = LazyLock::new(MarkerTable::default);

impl MarkerTable {
    /// The shared table holding only the built-in rules.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Built-in rules plus the names configured per role. A configured name
    /// that is already built in keeps its built-in rule.
    #[must_use]
    pub fn from_config(config: &MarkerConfig) -> Self {
        let mut table = Self::default();

        let roles = [
            (&config.nullable, MarkerRule::Nullable),
            (&config.name_attribute, MarkerRule::Key(KeyAttribute::Name)),
            (&config.value_attribute, MarkerRule::Key(KeyAttribute::Value)),
            (&config.map_key, MarkerRule::MapKey),
        ];

        for (names, rule) in roles {
            for name in names {
                table.rules.entry(name.clone()).or_insert(rule);
            }
        }

        table
    }

    #[must_use]
    pub fn rule(&self, simple_name: &str) -> Option<MarkerRule> {
        self.rules.get(simple_name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for MarkerTable {
    fn default() -> Self {
        Self {
            rules: BUILTIN_RULES
                .iter()
                .map(|(name, rule)| ((*name).to_string(), *rule))
                .collect(),
        }
    }
}

///
/// PropertyResolver
///

#[derive(Clone, Copy, Debug)]
pub struct PropertyResolver<'a> {
    table: &'a MarkerTable,
}

impl Default for PropertyResolver<'static> {
    fn default() -> Self {
        Self::new(MarkerTable::builtin())
    }
}

impl<'a> PropertyResolver<'a> {
    #[must_use]
    pub const fn new(table: &'a MarkerTable) -> Self {
        Self { table }
    }

    /// Resolve the property `name` declared by `accessor`.
    #[must_use]
    pub fn resolve(&self, name: &str, accessor: &Accessor) -> PropertySpec {
        let mut nullable = String::new();
        let mut pending: Option<String> = None;
        let mut map_key: Option<String> = None;

        for marker in &accessor.markers {
            let Some(rule) = self.table.rule(marker.simple_name()) else {
                continue;
            };

            match rule {
                MarkerRule::Nullable => {
                    nullable = format!("{} ", marker.usage());
                }
                MarkerRule::Key(_) => match rule.key_override(marker) {
                    Some(key) => {
                        if let Some(previous) = &pending {
                            trace!(
                                property = name,
                                marker = %marker.qualified_name,
                                %previous,
                                %key,
                                "key override replaced"
                            );
                        }
                        pending = Some(key);
                    }
                    None => debug!(
                        property = name,
                        marker = %marker.qualified_name,
                        %rule,
                        "marker carries no usable key"
                    ),
                },
                MarkerRule::MapKey => map_key = rule.key_override(marker),
            }
        }

        if map_key.is_some() {
            pending = map_key;
        }

        let key = pending
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| name.to_string());

        trace!(property = name, %key, nullable = !nullable.is_empty(), "property resolved");

        PropertySpec {
            key,
            name: name.to_string(),
            ty: accessor.return_type.clone(),
            value: accessor.invocation(),
            nullable,
        }
    }
}

/// Resolve with the built-in marker table.
#[must_use]
pub fn resolve(name: &str, accessor: &Accessor) -> PropertySpec {
    PropertyResolver::default().resolve(name, accessor)
}
