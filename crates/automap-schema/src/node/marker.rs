use crate::prelude::*;
use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

///
/// Marker
///
/// One annotation usage attached to an accessor. Attribute values are the
/// ones written at the usage site; defaults declared on the annotation type
/// are not filled in.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Marker {
    pub qualified_name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, MarkerValue>,
}

impl Marker {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<MarkerValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Last segment of the qualified name (`com.example.Json` -> `Json`).
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit_once('.')
            .map_or(self.qualified_name.as_str(), |(_, simple)| simple)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&MarkerValue> {
        self.attributes.get(name)
    }

    /// The usage as it can be re-emitted in source, without attributes.
    #[must_use]
    pub fn usage(&self) -> String {
        format!("@{}", self.qualified_name)
    }
}

///
/// MarkerValue
///
/// Enum constants and class literals are carried as `Text` in their source
/// spelling.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
#[remain::sorted]
pub enum MarkerValue {
    Bool(bool),
    Int(i64),
    List(Vec<Self>),
    Text(String),
}

impl Display for MarkerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::List(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("}")
            }
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for MarkerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MarkerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for MarkerValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for MarkerValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
