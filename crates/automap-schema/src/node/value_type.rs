use crate::prelude::*;

///
/// ValueType
///
/// The value-type declaration the host asks about. `properties` is in the
/// host's iteration order, which the generated constructor follows.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ValueType {
    pub package: String,
    pub name: String,

    #[serde(default)]
    pub type_parameters: Vec<String>,

    #[serde(default)]
    pub supertypes: Vec<TypeRef>,

    #[serde(default)]
    pub properties: Vec<Accessor>,
}

impl ValueType {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            type_parameters: Vec::new(),
            supertypes: Vec::new(),
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_parameters = params.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn extends(mut self, supertype: TypeRef) -> Self {
        self.supertypes.push(supertype);
        self
    }

    #[must_use]
    pub fn property(mut self, accessor: Accessor) -> Self {
        self.properties.push(accessor);
        self
    }

    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }
}

///
/// Accessor
///
/// An abstract property accessor. `property` is the property name the host
/// derived from it, which may differ from `method` (`getId` -> `id`).
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Accessor {
    pub property: String,
    pub method: String,
    pub return_type: String,

    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl Accessor {
    /// Accessor whose method name equals the property name.
    pub fn new(property: impl Into<String>, return_type: impl Into<String>) -> Self {
        let property = property.into();

        Self {
            method: property.clone(),
            property,
            return_type: return_type.into(),
            markers: Vec::new(),
        }
    }

    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    #[must_use]
    pub fn marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Source expression that reads the property off the instance.
    #[must_use]
    pub fn invocation(&self) -> String {
        format!("{}()", self.method)
    }
}

///
/// GenerationRequest
///
/// Everything the host hands over for one generated class.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub value_type: ValueType,
    pub package_name: String,
    pub class_name: String,
    pub class_to_extend: String,
    pub is_final: bool,
}

impl GenerationRequest {
    /// Request using the value type's own package.
    pub fn new(
        value_type: ValueType,
        class_name: impl Into<String>,
        class_to_extend: impl Into<String>,
        is_final: bool,
    ) -> Self {
        Self {
            package_name: value_type.package.clone(),
            value_type,
            class_name: class_name.into(),
            class_to_extend: class_to_extend.into(),
            is_final,
        }
    }
}
