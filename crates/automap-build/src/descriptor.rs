use crate::{
    gate::MapUsage,
    resolve::{MarkerTable, PropertyResolver, PropertySpec},
};
use automap_schema::node::GenerationRequest;
use serde::Serialize;
use tracing::debug;

///
/// ClassDescriptor
///
/// Everything the template needs for one generated class. Serializes to the
/// template's variable names.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDescriptor {
    pub package_name: String,
    pub class_name: String,
    pub type_parameters: String,

    #[serde(rename = "classToExtend")]
    pub superclass_name: String,

    pub is_final: bool,

    /// The value type reaches `java.util.Map` raw; mutators take erased
    /// parameter types.
    pub raw_map: bool,

    pub properties: Vec<PropertySpec>,
}

///
/// DescriptorBuilder
///

pub struct DescriptorBuilder<'a> {
    request: &'a GenerationRequest,
    resolver: PropertyResolver<'a>,
    usage: MapUsage,
}

impl<'a> DescriptorBuilder<'a> {
    #[must_use]
    pub fn new(request: &'a GenerationRequest) -> Self {
        Self {
            request,
            resolver: PropertyResolver::default(),
            usage: MapUsage::Parameterized,
        }
    }

    #[must_use]
    pub fn with_markers(mut self, table: &'a MarkerTable) -> Self {
        self.resolver = PropertyResolver::new(table);
        self
    }

    #[must_use]
    pub fn with_map_usage(mut self, usage: MapUsage) -> Self {
        self.usage = usage;
        self
    }

    #[must_use]
    pub fn build(self) -> ClassDescriptor {
        let request = self.request;

        let properties: Vec<_> = request
            .value_type
            .properties
            .iter()
            .map(|accessor| self.resolver.resolve(&accessor.property, accessor))
            .collect();

        debug!(
            class = %request.class_name,
            properties = properties.len(),
            "class descriptor built"
        );

        ClassDescriptor {
            package_name: request.package_name.clone(),
            class_name: request.class_name.clone(),
            type_parameters: type_parameters(&request.value_type.type_parameters),
            superclass_name: request.class_to_extend.clone(),
            is_final: request.is_final,
            raw_map: self.usage.is_raw(),
            properties,
        }
    }
}

/// `""` for no parameters, otherwise `<P1, P2, ...>`.
#[must_use]
pub fn type_parameters(params: &[String]) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("<{}>", params.join(", "))
    }
}
