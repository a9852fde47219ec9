//! Class generation for value types that are `Map<String, Object>`s.
//!
//! The pipeline is gate -> descriptor -> render:
//!   - [`gate`] decides whether a value type qualifies and which dictionary
//!     members the generated class implements,
//!   - [`descriptor`] resolves every property (via [`resolve`]) into a
//!     [`ClassDescriptor`],
//!   - [`render`] evaluates the class template against it.

pub mod descriptor;
pub mod error;
pub mod gate;
pub mod render;
pub mod resolve;

pub use descriptor::{ClassDescriptor, DescriptorBuilder};
pub use error::Error;
pub use render::Renderer;
pub use resolve::{MarkerTable, PropertyResolver, PropertySpec};

use automap_schema::{node::GenerationRequest, resolve::TypeResolver};
use tracing::debug;

/// Generate the class for `request` with the built-in marker table and the
/// embedded template, checking applicability against `types` first.
pub fn generate(request: &GenerationRequest, types: &impl TypeResolver) -> Result<String, Error> {
    generate_with(request, types, MarkerTable::builtin(), Renderer::embedded()?)
}

/// Generate the class for `request` with an explicit marker table and renderer.
pub fn generate_with(
    request: &GenerationRequest,
    types: &impl TypeResolver,
    markers: &MarkerTable,
    renderer: &Renderer,
) -> Result<String, Error> {
    let value_type = &request.value_type;

    let Some(usage) = gate::map_usage(value_type, types) else {
        return Err(Error::Inapplicable {
            type_name: value_type.qualified_name(),
        });
    };

    let descriptor = DescriptorBuilder::new(request)
        .with_markers(markers)
        .with_map_usage(usage)
        .build();
    let source = renderer.render(&descriptor)?;

    debug!(
        value_type = %value_type.qualified_name(),
        class = %request.class_name,
        "class generated"
    );

    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use automap_schema::{
        node::{Accessor, Marker, TypeRef, ValueType},
        resolve::JavaUtil,
    };

    fn map_value_type() -> ValueType {
        ValueType::new("com.example", "User")
            .extends(gate::map_type())
            .property(Accessor::new("name", "java.lang.String"))
            .property(
                Accessor::new("id", "java.lang.Integer").marker(
                    Marker::new("com.google.gson.annotations.SerializedName")
                        .attr("value", "identifier"),
                ),
            )
    }

    #[test]
    fn generates_keys_in_declaration_order() {
        let request = GenerationRequest::new(map_value_type(), "AutoValue_User", "$AutoValue_User", true);
        let out = generate(&request, &JavaUtil).unwrap();

        let name = out.find(r#""name""#).unwrap();
        let identifier = out.find(r#""identifier""#).unwrap();
        assert!(name < identifier);
    }

    #[test]
    fn raw_map_hierarchy_gets_erased_mutators() {
        let ty = ValueType::new("com.example", "Raw")
            .extends(TypeRef::new("java.util.Map"))
            .property(Accessor::new("name", "java.lang.String"));
        let request = GenerationRequest::new(ty, "AutoValue_Raw", "$AutoValue_Raw", true);

        let out = generate(&request, &JavaUtil).unwrap();

        assert!(out.contains("public Object put(Object key, Object value) {"));
        assert!(out.contains("public void putAll(Map other) {"));
        assert!(!out.contains("put(String key"));
    }

    #[test]
    fn parameterized_map_keeps_typed_mutators() {
        let request = GenerationRequest::new(map_value_type(), "AutoValue_User", "$AutoValue_User", true);
        let out = generate(&request, &JavaUtil).unwrap();

        assert!(out.contains("public Object put(String key, Object value) {"));
        assert!(out.contains("public void putAll(Map<? extends String, ?> other) {"));
    }

    #[test]
    fn inapplicable_type_is_refused() {
        let ty = ValueType::new("com.example", "Plain").extends(TypeRef::new("java.lang.Object"));
        let request = GenerationRequest::new(ty, "AutoValue_Plain", "$AutoValue_Plain", true);

        let err = generate(&request, &JavaUtil).unwrap_err();

        assert!(matches!(err, Error::Inapplicable { ref type_name } if type_name == "com.example.Plain"));
    }

    #[test]
    fn failing_renderer_yields_error_not_text() {
        let renderer = Renderer::from_source("{{ properties[0].missing }}").unwrap();
        let request = GenerationRequest::new(map_value_type(), "AutoValue_User", "$AutoValue_User", true);

        let result = generate_with(&request, &JavaUtil, MarkerTable::builtin(), &renderer);

        assert!(matches!(result, Err(Error::Template(_))));
    }
}
