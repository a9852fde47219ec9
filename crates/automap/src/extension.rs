use automap_build::{
    Error, MarkerTable, Renderer,
    gate::{self, CAPABILITIES},
};
use automap_config::Config;
use automap_schema::{
    node::{GenerationRequest, MethodSig, ValueType},
    resolve::{JavaUtil, TypeResolver},
};
use std::{collections::BTreeSet, path::Path};
use tracing::info;

///
/// MapExtension
///
/// The host-facing extension: answers whether a value type is handled, which
/// dictionary members it takes over, and generates the implementing class.
/// Holds no per-request state, so one instance can serve many threads.
///

#[derive(Clone, Debug)]
pub struct MapExtension<R = JavaUtil> {
    types: R,
    markers: MarkerTable,
    renderer: Option<Renderer>,
}

impl MapExtension<JavaUtil> {
    /// Built-in markers, embedded template, `java.util` types only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: JavaUtil,
            markers: MarkerTable::default(),
            renderer: None,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let extension = Self {
            types: JavaUtil,
            markers: MarkerTable::from_config(&config.markers),
            renderer: Renderer::from_config(&config.template)?,
        };

        info!(
            markers = extension.markers.len(),
            custom_template = extension.renderer.is_some(),
            "map extension configured"
        );

        Ok(extension)
    }

    /// Configure from `automap.toml` in `dir`, if there is one.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self, Error> {
        Self::from_config(&Config::discover(dir)?)
    }
}

impl Default for MapExtension<JavaUtil> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TypeResolver> MapExtension<R> {
    /// Resolve supertypes through `types` before falling back to the current
    /// resolver.
    pub fn with_types<T: TypeResolver>(self, types: T) -> MapExtension<(T, R)> {
        MapExtension {
            types: (types, self.types),
            markers: self.markers,
            renderer: self.renderer,
        }
    }

    #[must_use]
    pub fn applicable(&self, value_type: &ValueType) -> bool {
        gate::applicable(value_type, &self.types)
    }

    #[must_use]
    pub fn consumed_methods(&self) -> &'static BTreeSet<MethodSig> {
        gate::consumed_methods()
    }

    /// Names of the consumed members, `remove` meaning its one-argument form.
    #[must_use]
    pub const fn capabilities(&self) -> &'static [&'static str] {
        &CAPABILITIES
    }

    pub fn generate_class(&self, request: &GenerationRequest) -> Result<String, Error> {
        let renderer = match &self.renderer {
            Some(renderer) => renderer,
            None => Renderer::embedded()?,
        };

        automap_build::generate_with(request, &self.types, &self.markers, renderer)
    }
}
