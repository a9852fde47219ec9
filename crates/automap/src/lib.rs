//! automap — map-backed implementations for value types.
//!
//! This is the public meta-crate. Hosts depend on **automap** only.
//!
//! It re-exports:
//!   - `automap-schema` (host metadata model)
//!   - `automap-config` (`automap.toml`)
//!   - `automap-build`  (gate, resolver, descriptor, renderer)
//!
//! and provides [`MapExtension`], the object a host drives per value type.

pub use automap_build as build;
pub use automap_config as config;
pub use automap_schema as schema;

pub use automap_build::Error;

mod extension;

pub use extension::MapExtension;

///
/// Prelude
///

pub mod prelude {
    pub use crate::MapExtension;
    pub use automap_build::{ClassDescriptor, Error, PropertySpec};
    pub use automap_config::Config;
    pub use automap_schema::prelude::*;
}
