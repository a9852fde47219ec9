//! Host metadata model for automap.
//!
//! Everything here is an immutable, serde-friendly description of what the
//! host compiler knows about a value type: its supertypes, its accessors and
//! the markers attached to them. Nothing in this crate performs codegen.

pub mod contract;
pub mod node;
pub mod resolve;
pub mod types;
pub mod well_known;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        contract::dictionary_contract,
        node::*,
        resolve::{JavaUtil, TypeResolver, TypeTable},
        types::MethodKind,
    };
    pub use serde::{Deserialize, Serialize};
}
