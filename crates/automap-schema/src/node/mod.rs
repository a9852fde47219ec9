mod marker;
mod method;
mod type_ref;
mod value_type;

pub use marker::*;
pub use method::*;
pub use type_ref::*;
pub use value_type::*;
