use crate::prelude::*;
use std::fmt::{self, Display};

///
/// MethodSig
///
/// A member of a contract type. Parameter and return types are kept as
/// source text in terms of the contract's own type variables.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct MethodSig {
    pub name: String,
    pub params: Vec<String>,
    pub return_type: String,
    pub kind: MethodKind,
}

impl MethodSig {
    pub fn new<I, S>(kind: MethodKind, return_type: &str, name: &str, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            params: params.into_iter().map(Into::into).collect(),
            return_type: return_type.to_string(),
            kind,
        }
    }

    #[must_use]
    pub const fn arity(&self) -> usize {
        self.params.len()
    }
}

impl Display for MethodSig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.params.join(", "))
    }
}
