use crate::prelude::*;
use derive_more::Display;

///
/// MethodKind
///
/// How a dictionary-contract member is declared on the contract type.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
pub enum MethodKind {
    Abstract,
    Default,
    ObjectInherited,
    Static,
}

impl MethodKind {
    /// Members an implementing class is actually obliged to provide.
    #[must_use]
    pub const fn is_abstract(self) -> bool {
        matches!(self, Self::Abstract)
    }
}
