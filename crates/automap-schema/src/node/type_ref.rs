use crate::prelude::*;
use std::fmt::{self, Display};

///
/// TypeRef
///
/// A type usage: a qualified name plus type arguments. An empty argument list
/// is either a non-generic type, a raw use of a generic type, or a type
/// variable; which one depends on the declaration it is resolved against.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct TypeRef {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Self>,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(name: impl Into<String>, args: impl IntoIterator<Item = Self>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    #[must_use]
    pub const fn is_raw(&self) -> bool {
        self.args.is_empty()
    }

    /// Replace type variables named in `params` with the matching entry of
    /// `args`. Variables without a matching argument are left untouched.
    #[must_use]
    pub fn substitute(&self, params: &[String], args: &[Self]) -> Self {
        if self.args.is_empty()
            && let Some(index) = params.iter().position(|p| *p == self.name)
            && let Some(arg) = args.get(index)
        {
            return arg.clone();
        }

        Self {
            name: self.name.clone(),
            args: self
                .args
                .iter()
                .map(|arg| arg.substitute(params, args))
                .collect(),
        }
    }

    /// Erase all type arguments, as a raw reference does to its supertypes.
    #[must_use]
    pub fn erased(&self) -> Self {
        Self::new(self.name.clone())
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;

        if !self.args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }

        Ok(())
    }
}

///
/// TypeDecl
///
/// A declared type as the host type system sees it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TypeDecl {
    pub name: String,

    #[serde(default)]
    pub type_parameters: Vec<String>,

    #[serde(default)]
    pub supertypes: Vec<TypeRef>,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
            supertypes: Vec::new(),
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

    /// Supertypes of this declaration as seen through the reference `usage`.
    ///
    /// A parameterized usage substitutes its arguments into the supertypes; a
    /// raw usage of a generic declaration erases them.
    #[must_use]
    pub fn supertypes_for(&self, usage: &TypeRef) -> Vec<TypeRef> {
        if usage.is_raw() && !self.type_parameters.is_empty() {
            return self.supertypes.iter().map(TypeRef::erased).collect();
        }

        self.supertypes
            .iter()
            .map(|s| s.substitute(&self.type_parameters, &usage.args))
            .collect()
    }
}
