use crate::error::{CodegenError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fully-qualified identity of a Rust type, e.g. `app::service::UserService`.
///
/// The string form is the dispatch key generated registries compare against,
/// so it is kept exactly as given (minus surrounding whitespace). It is only
/// ever parsed into `syn` when code is emitted.
///
/// Owned types of a registry must be spelled the way `std::any::type_name`
/// reports them, which is the defining path and not a re-export:
/// `alloc::string::String`, never `std::string::String`. That string is
/// diagnostic output of the compiler, so it is only stable for one toolchain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName(String);

impl TypeName {
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(CodegenError::UnresolvedType);
        }
        syn::parse_str::<syn::Type>(name).map_err(|e| CodegenError::invalid_type(name, e.to_string()))?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment (`UserService` for `app::service::UserService`).
    pub fn simple_name(&self) -> &str {
        self.0.rsplit("::").next().unwrap_or(&self.0).trim()
    }

    /// Everything before the last path segment, if any.
    pub fn module_path(&self) -> Option<&str> {
        self.0.rsplit_once("::").map(|(module, _)| module.trim()).filter(|m| !m.is_empty())
    }

    pub fn to_type(&self) -> Result<syn::Type> {
        syn::parse_str(&self.0).map_err(|e| CodegenError::invalid_type(&self.0, e.to_string()))
    }

    /// Parses the name as a plain path: no `dyn`/`impl`, no references or
    /// tuples, no qualified self and no generic arguments on any segment.
    ///
    /// This is what a constructible (and registrable) type must look like.
    pub fn to_plain_path(&self) -> Result<syn::Path> {
        let path = match self.to_type()? {
            syn::Type::Path(type_path) if type_path.qself.is_none() => type_path.path,
            syn::Type::TraitObject(_) | syn::Type::ImplTrait(_) => {
                return Err(CodegenError::unsupported(&self.0, "abstract types cannot be constructed"));
            }
            _ => {
                return Err(CodegenError::unsupported(&self.0, "expected a plain type path"));
            }
        };

        if path.segments.iter().any(|s| !s.arguments.is_none()) {
            return Err(CodegenError::unsupported(&self.0, "generic types are not supported"));
        }
        Ok(path)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TypeName {
    type Error = CodegenError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TypeName {
    type Error = CodegenError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<TypeName> for String {
    fn from(value: TypeName) -> Self {
        value.0
    }
}
