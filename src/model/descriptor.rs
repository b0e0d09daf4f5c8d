use super::TypeName;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

fn default_constructor() -> String {
    "new".to_string()
}

/// Everything needed to generate the factory of one injectable type.
///
/// # Example
/// ```
/// use meshestra_codegen::model::{InjectableTypeDescriptor, TypeName};
///
/// let descriptor = InjectableTypeDescriptor::new(TypeName::new("app::UserService")?)
///     .with_parameter(TypeName::new("std::sync::Arc<app::UserRepository>")?)
///     .singleton(true);
/// assert_eq!(descriptor.constructor_parameters.len(), 1);
/// # Ok::<(), meshestra_codegen::CodegenError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectableTypeDescriptor {
    pub built_type: TypeName,
    /// Associated function called with the resolved arguments
    #[serde(default = "default_constructor")]
    pub constructor: String,
    /// Argument types, in the exact order the constructor takes them
    #[serde(default)]
    pub constructor_parameters: Vec<TypeName>,
    #[serde(default)]
    pub needs_member_injection: bool,
    #[serde(default)]
    pub has_singleton_annotation: bool,
    #[serde(default)]
    pub has_produces_singleton_annotation: bool,
}

impl InjectableTypeDescriptor {
    pub fn new(built_type: TypeName) -> Self {
        Self {
            built_type,
            constructor: default_constructor(),
            constructor_parameters: Vec::new(),
            needs_member_injection: false,
            has_singleton_annotation: false,
            has_produces_singleton_annotation: false,
        }
    }

    pub fn with_constructor(mut self, constructor: impl Into<String>) -> Self {
        self.constructor = constructor.into();
        self
    }

    pub fn with_parameter(mut self, parameter: TypeName) -> Self {
        self.constructor_parameters.push(parameter);
        self
    }

    pub fn with_member_injection(mut self, needs_member_injection: bool) -> Self {
        self.needs_member_injection = needs_member_injection;
        self
    }

    pub fn singleton(mut self, value: bool) -> Self {
        self.has_singleton_annotation = value;
        self
    }

    pub fn produces_singleton(mut self, value: bool) -> Self {
        self.has_produces_singleton_annotation = value;
        self
    }
}

/// A member populated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InjectedMember {
    /// `target.name = injector.get_instance::<ty>()`
    Field { name: String, ty: TypeName },
    /// `target.name(param1, ..)` with every parameter resolved first
    Method {
        name: String,
        #[serde(default)]
        parameters: Vec<TypeName>,
    },
}

impl InjectedMember {
    pub fn name(&self) -> &str {
        match self {
            Self::Field { name, .. } | Self::Method { name, .. } => name,
        }
    }
}

/// Everything needed to generate the member injector of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInjectorDescriptor {
    pub target_type: TypeName,
    /// Populated in this order
    #[serde(default)]
    pub members: Vec<InjectedMember>,
}

impl MemberInjectorDescriptor {
    pub fn new(target_type: TypeName) -> Self {
        Self {
            target_type,
            members: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, ty: TypeName) -> Self {
        self.members.push(InjectedMember::Field {
            name: name.into(),
            ty,
        });
        self
    }

    pub fn with_method(mut self, name: impl Into<String>, parameters: Vec<TypeName>) -> Self {
        self.members.push(InjectedMember::Method {
            name: name.into(),
            parameters,
        });
        self
    }
}

/// Which flavour of registry is generated, and therefore which generated
/// artifacts it routes to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RegistryKind {
    Factory,
    MemberInjector,
}

/// One scope level of the registry hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryDescriptor {
    /// Struct name, identical at every scope level
    pub registry_name: String,
    /// Module the registry is generated into
    pub scope_package: String,
    /// Types this scope resolves itself; identities must be unique
    #[serde(default)]
    pub owned_types: Vec<TypeName>,
    /// Child scope modules, in construction order
    #[serde(default)]
    pub child_scope_locations: Vec<String>,
    pub kind: RegistryKind,
}

impl RegistryDescriptor {
    pub fn new(
        kind: RegistryKind,
        registry_name: impl Into<String>,
        scope_package: impl Into<String>,
    ) -> Self {
        Self {
            registry_name: registry_name.into(),
            scope_package: scope_package.into(),
            owned_types: Vec::new(),
            child_scope_locations: Vec::new(),
            kind,
        }
    }

    pub fn with_owned_type(mut self, type_name: TypeName) -> Self {
        self.owned_types.push(type_name);
        self
    }

    pub fn with_child(mut self, location: impl Into<String>) -> Self {
        self.child_scope_locations.push(location.into());
        self
    }

    /// `scope_package::registry_name`
    pub fn fqn(&self) -> String {
        if self.scope_package.is_empty() {
            self.registry_name.clone()
        } else {
            format!("{}::{}", self.scope_package, self.registry_name)
        }
    }
}
