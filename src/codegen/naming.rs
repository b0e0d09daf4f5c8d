//! Naming convention shared by the generators and the registries
//!
//! A registry locates a generated artifact purely by name, so this module is
//! the only place the suffixes are spelled out.

use crate::error::Result;
use crate::model::{RegistryKind, TypeName};
use heck::ToSnakeCase;

pub const FACTORY_SUFFIX: &str = "__Factory";
pub const MEMBER_INJECTOR_SUFFIX: &str = "__MemberInjector";

pub fn suffix(kind: RegistryKind) -> &'static str {
    match kind {
        RegistryKind::Factory => FACTORY_SUFFIX,
        RegistryKind::MemberInjector => MEMBER_INJECTOR_SUFFIX,
    }
}

/// `UserService__Factory` for `app::service::UserService`.
pub fn generated_simple_name(type_name: &TypeName, kind: RegistryKind) -> String {
    format!("{}{}", type_name.simple_name(), suffix(kind))
}

/// Generated artifacts live next to the type they serve:
/// `app::service::UserService` becomes `app::service::UserService__Factory`.
pub fn generated_type_name(type_name: &TypeName, kind: RegistryKind) -> Result<TypeName> {
    TypeName::new(artifact_fqn(type_name, kind))
}

pub fn artifact_fqn(type_name: &TypeName, kind: RegistryKind) -> String {
    match type_name.module_path() {
        Some(module) => format!("{}::{}", module, generated_simple_name(type_name, kind)),
        None => generated_simple_name(type_name, kind),
    }
}

/// Name of the local binding holding a freshly built instance.
///
/// Falls back to `instance` when the snake-cased type name is not a usable
/// identifier or would collide with the `injector` argument or a `paramN`
/// binding.
pub fn instance_binding(type_name: &TypeName) -> String {
    let name = type_name.simple_name().to_snake_case();
    let usable = super::paths::ident(&name).is_ok()
        && name != "injector"
        && !name.starts_with("param");
    if usable { name } else { "instance".to_string() }
}

/// `param1`, `param2`, ... numbered from one.
pub fn parameter_binding(index: usize) -> String {
    format!("param{}", index + 1)
}

/// Registry trait implemented by a registry of this kind.
pub(crate) fn registry_trait(kind: RegistryKind) -> &'static str {
    match kind {
        RegistryKind::Factory => "FactoryRegistry",
        RegistryKind::MemberInjector => "MemberInjectorRegistry",
    }
}

pub(crate) fn lookup_method(kind: RegistryKind) -> &'static str {
    match kind {
        RegistryKind::Factory => "get_factory_for",
        RegistryKind::MemberInjector => "get_member_injector_for",
    }
}

pub(crate) fn children_lookup_method(kind: RegistryKind) -> &'static str {
    match kind {
        RegistryKind::Factory => "get_factory_in_children",
        RegistryKind::MemberInjector => "get_member_injector_in_children",
    }
}

pub(crate) fn erase_helper(kind: RegistryKind) -> &'static str {
    match kind {
        RegistryKind::Factory => "erase_factory",
        RegistryKind::MemberInjector => "erase_member_injector",
    }
}

pub(crate) fn erased_type(kind: RegistryKind) -> &'static str {
    match kind {
        RegistryKind::Factory => "ErasedFactory",
        RegistryKind::MemberInjector => "ErasedMemberInjector",
    }
}
