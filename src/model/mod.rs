//! Descriptors handed over by the metadata collector
//!
//! These are immutable value objects: built once, consumed by exactly one
//! generator, then dropped.

mod descriptor;
mod request;
mod type_name;

pub use descriptor::{
    InjectableTypeDescriptor, InjectedMember, MemberInjectorDescriptor, RegistryDescriptor,
    RegistryKind,
};
pub use request::{BoxedGenerator, GenerationRequest};
pub use type_name::TypeName;
