//! Runtime contract of generated code
//!
//! Generated factories, member injectors and registries implement the traits
//! in this module; the container that drives them lives elsewhere. Nothing
//! here holds state beyond the child list a registry fills at construction.

mod factory;
mod injector;
mod registry;

#[cfg(test)]
mod golden;

pub use factory::{
    ErasedFactory, ErasedMemberInjector, Factory, MemberInjector, erase_factory,
    erase_member_injector, unerase_factory, unerase_member_injector,
};
pub use injector::Injector;
pub use registry::{
    ChildRegistries, FactoryRegistry, MemberInjectorRegistry, factory_for, member_injector_for,
};
