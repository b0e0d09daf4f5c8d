use super::factory::{
    ErasedFactory, ErasedMemberInjector, Factory, MemberInjector, unerase_factory,
    unerase_member_injector,
};
use std::any::type_name;

/// Maps a type name to its generated factory
///
/// Generated registries implement this with a `match` on the exact name. A
/// type nobody registered yields `None`; deciding whether that is fatal is up
/// to the container.
pub trait FactoryRegistry: Send + Sync {
    fn get_factory_for(&self, type_name: &str) -> Option<ErasedFactory>;
}

/// Maps a type name to its generated member injector
pub trait MemberInjectorRegistry: Send + Sync {
    fn get_member_injector_for(&self, type_name: &str) -> Option<ErasedMemberInjector>;
}

/// Child registries of a generated registry, in registration order
///
/// Filled once by the generated constructor and read-only afterwards.
pub struct ChildRegistries<R: ?Sized> {
    registries: Vec<Box<R>>,
}

impl<R: ?Sized> ChildRegistries<R> {
    pub fn new() -> Self {
        Self {
            registries: Vec::new(),
        }
    }

    pub fn add_child_registry(&mut self, registry: Box<R>) {
        self.registries.push(registry);
    }

    pub fn len(&self) -> usize {
        self.registries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }
}

impl<R: ?Sized> Default for ChildRegistries<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl ChildRegistries<dyn FactoryRegistry> {
    /// First child (in registration order) that knows `type_name`
    pub fn get_factory_in_children(&self, type_name: &str) -> Option<ErasedFactory> {
        self.registries
            .iter()
            .find_map(|registry| registry.get_factory_for(type_name))
    }
}

impl ChildRegistries<dyn MemberInjectorRegistry> {
    pub fn get_member_injector_in_children(&self, type_name: &str) -> Option<ErasedMemberInjector> {
        self.registries
            .iter()
            .find_map(|registry| registry.get_member_injector_for(type_name))
    }
}

/// Typed lookup keyed on `std::any::type_name::<T>()`
///
/// Only finds types registered under that exact spelling, i.e. the defining
/// path (`alloc::string::String`), not a re-export (`std::string::String`).
///
/// # Example
/// ```ignore
/// let factory = factory_for::<UserService>(&FactoryRegistry::new());
/// ```
pub fn factory_for<T: 'static>(registry: &dyn FactoryRegistry) -> Option<Box<dyn Factory<T>>> {
    let name = type_name::<T>();
    let factory = registry.get_factory_for(name).and_then(unerase_factory::<T>);
    if factory.is_none() {
        tracing::trace!("No factory registered for {}", name);
    }
    factory
}

pub fn member_injector_for<T: 'static>(
    registry: &dyn MemberInjectorRegistry,
) -> Option<Box<dyn MemberInjector<T>>> {
    registry
        .get_member_injector_for(type_name::<T>())
        .and_then(unerase_member_injector::<T>)
}
