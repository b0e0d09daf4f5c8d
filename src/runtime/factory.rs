use super::Injector;
use std::any::Any;

/// A type-erased `Box<dyn Factory<T>>`, as returned by registries
pub type ErasedFactory = Box<dyn Any + Send + Sync>;

/// A type-erased `Box<dyn MemberInjector<T>>`, as returned by registries
pub type ErasedMemberInjector = Box<dyn Any + Send + Sync>;

/// Builds instances of `T`
///
/// This trait is implemented by generated `Type__Factory` structs. The
/// singleton queries only report what the type was annotated with; acting on
/// them is up to the container.
pub trait Factory<T>: Send + Sync {
    /// Build a new instance, resolving its dependencies from `injector`
    fn create_instance(&self, injector: &dyn Injector) -> T;

    fn has_singleton_annotation(&self) -> bool;

    fn has_produces_singleton_annotation(&self) -> bool;
}

/// Populates the injectable members of an existing `T`
///
/// Implemented by generated `Type__MemberInjector` structs.
pub trait MemberInjector<T>: Send + Sync {
    fn inject(&self, target: &mut T, injector: &dyn Injector);
}

/// Erase a factory so registries of mixed types can return it
pub fn erase_factory<T, F>(factory: F) -> ErasedFactory
where
    T: 'static,
    F: Factory<T> + 'static,
{
    let factory: Box<dyn Factory<T>> = Box::new(factory);
    Box::new(factory)
}

pub fn erase_member_injector<T, M>(member_injector: M) -> ErasedMemberInjector
where
    T: 'static,
    M: MemberInjector<T> + 'static,
{
    let member_injector: Box<dyn MemberInjector<T>> = Box::new(member_injector);
    Box::new(member_injector)
}

/// Recover the typed factory from an erased one
///
/// Returns `None` if the factory builds something other than `T`.
pub fn unerase_factory<T: 'static>(erased: ErasedFactory) -> Option<Box<dyn Factory<T>>> {
    erased.downcast::<Box<dyn Factory<T>>>().ok().map(|factory| *factory)
}

pub fn unerase_member_injector<T: 'static>(
    erased: ErasedMemberInjector,
) -> Option<Box<dyn MemberInjector<T>>> {
    erased
        .downcast::<Box<dyn MemberInjector<T>>>()
        .ok()
        .map(|member_injector| *member_injector)
}
