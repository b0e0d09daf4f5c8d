use std::any::{Any, type_name};

/// The runtime side that hands out dependencies
///
/// Generated factories and member injectors only ever talk to a `dyn Injector`.
/// The object-safe methods take the requested type's name; the typed helpers
/// on `dyn Injector` are what generated code calls.
///
/// # Example
/// ```
/// use meshestra_codegen::runtime::Injector;
/// use std::any::Any;
///
/// struct Fixed;
///
/// impl Injector for Fixed {
///     fn instance_of(&self, _type_name: &'static str) -> Box<dyn Any> {
///         Box::new(42u32)
///     }
///
///     fn inject_members(&self, _target: &mut dyn Any, _type_name: &'static str) {}
/// }
///
/// let injector: &dyn Injector = &Fixed;
/// assert_eq!(injector.get_instance::<u32>(), 42);
/// ```
pub trait Injector: Send + Sync {
    /// Produce an instance of the type named `type_name`
    fn instance_of(&self, type_name: &'static str) -> Box<dyn Any>;

    /// Run member injection on `target`, whose type is named `type_name`
    fn inject_members(&self, target: &mut dyn Any, type_name: &'static str);
}

impl dyn Injector + '_ {
    /// Resolve an instance of `T`
    ///
    /// # Panics
    ///
    /// Panics if the injector answers with a value of another type. That is a
    /// bug in the injector, never in the generated code asking for `T`.
    pub fn get_instance<T: Any>(&self) -> T {
        let name = type_name::<T>();
        match self.instance_of(name).downcast::<T>() {
            Ok(instance) => *instance,
            Err(_) => panic!("Injector returned a value of the wrong type for '{}'", name),
        }
    }

    /// Run member injection on an already constructed instance
    pub fn inject<T: Any>(&self, target: &mut T) {
        self.inject_members(target, type_name::<T>());
    }
}
