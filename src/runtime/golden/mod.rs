//! Generated artifacts checked in as files and compiled against this runtime.
//!
//! The files are the generator's output for the descriptors in `descriptors`,
//! built with `runtime_path = "crate::runtime"` and this crate as the local
//! crate, so the dispatch keys are what `std::any::type_name` reports here.

pub mod service {
    #[derive(Debug, PartialEq)]
    pub struct Repo(pub u32);

    #[derive(Debug)]
    pub struct UserService {
        pub repo: Repo,
        pub name: String,
        pub injected: bool,
    }

    impl UserService {
        pub fn new(repo: Repo, name: String) -> Self {
            Self {
                repo,
                name,
                injected: false,
            }
        }
    }

    include!("user_service_factory.rs");
}

pub mod admin {
    use crate::runtime::{ErasedFactory, erase_factory};
    use std::any::type_name;
    use std::cell::Cell;

    thread_local! {
        pub static LOOKUPS: Cell<usize> = const { Cell::new(0) };
    }

    pub struct AuditLog;

    impl AuditLog {
        pub fn new() -> Self {
            Self
        }
    }

    include!("audit_log_factory.rs");

    /// Child scope; counts how often the parent falls back to it.
    pub struct FactoryRegistry;

    impl FactoryRegistry {
        pub fn new() -> Self {
            Self
        }
    }

    impl crate::runtime::FactoryRegistry for FactoryRegistry {
        fn get_factory_for(&self, name: &str) -> Option<ErasedFactory> {
            LOOKUPS.with(|lookups| lookups.set(lookups.get() + 1));
            (name == type_name::<AuditLog>())
                .then(|| erase_factory::<AuditLog, _>(AuditLog__Factory))
        }
    }
}

include!("factory_registry.rs");

#[cfg(test)]
mod tests {
    use super::admin::{AuditLog, LOOKUPS};
    use super::service::{Repo, UserService};
    use crate::codegen::{CodeGenerator, FactoryGenerator, RegistryGenerator, inspect};
    use crate::config::GeneratorConfig;
    use crate::model::{InjectableTypeDescriptor, RegistryDescriptor, RegistryKind, TypeName};
    use crate::runtime::{FactoryRegistry as _, Injector, factory_for};
    use std::any::{Any, type_name};
    use std::sync::Mutex;

    const CRATE: &str = "meshestra_codegen";
    const SCOPE: &str = "meshestra_codegen::runtime::golden";

    fn name(s: &str) -> TypeName {
        TypeName::new(s).unwrap()
    }

    fn config() -> GeneratorConfig {
        GeneratorConfig::default()
            .with_runtime_path("crate::runtime")
            .with_local_crate(CRATE)
    }

    mod descriptors {
        use super::*;

        pub fn user_service() -> InjectableTypeDescriptor {
            InjectableTypeDescriptor::new(name(&format!("{}::service::UserService", SCOPE)))
                .with_parameter(name(&format!("{}::service::Repo", SCOPE)))
                .with_parameter(name("String"))
                .with_member_injection(true)
                .singleton(true)
        }

        pub fn audit_log() -> InjectableTypeDescriptor {
            InjectableTypeDescriptor::new(name(&format!("{}::admin::AuditLog", SCOPE)))
                .produces_singleton(true)
        }

        pub fn registry() -> RegistryDescriptor {
            RegistryDescriptor::new(RegistryKind::Factory, "FactoryRegistry", SCOPE)
                .with_owned_type(name(&format!("{}::service::UserService", SCOPE)))
                .with_child(format!("{}::admin", SCOPE))
        }
    }

    /// Same formatting on both sides, comments dropped.
    fn canonical(source: &str) -> String {
        prettyplease::unparse(&inspect::parse(source))
    }

    fn assert_reproduces(checked_in: &str, generated: &str) {
        let header = generated.lines().next().unwrap();
        assert_eq!(checked_in.lines().next().unwrap(), header);
        assert_eq!(canonical(checked_in), canonical(generated));
    }

    #[derive(Default)]
    struct RecordingInjector {
        calls: Mutex<Vec<&'static str>>,
    }

    impl Injector for RecordingInjector {
        fn instance_of(&self, name: &'static str) -> Box<dyn Any> {
            self.calls.lock().unwrap().push(name);
            if name == type_name::<Repo>() {
                Box::new(Repo(7))
            } else {
                Box::new(String::from("ada"))
            }
        }

        fn inject_members(&self, target: &mut dyn Any, name: &'static str) {
            self.calls.lock().unwrap().push(name);
            if let Some(user) = target.downcast_mut::<UserService>() {
                user.injected = true;
            }
        }
    }

    #[test]
    fn test_checked_in_artifacts_match_the_generator() {
        let config = config();

        let factory = descriptors::user_service();
        let artifact = FactoryGenerator::new(&factory, &config).generate().unwrap();
        assert_eq!(artifact.fqn, format!("{}::service::UserService__Factory", SCOPE));
        assert_reproduces(include_str!("user_service_factory.rs"), &artifact.source);

        let factory = descriptors::audit_log();
        let artifact = FactoryGenerator::new(&factory, &config).generate().unwrap();
        assert_reproduces(include_str!("audit_log_factory.rs"), &artifact.source);

        let registry = descriptors::registry();
        let artifact = RegistryGenerator::new(&registry, &config).generate().unwrap();
        assert_eq!(artifact.fqn, format!("{}::FactoryRegistry", SCOPE));
        assert_reproduces(include_str!("factory_registry.rs"), &artifact.source);
    }

    #[test]
    fn test_dispatch_keys_are_the_reported_type_names() {
        let registry = descriptors::registry();
        assert_eq!(registry.owned_types[0].as_str(), type_name::<UserService>());
        assert_eq!(type_name::<AuditLog>(), format!("{}::admin::AuditLog", SCOPE));
    }

    #[test]
    fn test_generated_factory_builds_through_generated_registry() {
        LOOKUPS.with(|lookups| lookups.set(0));
        let registry = super::FactoryRegistry::new();
        let injector = RecordingInjector::default();

        let factory = factory_for::<UserService>(&registry).expect("owned by the root scope");
        let user = factory.create_instance(&injector);

        assert_eq!(user.repo, Repo(7));
        assert_eq!(user.name, "ada");
        assert!(user.injected);
        assert!(factory.has_singleton_annotation());
        assert!(!factory.has_produces_singleton_annotation());
        assert_eq!(
            *injector.calls.lock().unwrap(),
            vec![
                type_name::<Repo>(),
                type_name::<String>(),
                type_name::<UserService>()
            ]
        );
        assert_eq!(LOOKUPS.with(|lookups| lookups.get()), 0);
    }

    #[test]
    fn test_unowned_type_falls_back_to_children_once() {
        LOOKUPS.with(|lookups| lookups.set(0));
        let registry = super::FactoryRegistry::default();

        let factory = factory_for::<AuditLog>(&registry).expect("owned by the admin scope");
        assert!(factory.has_produces_singleton_annotation());
        assert!(!factory.has_singleton_annotation());
        assert_eq!(LOOKUPS.with(|lookups| lookups.get()), 1);

        assert!(registry.get_factory_for(type_name::<u8>()).is_none());
        assert_eq!(LOOKUPS.with(|lookups| lookups.get()), 2);
    }
}
