//! # Meshestra Codegen
//!
//! Build-time generation of dependency-injection glue for Meshestra.
//!
//! A metadata collector describes the injectable types of a build; this crate
//! turns those descriptors into Rust source so the container never has to
//! resolve anything by reflection.
//!
//! ## Features
//!
//! - **Factories**: one `Type__Factory` per injectable type, resolving constructor
//!   arguments from an injector in declaration order
//! - **Member Injectors**: one `Type__MemberInjector` per type with injectable fields or methods
//! - **Registries**: one dispatch table per scope, keyed by exact type name and
//!   falling back to child scopes
//! - **Batch Generation**: independent generators run on a rayon pool with deterministic output
//!
//! ## Quick Start
//!
//! ```rust
//! use meshestra_codegen::prelude::*;
//!
//! let service = TypeName::new("app::service::UserService")?;
//! let factory = InjectableTypeDescriptor::new(service.clone())
//!     .with_parameter(TypeName::new("app::repo::UserRepository")?)
//!     .singleton(true);
//! let registry = RegistryDescriptor::new(RegistryKind::Factory, "FactoryRegistry", "app")
//!     .with_owned_type(service);
//!
//! let config = GeneratorConfig::default().with_local_crate("app");
//! let generators: Vec<BoxedGenerator<'_>> = vec![
//!     Box::new(FactoryGenerator::new(&factory, &config)) as BoxedGenerator,
//!     Box::new(RegistryGenerator::new(&registry, &config)) as BoxedGenerator,
//! ];
//!
//! let artifacts = GenerationPool::new(2)?.generate_all(&generators)?;
//! assert_eq!(artifacts[0].fqn, "app::FactoryRegistry");
//! assert_eq!(artifacts[1].fqn, "app::service::UserService__Factory");
//! # Ok::<(), meshestra_codegen::CodegenError>(())
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod model;
pub mod runtime;
pub mod worker;

// Re-export core types
pub use codegen::{
    CodeGenerator, FactoryGenerator, GeneratedArtifact, MemberInjectorGenerator,
    RegistryGenerator,
};
pub use config::GeneratorConfig;
pub use error::{CodegenError, Result};
pub use worker::GenerationPool;

/// Prelude module for convenient imports
///
/// ```
/// use meshestra_codegen::prelude::*;
/// ```
pub mod prelude {
    pub use crate::codegen::{
        CodeGenerator, FactoryGenerator, GeneratedArtifact, MemberInjectorGenerator,
        RegistryGenerator,
    };
    pub use crate::config::GeneratorConfig;
    pub use crate::error::{CodegenError, Result};
    pub use crate::model::{
        BoxedGenerator, GenerationRequest, InjectableTypeDescriptor, InjectedMember,
        MemberInjectorDescriptor, RegistryDescriptor, RegistryKind, TypeName,
    };
    pub use crate::worker::GenerationPool;
}
