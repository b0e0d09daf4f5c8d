use super::{InjectableTypeDescriptor, MemberInjectorDescriptor, RegistryDescriptor};
use crate::codegen::{
    CodeGenerator, FactoryGenerator, MemberInjectorGenerator, RegistryGenerator,
};
use crate::config::GeneratorConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A generator behind a box, ready for the batch pool
pub type BoxedGenerator<'a> = Box<dyn CodeGenerator + Send + Sync + 'a>;

/// All descriptors of one build, as handed over by the metadata collector
///
/// # Example
/// ```
/// use meshestra_codegen::model::GenerationRequest;
///
/// let request = GenerationRequest::from_json(r#"{
///     "factories": [{ "built_type": "app::Clock" }],
///     "registries": [{
///         "registry_name": "FactoryRegistry",
///         "scope_package": "app",
///         "owned_types": ["app::Clock"],
///         "kind": "factory"
///     }]
/// }"#)?;
/// assert_eq!(request.len(), 2);
/// # Ok::<(), meshestra_codegen::CodegenError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub factories: Vec<InjectableTypeDescriptor>,
    #[serde(default)]
    pub member_injectors: Vec<MemberInjectorDescriptor>,
    #[serde(default)]
    pub registries: Vec<RegistryDescriptor>,
}

impl GenerationRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        let request: Self = serde_json::from_str(json)?;
        tracing::debug!(
            factories = request.factories.len(),
            member_injectors = request.member_injectors.len(),
            registries = request.registries.len(),
            "Loaded generation request"
        );
        Ok(request)
    }

    /// Number of artifacts this request produces
    pub fn len(&self) -> usize {
        self.factories.len() + self.member_injectors.len() + self.registries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One generator per descriptor: factories, then member injectors, then registries
    pub fn generators<'a>(&'a self, config: &'a GeneratorConfig) -> Vec<BoxedGenerator<'a>> {
        let mut generators: Vec<BoxedGenerator<'a>> = Vec::with_capacity(self.len());
        generators.extend(
            self.factories
                .iter()
                .map(|d| Box::new(FactoryGenerator::new(d, config)) as BoxedGenerator<'a>),
        );
        generators.extend(
            self.member_injectors
                .iter()
                .map(|d| Box::new(MemberInjectorGenerator::new(d, config)) as BoxedGenerator<'a>),
        );
        generators.extend(
            self.registries
                .iter()
                .map(|d| Box::new(RegistryGenerator::new(d, config)) as BoxedGenerator<'a>),
        );
        generators
    }
}
