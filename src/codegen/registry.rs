use super::paths::{PathResolver, ident, module_path};
use super::{CodeGenerator, naming, render};
use crate::config::GeneratorConfig;
use crate::error::{CodegenError, Result};
use crate::model::RegistryDescriptor;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use std::collections::HashSet;

/// Generates the registry of one scope
///
/// The registry dispatches on the exact type name it is asked for. Owned types
/// get a freshly constructed generated factory (or member injector), anything
/// else is handed to the child registries, which were constructed and attached
/// once when the registry itself was built. An unknown type yields `None`.
///
/// # Example
/// ```
/// use meshestra_codegen::{CodeGenerator, GeneratorConfig, RegistryGenerator};
/// use meshestra_codegen::model::{RegistryDescriptor, RegistryKind, TypeName};
///
/// let descriptor = RegistryDescriptor::new(RegistryKind::Factory, "FactoryRegistry", "app")
///     .with_owned_type(TypeName::new("app::UserService")?)
///     .with_child("app::admin");
/// let config = GeneratorConfig::default();
/// let artifact = RegistryGenerator::new(&descriptor, &config).generate()?;
///
/// assert_eq!(artifact.fqn, "app::FactoryRegistry");
/// assert!(artifact.source.contains("\"app::UserService\" =>"));
/// # Ok::<(), meshestra_codegen::CodegenError>(())
/// ```
pub struct RegistryGenerator<'a> {
    descriptor: &'a RegistryDescriptor,
    config: &'a GeneratorConfig,
}

impl<'a> RegistryGenerator<'a> {
    pub fn new(descriptor: &'a RegistryDescriptor, config: &'a GeneratorConfig) -> Self {
        Self { descriptor, config }
    }

    fn check_owned_types(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.descriptor.owned_types.len());
        for owned in &self.descriptor.owned_types {
            if !seen.insert(owned.as_str()) {
                return Err(CodegenError::DuplicateOwnedType {
                    registry: self.descriptor.fqn(),
                    type_name: owned.to_string(),
                });
            }
        }
        Ok(())
    }

    fn emit(&self, paths: &PathResolver) -> Result<TokenStream2> {
        let descriptor = self.descriptor;
        let kind = descriptor.kind;
        let registry_ident = ident(&descriptor.registry_name)?;
        let registry_trait = paths.runtime_item(naming::registry_trait(kind));
        let child_registries = paths.runtime_item("ChildRegistries");
        let doc = format!(" {} registry of `{}`.", kind, descriptor.fqn());

        let constructor = self.emit_constructor(paths, &registry_ident)?;
        let lookup = self.emit_lookup(paths)?;

        Ok(quote! {
            #[doc = #doc]
            pub struct #registry_ident {
                children: #child_registries<dyn #registry_trait>,
            }

            impl #registry_ident {
                #constructor
            }

            impl Default for #registry_ident {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl #registry_trait for #registry_ident {
                #lookup
            }
        })
    }

    /// `new()` attaches one child registry per child scope, in order.
    fn emit_constructor(&self, paths: &PathResolver, registry_ident: &syn::Ident) -> Result<TokenStream2> {
        let child_registries = paths.runtime_item("ChildRegistries");
        let children = self
            .descriptor
            .child_scope_locations
            .iter()
            .map(|location| {
                let module = paths.resolve_module(location)?;
                Ok(quote! {
                    registry
                        .children
                        .add_child_registry(Box::new(#module::#registry_ident::new()));
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if children.is_empty() {
            return Ok(quote! {
                pub fn new() -> Self {
                    Self {
                        children: #child_registries::new(),
                    }
                }
            });
        }

        Ok(quote! {
            pub fn new() -> Self {
                let mut registry = Self {
                    children: #child_registries::new(),
                };
                #(#children)*
                registry
            }
        })
    }

    /// The dispatch table: one arm per owned type keyed by its exact name,
    /// children as the default.
    fn emit_lookup(&self, paths: &PathResolver) -> Result<TokenStream2> {
        let kind = self.descriptor.kind;
        let lookup = format_ident!("{}", naming::lookup_method(kind));
        let children_lookup = format_ident!("{}", naming::children_lookup_method(kind));
        let erase = paths.runtime_item(naming::erase_helper(kind));
        let erased = paths.runtime_item(naming::erased_type(kind));

        let arms = self
            .descriptor
            .owned_types
            .iter()
            .map(|owned| {
                let key = owned.as_str();
                let ty = paths.resolve_plain_path(owned)?;
                let generated = paths.resolve_plain_path(&naming::generated_type_name(owned, kind)?)?;
                Ok(quote! {
                    #key => Some(#erase::<#ty, _>(#generated)),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let body = if arms.is_empty() {
            quote! {
                self.children.#children_lookup(type_name)
            }
        } else {
            quote! {
                match type_name {
                    #(#arms)*
                    _ => self.children.#children_lookup(type_name),
                }
            }
        };

        Ok(quote! {
            fn #lookup(&self, type_name: &str) -> Option<#erased> {
                #body
            }
        })
    }
}

impl CodeGenerator for RegistryGenerator<'_> {
    #[tracing::instrument(skip_all, fields(registry = %self.descriptor.fqn(), kind = %self.descriptor.kind))]
    fn brew(&self) -> Result<String> {
        self.check_owned_types()?;
        let paths = PathResolver::new(self.config)?;
        let tokens = self.emit(&paths)?;
        tracing::debug!(
            "Registry dispatches {} types, {} children",
            self.descriptor.owned_types.len(),
            self.descriptor.child_scope_locations.len()
        );
        render(&self.fqn()?, &self.config.file_header, tokens)
    }

    fn fqn(&self) -> Result<String> {
        ident(&self.descriptor.registry_name)?;
        // An empty scope is the crate root.
        if !self.descriptor.scope_package.is_empty() {
            module_path(&self.descriptor.scope_package)?;
        }
        Ok(self.descriptor.fqn())
    }
}
