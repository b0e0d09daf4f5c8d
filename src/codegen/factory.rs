use super::paths::{PathResolver, ident};
use super::{CodeGenerator, naming, render};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::model::{InjectableTypeDescriptor, RegistryKind};
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};

/// Generates the factory of one injectable type
///
/// The factory resolves every constructor argument from the injector, in
/// declaration order, calls the constructor with them, optionally runs member
/// injection on the new instance and returns it. It never caches: every
/// `create_instance` call builds a new instance.
///
/// # Example
/// ```
/// use meshestra_codegen::{CodeGenerator, GeneratorConfig, FactoryGenerator};
/// use meshestra_codegen::model::{InjectableTypeDescriptor, TypeName};
///
/// let descriptor = InjectableTypeDescriptor::new(TypeName::new("app::UserService")?)
///     .with_parameter(TypeName::new("app::UserRepository")?);
/// let config = GeneratorConfig::default();
/// let artifact = FactoryGenerator::new(&descriptor, &config).generate()?;
///
/// assert_eq!(artifact.fqn, "app::UserService__Factory");
/// assert!(artifact.source.contains("injector.get_instance::<app::UserRepository>()"));
/// # Ok::<(), meshestra_codegen::CodegenError>(())
/// ```
pub struct FactoryGenerator<'a> {
    descriptor: &'a InjectableTypeDescriptor,
    config: &'a GeneratorConfig,
}

impl<'a> FactoryGenerator<'a> {
    pub fn new(descriptor: &'a InjectableTypeDescriptor, config: &'a GeneratorConfig) -> Self {
        Self { descriptor, config }
    }

    fn emit(&self, paths: &PathResolver) -> Result<TokenStream2> {
        let descriptor = self.descriptor;
        let built = paths.resolve_plain_path(&descriptor.built_type)?;
        let factory_ident = format_ident!(
            "{}",
            naming::generated_simple_name(&descriptor.built_type, RegistryKind::Factory)
        );
        let factory_trait = paths.runtime_item("Factory");
        let injector_trait = paths.runtime_item("Injector");
        let doc = format!(" Factory of `{}`.", descriptor.built_type);

        let create_instance = self.emit_create_instance(paths, &built)?;
        // Nothing to resolve and nothing to inject leaves the injector unread.
        let allow_unused = (descriptor.constructor_parameters.is_empty()
            && !descriptor.needs_member_injection)
            .then(|| quote!(#[allow(unused_variables)]));
        let has_singleton = descriptor.has_singleton_annotation;
        let has_produces_singleton = descriptor.has_produces_singleton_annotation;

        Ok(quote! {
            #[doc = #doc]
            #[allow(non_camel_case_types)]
            pub struct #factory_ident;

            impl #factory_trait<#built> for #factory_ident {
                #allow_unused
                fn create_instance(&self, injector: &dyn #injector_trait) -> #built {
                    #create_instance
                }

                fn has_singleton_annotation(&self) -> bool {
                    #has_singleton
                }

                fn has_produces_singleton_annotation(&self) -> bool {
                    #has_produces_singleton
                }
            }
        })
    }

    /// Body of `create_instance`: one resolver call per parameter, then the
    /// constructor, then member injection, then the instance.
    fn emit_create_instance(&self, paths: &PathResolver, built: &syn::Path) -> Result<TokenStream2> {
        let descriptor = self.descriptor;
        let constructor = ident(&descriptor.constructor)?;
        let instance = format_ident!("{}", naming::instance_binding(&descriptor.built_type));

        let mut resolutions = Vec::with_capacity(descriptor.constructor_parameters.len());
        let mut bindings = Vec::with_capacity(descriptor.constructor_parameters.len());
        for (index, parameter) in descriptor.constructor_parameters.iter().enumerate() {
            let ty = paths.resolve_type(parameter)?;
            let binding = format_ident!("{}", naming::parameter_binding(index));
            resolutions.push(quote! {
                let #binding = injector.get_instance::<#ty>();
            });
            bindings.push(binding);
        }

        let construct = if descriptor.needs_member_injection {
            quote! {
                let mut #instance = #built::#constructor(#(#bindings),*);
                injector.inject(&mut #instance);
            }
        } else {
            quote! {
                let #instance = #built::#constructor(#(#bindings),*);
            }
        };

        Ok(quote! {
            #(#resolutions)*
            #construct
            #instance
        })
    }
}

impl CodeGenerator for FactoryGenerator<'_> {
    #[tracing::instrument(skip_all, fields(built_type = %self.descriptor.built_type))]
    fn brew(&self) -> Result<String> {
        let paths = PathResolver::new(self.config)?;
        let tokens = self.emit(&paths)?;
        render(&self.fqn()?, &self.config.file_header, tokens)
    }

    fn fqn(&self) -> Result<String> {
        // Rejects abstract and generic built types before anything is named after them.
        self.descriptor.built_type.to_plain_path()?;
        Ok(naming::artifact_fqn(&self.descriptor.built_type, RegistryKind::Factory))
    }
}
