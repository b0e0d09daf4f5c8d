use super::paths::{PathResolver, ident};
use super::{CodeGenerator, naming, render};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::model::{InjectedMember, MemberInjectorDescriptor, RegistryKind};
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};

/// Generates the member injector of one type
///
/// Fields are assigned and injectable methods called on an existing instance,
/// in declaration order. A method's parameters are all resolved before the
/// method is called.
pub struct MemberInjectorGenerator<'a> {
    descriptor: &'a MemberInjectorDescriptor,
    config: &'a GeneratorConfig,
}

impl<'a> MemberInjectorGenerator<'a> {
    pub fn new(descriptor: &'a MemberInjectorDescriptor, config: &'a GeneratorConfig) -> Self {
        Self { descriptor, config }
    }

    fn emit(&self, paths: &PathResolver) -> Result<TokenStream2> {
        let descriptor = self.descriptor;
        let target = paths.resolve_plain_path(&descriptor.target_type)?;
        let injector_ident = format_ident!(
            "{}",
            naming::generated_simple_name(&descriptor.target_type, RegistryKind::MemberInjector)
        );
        let member_injector_trait = paths.runtime_item("MemberInjector");
        let injector_trait = paths.runtime_item("Injector");
        let doc = format!(" Member injector of `{}`.", descriptor.target_type);

        let mut counter = 0;
        let mut statements = Vec::with_capacity(descriptor.members.len());
        for member in &descriptor.members {
            statements.push(Self::emit_member(paths, member, &mut counter)?);
        }
        let allow_unused = descriptor
            .members
            .is_empty()
            .then(|| quote!(#[allow(unused_variables)]));

        Ok(quote! {
            #[doc = #doc]
            #[allow(non_camel_case_types)]
            pub struct #injector_ident;

            impl #member_injector_trait<#target> for #injector_ident {
                #allow_unused
                fn inject(&self, target: &mut #target, injector: &dyn #injector_trait) {
                    #(#statements)*
                }
            }
        })
    }

    fn emit_member(
        paths: &PathResolver,
        member: &InjectedMember,
        counter: &mut usize,
    ) -> Result<TokenStream2> {
        match member {
            InjectedMember::Field { name, ty } => {
                let field = ident(name)?;
                let ty = paths.resolve_type(ty)?;
                Ok(quote! {
                    target.#field = injector.get_instance::<#ty>();
                })
            }
            InjectedMember::Method { name, parameters } => {
                let method = ident(name)?;
                let mut resolutions = Vec::with_capacity(parameters.len());
                let mut bindings = Vec::with_capacity(parameters.len());
                for parameter in parameters {
                    let ty = paths.resolve_type(parameter)?;
                    let binding = format_ident!("{}", naming::parameter_binding(*counter));
                    *counter += 1;
                    resolutions.push(quote! {
                        let #binding = injector.get_instance::<#ty>();
                    });
                    bindings.push(binding);
                }
                Ok(quote! {
                    #(#resolutions)*
                    target.#method(#(#bindings),*);
                })
            }
        }
    }
}

impl CodeGenerator for MemberInjectorGenerator<'_> {
    #[tracing::instrument(skip_all, fields(target_type = %self.descriptor.target_type))]
    fn brew(&self) -> Result<String> {
        let paths = PathResolver::new(self.config)?;
        let tokens = self.emit(&paths)?;
        render(&self.fqn()?, &self.config.file_header, tokens)
    }

    fn fqn(&self) -> Result<String> {
        self.descriptor.target_type.to_plain_path()?;
        Ok(naming::artifact_fqn(
            &self.descriptor.target_type,
            RegistryKind::MemberInjector,
        ))
    }
}
