use crate::config::GeneratorConfig;
use crate::error::{CodegenError, Result};
use crate::model::TypeName;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::visit_mut::{self, VisitMut};

/// Turns type identities into the paths written in generated code.
///
/// Identities are crate-qualified (`app::service::UserService`, the way
/// `std::any::type_name` reports them). Inside the `local_crate` itself those
/// paths have to start with `crate`, so they are rewritten here. Dispatch keys
/// never go through this type.
pub(crate) struct PathResolver {
    runtime: syn::Path,
    local_crate: Option<String>,
}

impl PathResolver {
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let runtime = syn::parse_str(&config.runtime_path).map_err(|e| {
            CodegenError::config("runtime_path", format!("`{}`: {}", config.runtime_path, e))
        })?;
        Ok(Self {
            runtime,
            local_crate: config.local_crate.clone(),
        })
    }

    /// `<runtime>::name`
    pub fn runtime_item(&self, name: &str) -> TokenStream2 {
        let runtime = &self.runtime;
        let ident = format_ident!("{}", name);
        quote!(#runtime::#ident)
    }

    pub fn resolve_type(&self, type_name: &TypeName) -> Result<syn::Type> {
        let mut ty = type_name.to_type()?;
        self.rewriter(false).visit_type_mut(&mut ty);
        Ok(ty)
    }

    pub fn resolve_plain_path(&self, type_name: &TypeName) -> Result<syn::Path> {
        let mut path = type_name.to_plain_path()?;
        self.rewriter(false).visit_path_mut(&mut path);
        Ok(path)
    }

    /// A module path such as a scope location, e.g. `app::feature`.
    pub fn resolve_module(&self, module: &str) -> Result<syn::Path> {
        let mut path = module_path(module)?;
        self.rewriter(true).visit_path_mut(&mut path);
        Ok(path)
    }

    fn rewriter(&self, module: bool) -> LocalCrateRewriter<'_> {
        LocalCrateRewriter {
            local_crate: self.local_crate.as_deref(),
            module,
        }
    }
}

struct LocalCrateRewriter<'a> {
    local_crate: Option<&'a str>,
    /// The outer path names a module, so a lone crate name is the crate root
    module: bool,
}

impl VisitMut for LocalCrateRewriter<'_> {
    fn visit_path_mut(&mut self, path: &mut syn::Path) {
        if let Some(local) = self.local_crate {
            let is_local = path
                .segments
                .first()
                .is_some_and(|segment| segment.ident == local);
            // A single-segment type path is a bare type name, not a crate.
            if is_local && (self.module || path.segments.len() > 1) {
                path.leading_colon = None;
                if let Some(first) = path.segments.first_mut() {
                    first.ident = syn::Ident::new("crate", first.ident.span());
                }
            }
        }
        self.module = false;
        visit_mut::visit_path_mut(self, path);
    }
}

/// Parses a module location such as `app::feature`; generic arguments are rejected.
pub(crate) fn module_path(module: &str) -> Result<syn::Path> {
    let path: syn::Path = syn::parse_str(module)
        .map_err(|e| CodegenError::invalid_type(module, format!("not a module path: {}", e)))?;
    if path.segments.iter().any(|s| !s.arguments.is_none()) {
        return Err(CodegenError::invalid_type(module, "module paths take no generic arguments"));
    }
    Ok(path)
}

/// Reserved by edition 2024 but still accepted by `syn` as identifiers.
const EDITION_RESERVED: &[&str] = &["gen"];

/// Parses a name that must be a plain identifier (struct, function, field).
pub(crate) fn ident(name: &str) -> Result<syn::Ident> {
    if EDITION_RESERVED.contains(&name) {
        return Err(CodegenError::invalid_identifier(name));
    }
    syn::parse_str::<syn::Ident>(name).map_err(|_| CodegenError::invalid_identifier(name))
}
