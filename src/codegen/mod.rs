//! Source generation
//!
//! Each generator turns exactly one descriptor into one artifact. Emission
//! builds a token stream with `quote!`, parses it back into a `syn::File` and
//! formats it with `prettyplease`, so the same descriptor always yields the
//! same bytes.

pub mod factory;
pub mod member_injector;
pub mod naming;
pub(crate) mod paths;
pub mod registry;

#[cfg(test)]
pub(crate) mod inspect;

pub use factory::FactoryGenerator;
pub use member_injector::MemberInjectorGenerator;
pub use registry::RegistryGenerator;

use crate::error::{CodegenError, Result};
use proc_macro2::TokenStream as TokenStream2;

/// Generated source of one artifact plus the identity the build pipeline
/// uses to decide where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub fqn: String,
    pub source: String,
}

/// A generator for a single artifact
///
/// Implementations are pure: they read their descriptor and configuration and
/// return freshly allocated text, so any number of them can run in parallel.
pub trait CodeGenerator {
    /// Render the artifact source
    fn brew(&self) -> Result<String>;

    /// Fully-qualified identity of the artifact
    fn fqn(&self) -> Result<String>;

    fn generate(&self) -> Result<GeneratedArtifact> {
        let fqn = self.fqn()?;
        let source = self.brew()?;
        tracing::debug!("Generated {} ({} bytes)", fqn, source.len());
        Ok(GeneratedArtifact { fqn, source })
    }
}

impl<G: CodeGenerator + ?Sized> CodeGenerator for Box<G> {
    fn brew(&self) -> Result<String> {
        (**self).brew()
    }

    fn fqn(&self) -> Result<String> {
        (**self).fqn()
    }

    fn generate(&self) -> Result<GeneratedArtifact> {
        (**self).generate()
    }
}

/// Formats an item token stream as a file, with the configured header on top.
pub(crate) fn render(fqn: &str, header: &str, tokens: TokenStream2) -> Result<String> {
    let file: syn::File =
        syn::parse2(tokens).map_err(|e| CodegenError::render(fqn, e.to_string()))?;
    let formatted = prettyplease::unparse(&file);

    if header.is_empty() {
        return Ok(formatted);
    }
    let mut source = String::with_capacity(formatted.len() + header.len() + 4);
    for line in header.lines() {
        source.push_str("// ");
        source.push_str(line);
        source.push('\n');
    }
    source.push('\n');
    source.push_str(&formatted);
    Ok(source)
}
