use crate::error::{CodegenError, Result};
use std::env;

pub const ENV_RUNTIME_PATH: &str = "MESHESTRA_CODEGEN_RUNTIME_PATH";
pub const ENV_LOCAL_CRATE: &str = "MESHESTRA_CODEGEN_LOCAL_CRATE";
pub const ENV_HEADER: &str = "MESHESTRA_CODEGEN_HEADER";
pub const ENV_WORKER_THREADS: &str = "MESHESTRA_CODEGEN_WORKER_THREADS";

pub const DEFAULT_RUNTIME_PATH: &str = "::meshestra_codegen::runtime";
pub const DEFAULT_FILE_HEADER: &str = "Generated code from Meshestra. Do not modify!";

/// Generator configuration
///
/// Shared by every emitter. Only affects how paths are spelled and what the
/// artifacts look like on top, never the dispatch semantics.
///
/// # Example
/// ```
/// use meshestra_codegen::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_local_crate("app")
///     .with_worker_threads(4);
/// assert_eq!(config.local_crate.as_deref(), Some("app"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path of the module holding the runtime contract the generated code implements
    pub runtime_path: String,
    /// Crate the artifacts are compiled into; its name is rewritten to `crate` in code paths
    pub local_crate: Option<String>,
    /// Line comment placed at the top of every artifact
    pub file_header: String,
    /// Threads used for batch generation, `None` means one per CPU
    pub worker_threads: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            local_crate: None,
            file_header: DEFAULT_FILE_HEADER.to_string(),
            worker_threads: None,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::vars())
    }

    /// Load configuration from key/value pairs, ignoring unknown keys
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();

        for (key, value) in vars {
            let value = value.as_ref().trim();
            match key.as_ref() {
                ENV_RUNTIME_PATH => {
                    if value.is_empty() {
                        return Err(CodegenError::config(ENV_RUNTIME_PATH, "must not be empty"));
                    }
                    syn::parse_str::<syn::Path>(value).map_err(|e| {
                        CodegenError::config(ENV_RUNTIME_PATH, format!("`{}` is not a path: {}", value, e))
                    })?;
                    config.runtime_path = value.to_string();
                }
                ENV_LOCAL_CRATE => {
                    config.local_crate = (!value.is_empty()).then(|| value.to_string());
                }
                ENV_HEADER => config.file_header = value.to_string(),
                ENV_WORKER_THREADS => {
                    let threads: usize = value.parse().map_err(|_| {
                        CodegenError::config(ENV_WORKER_THREADS, format!("`{}` is not a number", value))
                    })?;
                    if threads == 0 {
                        return Err(CodegenError::config(ENV_WORKER_THREADS, "must be at least 1"));
                    }
                    config.worker_threads = Some(threads);
                }
                _ => {}
            }
        }

        tracing::debug!(
            "Generator config: runtime={}, local_crate={:?}",
            config.runtime_path,
            config.local_crate
        );
        Ok(config)
    }

    pub fn with_runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    pub fn with_local_crate(mut self, name: impl Into<String>) -> Self {
        self.local_crate = Some(name.into());
        self
    }

    pub fn with_file_header(mut self, header: impl Into<String>) -> Self {
        self.file_header = header.into();
        self
    }

    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }
}
