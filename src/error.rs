use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodegenError>;

/// Generation failures.
///
/// Every variant carries the identity of the offending type, member or
/// artifact so the build pipeline can point at the source defect.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("Unresolved type: an empty type name was handed to the generator")]
    UnresolvedType,

    #[error("Invalid type name `{type_name}`: {reason}")]
    InvalidTypeName { type_name: String, reason: String },

    #[error("Cannot generate code for `{type_name}`: {reason}")]
    UnsupportedBuiltType { type_name: String, reason: String },

    #[error("Invalid identifier: `{name}`")]
    InvalidIdentifier { name: String },

    #[error("Registry `{registry}` owns `{type_name}` more than once")]
    DuplicateOwnedType { registry: String, type_name: String },

    #[error("Artifact `{fqn}` was generated more than once")]
    DuplicateArtifact { fqn: String },

    #[error("Failed to render `{fqn}`: {message}")]
    Render { fqn: String, message: String },

    #[error("Invalid descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),

    #[error("Worker pool error: {0}")]
    WorkerPool(String),

    #[error("Invalid configuration value for {key}: {message}")]
    Config { key: String, message: String },
}

impl CodegenError {
    pub fn invalid_type(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTypeName {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    pub fn unsupported(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedBuiltType {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_identifier(name: impl Into<String>) -> Self {
        Self::InvalidIdentifier { name: name.into() }
    }

    pub fn render(fqn: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            fqn: fqn.into(),
            message: message.into(),
        }
    }

    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            key: key.into(),
            message: message.into(),
        }
    }
}
