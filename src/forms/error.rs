//! Form definition error types

use thiserror::Error;

/// Errors raised while building a form from its field descriptors
#[derive(Debug, Error)]
pub enum FormError {
    /// A descriptor names a component type the registry does not know
    #[error("Unsupported field type '{received}' (expected one of: {})", .allowed.join(", "))]
    UnsupportedFieldType {
        received: String,
        allowed: Vec<&'static str>,
    },

    /// Two options of one select share a value
    #[error("Duplicate option value '{value}' in field '{field}'")]
    DuplicateOptionValue { field: String, value: String },

    /// Two options of one select share a render key
    #[error("Duplicate option key '{key}' in field '{field}'")]
    DuplicateOptionKey { field: String, key: String },

    /// The definition is not well-formed JSON or misses required keys
    #[error("Invalid form definition: {0}")]
    InvalidDefinition(#[from] serde_json::Error),

    /// The definition is not well-formed YAML or misses required keys
    #[cfg(feature = "native")]
    #[error("Invalid form definition: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Result type for form construction
pub type Result<T> = std::result::Result<T, FormError>;
