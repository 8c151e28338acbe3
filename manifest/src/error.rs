//! Error types for manifest loading.

use thiserror::Error;

/// Errors that can occur while loading or resolving a schema manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Manifest path has no recognized `.json`/`.yaml`/`.yml` extension.
    #[error("unsupported manifest extension: {0:?}")]
    UnsupportedExtension(String),

    /// A field's type name is not present in the registry.
    #[error("unknown type {type_name:?} for field {field:?} in namespace {namespace:?}")]
    UnknownType {
        /// Namespace declaring the field.
        namespace: String,
        /// Field whose type failed to resolve.
        field: String,
        /// The unresolved type name.
        type_name: String,
    },
}

/// Convenience alias for results with [`ManifestError`].
pub type Result<T> = std::result::Result<T, ManifestError>;
