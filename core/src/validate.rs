//! Structural schema validation.
//!
//! Advisory checks for schema authors: empty names and duplicate
//! namespace/field names are legal to construct (and duplicates are even
//! meaningful after [`merge_namespaces`](crate::merge_namespaces), where the
//! first match shadows later ones), but they are usually mistakes in
//! hand-written schemas. The parser never runs these checks itself.
//!
//! # Examples
//!
//! ```
//! use nsconfig_core::{Field, Namespace, validate_schemas};
//!
//! let schemas = vec![Namespace::new("db").with_field(Field::new("host"))];
//! assert!(validate_schemas(&schemas).is_empty());
//!
//! let dup = vec![Namespace::new("db"), Namespace::new("db")];
//! assert!(!validate_schemas(&dup).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::Namespace;

/// Structural problems found in a schema list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A namespace has an empty name and can never match a header.
    #[error("namespace name cannot be empty")]
    EmptyNamespaceName,
    /// Two namespaces in the schema list share a name; only the first is
    /// reachable by lookup.
    #[error("duplicate namespace in schema list: {0}")]
    DuplicateNamespace(String),
    /// A field has an empty name and can never match a key.
    #[error("empty field name in namespace {0:?}")]
    EmptyFieldName(String),
    /// Two fields in one namespace share a name; only the first is reachable.
    #[error("duplicate field {field:?} in namespace {namespace:?}")]
    DuplicateField {
        /// Owning namespace name.
        namespace: String,
        /// Colliding field name.
        field: String,
    },
}

/// Validates an ordered schema list.
///
/// Checks for empty and duplicate namespace names, then validates each
/// namespace individually. Stops at the first problem found.
pub fn validate_schemas(schemas: &[Namespace]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut seen: HashSet<&str> = HashSet::new();
    for namespace in schemas {
        if namespace.name.is_empty() {
            errors.push(ValidationError::EmptyNamespaceName);
            return errors;
        }
        if !seen.insert(namespace.name.as_str()) {
            errors.push(ValidationError::DuplicateNamespace(namespace.name.clone()));
            return errors;
        }
        errors.extend(validate_namespace(namespace));
        if !errors.is_empty() {
            return errors;
        }
    }

    errors
}

/// Validates a single namespace's field list.
///
/// Checks for empty and duplicate field names. Stops at the first problem
/// found.
///
/// # Examples
///
/// ```
/// use nsconfig_core::{Field, Namespace, ValidationError, validate_namespace};
///
/// let ns = Namespace::new("db")
///     .with_field(Field::new("host"))
///     .with_field(Field::new("host"));
///
/// let errors = validate_namespace(&ns);
/// assert!(matches!(errors[0], ValidationError::DuplicateField { .. }));
/// ```
pub fn validate_namespace(namespace: &Namespace) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for field in &namespace.fields {
        if field.name.is_empty() {
            errors.push(ValidationError::EmptyFieldName(namespace.name.clone()));
            return errors;
        }
        if !seen.insert(field.name.as_str()) {
            errors.push(ValidationError::DuplicateField {
                namespace: namespace.name.clone(),
                field: field.name.clone(),
            });
            return errors;
        }
    }

    errors
}
