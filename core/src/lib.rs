//! Core schema types for namespaced configuration.
//!
//! This crate defines the data model a configuration schema is built from:
//!
//! - [`Field`] — one expected configuration key: name, type conversion,
//!   optionality, default value, validator, and pre-parse hook.
//! - [`Namespace`] — a named, ordered collection of fields matched against
//!   `[section]` headers.
//! - [`Value`] / [`FieldType`] — the closed set of typed values and the
//!   conversion strategies that produce them.
//! - [`TypeRegistry`] — startup-populated mapping from type-name strings to
//!   converters, for schemas described in external manifests.
//!
//! Merging ([`merge_namespaces`]) composes two namespaces by field-list
//! concatenation with deliberate first-match-wins shadowing. Validation
//! ([`validate_schemas`], [`validate_namespace`]) surfaces structural
//! mistakes such as duplicate names; it is advisory and never run by the
//! parser itself.
//!
//! # Example
//!
//! ```
//! use nsconfig_core::*;
//!
//! let db = Namespace::new("db")
//!     .with_field(Field::new("host").with_validator(|value| !value.is_empty()))
//!     .with_field(
//!         Field::optional("port", FieldType::Integer).with_default(Value::Integer(5432)),
//!     );
//!
//! assert!(db.contains_field("host"));
//! assert!(validate_schemas(&[db]).is_empty());
//! ```

mod merge;
mod registry;
mod types;
mod validate;

pub use merge::merge_namespaces;
pub use registry::TypeRegistry;
pub use types::*;
pub use validate::{ValidationError, validate_namespace, validate_schemas};
