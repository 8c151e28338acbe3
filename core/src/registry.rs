//! Type-alias registry.
//!
//! Maps identifier strings (as written in schema manifests) to live
//! [`FieldType`] converters. The registry is populated at startup by the host
//! application and stays statically inspectable, replacing any runtime module
//! loading for turning a type name into a converter.
//!
//! # Examples
//!
//! ```
//! use nsconfig_core::{FieldType, TypeRegistry, Value};
//!
//! let registry = TypeRegistry::with_builtins();
//! let port_type = registry.resolve("integer").unwrap();
//! assert_eq!(port_type.convert("5432"), Ok(Value::Integer(5432)));
//! assert!(registry.resolve("uuid").is_none());
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::{ConvertError, FieldType, Value};

/// Registry of named [`FieldType`]s.
///
/// Hosts register custom converters next to the builtins, then resolve type
/// names coming from manifests or other external schema descriptions.
///
/// # Examples
///
/// ```
/// use nsconfig_core::{ConvertError, TypeRegistry, Value};
///
/// let mut registry = TypeRegistry::with_builtins();
/// registry.register_converter("port", |raw| {
///     raw.parse::<u16>()
///         .map(|port| Value::Integer(i64::from(port)))
///         .map_err(|_| ConvertError::Custom(format!("invalid port: {raw:?}")))
/// });
///
/// let port = registry.resolve("port").unwrap();
/// assert_eq!(port.convert("8080"), Ok(Value::Integer(8080)));
/// assert!(port.convert("70000").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: HashMap<String, FieldType>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with the builtin scalar types:
    /// `text`/`string`, `integer`/`int`, `float`, and `boolean`/`bool`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("text", FieldType::Text);
        registry.register("string", FieldType::Text);
        registry.register("integer", FieldType::Integer);
        registry.register("int", FieldType::Integer);
        registry.register("float", FieldType::Float);
        registry.register("boolean", FieldType::Boolean);
        registry.register("bool", FieldType::Boolean);
        registry
    }

    /// Registers a field type under the given name, replacing any previous
    /// entry with that name.
    pub fn register(&mut self, name: &str, field_type: FieldType) {
        self.entries.insert(name.to_string(), field_type);
    }

    /// Registers a custom conversion function under the given name.
    pub fn register_converter(
        &mut self,
        name: &str,
        converter: impl Fn(&str) -> Result<Value, ConvertError> + Send + Sync + 'static,
    ) {
        self.register(name, FieldType::Custom(Arc::new(converter)));
    }

    /// Resolves a type name to its registered field type.
    pub fn resolve(&self, name: &str) -> Option<&FieldType> {
        self.entries.get(name)
    }

    /// Returns all registered type names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_cover_scalar_aliases() {
        let registry = TypeRegistry::with_builtins();
        for name in ["text", "string", "integer", "int", "float", "boolean", "bool"] {
            assert!(registry.resolve(name).is_some(), "missing builtin {name:?}");
        }
        assert!(registry.resolve("decimal").is_none());
    }

    #[test]
    fn test_register_replaces_existing_entry() {
        let mut registry = TypeRegistry::with_builtins();
        registry.register("integer", FieldType::Text);

        let resolved = registry.resolve("integer").unwrap();
        assert_eq!(resolved.convert("42"), Ok(Value::Text("42".into())));
    }

    #[test]
    fn test_register_converter() {
        let mut registry = TypeRegistry::new();
        registry.register_converter("upper", |raw| Ok(Value::Text(raw.to_uppercase())));

        let upper = registry.resolve("upper").unwrap();
        assert_eq!(upper.convert("abc"), Ok(Value::Text("ABC".into())));
    }

    #[test]
    fn test_names_are_sorted() {
        let mut registry = TypeRegistry::new();
        registry.register("zeta", FieldType::Text);
        registry.register("alpha", FieldType::Integer);

        assert_eq!(registry.names(), vec!["alpha", "zeta"]);
    }
}
