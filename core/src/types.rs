//! Schema type definitions for namespaced configuration.
//!
//! This module defines the core data model used to describe configuration
//! sections ("namespaces") and the keys they may contain ("fields"). Schema
//! objects are built once by the caller and shared read-only with the parser;
//! all hook types are `Send + Sync` so a schema can be reused across threads.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A typed configuration value.
///
/// Raw values in configuration text are strings; a field's [`FieldType`]
/// converts them into one of these variants. The `serde` representation is
/// untagged, so values serialize as (and deserialize from) plain scalars
/// like `5432`, `true`, or `"localhost"`, which keeps manifest files and CLI
/// output free of enum wrappers.
///
/// # Examples
///
/// ```
/// use nsconfig_core::Value;
///
/// let port = Value::Integer(5432);
/// assert_eq!(port.as_integer(), Some(5432));
/// assert_eq!(serde_json::to_string(&port).unwrap(), "5432");
///
/// let host: Value = serde_json::from_str("\"localhost\"").unwrap();
/// assert_eq!(host.as_text(), Some("localhost"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value.
    Boolean(bool),
    /// Signed 64-bit integer value.
    Integer(i64),
    /// 64-bit floating point value.
    Float(f64),
    /// Plain text value.
    Text(String),
}

impl Value {
    /// Returns the boolean payload, if this is a [`Value::Boolean`].
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is a [`Value::Integer`].
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float payload, if this is a [`Value::Float`].
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text payload, if this is a [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(value) => write!(f, "{value}"),
            Value::Integer(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Text(value) => f.write_str(value),
        }
    }
}

/// Conversion failures raised by [`FieldType::convert`].
///
/// Custom converters report their own failures through
/// [`ConvertError::Custom`]; the parser surfaces all variants unchanged as the
/// source of its conversion error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Raw value is not a valid signed integer literal.
    #[error("invalid integer literal: {0:?}")]
    InvalidInteger(String),
    /// Raw value is not a valid float literal.
    #[error("invalid float literal: {0:?}")]
    InvalidFloat(String),
    /// Raw value is not a recognized boolean literal.
    #[error("invalid boolean literal: {0:?}")]
    InvalidBoolean(String),
    /// A caller-supplied converter rejected the raw value.
    #[error("{0}")]
    Custom(String),
}

/// Caller-supplied conversion function for [`FieldType::Custom`].
pub type CustomConverter = Arc<dyn Fn(&str) -> Result<Value, ConvertError> + Send + Sync>;

/// Caller-supplied predicate invoked on a field's post-hook value.
///
/// A `false` result fails the parse for that line.
pub type Validator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Caller-supplied transformation applied to a field's raw string value
/// before validation and type conversion. Absent hooks behave as identity.
pub type ParseHook = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Conversion strategy applied to a field's raw string value.
///
/// The builtin variants cover the common scalar types; [`FieldType::Custom`]
/// lets callers plug in arbitrary conversion logic with explicit, typed
/// failures instead of panics.
///
/// # Examples
///
/// ```
/// use nsconfig_core::{FieldType, Value};
///
/// assert_eq!(FieldType::Integer.convert("42"), Ok(Value::Integer(42)));
/// assert_eq!(FieldType::Boolean.convert("yes"), Ok(Value::Boolean(true)));
/// assert!(FieldType::Integer.convert("forty-two").is_err());
/// ```
#[derive(Clone, Default)]
pub enum FieldType {
    /// Keep the raw string (the default).
    #[default]
    Text,
    /// Convert to a signed 64-bit integer.
    Integer,
    /// Convert to a 64-bit float.
    Float,
    /// Convert to a boolean. Accepts `true`/`yes`/`on`/`1` and
    /// `false`/`no`/`off`/`0`, ASCII case-insensitive.
    Boolean,
    /// Caller-supplied conversion function.
    Custom(CustomConverter),
}

impl FieldType {
    /// Converts a raw string value into a typed [`Value`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConvertError`] describing the rejected literal, or the
    /// custom converter's own error for [`FieldType::Custom`].
    pub fn convert(&self, raw: &str) -> Result<Value, ConvertError> {
        match self {
            FieldType::Text => Ok(Value::Text(raw.to_string())),
            FieldType::Integer => raw
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| ConvertError::InvalidInteger(raw.to_string())),
            FieldType::Float => raw
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| ConvertError::InvalidFloat(raw.to_string())),
            FieldType::Boolean => match raw.to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(Value::Boolean(true)),
                "false" | "no" | "off" | "0" => Ok(Value::Boolean(false)),
                _ => Err(ConvertError::InvalidBoolean(raw.to_string())),
            },
            FieldType::Custom(converter) => converter(raw),
        }
    }
}

impl fmt::Debug for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => f.write_str("Text"),
            FieldType::Integer => f.write_str("Integer"),
            FieldType::Float => f.write_str("Float"),
            FieldType::Boolean => f.write_str("Boolean"),
            FieldType::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Schema entry describing one configuration key.
///
/// A field names a key, the conversion applied to its raw value, whether the
/// key must appear, a default for when it may be absent, and optional
/// validation and pre-parse hooks. Construction performs no validation: a
/// required field with no default is legal and only fails when it is actually
/// missing from parsed input.
///
/// Use the constructors [`new`](Field::new), [`required`](Field::required),
/// and [`optional`](Field::optional), then chain builder methods.
///
/// # Examples
///
/// ```
/// use nsconfig_core::{Field, FieldType, Value};
///
/// let host = Field::new("host").with_validator(|value| !value.is_empty());
/// assert!(!host.optional);
///
/// let port = Field::optional("port", FieldType::Integer)
///     .with_default(Value::Integer(5432))
///     .with_local_alias("db.port");
/// assert!(port.optional);
/// assert_eq!(port.default_value, Some(Value::Integer(5432)));
/// ```
#[derive(Clone)]
pub struct Field {
    /// Key name, unique within its owning namespace.
    pub name: String,
    /// Conversion applied to the raw parsed value.
    pub field_type: FieldType,
    /// Whether the key may be absent from the input.
    pub optional: bool,
    /// Value substituted when an optional field is absent. Inserted verbatim,
    /// with no type conversion applied.
    pub default_value: Option<Value>,
    /// Predicate invoked on the post-hook value; `false` fails the parse.
    pub validator: Option<Validator>,
    /// Opaque tag for external consumers (e.g. a factory registry). The
    /// parser itself never interprets it.
    pub local_alias: Option<String>,
    /// Transformation applied to the raw string before validation and
    /// conversion.
    pub parse_hook: Option<ParseHook>,
}

impl Field {
    /// Creates a required text field.
    ///
    /// # Examples
    ///
    /// ```
    /// use nsconfig_core::{Field, FieldType, Value};
    ///
    /// let field = Field::new("host");
    /// assert!(!field.optional);
    /// assert_eq!(field.field_type.convert("x"), Ok(Value::Text("x".into())));
    /// ```
    pub fn new(name: &str) -> Self {
        Self::required(name, FieldType::Text)
    }

    /// Creates a required field with the given conversion.
    pub fn required(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            optional: false,
            default_value: None,
            validator: None,
            local_alias: None,
            parse_hook: None,
        }
    }

    /// Creates an optional field with the given conversion and no default.
    pub fn optional(name: &str, field_type: FieldType) -> Self {
        Self {
            optional: true,
            ..Self::required(name, field_type)
        }
    }

    /// Sets the default value substituted when this field is absent.
    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Attaches a validator predicate.
    pub fn with_validator(mut self, validator: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Attaches a pre-parse hook.
    pub fn with_parse_hook(mut self, hook: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.parse_hook = Some(Arc::new(hook));
        self
    }

    /// Attaches an opaque alias for external consumers.
    pub fn with_local_alias(mut self, alias: &str) -> Self {
        self.local_alias = Some(alias.to_string());
        self
    }

    /// Applies the parse hook to a raw value, or passes it through unchanged
    /// when no hook is attached.
    pub fn apply_hook(&self, raw: String) -> String {
        match &self.parse_hook {
            Some(hook) => hook(&raw),
            None => raw,
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .field("optional", &self.optional)
            .field("default_value", &self.default_value)
            .field("validator", &self.validator.is_some())
            .field("local_alias", &self.local_alias)
            .field("parse_hook", &self.parse_hook.is_some())
            .finish()
    }
}

/// A named, ordered collection of [`Field`]s matched against `[section]`
/// headers in configuration text.
///
/// Field names are expected to be unique within a namespace but uniqueness is
/// not enforced at construction; lookup always returns the first match in
/// declaration order, which is what makes merged namespaces with shadowed
/// fields well-defined. Use [`validate_namespace`](crate::validate_namespace)
/// to surface duplicates to schema authors.
///
/// # Examples
///
/// ```
/// use nsconfig_core::{Field, FieldType, Namespace};
///
/// let ns = Namespace::new("db")
///     .with_field(Field::new("host"))
///     .with_field(Field::optional("port", FieldType::Integer));
///
/// assert_eq!(ns.field("host").unwrap().name, "host");
/// assert!(ns.field("password").is_none());
/// assert_eq!(ns.field_names(), vec!["host", "port"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    /// Name matched against `[section]` headers.
    pub name: String,
    /// Expected fields, in declaration order.
    pub fields: Vec<Field>,
}

impl Namespace {
    /// Creates an empty namespace with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: Vec::new(),
        }
    }

    /// Appends a field to this namespace.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Looks up a field by name, comparing in declaration order.
    ///
    /// Returns the first match; later fields with the same name are shadowed.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns `true` if a field with the given name is declared.
    pub fn contains_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Returns all declared field names, in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }
}

/// Looks up a namespace schema by name within an ordered schema list.
///
/// Replaces equality overloading between namespaces and strings with an
/// explicit, type-checked lookup.
///
/// # Examples
///
/// ```
/// use nsconfig_core::{Namespace, namespace_by_name};
///
/// let schemas = vec![Namespace::new("db"), Namespace::new("cache")];
/// assert!(namespace_by_name(&schemas, "cache").is_some());
/// assert!(namespace_by_name(&schemas, "smtp").is_none());
/// ```
pub fn namespace_by_name<'a>(schemas: &'a [Namespace], name: &str) -> Option<&'a Namespace> {
    schemas.iter().find(|namespace| namespace.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder_chain() {
        let field = Field::optional("port", FieldType::Integer)
            .with_default(Value::Integer(5432))
            .with_local_alias("db.port")
            .with_validator(|value| !value.is_empty());

        assert_eq!(field.name, "port");
        assert!(field.optional);
        assert_eq!(field.default_value, Some(Value::Integer(5432)));
        assert_eq!(field.local_alias.as_deref(), Some("db.port"));
        assert!(field.validator.is_some());
        assert!(field.parse_hook.is_none());
    }

    #[test]
    fn test_field_new_is_required_text() {
        let field = Field::new("host");
        assert!(!field.optional);
        assert_eq!(
            field.field_type.convert("localhost"),
            Ok(Value::Text("localhost".into()))
        );
    }

    #[test]
    fn test_apply_hook_defaults_to_identity() {
        let plain = Field::new("key");
        assert_eq!(plain.apply_hook("  raw  ".into()), "  raw  ");

        let hooked = Field::new("key").with_parse_hook(|raw| raw.trim().to_uppercase());
        assert_eq!(hooked.apply_hook("  raw  ".into()), "RAW");
    }

    #[test]
    fn test_convert_integer() {
        assert_eq!(FieldType::Integer.convert("42"), Ok(Value::Integer(42)));
        assert_eq!(FieldType::Integer.convert("-7"), Ok(Value::Integer(-7)));
        assert_eq!(
            FieldType::Integer.convert("4.2"),
            Err(ConvertError::InvalidInteger("4.2".into()))
        );
    }

    #[test]
    fn test_convert_boolean_literals() {
        for raw in ["true", "YES", "On", "1"] {
            assert_eq!(FieldType::Boolean.convert(raw), Ok(Value::Boolean(true)));
        }
        for raw in ["false", "No", "OFF", "0"] {
            assert_eq!(FieldType::Boolean.convert(raw), Ok(Value::Boolean(false)));
        }
        assert_eq!(
            FieldType::Boolean.convert("maybe"),
            Err(ConvertError::InvalidBoolean("maybe".into()))
        );
    }

    #[test]
    fn test_convert_custom() {
        let upper = FieldType::Custom(Arc::new(|raw| {
            if raw.is_empty() {
                Err(ConvertError::Custom("empty value".into()))
            } else {
                Ok(Value::Text(raw.to_uppercase()))
            }
        }));

        assert_eq!(upper.convert("abc"), Ok(Value::Text("ABC".into())));
        assert_eq!(upper.convert(""), Err(ConvertError::Custom("empty value".into())));
    }

    #[test]
    fn test_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Value::Integer(5432)).unwrap(), "5432");
        assert_eq!(serde_json::to_string(&Value::Boolean(true)).unwrap(), "true");
        assert_eq!(
            serde_json::to_string(&Value::Text("localhost".into())).unwrap(),
            "\"localhost\""
        );

        let value: Value = serde_json::from_str("2.5").unwrap();
        assert_eq!(value, Value::Float(2.5));
    }

    #[test]
    fn test_namespace_lookup_returns_first_match() {
        let ns = Namespace::new("db")
            .with_field(Field::new("host").with_local_alias("first"))
            .with_field(Field::new("host").with_local_alias("second"));

        assert_eq!(ns.field("host").unwrap().local_alias.as_deref(), Some("first"));
    }

    #[test]
    fn test_namespace_by_name() {
        let schemas = vec![Namespace::new("db"), Namespace::new("cache")];
        assert_eq!(namespace_by_name(&schemas, "db").unwrap().name, "db");
        assert!(namespace_by_name(&schemas, "smtp").is_none());
    }
}
