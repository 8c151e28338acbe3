//! Schema manifest model and loading.
//!
//! A manifest is a JSON or YAML document describing namespaces, their fields,
//! and the constants available for `%name` substitution:
//!
//! ```yaml
//! version: "1.0"
//! constants:
//!   region: eu-west-1
//! namespaces:
//!   - name: db
//!     fields:
//!       - name: host
//!       - name: port
//!         type: integer
//!         optional: true
//!         default: 5432
//! ```
//!
//! Type names are resolved through a
//! [`TypeRegistry`](nsconfig_core::TypeRegistry) populated by the host, which
//! keeps the manifest statically inspectable; no module loading happens at
//! resolution time. Hooks and validators cannot be expressed in a manifest;
//! hosts attach those to the built [`Namespace`]s in code.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use nsconfig_core::{Field, Namespace, TypeRegistry, Value};

use crate::error::{ManifestError, Result};

/// Manifest format version written by [`SchemaManifest::default_version`].
pub const MANIFEST_FORMAT_VERSION: &str = "1.0";

/// Top-level schema manifest document.
///
/// # Examples
///
/// ```
/// use nsconfig_core::TypeRegistry;
/// use nsconfig_manifest::SchemaManifest;
///
/// let manifest = SchemaManifest::from_yaml(
///     "namespaces:\n  - name: db\n    fields:\n      - name: host\n",
/// )
/// .unwrap();
///
/// let schemas = manifest.build_schemas(&TypeRegistry::with_builtins()).unwrap();
/// assert_eq!(schemas[0].name, "db");
/// assert!(schemas[0].contains_field("host"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaManifest {
    /// Manifest format version.
    #[serde(default = "SchemaManifest::default_version")]
    pub version: String,
    /// Constants available for `%name` substitution in config values.
    #[serde(default)]
    pub constants: HashMap<String, String>,
    /// Namespace declarations.
    pub namespaces: Vec<NamespaceSpec>,
}

/// One namespace declaration in a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespaceSpec {
    /// Namespace name matched against `[section]` headers.
    pub name: String,
    /// Field declarations, in order.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

/// One field declaration in a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name.
    pub name: String,
    /// Registered type name; defaults to `text`.
    #[serde(rename = "type", default = "FieldSpec::default_type")]
    pub type_name: String,
    /// Whether the field may be absent.
    #[serde(default)]
    pub optional: bool,
    /// Default substituted when an optional field is absent. Stated as a
    /// native scalar; inserted verbatim with no conversion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Opaque alias forwarded to [`Field::local_alias`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl FieldSpec {
    fn default_type() -> String {
        "text".to_string()
    }
}

impl SchemaManifest {
    fn default_version() -> String {
        MANIFEST_FORMAT_VERSION.to_string()
    }

    /// Loads a manifest from a file, selecting the format by extension
    /// (`.json`, `.yaml`, or `.yml`).
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::UnsupportedExtension`] for any other
    /// extension, [`ManifestError::Io`] when the file cannot be read, or a
    /// parse error for invalid content.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or_default();

        match extension {
            "json" => Self::from_json(&fs::read_to_string(path)?),
            "yaml" | "yml" => Self::from_yaml(&fs::read_to_string(path)?),
            other => Err(ManifestError::UnsupportedExtension(other.to_string())),
        }
    }

    /// Parses a manifest from a JSON string.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parses a manifest from a YAML string.
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Builds the schema list, resolving every field's type name through the
    /// registry.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::UnknownType`] for the first type name the
    /// registry cannot resolve.
    pub fn build_schemas(&self, registry: &TypeRegistry) -> Result<Vec<Namespace>> {
        let mut schemas = Vec::with_capacity(self.namespaces.len());

        for namespace_spec in &self.namespaces {
            let mut namespace = Namespace::new(&namespace_spec.name);
            for field_spec in &namespace_spec.fields {
                let field_type = registry.resolve(&field_spec.type_name).ok_or_else(|| {
                    ManifestError::UnknownType {
                        namespace: namespace_spec.name.clone(),
                        field: field_spec.name.clone(),
                        type_name: field_spec.type_name.clone(),
                    }
                })?;

                let mut field = if field_spec.optional {
                    Field::optional(&field_spec.name, field_type.clone())
                } else {
                    Field::required(&field_spec.name, field_type.clone())
                };
                if let Some(default) = &field_spec.default {
                    field = field.with_default(default.clone());
                }
                if let Some(alias) = &field_spec.alias {
                    field = field.with_local_alias(alias);
                }

                namespace = namespace.with_field(field);
            }
            schemas.push(namespace);
        }

        Ok(schemas)
    }
}
