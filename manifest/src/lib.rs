//! Declarative schema manifests for namespaced configuration.
//!
//! Instead of constructing [`Namespace`](nsconfig_core::Namespace) schemas in
//! code, hosts can describe them in a JSON or YAML manifest and build them
//! through a [`TypeRegistry`](nsconfig_core::TypeRegistry). The registry is
//! the only indirection: type names in the manifest map to converters the
//! host registered at startup, so the whole schema stays data.
//!
//! # Example
//!
//! ```
//! use nsconfig_core::TypeRegistry;
//! use nsconfig_manifest::SchemaManifest;
//! use nsconfig_parser::parse_config;
//!
//! let manifest = SchemaManifest::from_yaml(
//!     "\
//! namespaces:
//!   - name: db
//!     fields:
//!       - name: host
//!       - name: port
//!         type: integer
//!         optional: true
//!         default: 5432
//! ",
//! )
//! .unwrap();
//!
//! let schemas = manifest.build_schemas(&TypeRegistry::with_builtins()).unwrap();
//! let config = parse_config(
//!     "[db]\nhost = localhost\n",
//!     &schemas,
//!     manifest.constants.clone(),
//! )
//! .unwrap();
//! assert_eq!(config["db"]["port"].as_integer(), Some(5432));
//! ```

mod error;
mod manifest;

pub use error::{ManifestError, Result};
pub use manifest::{FieldSpec, MANIFEST_FORMAT_VERSION, NamespaceSpec, SchemaManifest};
