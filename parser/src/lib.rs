//! Schema-validated parsing of namespaced configuration text.
//!
//! This crate consumes an INI-like, line-oriented configuration format:
//!
//! ```text
//! [db]
//! host = localhost        # comment to end of line
//! port = %primary_port    # value substituted from the constants map
//! ```
//!
//! Input is validated against a caller-supplied list of
//! [`Namespace`](nsconfig_core::Namespace) schemas and produces a
//! [`ConfigMap`] of typed values, or fails with the first [`ParseError`]
//! encountered in line order.
//!
//! # Main entry points
//!
//! - [`parse_config`] — parse configuration text against a schema list.
//! - [`parse_config_file`] — read a UTF-8 file, then parse it.
//! - [`ConfigParser`] — reusable parser holding schemas and constants.
//!
//! # Example
//!
//! ```
//! use nsconfig_core::{Field, FieldType, Namespace, Value};
//! use nsconfig_parser::{Constants, parse_config};
//!
//! let schemas = vec![
//!     Namespace::new("db")
//!         .with_field(Field::new("host"))
//!         .with_field(
//!             Field::optional("port", FieldType::Integer).with_default(Value::Integer(5432)),
//!         ),
//! ];
//!
//! let config = parse_config("[db]\nhost = localhost\n", &schemas, Constants::new()).unwrap();
//! assert_eq!(config["db"]["host"], Value::Text("localhost".into()));
//! assert_eq!(config["db"]["port"], Value::Integer(5432));
//! ```

pub mod error;
mod parse;

pub use error::{ParseError, Result};
pub use parse::{ConfigMap, ConfigParser, Constants, parse_config, parse_config_file};
