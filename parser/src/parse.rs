//! Line-oriented configuration parsing.
//!
//! The parser makes a single linear pass over the input. Each line is
//! trimmed, stripped of its trailing `#` comment, and trimmed again; blank
//! results are skipped. A line starting with `[` switches the current
//! namespace, everything else must be a `key = value` assignment validated
//! against the current namespace's schema. After the pass, every namespace
//! that appeared in the text is post-validated: required fields must have
//! received a value and optional fields are filled from their defaults.
//!
//! Namespaces declared in the schema but never mentioned in the text are left
//! out of the result entirely, which is what makes optional sections work.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use tracing::debug;

use nsconfig_core::{Namespace, Value, namespace_by_name};

use crate::error::{ParseError, Result};

/// Caller-supplied constants, substituted for `%name` values.
pub type Constants = HashMap<String, String>;

/// Parsed configuration: namespace name → field name → typed value.
///
/// Backed by [`BTreeMap`] so iteration and serialization order are
/// deterministic.
pub type ConfigMap = BTreeMap<String, BTreeMap<String, Value>>;

/// Parser for namespaced configuration text.
///
/// Holds a borrowed schema list plus the constants map; both are read-only
/// during parsing, so one parser can be reused across inputs and shared
/// between threads.
///
/// # Examples
///
/// ```
/// use nsconfig_core::{Field, FieldType, Namespace, Value};
/// use nsconfig_parser::ConfigParser;
///
/// let schemas = vec![
///     Namespace::new("db")
///         .with_field(Field::new("host"))
///         .with_field(
///             Field::optional("port", FieldType::Integer).with_default(Value::Integer(5432)),
///         ),
/// ];
///
/// let config = ConfigParser::new(&schemas)
///     .parse("[db]\nhost = localhost\n")
///     .unwrap();
///
/// assert_eq!(config["db"]["host"], Value::Text("localhost".into()));
/// assert_eq!(config["db"]["port"], Value::Integer(5432));
/// ```
pub struct ConfigParser<'a> {
    schemas: &'a [Namespace],
    constants: Constants,
}

impl<'a> ConfigParser<'a> {
    /// Creates a parser for the given schema list with no constants.
    pub fn new(schemas: &'a [Namespace]) -> Self {
        Self {
            schemas,
            constants: Constants::new(),
        }
    }

    /// Replaces the constants map.
    pub fn with_constants(mut self, constants: Constants) -> Self {
        self.constants = constants;
        self
    }

    /// Adds a single constant.
    pub fn with_constant(mut self, name: &str, value: &str) -> Self {
        self.constants.insert(name.to_string(), value.to_string());
        self
    }

    /// Parses configuration text into a [`ConfigMap`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered in line order; there is
    /// no partial result and no multi-error accumulation.
    pub fn parse(&self, text: &str) -> Result<ConfigMap> {
        debug!(schemas = self.schemas.len(), "parsing configuration text");

        let mut result = ConfigMap::new();
        let mut current: Option<&Namespace> = None;

        for (lineno, raw_line) in text.lines().enumerate() {
            let line = strip_comment(raw_line.trim()).trim();
            if line.is_empty() {
                continue;
            }

            if let Some(enclosed) = line.strip_prefix('[') {
                let name = enclosed
                    .strip_suffix(']')
                    .ok_or(ParseError::UnterminatedHeader { line: lineno })?;
                let namespace = namespace_by_name(self.schemas, name).ok_or_else(|| {
                    ParseError::UndefinedNamespace {
                        name: name.to_string(),
                        line: lineno,
                    }
                })?;

                debug!(namespace = name, line = lineno, "entering namespace");
                // Re-entering a header resets its bucket rather than merging.
                result.insert(name.to_string(), BTreeMap::new());
                current = Some(namespace);
                continue;
            }

            let Some((key, raw_value)) = line.split_once('=') else {
                return Err(ParseError::MissingAssignment { line: lineno });
            };
            let key = key.trim();
            let raw_value = raw_value.trim();

            let namespace = current.ok_or(ParseError::NoNamespace { line: lineno })?;
            let field = namespace
                .field(key)
                .ok_or_else(|| ParseError::UndefinedField {
                    name: key.to_string(),
                    line: lineno,
                })?;

            let substituted = match raw_value.strip_prefix('%') {
                Some(constant) => self.constants.get(constant).cloned().ok_or_else(|| {
                    ParseError::UnknownConstant {
                        name: constant.to_string(),
                        line: lineno,
                    }
                })?,
                None => raw_value.to_string(),
            };

            let hooked = field.apply_hook(substituted);

            if let Some(validator) = &field.validator {
                if !validator(&hooked) {
                    return Err(ParseError::Validator {
                        field: field.name.clone(),
                        line: lineno,
                    });
                }
            }

            let value =
                field
                    .field_type
                    .convert(&hooked)
                    .map_err(|source| ParseError::Convert {
                        field: field.name.clone(),
                        line: lineno,
                        source,
                    })?;

            result
                .entry(namespace.name.clone())
                .or_default()
                .insert(key.to_string(), value);
        }

        self.post_validate(&mut result)?;
        debug!(namespaces = result.len(), "configuration parsed");
        Ok(result)
    }

    /// Reads a file as UTF-8 text and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] when the file cannot be read or is not
    /// valid UTF-8, or any error [`parse`](ConfigParser::parse) raises.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ConfigMap> {
        let text = fs::read_to_string(path)?;
        self.parse(&text)
    }

    /// Post-validates every namespace that appeared in the text: required
    /// fields must be present, optional fields are filled from defaults.
    fn post_validate(&self, result: &mut ConfigMap) -> Result<()> {
        for namespace in self.schemas {
            let Some(bucket) = result.get_mut(&namespace.name) else {
                // Namespace never mentioned in the input: no post-validation
                // and no defaults.
                continue;
            };

            for field in &namespace.fields {
                if bucket.contains_key(&field.name) {
                    continue;
                }
                if !field.optional {
                    return Err(ParseError::MissingField {
                        namespace: namespace.name.clone(),
                        name: field.name.clone(),
                    });
                }
                if let Some(default) = &field.default_value {
                    bucket.insert(field.name.clone(), default.clone());
                }
            }
        }

        Ok(())
    }
}

/// Parses configuration text against a schema list.
///
/// Convenience wrapper around [`ConfigParser`].
///
/// # Examples
///
/// ```
/// use nsconfig_core::{Field, Namespace, Value};
/// use nsconfig_parser::{Constants, parse_config};
///
/// let schemas = vec![Namespace::new("db").with_field(Field::new("host"))];
/// let mut constants = Constants::new();
/// constants.insert("primary".into(), "db1.internal".into());
///
/// let config = parse_config("[db]\nhost = %primary\n", &schemas, constants).unwrap();
/// assert_eq!(config["db"]["host"], Value::Text("db1.internal".into()));
/// ```
pub fn parse_config(text: &str, schemas: &[Namespace], constants: Constants) -> Result<ConfigMap> {
    ConfigParser::new(schemas).with_constants(constants).parse(text)
}

/// Reads a file as UTF-8 text and parses it against a schema list.
pub fn parse_config_file(
    path: impl AsRef<Path>,
    schemas: &[Namespace],
    constants: Constants,
) -> Result<ConfigMap> {
    ConfigParser::new(schemas)
        .with_constants(constants)
        .parse_file(path)
}

/// Cuts a line at its first `#`. Comment handling has no quoting or escape
/// support.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(position) => &line[..position],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nsconfig_core::{Field, FieldType};

    fn db_schema() -> Vec<Namespace> {
        vec![
            Namespace::new("db")
                .with_field(Field::new("host"))
                .with_field(
                    Field::optional("port", FieldType::Integer).with_default(Value::Integer(5432)),
                ),
        ]
    }

    #[test]
    fn test_strip_comment_cuts_at_first_marker() {
        assert_eq!(strip_comment("host = a # b # c"), "host = a ");
        assert_eq!(strip_comment("no comment"), "no comment");
        assert_eq!(strip_comment("# whole line"), "");
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        let text = "\n   \n# leading comment\n[db]\n\nhost = localhost # inline\n";
        let config = ConfigParser::new(&db_schema()).parse(text).unwrap();
        assert_eq!(config["db"]["host"], Value::Text("localhost".into()));
    }

    #[test]
    fn test_first_equals_is_the_split_point() {
        let schemas = vec![Namespace::new("db").with_field(Field::new("dsn"))];
        let config = ConfigParser::new(&schemas)
            .parse("[db]\ndsn = key=value;other=1\n")
            .unwrap();
        assert_eq!(config["db"]["dsn"], Value::Text("key=value;other=1".into()));
    }

    #[test]
    fn test_reentered_header_resets_bucket() {
        let text = "[db]\nhost = first\n[db]\nhost = second\n";
        let config = ConfigParser::new(&db_schema()).parse(text).unwrap();
        assert_eq!(config["db"]["host"], Value::Text("second".into()));
        // Defaults still apply to the reset bucket.
        assert_eq!(config["db"]["port"], Value::Integer(5432));
    }

    #[test]
    fn test_constant_substitution_precedes_hook_and_validation() {
        let schemas = vec![
            Namespace::new("db").with_field(
                Field::new("host")
                    .with_parse_hook(|raw| raw.trim_end_matches(".internal").to_string())
                    .with_validator(|value| !value.contains('.')),
            ),
        ];

        let config = ConfigParser::new(&schemas)
            .with_constant("primary", "db1.internal")
            .parse("[db]\nhost = %primary\n")
            .unwrap();
        assert_eq!(config["db"]["host"], Value::Text("db1".into()));
    }

    #[test]
    fn test_unknown_constant_fails() {
        let err = ConfigParser::new(&db_schema())
            .parse("[db]\nhost = %missing\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownConstant { ref name, line: 1 } if name == "missing"
        ));
    }

    #[test]
    fn test_validator_rejection() {
        let schemas = vec![
            Namespace::new("db").with_field(Field::new("host").with_validator(str::is_empty)),
        ];
        let err = ConfigParser::new(&schemas)
            .parse("[db]\nhost = localhost\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::Validator { ref field, line: 1 } if field == "host"
        ));
    }

    #[test]
    fn test_conversion_failure_carries_source() {
        let err = ConfigParser::new(&db_schema())
            .parse("[db]\nhost = h\nport = not-a-number\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::Convert { ref field, line: 2, .. } if field == "port"
        ));
    }

    #[test]
    fn test_header_with_trailing_text_is_unterminated() {
        let err = ConfigParser::new(&db_schema())
            .parse("[db] extra\n")
            .unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedHeader { line: 0 }));
    }

    #[test]
    fn test_unmentioned_namespace_gets_no_defaults() {
        let schemas = vec![
            Namespace::new("db").with_field(Field::new("host")),
            Namespace::new("cache").with_field(
                Field::optional("ttl", FieldType::Integer).with_default(Value::Integer(60)),
            ),
        ];
        let config = ConfigParser::new(&schemas)
            .parse("[db]\nhost = localhost\n")
            .unwrap();
        assert!(!config.contains_key("cache"));
    }

    #[test]
    fn test_optional_field_without_default_stays_absent() {
        let schemas = vec![
            Namespace::new("db")
                .with_field(Field::new("host"))
                .with_field(Field::optional("comment", FieldType::Text)),
        ];
        let config = ConfigParser::new(&schemas)
            .parse("[db]\nhost = localhost\n")
            .unwrap();
        assert!(!config["db"].contains_key("comment"));
    }
}
