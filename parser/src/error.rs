//! Parse error taxonomy.
//!
//! Every failure aborts the parse immediately; the caller sees the first
//! error in line order. Line numbers are 0-based and refer to the raw input
//! text, including blank and comment-only lines.

use thiserror::Error;

use nsconfig_core::ConvertError;

/// Errors raised while parsing configuration text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A namespace header opened with `[` but did not close with `]`.
    #[error("unterminated namespace header on line {line}")]
    UnterminatedHeader {
        /// 0-based line number.
        line: usize,
    },

    /// A non-header line carried no `key = value` assignment.
    #[error("expected a `key = value` assignment on line {line}")]
    MissingAssignment {
        /// 0-based line number.
        line: usize,
    },

    /// A header named a namespace that is not in the supplied schema list.
    #[error("undefined namespace {name:?} on line {line}")]
    UndefinedNamespace {
        /// Name taken from the header.
        name: String,
        /// 0-based line number.
        line: usize,
    },

    /// An assignment appeared before any namespace header.
    #[error("no namespace declared before assignment on line {line}")]
    NoNamespace {
        /// 0-based line number.
        line: usize,
    },

    /// An assignment key is not declared in the current namespace's schema.
    #[error("undefined field {name:?} on line {line}")]
    UndefinedField {
        /// Key taken from the assignment.
        name: String,
        /// 0-based line number.
        line: usize,
    },

    /// A required field never received a value. Reported after the full pass,
    /// so it carries no line number.
    #[error("undefined field {name:?}: required by namespace {namespace:?}")]
    MissingField {
        /// Namespace the field belongs to.
        namespace: String,
        /// Missing field name.
        name: String,
    },

    /// A `%name` value referenced a constant absent from the constants map.
    #[error("unknown constant {name:?} referenced on line {line}")]
    UnknownConstant {
        /// Constant name after the `%` marker.
        name: String,
        /// 0-based line number.
        line: usize,
    },

    /// A field's validator rejected the post-hook value.
    #[error("validator rejected value for field {field:?} on line {line}")]
    Validator {
        /// Field whose validator failed.
        field: String,
        /// 0-based line number.
        line: usize,
    },

    /// A field's type conversion failed.
    #[error("cannot convert value for field {field:?} on line {line}: {source}")]
    Convert {
        /// Field whose conversion failed.
        field: String,
        /// 0-based line number.
        line: usize,
        /// Underlying conversion failure.
        #[source]
        source: ConvertError,
    },

    /// File read failure from [`parse_config_file`](crate::parse_config_file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
