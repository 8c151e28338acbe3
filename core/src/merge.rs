//! Namespace schema composition.
//!
//! [`merge_namespaces`] combines two namespace schemas into one by
//! concatenating their field lists. Collisions are deliberately NOT
//! deduplicated: lookup is first-match in declaration order, so a base field
//! shadows an overlay field of the same name while the shadowed entry stays in
//! the list. Callers that want collisions surfaced can run
//! [`validate_namespace`](crate::validate_namespace) on the result.
//!
//! # Example
//!
//! ```
//! use nsconfig_core::{Field, Namespace, merge_namespaces};
//!
//! let base = Namespace::new("db").with_field(Field::new("host"));
//! let overlay = Namespace::new("db-extra").with_field(Field::new("port"));
//!
//! let merged = merge_namespaces(&base, &overlay, None);
//! assert_eq!(merged.name, "db");
//! assert_eq!(merged.field_names(), vec!["host", "port"]);
//! ```

use crate::Namespace;

/// Merges two namespace schemas into a new namespace.
///
/// The merged field list is `base.fields` followed by `overlay.fields`, in
/// that order and without deduplication. The merged name is `base.name` when
/// non-empty; otherwise the `name` override is used (empty when neither is
/// given). Neither input is mutated.
///
/// # Examples
///
/// ```
/// use nsconfig_core::{Field, Namespace, merge_namespaces};
///
/// // Base name wins over the override when present.
/// let base = Namespace::new("db").with_field(Field::new("host"));
/// let overlay = Namespace::new("ignored").with_field(Field::new("host"));
/// let merged = merge_namespaces(&base, &overlay, Some("fallback"));
/// assert_eq!(merged.name, "db");
///
/// // Shadowed duplicates remain in the list but lose lookups.
/// assert_eq!(merged.fields.len(), 2);
/// ```
pub fn merge_namespaces(base: &Namespace, overlay: &Namespace, name: Option<&str>) -> Namespace {
    let merged_name = if base.name.is_empty() {
        name.unwrap_or_default()
    } else {
        base.name.as_str()
    };

    let mut fields = base.fields.clone();
    fields.extend(overlay.fields.iter().cloned());

    Namespace {
        name: merged_name.to_string(),
        fields,
    }
}
