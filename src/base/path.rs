//! Qualified path helpers.
//!
//! Paths are `::`-delimited (`A::B::C`). Methods hang off their namespace
//! with `#` (`A::B#call`). The root namespace has the empty path.

use smol_str::{SmolStr, format_smolstr};
use unicode_ident::{is_xid_continue, is_xid_start};

/// Separator between namespace segments.
pub const SEPARATOR: &str = "::";

/// Operator method names Ruby accepts in a `def`.
const OPERATOR_METHODS: &[&str] = &[
    "+", "-", "*", "/", "%", "**", "==", "!=", "===", "=~", "!~", "!", "<", ">", "<=", ">=",
    "<=>", "<<", ">>", "&", "|", "^", "~", "[]", "[]=", "+@", "-@", "`",
];

/// Split a name or path into its segments.
///
/// Trailing empty segments are dropped, leading ones are kept, so
/// `"::Foo"` is `["", "Foo"]` and the root path `""` has no segments.
pub fn segments(name: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = name.split(SEPARATOR).collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}

/// The last segment of a name or path.
///
/// ```
/// use sord::base::bare_name;
///
/// assert_eq!(bare_name("A::B::C"), Some("C"));
/// assert_eq!(bare_name("C"), Some("C"));
/// assert_eq!(bare_name(""), None);
/// ```
pub fn bare_name(name: &str) -> Option<&str> {
    segments(name).last().copied()
}

/// Whether `name` carries any `::` qualification.
#[inline]
pub fn is_qualified(name: &str) -> bool {
    name.contains(SEPARATOR)
}

/// Path of a namespace or constant `name` nested in `parent`.
pub fn join_path(parent: &str, name: &str) -> SmolStr {
    if parent.is_empty() {
        SmolStr::new(name)
    } else {
        format_smolstr!("{parent}{SEPARATOR}{name}")
    }
}

/// Path of an instance method `name` defined in `parent`.
pub fn method_path(parent: &str, name: &str) -> SmolStr {
    format_smolstr!("{parent}#{name}")
}

/// Whether `name` can name a class, module or constant.
pub fn is_constant_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_uppercase() && is_xid_start(c) => chars.all(is_xid_continue),
        _ => false,
    }
}

/// Whether `name` can name a method.
pub fn is_method_name(name: &str) -> bool {
    if OPERATOR_METHODS.contains(&name) {
        return true;
    }
    let stem = name
        .strip_suffix(['?', '!', '='])
        .unwrap_or(name);
    let mut chars = stem.chars();
    match chars.next() {
        Some(c) if c == '_' || is_xid_start(c) => chars.all(is_xid_continue),
        _ => false,
    }
}
