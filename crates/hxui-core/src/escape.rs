//! HTML escaping for text nodes and attribute values.
//!
//! Both contexts escape the same five characters (`&`, `<`, `>`, `"`, `'`),
//! so a string that is safe in one position is safe in the other.

use std::borrow::Cow;

/// Escapes text for insertion as an HTML text node.
///
/// # Examples
///
/// ```
/// use hxui_core::escape::escape_text;
///
/// assert_eq!(escape_text("A & B"), "A &amp; B");
/// assert_eq!(escape_text("<b>"), "&lt;b&gt;");
/// ```
pub fn escape_text(s: &str) -> Cow<'_, str> {
	html_escape::encode_quoted_attribute(s)
}

/// Escapes a value for a double-quoted attribute.
///
/// # Examples
///
/// ```
/// use hxui_core::escape::escape_attribute;
///
/// assert!(!escape_attribute(r#"x" onclick="y"#).contains('"'));
/// assert_eq!(escape_attribute("/refresh"), "/refresh");
/// ```
pub fn escape_attribute(s: &str) -> Cow<'_, str> {
	html_escape::encode_quoted_attribute(s)
}
