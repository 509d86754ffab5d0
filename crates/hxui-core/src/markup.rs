//! Pre-rendered, trusted HTML.

use std::fmt;

/// HTML produced by the serializer.
///
/// Every leaf inside a `Markup` value was escaped when it was serialized, so
/// a parent splices it verbatim instead of escaping it again. There is no
/// public constructor from an arbitrary string: the only way to obtain one is
/// to render an element or a component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
	pub(crate) fn from_rendered(html: String) -> Self {
		Self(html)
	}

	/// Returns the HTML as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the markup and returns the HTML string.
	pub fn into_string(self) -> String {
		self.0
	}

	/// Returns `true` if nothing was rendered.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Concatenates several rendered fragments.
	pub fn concat<I>(parts: I) -> Self
	where
		I: IntoIterator<Item = Markup>,
	{
		let mut html = String::new();
		for part in parts {
			html.push_str(&part.0);
		}
		Self(html)
	}
}

impl fmt::Display for Markup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Markup {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<Markup> for String {
	fn from(markup: Markup) -> Self {
		markup.0
	}
}

impl PartialEq<str> for Markup {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<String> for Markup {
	fn eq(&self, other: &String) -> bool {
		&self.0 == other
	}
}

impl PartialEq<&str> for Markup {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_concat_preserves_order() {
		let joined = Markup::concat([
			Markup::from_rendered("<b>1</b>".to_string()),
			Markup::from_rendered("<i>2</i>".to_string()),
		]);
		assert_eq!(joined, "<b>1</b><i>2</i>");
	}

	#[rstest]
	fn test_display_writes_html_verbatim() {
		let markup = Markup::from_rendered("<p>&amp;</p>".to_string());
		assert_eq!(format!("{markup}"), "<p>&amp;</p>");
		assert_eq!(markup.into_string(), "<p>&amp;</p>");
	}

	#[rstest]
	fn test_default_is_empty() {
		assert!(Markup::default().is_empty());
	}
}
