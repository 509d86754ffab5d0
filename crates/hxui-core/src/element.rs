//! Element tree and HTML serializer.

use crate::attributes::AttributeMap;
use crate::error::{ConfigurationError, Result};
use crate::escape::{escape_attribute, escape_text};
use crate::markup::Markup;
use std::borrow::Cow;

/// Returns `true` if `name` is a plain HTML element name: an ASCII letter
/// followed by ASCII letters, digits or `-`.
///
/// ```
/// use hxui_core::element::is_valid_tag_name;
///
/// assert!(is_valid_tag_name("h5"));
/// assert!(is_valid_tag_name("my-widget"));
/// assert!(!is_valid_tag_name("div><script"));
/// assert!(!is_valid_tag_name("5h"));
/// ```
pub fn is_valid_tag_name(name: &str) -> bool {
	let mut chars = name.chars();
	matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// A checked element name.
///
/// Common elements are available as constants; any other name goes through
/// [`Tag::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(Cow<'static, str>);

macro_rules! tags {
	($($name:ident => $tag:literal),* $(,)?) => {
		impl Tag {
			$(
				#[doc = concat!("`<", $tag, ">`")]
				pub const $name: Tag = Tag(Cow::Borrowed($tag));
			)*
		}
	};
}

tags!(
	A => "a",
	B => "b",
	BR => "br",
	BUTTON => "button",
	DIV => "div",
	EM => "em",
	FORM => "form",
	H1 => "h1",
	H2 => "h2",
	H3 => "h3",
	H4 => "h4",
	H5 => "h5",
	H6 => "h6",
	HR => "hr",
	IMG => "img",
	INPUT => "input",
	LABEL => "label",
	LI => "li",
	NAV => "nav",
	OL => "ol",
	P => "p",
	SECTION => "section",
	SPAN => "span",
	STRONG => "strong",
	UL => "ul",
);

impl Tag {
	/// Validates a tag name.
	///
	/// # Errors
	///
	/// Returns [`ConfigurationError::InvalidTagName`] unless
	/// [`is_valid_tag_name`] accepts the name.
	pub fn parse(name: impl Into<Cow<'static, str>>) -> Result<Self> {
		let name = name.into();
		if !is_valid_tag_name(&name) {
			tracing::debug!(tag = %name, "rejected tag name");
			return Err(ConfigurationError::InvalidTagName {
				name: name.into_owned(),
			});
		}
		Ok(Self(name))
	}

	/// Returns the tag name.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// A nested element.
	Element(Element),
	/// Plain text, escaped on output.
	Text(String),
	/// Already-serialized markup, spliced verbatim.
	Markup(Markup),
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Self::Element(element)
	}
}

impl From<Markup> for Node {
	fn from(markup: Markup) -> Self {
		Self::Markup(markup)
	}
}

impl From<String> for Node {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<&str> for Node {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

/// Represents an HTML element in the component tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	/// The tag name (e.g., "div", "button").
	tag: Tag,
	/// HTML attributes in emission order.
	attrs: AttributeMap,
	/// Child nodes.
	children: Vec<Node>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
}

impl Element {
	/// Creates a new element.
	pub fn new(tag: Tag) -> Self {
		let is_void = matches!(
			tag.as_str(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: AttributeMap::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Replaces the attributes with an assembled map.
	pub fn attrs(mut self, attrs: AttributeMap) -> Self {
		self.attrs = attrs;
		self
	}

	/// Sets a single attribute after validating its name.
	///
	/// # Errors
	///
	/// Returns [`ConfigurationError::InvalidAttributeName`] for a name that
	/// [`is_valid_attribute_name`](crate::attributes::is_valid_attribute_name)
	/// rejects.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
		self.attrs.set(name, value)?;
		Ok(self)
	}

	/// Adds a child node.
	pub fn child(mut self, child: impl Into<Node>) -> Self {
		self.children.push(child.into());
		self
	}

	/// Adds multiple child nodes.
	pub fn children<I>(mut self, children: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Node>,
	{
		self.children.extend(children.into_iter().map(Into::into));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		self.tag.as_str()
	}

	/// Returns the attributes.
	pub fn attributes(&self) -> &AttributeMap {
		&self.attrs
	}

	/// Returns the child nodes.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Serializes the element tree.
	///
	/// Text nodes and attribute values are escaped; [`Node::Markup`] children
	/// are spliced as they are.
	pub fn render(&self) -> Markup {
		let mut output = String::new();
		self.render_into(&mut output);
		Markup::from_rendered(output)
	}

	fn render_into(&self, output: &mut String) {
		output.push('<');
		output.push_str(self.tag.as_str());

		for (name, value) in self.attrs.iter() {
			output.push(' ');
			output.push_str(name);
			output.push_str("=\"");
			output.push_str(&escape_attribute(value));
			output.push('"');
		}

		if self.is_void {
			output.push_str(" />");
			return;
		}

		output.push('>');
		for child in &self.children {
			match child {
				Node::Element(el) => el.render_into(output),
				Node::Text(text) => output.push_str(&escape_text(text)),
				Node::Markup(markup) => output.push_str(markup.as_str()),
			}
		}
		output.push_str("</");
		output.push_str(self.tag.as_str());
		output.push('>');
	}
}
