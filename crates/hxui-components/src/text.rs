//! Text component

use crate::builder::passthrough_methods;
use hxui_core::attributes::{AttributeMap, ExtraAttributes, Passthrough, assemble};
use hxui_core::element::{Element, Tag};
use hxui_core::hx::HxAttributes;
use hxui_core::validate::{class_list, required_text};
use hxui_core::{Component, Content, Markup, Result, Theme};

/// Default paragraph classes
pub const TEXT_CLASSES: &str = "text-gray-600";

/// A paragraph of escaped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
	value: String,
	classes: String,
	hx: HxAttributes,
	extra: ExtraAttributes,
}

impl Text {
	/// Starts a text configuration.
	#[allow(clippy::new_ret_no_self)]
	pub fn new(value: impl Into<String>) -> TextBuilder {
		TextBuilder {
			value: value.into(),
			classes: TEXT_CLASSES.to_string(),
			passthrough: Passthrough::new(),
		}
	}

	/// Paragraph text
	pub fn value(&self) -> &str {
		&self.value
	}
}

impl Component for Text {
	fn name(&self) -> &'static str {
		"Text"
	}

	fn render_with(&self, _theme: &Theme) -> Markup {
		let attrs = assemble(
			AttributeMap::new().with_class(&self.classes),
			&[],
			&self.hx,
			&self.extra,
		);
		Element::new(Tag::P)
			.attrs(attrs)
			.child(self.value.as_str())
			.render()
	}
}

/// Builder for [`Text`]
#[derive(Debug)]
pub struct TextBuilder {
	value: String,
	classes: String,
	passthrough: Passthrough,
}

impl TextBuilder {
	/// Replaces the paragraph classes.
	pub fn classes(mut self, classes: impl Into<String>) -> Self {
		self.classes = classes.into();
		self
	}

	passthrough_methods!();

	/// Validates the configuration.
	pub fn build(self) -> Result<Text> {
		let value = required_text("value", &self.value)?;
		let (hx, extra) = self.passthrough.finish()?;
		Ok(Text {
			value,
			classes: class_list(&self.classes),
			hx,
			extra,
		})
	}
}

impl From<Text> for Content {
	fn from(text: Text) -> Self {
		Content::component(text)
	}
}
