//! Card component

use crate::builder::passthrough_methods;
use hxui_core::attributes::{AttributeMap, ExtraAttributes, Passthrough, assemble};
use hxui_core::element::{Element, Node, Tag};
use hxui_core::hx::HxAttributes;
use hxui_core::validate::{class_list, required_text};
use hxui_core::{Component, Content, Markup, Result, Theme, Variant};

/// Container classes of a card, one field per concern.
///
/// Empty fields are skipped when the class list is joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStyle {
	/// Display mode (`block`)
	pub display: String,
	/// Width constraint (`max-w-sm`)
	pub width: String,
	/// Inner spacing (`p-6`)
	pub padding: String,
	/// Background colour (`bg-white`)
	pub background: String,
	/// Border width and colour (`border border-gray-200`)
	pub border: String,
	/// Corner rounding (`rounded-xl`)
	pub radius: String,
	/// Resting shadow (`shadow-sm`)
	pub shadow: String,
	/// Shadow on hover (`hover:shadow-md`)
	pub hover_shadow: String,
	/// Background on hover (`hover:bg-gray-50`)
	pub hover_background: String,
	/// Transition classes (`transition-all duration-150`)
	pub transitions: String,
}

impl Default for CardStyle {
	fn default() -> Self {
		Self {
			display: "block".to_string(),
			width: "max-w-sm".to_string(),
			padding: "p-6".to_string(),
			background: "bg-white".to_string(),
			border: "border border-gray-200".to_string(),
			radius: "rounded-xl".to_string(),
			shadow: "shadow-sm".to_string(),
			hover_shadow: "hover:shadow-md".to_string(),
			hover_background: "hover:bg-gray-50".to_string(),
			transitions: "transition-all duration-150".to_string(),
		}
	}
}

impl CardStyle {
	fn fields(&self) -> [&str; 10] {
		[
			self.display.as_str(),
			self.width.as_str(),
			self.padding.as_str(),
			self.background.as_str(),
			self.border.as_str(),
			self.radius.as_str(),
			self.shadow.as_str(),
			self.hover_shadow.as_str(),
			self.hover_background.as_str(),
			self.transitions.as_str(),
		]
	}

	fn fields_mut(&mut self) -> [&mut String; 10] {
		[
			&mut self.display,
			&mut self.width,
			&mut self.padding,
			&mut self.background,
			&mut self.border,
			&mut self.radius,
			&mut self.shadow,
			&mut self.hover_shadow,
			&mut self.hover_background,
			&mut self.transitions,
		]
	}

	/// Joined class list
	pub fn class_list(&self) -> String {
		self.fields()
			.into_iter()
			.filter(|classes| !classes.is_empty())
			.collect::<Vec<_>>()
			.join(" ")
	}
}

/// Default classes of the card title
pub const TITLE_CLASSES: &str = "mb-3 text-2xl font-semibold tracking-tight text-gray-900 leading-8";

/// Default classes of text content
pub const CONTENT_CLASSES: &str = "text-gray-600 leading-relaxed";

/// A titled container.
///
/// Text content is wrapped in a paragraph. Child components are rendered with
/// the card's theme and spliced in place of the paragraph.
#[derive(Debug)]
pub struct Card {
	title: String,
	content: Content,
	style: CardStyle,
	title_classes: String,
	content_classes: String,
	variant: Option<Variant>,
	hx: HxAttributes,
	extra: ExtraAttributes,
}

impl Card {
	/// Starts a card configuration.
	#[allow(clippy::new_ret_no_self)]
	pub fn new(title: impl Into<String>, content: impl Into<Content>) -> CardBuilder {
		CardBuilder {
			title: title.into(),
			content: content.into(),
			style: CardStyle::default(),
			title_classes: TITLE_CLASSES.to_string(),
			content_classes: CONTENT_CLASSES.to_string(),
			variant: None,
			passthrough: Passthrough::new(),
		}
	}

	/// Card heading
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Card body
	pub fn content(&self) -> &Content {
		&self.content
	}

	/// Container classes after trimming
	pub fn style(&self) -> &CardStyle {
		&self.style
	}

	/// Tint, if one was configured
	pub fn variant(&self) -> Option<&Variant> {
		self.variant.as_ref()
	}
}

impl Component for Card {
	fn name(&self) -> &'static str {
		"Card"
	}

	fn render_with(&self, theme: &Theme) -> Markup {
		let attrs = assemble(
			AttributeMap::new().with_class(&self.style.class_list()),
			&[theme.card_variants().resolve(self.variant.as_ref())],
			&self.hx,
			&self.extra,
		);
		let title = Element::new(Tag::H5)
			.attrs(AttributeMap::new().with_class(&self.title_classes))
			.child(self.title.as_str());
		let body: Node = match &self.content {
			Content::Text(text) => Element::new(Tag::P)
				.attrs(AttributeMap::new().with_class(&self.content_classes))
				.child(text.as_str())
				.into(),
			children => children.render_children(theme).into(),
		};
		Element::new(Tag::DIV)
			.attrs(attrs)
			.child(title)
			.child(body)
			.render()
	}
}

macro_rules! style_setters {
	($($field:ident),* $(,)?) => {
		$(
			#[doc = concat!("Replaces the `", stringify!($field), "` classes; an empty string drops them.")]
			pub fn $field(mut self, classes: impl Into<String>) -> Self {
				self.style.$field = classes.into();
				self
			}
		)*
	};
}

/// Builder for [`Card`]
#[derive(Debug)]
pub struct CardBuilder {
	title: String,
	content: Content,
	style: CardStyle,
	title_classes: String,
	content_classes: String,
	variant: Option<Variant>,
	passthrough: Passthrough,
}

impl CardBuilder {
	style_setters!(
		display,
		width,
		padding,
		background,
		border,
		radius,
		shadow,
		hover_shadow,
		hover_background,
		transitions,
	);

	/// Replaces every container class at once.
	pub fn style(mut self, style: CardStyle) -> Self {
		self.style = style;
		self
	}

	/// Replaces the heading classes.
	pub fn title_classes(mut self, classes: impl Into<String>) -> Self {
		self.title_classes = classes.into();
		self
	}

	/// Replaces the classes of the text paragraph. Unused for component content.
	pub fn content_classes(mut self, classes: impl Into<String>) -> Self {
		self.content_classes = classes.into();
		self
	}

	/// Tint preset (`"success"`, `"ghost"`) or raw classes.
	pub fn variant(mut self, variant: impl Into<Variant>) -> Self {
		self.variant = Some(variant.into());
		self
	}

	passthrough_methods!();

	/// Validates the configuration.
	pub fn build(self) -> Result<Card> {
		let title = required_text("title", &self.title)?;
		let content = self.content.normalized("content")?;
		let variant = self.variant.map(|v| v.normalized("variant")).transpose()?;
		let (hx, extra) = self.passthrough.finish()?;
		let mut style = self.style;
		for field in style.fields_mut() {
			*field = class_list(field);
		}
		Ok(Card {
			title,
			content,
			style,
			title_classes: class_list(&self.title_classes),
			content_classes: class_list(&self.content_classes),
			variant,
			hx,
			extra,
		})
	}
}

impl From<Card> for Content {
	fn from(card: Card) -> Self {
		Content::component(card)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hxui_core::ConfigurationError;
	use rstest::{fixture, rstest};

	const CONTAINER: &str = "block max-w-sm p-6 bg-white border border-gray-200 rounded-xl shadow-sm hover:shadow-md hover:bg-gray-50 transition-all duration-150";

	#[fixture]
	fn theme() -> Theme {
		Theme::default_theme()
	}

	#[rstest]
	fn test_default_style_class_list() {
		assert_eq!(CardStyle::default().class_list(), CONTAINER);
	}

	#[rstest]
	fn test_text_card_render(theme: Theme) {
		let html = Card::new("Hello", "A & B").build().unwrap().render_with(&theme);
		let expected = format!(
			"<div class=\"{CONTAINER}\"><h5 class=\"{TITLE_CLASSES}\">Hello</h5><p class=\"{CONTENT_CLASSES}\">A &amp; B</p></div>"
		);
		assert_eq!(html, expected);
	}

	#[rstest]
	fn test_empty_style_fields_are_skipped(theme: Theme) {
		let html = Card::new("T", "body")
			.hover_shadow("")
			.hover_background("  ")
			.transitions("")
			.build()
			.unwrap()
			.render_with(&theme);
		assert!(html.as_str().starts_with(
			"<div class=\"block max-w-sm p-6 bg-white border border-gray-200 rounded-xl shadow-sm\">"
		));
	}

	#[rstest]
	#[case("success", "border-green-300 bg-green-50")]
	#[case("ghost", "bg-transparent border-transparent shadow-none")]
	fn test_variant_appends_preset(theme: Theme, #[case] name: &str, #[case] classes: &str) {
		let html = Card::new("T", "body")
			.variant(name)
			.build()
			.unwrap()
			.render_with(&theme);
		assert!(html.as_str().contains(&format!("class=\"{CONTAINER} {classes}\"")));
	}

	#[rstest]
	fn test_default_variant_adds_nothing(theme: Theme) {
		let plain = Card::new("T", "body").build().unwrap().render_with(&theme);
		let explicit = Card::new("T", "body")
			.variant("default")
			.build()
			.unwrap()
			.render_with(&theme);
		assert_eq!(plain, explicit);
	}

	#[rstest]
	fn test_component_content_replaces_paragraph(theme: Theme) {
		let inner = Card::new("Inner", "x").build().unwrap();
		let inner_html = inner.render_with(&theme);
		let outer = Card::new("Outer", inner).build().unwrap();
		let html = outer.render_with(&theme);
		let expected = format!(
			"<div class=\"{CONTAINER}\"><h5 class=\"{TITLE_CLASSES}\">Outer</h5>{inner_html}</div>"
		);
		assert_eq!(html, expected);
	}

	#[rstest]
	fn test_custom_title_and_content_classes(theme: Theme) {
		let html = Card::new("T", "body")
			.title_classes("font-bold")
			.content_classes("")
			.build()
			.unwrap()
			.render_with(&theme);
		assert!(html.as_str().contains("<h5 class=\"font-bold\">T</h5>"));
		assert!(html.as_str().contains("<p>body</p>"));
	}

	#[rstest]
	#[case("", "body", "title")]
	#[case("T", "  ", "content")]
	fn test_empty_required_fields(
		#[case] title: &str,
		#[case] content: &str,
		#[case] field: &'static str,
	) {
		let err = Card::new(title, content).build().unwrap_err();
		assert!(matches!(err, ConfigurationError::EmptyField { field: f } if f == field));
	}

	#[rstest]
	fn test_empty_component_list_is_rejected() {
		let err = Card::new("T", Content::components(Vec::<Box<dyn Component>>::new())).build().unwrap_err();
		assert!(matches!(err, ConfigurationError::EmptyField { field: "content" }));
	}

	#[rstest]
	fn test_accessors() {
		let card = Card::new(" T ", " body ").variant("danger").build().unwrap();
		assert_eq!(card.title(), "T");
		assert!(matches!(card.content(), Content::Text(text) if text == "body"));
		assert_eq!(card.style(), &CardStyle::default());
		assert_eq!(card.variant(), Some(&Variant::preset("danger")));
	}
}
