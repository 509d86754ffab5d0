//! Button component

use crate::builder::passthrough_methods;
use hxui_core::attributes::{AttributeMap, ExtraAttributes, Passthrough, assemble};
use hxui_core::element::{Element, Tag};
use hxui_core::hx::HxAttributes;
use hxui_core::validate::required_text;
use hxui_core::{Component, Content, Markup, Result, Theme, Variant};

/// Classes every button carries before size and variant classes.
pub const BASE_CLASSES: &str =
	"box-border font-medium leading-5 rounded-lg shadow-sm focus:outline-none transition-colors";

/// Color variant presets for buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
	/// Blue, the default
	Default,
	/// Gray with border
	Secondary,
	/// Light gray
	Tertiary,
	/// Green
	Success,
	/// Red
	Danger,
	/// Yellow
	Warning,
	/// Dark gray
	Dark,
	/// Transparent until hovered
	Ghost,
}

impl ButtonVariant {
	/// Preset name in the theme's button variant table
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Default => "default",
			Self::Secondary => "secondary",
			Self::Tertiary => "tertiary",
			Self::Success => "success",
			Self::Danger => "danger",
			Self::Warning => "warning",
			Self::Dark => "dark",
			Self::Ghost => "ghost",
		}
	}
}

impl From<ButtonVariant> for Variant {
	fn from(variant: ButtonVariant) -> Self {
		Variant::preset(variant.as_str())
	}
}

/// Size presets for buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
	/// Extra small
	Xs,
	/// Small
	Sm,
	/// Medium (default)
	Md,
	/// Large
	Lg,
	/// Extra large
	Xl,
}

impl ButtonSize {
	/// Preset name in the theme's button size table
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Xs => "xs",
			Self::Sm => "sm",
			Self::Md => "md",
			Self::Lg => "lg",
			Self::Xl => "xl",
		}
	}
}

impl From<ButtonSize> for Variant {
	fn from(size: ButtonSize) -> Self {
		Variant::preset(size.as_str())
	}
}

/// HTML `type` of a button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
	/// `type="button"`
	#[default]
	Button,
	/// `type="submit"`
	Submit,
	/// `type="reset"`
	Reset,
}

impl ButtonType {
	/// Attribute value
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Button => "button",
			Self::Submit => "submit",
			Self::Reset => "reset",
		}
	}
}

/// A validated button configuration.
///
/// # Example
///
/// ```
/// use hxui_components::{Button, ButtonVariant};
/// use hxui_core::{Component, Theme};
///
/// let button = Button::new("Go").variant(ButtonVariant::Success).build().unwrap();
/// let html = button.render_with(&Theme::default_theme());
/// assert!(html.as_str().contains("bg-green-600"));
/// assert!(html.as_str().ends_with(">Go</button>"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
	label: String,
	variant: Option<Variant>,
	size: Option<Variant>,
	button_type: ButtonType,
	structural: AttributeMap,
	hx: HxAttributes,
	extra: ExtraAttributes,
}

impl Button {
	/// Starts a button configuration with its label.
	#[allow(clippy::new_ret_no_self)]
	pub fn new(label: impl Into<String>) -> ButtonBuilder {
		ButtonBuilder {
			label: label.into(),
			variant: None,
			size: None,
			button_type: ButtonType::default(),
			passthrough: Passthrough::new(),
		}
	}

	/// Button text
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Variant, if one was configured
	pub fn variant(&self) -> Option<&Variant> {
		self.variant.as_ref()
	}

	/// Size, if one was configured
	pub fn size(&self) -> Option<&Variant> {
		self.size.as_ref()
	}

	/// HTML button type
	pub fn button_type(&self) -> ButtonType {
		self.button_type
	}

	/// Interaction attributes in wire form
	pub fn hx_attributes(&self) -> &HxAttributes {
		&self.hx
	}
}

impl Component for Button {
	fn name(&self) -> &'static str {
		"Button"
	}

	fn render_with(&self, theme: &Theme) -> Markup {
		let attrs = assemble(
			self.structural.clone(),
			&[
				theme.button_sizes().resolve(self.size.as_ref()),
				theme.button_variants().resolve(self.variant.as_ref()),
			],
			&self.hx,
			&self.extra,
		);
		Element::new(Tag::BUTTON)
			.attrs(attrs)
			.child(self.label.as_str())
			.render()
	}
}

/// Builder for [`Button`]
#[derive(Debug)]
pub struct ButtonBuilder {
	label: String,
	variant: Option<Variant>,
	size: Option<Variant>,
	button_type: ButtonType,
	passthrough: Passthrough,
}

impl ButtonBuilder {
	/// Preset name (`"success"`, [`ButtonVariant::Danger`]) or raw classes.
	pub fn variant(mut self, variant: impl Into<Variant>) -> Self {
		self.variant = Some(variant.into());
		self
	}

	/// Preset size (`"lg"`, [`ButtonSize::Xs`]) or raw classes.
	pub fn size(mut self, size: impl Into<Variant>) -> Self {
		self.size = Some(size.into());
		self
	}

	/// HTML button type
	pub fn button_type(mut self, button_type: ButtonType) -> Self {
		self.button_type = button_type;
		self
	}

	passthrough_methods!();

	/// Validates the configuration.
	pub fn build(self) -> Result<Button> {
		let label = required_text("label", &self.label)?;
		let variant = self.variant.map(|v| v.normalized("variant")).transpose()?;
		let size = self.size.map(|v| v.normalized("size")).transpose()?;
		let (hx, extra) = self.passthrough.finish()?;
		let structural = AttributeMap::new()
			.with_class(BASE_CLASSES)
			.with("type", self.button_type.as_str())?;
		Ok(Button {
			label,
			variant,
			size,
			button_type: self.button_type,
			structural,
			hx,
			extra,
		})
	}
}

impl From<Button> for Content {
	fn from(button: Button) -> Self {
		Content::component(button)
	}
}
