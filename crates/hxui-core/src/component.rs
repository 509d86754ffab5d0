//! Core component trait and composition types

use crate::error::{ConfigurationError, Result};
use crate::markup::Markup;
use crate::theme::Theme;
use std::fmt;

/// Component trait - base interface for all UI components
///
/// A component is an immutable, already-validated configuration plus its
/// compilation rule into markup. Rendering is a pure function of the
/// configuration and the theme: it has no side effects and cannot fail.
pub trait Component: Send + Sync {
	/// Returns the component's name (for debugging)
	fn name(&self) -> &'static str;

	/// Renders the component against an explicit theme
	///
	/// Implementations render their children with the same theme.
	fn render_with(&self, theme: &Theme) -> Markup;

	/// Renders the component against the process-wide theme
	fn render(&self) -> Markup {
		self.render_with(Theme::global())
	}
}

impl fmt::Debug for dyn Component {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Component")
			.field("name", &self.name())
			.finish()
	}
}

impl<C: Component + ?Sized> Component for Box<C> {
	fn name(&self) -> &'static str {
		(**self).name()
	}

	fn render_with(&self, theme: &Theme) -> Markup {
		(**self).render_with(theme)
	}
}

/// Body of a container component.
///
/// Text is escaped and wrapped by the container; child components are
/// rendered and spliced without further escaping.
#[derive(Debug)]
pub enum Content {
	/// Plain text
	Text(String),
	/// A single child component
	Component(Box<dyn Component>),
	/// Several child components, rendered in order
	Components(Vec<Box<dyn Component>>),
}

impl Content {
	/// Creates text content.
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	/// Wraps a single child component.
	pub fn component(child: impl Component + 'static) -> Self {
		Self::Component(Box::new(child))
	}

	/// Wraps a list of child components.
	pub fn components<I>(children: I) -> Self
	where
		I: IntoIterator<Item = Box<dyn Component>>,
	{
		Self::Components(children.into_iter().collect())
	}

	/// Trims text and rejects empty text or an empty component list.
	pub fn normalized(self, field: &'static str) -> Result<Self> {
		match self {
			Self::Text(text) => crate::validate::required_text(field, &text).map(Self::Text),
			Self::Components(children) if children.is_empty() => {
				tracing::debug!(field, "rejected empty component list");
				Err(ConfigurationError::EmptyField { field })
			}
			other => Ok(other),
		}
	}

	/// Renders the child components; text content yields empty markup.
	pub fn render_children(&self, theme: &Theme) -> Markup {
		match self {
			Self::Text(_) => Markup::default(),
			Self::Component(child) => child.render_with(theme),
			Self::Components(children) => {
				Markup::concat(children.iter().map(|child| child.render_with(theme)))
			}
		}
	}
}

impl From<&str> for Content {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for Content {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<Box<dyn Component>> for Content {
	fn from(child: Box<dyn Component>) -> Self {
		Self::Component(child)
	}
}

impl From<Vec<Box<dyn Component>>> for Content {
	fn from(children: Vec<Box<dyn Component>>) -> Self {
		Self::Components(children)
	}
}

/// Sequence of components rendered back to back, without a wrapper element.
///
/// # Example
///
/// ```ignore
/// let row = Fragment::new()
///     .push(Button::new("Save").build()?)
///     .push(Button::new("Cancel").variant("ghost").build()?);
/// let html = row.render();
/// ```
#[derive(Debug, Default)]
pub struct Fragment {
	children: Vec<Box<dyn Component>>,
}

impl Fragment {
	/// Creates an empty fragment.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a component.
	pub fn push(mut self, child: impl Component + 'static) -> Self {
		self.children.push(Box::new(child));
		self
	}

	/// Returns the number of components.
	pub fn len(&self) -> usize {
		self.children.len()
	}

	/// Returns `true` if the fragment holds no component.
	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}
}

impl Component for Fragment {
	fn name(&self) -> &'static str {
		"Fragment"
	}

	fn render_with(&self, theme: &Theme) -> Markup {
		Markup::concat(self.children.iter().map(|child| child.render_with(theme)))
	}
}

impl From<Fragment> for Content {
	fn from(fragment: Fragment) -> Self {
		Self::Components(fragment.children)
	}
}
