//! # hxui-core
//!
//! The component compilation engine behind hxui: typed, validated
//! configuration objects that compile deterministically into HTML.
//!
//! ## Layers
//!
//! - **Configuration**: [`validate`], [`variant::Variant`], [`hx::HxAttributes`]
//!   and [`attributes::ExtraAttributes`] check every input once, at
//!   construction time, and fail with [`ConfigurationError`].
//! - **Compilation**: [`attributes::assemble`] merges attribute sources in a
//!   fixed order, [`variant::PresetTable`] resolves variants, and
//!   [`element::Element`] serializes the tree with escaping.
//!
//! ## Trust boundary
//!
//! Text is always a `String` and is always escaped. Rendered HTML is always a
//! [`Markup`], which only the serializer can produce and which a parent
//! splices without escaping it again.
//!
//! ## Example
//!
//! ```
//! use hxui_core::prelude::*;
//!
//! let hx = HxAttributes::from_pairs([("hx_get", "/refresh"), ("hx_trigger", "click")]).unwrap();
//! let attrs = assemble(
//! 	AttributeMap::new().with_class("card"),
//! 	&[],
//! 	&hx,
//! 	&ExtraAttributes::new(),
//! );
//! let html = Element::new(Tag::DIV).attrs(attrs).child("A & B").render();
//! assert_eq!(
//! 	html,
//! 	"<div class=\"card\" hx-get=\"/refresh\" hx-trigger=\"click\">A &amp; B</div>"
//! );
//! ```

pub mod attributes;
pub mod component;
pub mod element;
pub mod error;
pub mod escape;
pub mod hx;
pub mod markup;
pub mod theme;
pub mod validate;
pub mod variant;

pub use component::{Component, Content, Fragment};
pub use error::{ConfigurationError, Result};
pub use markup::Markup;
pub use theme::Theme;
pub use variant::Variant;

/// Commonly used types
pub mod prelude {
	pub use crate::attributes::{AttributeMap, ExtraAttributes, Passthrough, assemble};
	pub use crate::component::{Component, Content, Fragment};
	pub use crate::element::{Element, Node, Tag};
	pub use crate::error::{ConfigurationError, Result};
	pub use crate::hx::HxAttributes;
	pub use crate::markup::Markup;
	pub use crate::theme::Theme;
	pub use crate::variant::{PresetTable, Variant};
}
