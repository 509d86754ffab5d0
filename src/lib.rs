//! # hxui
//!
//! Typed server-side UI components that compile to deterministic, escaped HTML
//! carrying htmx interaction attributes.
//!
//! A component is configured through a builder, validated once by `build()`,
//! and rendered into [`Markup`] against a [`Theme`]. Rendering never fails and
//! always produces the same bytes for the same configuration and theme.
//!
//! ## Feature Flags
//!
//! - `components` (default) - the builtin [`Button`], [`Card`] and [`Text`]
//!
//! Without `components` only the engine is available: escaping, attribute
//! assembly, variant resolution and the [`Component`] trait for writing your
//! own components.
//!
//! ## Quick Example
//!
//! ```
//! use hxui::prelude::*;
//!
//! let card = Card::new("Hello", "A & B")
//! 	.hx("hx_get", "/refresh")
//! 	.hx("hx_trigger", "click")
//! 	.build()
//! 	.unwrap();
//!
//! let html = card.render_with(&Theme::default_theme());
//! assert!(html.as_str().contains("hx-get=\"/refresh\" hx-trigger=\"click\""));
//! assert!(html.as_str().contains(">A &amp; B</p>"));
//! ```
//!
//! ## Themes
//!
//! Preset tables can be overridden from TOML and installed once at startup:
//!
//! ```no_run
//! use hxui::Theme;
//!
//! Theme::from_toml_file("theme.toml")?.install()?;
//! # Ok::<(), hxui::ConfigurationError>(())
//! ```

pub use hxui_core::{
	Component, ConfigurationError, Content, Fragment, Markup, Result, Theme, Variant, attributes,
	component, element, error, escape, hx, markup, theme, validate, variant,
};

#[cfg(feature = "components")]
pub use hxui_components::{
	Button, ButtonBuilder, ButtonSize, ButtonType, ButtonVariant, Card, CardBuilder, CardStyle,
	Text, TextBuilder,
};

/// Commonly used types
pub mod prelude {
	pub use hxui_core::prelude::*;

	#[cfg(feature = "components")]
	pub use hxui_components::{
		Button, ButtonSize, ButtonType, ButtonVariant, Card, CardStyle, Text,
	};
}
