//! # hxui-components
//!
//! The builtin component kinds: [`Button`], [`Card`] and [`Text`].
//!
//! Every component is configured through a builder whose `build()` validates
//! all inputs at once. A built component cannot fail to render.
//!
//! ## Example
//!
//! ```
//! use hxui_components::{Button, ButtonVariant, Card};
//! use hxui_core::{Component, Theme};
//!
//! let refresh = Button::new("Refresh")
//! 	.variant(ButtonVariant::Secondary)
//! 	.hx("hx_get", "/stats")
//! 	.hx("hx_target", "#stats")
//! 	.build()
//! 	.unwrap();
//! let card = Card::new("Stats", refresh).build().unwrap();
//! let html = card.render_with(&Theme::default_theme());
//! assert!(html.as_str().contains("hx-get=\"/stats\" hx-target=\"#stats\""));
//! ```

#![warn(missing_docs)]

mod builder;

pub mod button;
pub mod card;
pub mod text;

pub use button::{Button, ButtonBuilder, ButtonSize, ButtonType, ButtonVariant};
pub use card::{Card, CardBuilder, CardStyle};
pub use text::{Text, TextBuilder};
