//! Theme system: the read-only preset tables used for variant resolution.
//!
//! A process renders against one theme. It is either installed once at
//! startup with [`Theme::install`] or, when nothing is installed before the
//! first render, the builtin [`Theme::default_theme`]. Either way the theme
//! is frozen after the first read, so output never changes mid-process.
//!
//! Every way of obtaining a `Theme` validates it: the builtin tables, the
//! TOML loaders and the builder methods. Components can therefore resolve
//! against any `&Theme` they are handed.
//!
//! # Document format
//!
//! ```toml
//! [button]
//! default_variant = "brand"
//! default_size = "md"
//!
//! [button.variants]
//! brand = "text-white bg-indigo-600"
//!
//! [button.sizes]
//! xxl = "text-2xl px-8 py-5"
//!
//! [card]
//! default_variant = "default"
//!
//! [card.variants]
//! info = "border-sky-300 bg-sky-50"
//! ```

use crate::error::{ConfigurationError, Result};
use crate::variant::{PresetOverrides, PresetTable};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

static GLOBAL_THEME: OnceLock<Theme> = OnceLock::new();

const BUTTON_VARIANTS: &str = "button.variants";
const BUTTON_SIZES: &str = "button.sizes";
const CARD_VARIANTS: &str = "card.variants";

/// Theme configuration
///
/// Holds one preset table per component field that accepts a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
	button_variants: PresetTable,
	button_sizes: PresetTable,
	card_variants: PresetTable,
}

impl Theme {
	/// Create the builtin Tailwind theme
	pub fn default_theme() -> Self {
		Self {
			button_variants: PresetTable::from_static(
				"default",
				&[
					(
						"default",
						"text-white bg-blue-600 border border-transparent hover:bg-blue-700 focus:ring-4 focus:ring-blue-300",
					),
					(
						"secondary",
						"text-gray-700 bg-gray-200 border border-gray-300 hover:bg-gray-300 hover:text-gray-900 focus:ring-4 focus:ring-gray-100",
					),
					(
						"tertiary",
						"text-gray-600 bg-gray-100 border border-gray-200 hover:bg-gray-200 hover:text-gray-900 focus:ring-4 focus:ring-gray-100",
					),
					(
						"success",
						"text-white bg-green-600 border border-transparent hover:bg-green-700 focus:ring-4 focus:ring-green-300",
					),
					(
						"danger",
						"text-white bg-red-600 border border-transparent hover:bg-red-700 focus:ring-4 focus:ring-red-300",
					),
					(
						"warning",
						"text-white bg-yellow-500 border border-transparent hover:bg-yellow-600 focus:ring-4 focus:ring-yellow-300",
					),
					(
						"dark",
						"text-white bg-gray-800 border border-transparent hover:bg-gray-900 focus:ring-4 focus:ring-gray-500",
					),
					(
						"ghost",
						"text-gray-700 bg-transparent border border-transparent hover:bg-gray-100 focus:ring-4 focus:ring-gray-200",
					),
				],
			),
			button_sizes: PresetTable::from_static(
				"md",
				&[
					("xs", "text-xs px-2 py-1"),
					("sm", "text-xs px-3 py-1.5"),
					("md", "text-sm px-4 py-2.5"),
					("lg", "text-base px-5 py-3"),
					("xl", "text-lg px-6 py-4"),
				],
			),
			card_variants: PresetTable::from_static(
				"default",
				&[
					("default", ""),
					("success", "border-green-300 bg-green-50"),
					("warning", "border-yellow-300 bg-yellow-50"),
					("danger", "border-red-300 bg-red-50"),
					("ghost", "bg-transparent border-transparent shadow-none"),
				],
			),
		}
	}

	/// Parses a TOML theme document and layers it over the builtin tables.
	///
	/// # Example
	///
	/// ```
	/// use hxui_core::theme::Theme;
	///
	/// let theme = Theme::from_toml_str(r#"
	/// [button.variants]
	/// brand = "text-white bg-indigo-600"
	/// [button]
	/// default_variant = "brand"
	/// "#).unwrap();
	///
	/// assert_eq!(theme.button_variants().resolve(None), "text-white bg-indigo-600");
	/// assert_eq!(theme.button_sizes().default_name(), "md");
	/// ```
	pub fn from_toml_str(document: &str) -> Result<Self> {
		let document: ThemeDocument = toml::from_str(document)?;
		let ThemeDocument { button, card } = document;
		let mut theme = Self::default_theme();
		theme.button_variants.layer(
			PresetOverrides {
				default: button.default_variant,
				presets: button.variants,
			},
			BUTTON_VARIANTS,
		)?;
		theme.button_sizes.layer(
			PresetOverrides {
				default: button.default_size,
				presets: button.sizes,
			},
			BUTTON_SIZES,
		)?;
		theme.card_variants.layer(
			PresetOverrides {
				default: card.default_variant,
				presets: card.variants,
			},
			CARD_VARIANTS,
		)?;
		theme.validate()?;
		Ok(theme)
	}

	/// Reads a TOML theme document from disk.
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let document = std::fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "loading theme document");
		Self::from_toml_str(&document)
	}

	/// Validates every preset table.
	pub fn validate(&self) -> Result<()> {
		self.button_variants.validate(BUTTON_VARIANTS)?;
		self.button_sizes.validate(BUTTON_SIZES)?;
		self.card_variants.validate(CARD_VARIANTS)?;
		Ok(())
	}

	/// Installs this theme for the whole process.
	///
	/// Fails if a theme was already installed or if a render already froze
	/// the builtin theme.
	pub fn install(self) -> Result<()> {
		self.validate()?;
		GLOBAL_THEME
			.set(self)
			.map_err(|_| ConfigurationError::ThemeAlreadyInstalled)?;
		tracing::info!("installed process-wide theme");
		Ok(())
	}

	/// Returns the process-wide theme, freezing the builtin theme if none was
	/// installed.
	pub fn global() -> &'static Theme {
		GLOBAL_THEME.get_or_init(Self::default_theme)
	}

	/// Button colour variants
	pub fn button_variants(&self) -> &PresetTable {
		&self.button_variants
	}

	/// Button sizes
	pub fn button_sizes(&self) -> &PresetTable {
		&self.button_sizes
	}

	/// Card tints
	pub fn card_variants(&self) -> &PresetTable {
		&self.card_variants
	}

	/// Builder method for a button variant preset
	///
	/// # Errors
	///
	/// Returns [`ConfigurationError::InvalidTheme`] for an invalid preset name
	/// or empty classes.
	pub fn button_variant(mut self, name: &str, classes: impl Into<String>) -> Result<Self> {
		self.button_variants
			.layer(PresetOverrides::single(name, classes), BUTTON_VARIANTS)?;
		self.button_variants.validate(BUTTON_VARIANTS)?;
		Ok(self)
	}

	/// Builder method for a button size preset
	pub fn button_size(mut self, name: &str, classes: impl Into<String>) -> Result<Self> {
		self.button_sizes
			.layer(PresetOverrides::single(name, classes), BUTTON_SIZES)?;
		self.button_sizes.validate(BUTTON_SIZES)?;
		Ok(self)
	}

	/// Builder method for a card variant preset
	pub fn card_variant(mut self, name: &str, classes: impl Into<String>) -> Result<Self> {
		self.card_variants
			.layer(PresetOverrides::single(name, classes), CARD_VARIANTS)?;
		self.card_variants.validate(CARD_VARIANTS)?;
		Ok(self)
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeDocument {
	#[serde(default)]
	button: ButtonSection,
	#[serde(default)]
	card: CardSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ButtonSection {
	default_variant: Option<String>,
	default_size: Option<String>,
	variants: IndexMap<String, String>,
	sizes: IndexMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CardSection {
	default_variant: Option<String>,
	variants: IndexMap<String, String>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_default_theme() {
		let theme = Theme::default_theme();
		assert!(theme.validate().is_ok());
		assert_eq!(theme.button_variants().default_name(), "default");
		assert_eq!(theme.button_sizes().get("md"), Some("text-sm px-4 py-2.5"));
		assert_eq!(theme.card_variants().resolve(None), "");
	}

	#[rstest]
	fn test_builder_methods() {
		let theme = Theme::default_theme()
			.button_variant("brand", "bg-indigo-600")
			.and_then(|theme| theme.button_size("xxl", "text-2xl px-8 py-5"))
			.and_then(|theme| theme.card_variant("info", "bg-sky-50"))
			.unwrap();

		assert_eq!(theme.button_variants().get("brand"), Some("bg-indigo-600"));
		assert_eq!(theme.button_sizes().get("xxl"), Some("text-2xl px-8 py-5"));
		assert_eq!(theme.card_variants().get("info"), Some("bg-sky-50"));
	}

	#[rstest]
	#[case("bad name", "bg-indigo-600")]
	#[case("", "bg-indigo-600")]
	#[case("brand", "   ")]
	fn test_builder_methods_validate(#[case] name: &str, #[case] classes: &str) {
		assert!(matches!(
			Theme::default_theme().button_variant(name, classes),
			Err(ConfigurationError::InvalidTheme(_))
		));
		assert!(matches!(
			Theme::default_theme().button_size(name, classes),
			Err(ConfigurationError::InvalidTheme(_))
		));
		assert!(matches!(
			Theme::default_theme().card_variant(name, classes),
			Err(ConfigurationError::InvalidTheme(_))
		));
	}

	#[rstest]
	fn test_documented_format_parses() {
		let theme = Theme::from_toml_str(
			"[button.variants]\nbrand = \"text-white bg-indigo-600\"\n[button]\ndefault_variant = \"brand\"\n",
		)
		.unwrap();
		assert_eq!(theme.button_variants().default_name(), "brand");
		assert_eq!(theme.button_variants().resolve(None), "text-white bg-indigo-600");
	}

	#[rstest]
	fn test_document_overrides_builtin_preset() {
		let theme = Theme::from_toml_str(
			r#"
			[button]
			default_size = "lg"

			[button.variants]
			success = "bg-emerald-600"

			[card]
			default_variant = "info"

			[card.variants]
			info = "bg-sky-50"
			"#,
		)
		.unwrap();
		assert_eq!(theme.button_variants().get("success"), Some("bg-emerald-600"));
		assert_eq!(
			theme.button_variants().get("danger"),
			Theme::default_theme().button_variants().get("danger")
		);
		assert_eq!(theme.button_sizes().resolve(None), "text-base px-5 py-3");
		assert_eq!(theme.card_variants().resolve(None), "bg-sky-50");
	}

	#[rstest]
	fn test_empty_document_is_builtin_theme() {
		assert_eq!(Theme::from_toml_str("").unwrap(), Theme::default_theme());
	}

	#[rstest]
	#[case("[button]\ndefault_size = \"huge\"\n")]
	#[case("[button.variants]\n\"bad name\" = \"x\"\n")]
	#[case("[card.variants]\nempty = \"  \"\n")]
	fn test_invalid_tables_are_rejected(#[case] document: &str) {
		assert!(matches!(
			Theme::from_toml_str(document),
			Err(ConfigurationError::InvalidTheme(_))
		));
	}

	#[rstest]
	#[case("[button]\ncolour = 1\n")]
	#[case("[button.variant]\ndefault = \"brand\"\n")]
	#[case("[button.variants\n")]
	fn test_malformed_documents_are_parse_errors(#[case] document: &str) {
		assert!(matches!(
			Theme::from_toml_str(document),
			Err(ConfigurationError::ThemeParse(_))
		));
	}

	#[rstest]
	fn test_from_toml_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[button.sizes]\nxxl = \"text-2xl\"").unwrap();
		let theme = Theme::from_toml_file(file.path()).unwrap();
		assert_eq!(theme.button_sizes().get("xxl"), Some("text-2xl"));
	}

	#[rstest]
	fn test_missing_file_is_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = Theme::from_toml_file(dir.path().join("missing.toml")).unwrap_err();
		assert!(matches!(err, ConfigurationError::ThemeIo(_)));
	}
}
