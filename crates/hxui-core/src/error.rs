//! Error types for hxui-core

use thiserror::Error;

/// Error raised while constructing a component configuration or a theme.
///
/// `render` never produces this error: it only runs on values that already
/// passed validation.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigurationError {
	/// A required text field is empty after trimming
	#[error("Field `{field}` must not be empty")]
	EmptyField {
		/// Name of the offending field
		field: &'static str,
	},

	/// A variant or size value is an empty preset name or an empty class string
	#[error("Field `{field}` must name a preset or contain at least one class")]
	InvalidVariant {
		/// Name of the offending field
		field: &'static str,
	},

	/// An interaction attribute key is outside the `hx_` namespace or malformed
	#[error("Invalid interaction attribute `{name}`: {reason}")]
	InvalidInteractionAttribute {
		/// Key as supplied by the caller
		name: String,
		/// What is wrong with it
		reason: &'static str,
	},

	/// A free-form attribute name is not a valid HTML attribute name
	#[error("Invalid HTML attribute name: `{name}`")]
	InvalidAttributeName {
		/// Name as supplied by the caller
		name: String,
	},

	/// A tag name is not a plain HTML element name
	#[error("Invalid HTML tag name: `{name}`")]
	InvalidTagName {
		/// Name as supplied by the caller
		name: String,
	},

	/// A theme table failed validation
	#[error("Invalid theme: {0}")]
	InvalidTheme(String),

	/// A theme document could not be parsed
	#[error("Theme parse error: {0}")]
	ThemeParse(#[from] toml::de::Error),

	/// A theme file could not be read
	#[error("Theme IO error: {0}")]
	ThemeIo(#[from] std::io::Error),

	/// The process-wide theme was already installed
	#[error("A theme has already been installed for this process")]
	ThemeAlreadyInstalled,
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigurationError>;
