//! Field validation shared by every component kind.

use crate::error::{ConfigurationError, Result};

/// Trims a required text field and rejects it when nothing is left.
///
/// # Examples
///
/// ```
/// use hxui_core::validate::required_text;
///
/// assert_eq!(required_text("title", "  Hello ").unwrap(), "Hello");
/// assert!(required_text("title", " \n ").is_err());
/// ```
pub fn required_text(field: &'static str, value: &str) -> Result<String> {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		tracing::debug!(field, "rejected empty required field");
		return Err(ConfigurationError::EmptyField { field });
	}
	Ok(trimmed.to_string())
}

/// Trims a class-list field. Empty lists are allowed and simply emit nothing.
pub fn class_list(value: &str) -> String {
	value.split_whitespace().collect::<Vec<_>>().join(" ")
}
