//! Variant values and preset tables.
//!
//! A variant is either a preset name looked up in the component kind's table
//! or a raw class string used verbatim. Lookup is an exact, case-sensitive
//! match; a preset name that is not in the table falls through to raw
//! passthrough, so resolution never fails.

use crate::error::{ConfigurationError, Result};
use indexmap::IndexMap;

/// Style selector for a component field (`variant`, `size`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Variant {
	/// A short token resolved against the preset table.
	Preset(String),
	/// Classes used verbatim, never looked up.
	Raw(String),
}

impl Variant {
	/// Creates a preset lookup.
	pub fn preset(name: impl Into<String>) -> Self {
		Self::Preset(name.into())
	}

	/// Creates a raw class string.
	pub fn raw(classes: impl Into<String>) -> Self {
		Self::Raw(classes.into())
	}

	/// Trims the value and rejects empty input.
	///
	/// `field` names the configuration field in the error.
	pub fn normalized(self, field: &'static str) -> Result<Self> {
		let trimmed = self.as_str().trim();
		if trimmed.is_empty() {
			tracing::debug!(field, "rejected empty variant");
			return Err(ConfigurationError::InvalidVariant { field });
		}
		let trimmed = trimmed.to_string();
		Ok(match self {
			Self::Preset(_) => Self::Preset(trimmed),
			Self::Raw(_) => Self::Raw(trimmed),
		})
	}

	/// Returns the underlying string.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Preset(value) | Self::Raw(value) => value,
		}
	}
}

impl From<&str> for Variant {
	fn from(value: &str) -> Self {
		Self::Preset(value.to_string())
	}
}

impl From<String> for Variant {
	fn from(value: String) -> Self {
		Self::Preset(value)
	}
}

/// Mapping from preset name to class string for one component field, plus
/// the preset used when the field is omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetTable {
	default: String,
	presets: IndexMap<String, String>,
}

impl PresetTable {
	/// Creates a table from `(name, classes)` pairs.
	///
	/// Intended for the builtin tables; documents loaded at runtime go
	/// through [`PresetTable::validate`].
	pub fn from_static(default: &str, presets: &[(&str, &str)]) -> Self {
		Self {
			default: default.to_string(),
			presets: presets
				.iter()
				.map(|(name, classes)| (name.to_string(), classes.to_string()))
				.collect(),
		}
	}

	/// Name of the preset used when the field is omitted.
	pub fn default_name(&self) -> &str {
		&self.default
	}

	/// Returns the classes for an exact preset name.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.presets.get(name).map(String::as_str)
	}

	/// Returns `true` if `name` is a preset key.
	pub fn contains(&self, name: &str) -> bool {
		self.presets.contains_key(name)
	}

	/// Iterates over `(name, classes)` pairs in table order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.presets.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Resolves a variant to its class string.
	///
	/// 1. a preset name that matches a key exactly yields the preset classes
	/// 2. any other value is used verbatim
	/// 3. `None` yields the default preset
	///
	/// # Examples
	///
	/// ```
	/// use hxui_core::variant::{PresetTable, Variant};
	///
	/// let table = PresetTable::from_static("default", &[("default", "bg-blue-600"), ("success", "bg-green-600")]);
	/// assert_eq!(table.resolve(Some(&Variant::from("success"))), "bg-green-600");
	/// assert_eq!(table.resolve(Some(&Variant::from("bg-gradient-to-r"))), "bg-gradient-to-r");
	/// assert_eq!(table.resolve(None), "bg-blue-600");
	/// ```
	pub fn resolve<'a>(&'a self, variant: Option<&'a Variant>) -> &'a str {
		match variant {
			Some(Variant::Preset(name)) => self.get(name).unwrap_or(name.as_str()),
			Some(Variant::Raw(classes)) => classes.as_str(),
			None => self.get(&self.default).unwrap_or_default(),
		}
	}

	/// Adds or replaces presets from a theme document and adopts its default
	/// name when it has one.
	///
	/// Layered presets must carry classes. The builtin tables may hold an
	/// empty preset (the card's `default` tint).
	pub(crate) fn layer(&mut self, overrides: PresetOverrides, table: &str) -> Result<()> {
		for (name, classes) in overrides.presets {
			if classes.trim().is_empty() {
				return Err(ConfigurationError::InvalidTheme(format!(
					"{table}: preset `{name}` has no classes"
				)));
			}
			if self.presets.contains_key(&name) {
				tracing::debug!(table, preset = %name, "theme overrides builtin preset");
			}
			self.presets.insert(name, classes);
		}
		if let Some(default) = overrides.default {
			self.default = default;
		}
		Ok(())
	}

	/// Checks preset names and that the default name is defined.
	pub fn validate(&self, table: &str) -> Result<()> {
		for name in self.presets.keys() {
			if name.is_empty()
				|| !name
					.chars()
					.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
			{
				return Err(ConfigurationError::InvalidTheme(format!(
					"{table}: invalid preset name `{name}`"
				)));
			}
		}
		if !self.presets.contains_key(&self.default) {
			return Err(ConfigurationError::InvalidTheme(format!(
				"{table}: default preset `{}` is not defined",
				self.default
			)));
		}
		Ok(())
	}
}

/// Presets to add on top of a table, plus an optional new default name.
#[derive(Debug, Clone, Default)]
pub(crate) struct PresetOverrides {
	pub(crate) default: Option<String>,
	pub(crate) presets: IndexMap<String, String>,
}

impl PresetOverrides {
	pub(crate) fn single(name: &str, classes: impl Into<String>) -> Self {
		Self {
			default: None,
			presets: IndexMap::from([(name.to_string(), classes.into())]),
		}
	}
}
