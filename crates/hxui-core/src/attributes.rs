//! Attribute maps and the attribute assembler.
//!
//! Sources are merged in a fixed order, later sources overriding earlier ones
//! on key collision:
//!
//! 1. structural attributes of the component kind (base `class`, `type`, ...)
//! 2. resolved variant classes, appended to `class`
//! 3. normalized interaction attributes
//! 4. free-form extra attributes
//!
//! An overriding write replaces the value but keeps the position of the first
//! insertion, so the emitted order only depends on the configuration.

use crate::error::{ConfigurationError, Result};
use crate::hx::HxAttributes;
use indexmap::IndexMap;

/// Returns `true` if `name` is a syntactically valid HTML attribute name.
///
/// Rejects empty names, whitespace, control characters, noncharacters and
/// any of `"`, `'`, `<`, `>`, `/`, `=`.
///
/// # Examples
///
/// ```
/// use hxui_core::attributes::is_valid_attribute_name;
///
/// assert!(is_valid_attribute_name("data-id"));
/// assert!(is_valid_attribute_name("aria-label"));
/// assert!(!is_valid_attribute_name("on click"));
/// assert!(!is_valid_attribute_name("x=\"y\""));
/// ```
pub fn is_valid_attribute_name(name: &str) -> bool {
	!name.is_empty()
		&& name.chars().all(|c| {
			!c.is_control()
				&& !c.is_whitespace()
				&& !matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
				&& !is_noncharacter(c)
		})
}

fn is_noncharacter(c: char) -> bool {
	let cp = c as u32;
	(0xFDD0..=0xFDEF).contains(&cp) || (cp & 0xFFFE) == 0xFFFE
}

/// Ordered attribute mapping, ready for serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
	entries: IndexMap<String, String>,
}

impl AttributeMap {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Validates the name and sets an attribute. An existing value is
	/// replaced in place.
	///
	/// # Errors
	///
	/// Returns [`ConfigurationError::InvalidAttributeName`] when `name` fails
	/// [`is_valid_attribute_name`]; the map is left unchanged.
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
		let name = name.into();
		if !is_valid_attribute_name(&name) {
			tracing::debug!(attribute = %name, "rejected attribute name");
			return Err(ConfigurationError::InvalidAttributeName { name });
		}
		self.entries.insert(name, value.into());
		Ok(())
	}

	/// Builder form of [`AttributeMap::set`].
	///
	/// ```
	/// use hxui_core::attributes::AttributeMap;
	///
	/// let attrs = AttributeMap::new().with("type", "submit").unwrap();
	/// assert_eq!(attrs.get("type"), Some("submit"));
	/// assert!(AttributeMap::new().with("x onmouseover", "y").is_err());
	/// ```
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
		self.set(name, value)?;
		Ok(self)
	}

	/// Appends classes to the `class` attribute, creating it when absent.
	///
	/// Blank input is ignored so no stray separators are emitted.
	pub fn append_class(&mut self, classes: &str) {
		let classes = classes.trim();
		if classes.is_empty() {
			return;
		}
		match self.entries.get_mut("class") {
			Some(existing) if !existing.is_empty() => {
				existing.push(' ');
				existing.push_str(classes);
			}
			Some(existing) => existing.push_str(classes),
			None => {
				self.entries.insert("class".to_string(), classes.to_string());
			}
		}
	}

	/// Builder form of [`AttributeMap::append_class`].
	pub fn with_class(mut self, classes: &str) -> Self {
		self.append_class(classes);
		self
	}

	/// Copies entries whose names were already validated by their source
	/// ([`HxAttributes`], [`ExtraAttributes`]), overriding on collision.
	fn merge_validated<'a, I>(&mut self, other: I)
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		for (name, value) in other {
			self.entries.insert(name.to_string(), value.to_string());
		}
	}

	/// Returns the value of an attribute.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries.get(name).map(String::as_str)
	}

	/// Iterates over `(name, value)` pairs in emission order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if the map holds no attributes.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Free-form HTML attributes, the escape hatch for `id`, `data-*`, `aria-*`
/// and anything else a component kind does not model.
///
/// Names are checked with [`is_valid_attribute_name`] on insertion and kept
/// verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraAttributes {
	entries: IndexMap<String, String>,
}

impl ExtraAttributes {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Validates and inserts an attribute. Re-inserting a name replaces its
	/// value in place.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
		let name = name.into();
		if !is_valid_attribute_name(&name) {
			tracing::debug!(attribute = %name, "rejected extra attribute name");
			return Err(ConfigurationError::InvalidAttributeName { name });
		}
		self.entries.insert(name, value.into());
		Ok(())
	}

	/// Builds a validated set from `(name, value)` pairs.
	pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let mut extra = Self::new();
		for (name, value) in pairs {
			extra.insert(name, value)?;
		}
		Ok(extra)
	}

	/// Returns the value of an attribute.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries.get(name).map(String::as_str)
	}

	/// Iterates over `(name, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if no attribute was supplied.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Collects the interaction and extra attributes of a component builder.
///
/// Each call validates immediately; the first failure is kept and reported by
/// [`Passthrough::finish`], so builders stay chainable while invalid names
/// still fail at construction time.
#[derive(Debug, Default)]
pub struct Passthrough {
	hx: HxAttributes,
	extra: ExtraAttributes,
	error: Option<ConfigurationError>,
}

impl Passthrough {
	/// Creates an empty collector.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an `hx_*` attribute in configuration form.
	pub fn hx(&mut self, key: &str, value: impl Into<String>) {
		if self.error.is_none()
			&& let Err(err) = self.hx.insert(key, value)
		{
			self.error = Some(err);
		}
	}

	/// Adds attributes built with the typed [`HxAttributes`] setters.
	pub fn hx_attributes(&mut self, hx: &HxAttributes) {
		self.hx.extend(hx);
	}

	/// Adds a free-form HTML attribute.
	pub fn attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
		if self.error.is_none()
			&& let Err(err) = self.extra.insert(name, value)
		{
			self.error = Some(err);
		}
	}

	/// Returns the validated attributes or the first error.
	pub fn finish(self) -> Result<(HxAttributes, ExtraAttributes)> {
		match self.error {
			Some(err) => Err(err),
			None => Ok((self.hx, self.extra)),
		}
	}
}

/// Merges every attribute source of a component into one ordered map.
///
/// `structural` carries the kind's fixed attributes (including the base
/// `class`), `variant_classes` are appended to `class` in order, then the
/// interaction and extra attributes are layered on top.
///
/// # Examples
///
/// ```
/// use hxui_core::attributes::{assemble, AttributeMap, ExtraAttributes};
/// use hxui_core::hx::HxAttributes;
///
/// let hx = HxAttributes::new().get("/refresh").trigger("click");
/// let attrs = assemble(
/// 	AttributeMap::new().with_class("card"),
/// 	&["bg-green-600"],
/// 	&hx,
/// 	&ExtraAttributes::new(),
/// );
/// let names: Vec<_> = attrs.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["class", "hx-get", "hx-trigger"]);
/// assert_eq!(attrs.get("class"), Some("card bg-green-600"));
/// ```
pub fn assemble(
	structural: AttributeMap,
	variant_classes: &[&str],
	hx: &HxAttributes,
	extra: &ExtraAttributes,
) -> AttributeMap {
	let mut attrs = structural;
	for classes in variant_classes {
		attrs.append_class(classes);
	}
	attrs.merge_validated(hx.iter());
	attrs.merge_validated(extra.iter());
	attrs
}
