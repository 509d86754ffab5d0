//! htmx interaction attributes.
//!
//! Keys are accepted in their configuration form (`hx_get`, `hx_swap_oob`)
//! and stored in wire form (`hx-get`, `hx-swap-oob`). Values are opaque: they
//! are escaped at serialization time and never interpreted.

use crate::error::{ConfigurationError, Result};
use indexmap::IndexMap;

/// Namespace every interaction attribute key must start with.
pub const HX_PREFIX: &str = "hx_";

/// Validates an interaction attribute key and converts it to wire form.
///
/// Trailing underscores are dropped, then every `_` becomes `-`. The key
/// must start with [`HX_PREFIX`], have something after it, and contain only
/// ASCII letters, digits and underscores.
///
/// # Examples
///
/// ```
/// use hxui_core::hx::normalize_key;
///
/// assert_eq!(normalize_key("hx_get").unwrap(), "hx-get");
/// assert_eq!(normalize_key("hx_swap_oob").unwrap(), "hx-swap-oob");
/// assert_eq!(normalize_key("hx_on__click").unwrap(), "hx-on--click");
/// assert!(normalize_key("data_id").is_err());
/// ```
pub fn normalize_key(key: &str) -> Result<String> {
	let reject = |reason: &'static str| {
		tracing::debug!(key, reason, "rejected interaction attribute");
		Err(ConfigurationError::InvalidInteractionAttribute {
			name: key.to_string(),
			reason,
		})
	};

	let Some(rest) = key.strip_prefix(HX_PREFIX) else {
		return reject("missing `hx_` prefix");
	};
	if !key
		.chars()
		.all(|c| c.is_ascii_alphanumeric() || c == '_')
	{
		return reject("only ASCII letters, digits and `_` are allowed");
	}
	if rest.trim_end_matches('_').is_empty() {
		return reject("nothing follows the `hx_` prefix");
	}

	Ok(key.trim_end_matches('_').replace('_', "-"))
}

macro_rules! hx_setters {
	($($(#[$doc:meta])* $method:ident => $wire:literal;)*) => {
		$(
			$(#[$doc])*
			pub fn $method(mut self, value: impl Into<String>) -> Self {
				self.entries.insert($wire.to_string(), value.into());
				self
			}
		)*
	};
}

/// Validated, ordered set of interaction attributes in wire form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HxAttributes {
	entries: IndexMap<String, String>,
}

impl HxAttributes {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Validates `key`, normalizes it and inserts the value.
	///
	/// Re-inserting a key replaces its value but keeps its first position.
	pub fn insert(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
		let wire = normalize_key(key)?;
		self.entries.insert(wire, value.into());
		Ok(())
	}

	/// Builds a validated set from `(key, value)` pairs.
	///
	/// # Examples
	///
	/// ```
	/// use hxui_core::hx::HxAttributes;
	///
	/// let hx = HxAttributes::from_pairs([("hx_get", "/refresh"), ("hx_trigger", "click")]).unwrap();
	/// assert_eq!(hx.value("hx-get"), Some("/refresh"));
	/// ```
	pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let mut hx = Self::new();
		for (key, value) in pairs {
			hx.insert(key.as_ref(), value)?;
		}
		Ok(hx)
	}

	/// Copies every entry of `other` into this set, overriding on collision.
	pub fn extend(&mut self, other: &HxAttributes) {
		for (name, value) in other.iter() {
			self.entries.insert(name.to_string(), value.to_string());
		}
	}

	/// Returns the value stored under a wire-form name.
	pub fn value(&self, wire_name: &str) -> Option<&str> {
		self.entries.get(wire_name).map(String::as_str)
	}

	/// Iterates over `(wire_name, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if no interaction attribute is set.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	hx_setters! {
		/// `hx-get`: issue a GET to the given URL.
		get => "hx-get";
		/// `hx-post`: issue a POST to the given URL.
		post => "hx-post";
		/// `hx-put`
		put => "hx-put";
		/// `hx-patch`
		patch => "hx-patch";
		/// `hx-delete`
		delete => "hx-delete";
		/// `hx-trigger`: event(s) that trigger the request.
		trigger => "hx-trigger";
		/// `hx-target`: element that receives the response.
		target => "hx-target";
		/// `hx-swap`: how the response is swapped in.
		swap => "hx-swap";
		/// `hx-select`
		select => "hx-select";
		/// `hx-select-oob`
		select_oob => "hx-select-oob";
		/// `hx-swap-oob`
		swap_oob => "hx-swap-oob";
		/// `hx-vals`
		vals => "hx-vals";
		/// `hx-headers`
		headers => "hx-headers";
		/// `hx-include`
		include => "hx-include";
		/// `hx-params`
		params => "hx-params";
		/// `hx-encoding`
		encoding => "hx-encoding";
		/// `hx-push-url`
		push_url => "hx-push-url";
		/// `hx-replace-url`
		replace_url => "hx-replace-url";
		/// `hx-history`
		history => "hx-history";
		/// `hx-history-elt`
		history_elt => "hx-history-elt";
		/// `hx-confirm`: confirmation prompt shown before the request.
		confirm => "hx-confirm";
		/// `hx-prompt`
		prompt => "hx-prompt";
		/// `hx-indicator`
		indicator => "hx-indicator";
		/// `hx-disabled-elt`
		disabled_elt => "hx-disabled-elt";
		/// `hx-boost`
		boost => "hx-boost";
		/// `hx-preserve`
		preserve => "hx-preserve";
		/// `hx-sync`
		sync => "hx-sync";
		/// `hx-validate`
		validate => "hx-validate";
		/// `hx-request`
		request => "hx-request";
		/// `hx-ext`
		ext => "hx-ext";
		/// `hx-disinherit`
		disinherit => "hx-disinherit";
		/// `hx-inherit`
		inherit => "hx-inherit";
		/// `hx-disable`
		disable => "hx-disable";
		/// `hx-on`
		on => "hx-on";
	}
}
