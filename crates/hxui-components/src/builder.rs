//! Builder methods shared by every component kind.

/// Adds the interaction and extra attribute setters to a builder that has a
/// `passthrough: Passthrough` field.
macro_rules! passthrough_methods {
	() => {
		/// Adds an htmx attribute in configuration form (`hx_get`, `hx_swap_oob`).
		///
		/// The key is validated when the builder is built.
		pub fn hx(mut self, key: &str, value: impl Into<String>) -> Self {
			self.passthrough.hx(key, value);
			self
		}

		/// Adds htmx attributes built with the typed setters.
		pub fn hx_attributes(mut self, hx: &hxui_core::hx::HxAttributes) -> Self {
			self.passthrough.hx_attributes(hx);
			self
		}

		/// Adds a free-form HTML attribute (`id`, `data-*`, `aria-*`, ...).
		///
		/// Applied after every other attribute source, so it overrides them on
		/// collision.
		pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
			self.passthrough.attr(name, value);
			self
		}
	};
}

pub(crate) use passthrough_methods;
