//! Facade re-export tests

use hxui::prelude::*;
use rstest::rstest;

#[rstest]
fn test_prelude_builds_and_renders_components() {
	let theme = Theme::default_theme();
	let save = Button::new("Save")
		.variant(ButtonVariant::Success)
		.button_type(ButtonType::Submit)
		.build()
		.unwrap();
	let note = Text::new("Saved drafts are kept for 30 days").build().unwrap();
	let card = Card::new("Draft", Fragment::new().push(note).push(save))
		.build()
		.unwrap();

	let html = card.render_with(&theme);
	assert!(html.as_str().starts_with("<div class=\"block max-w-sm"));
	assert!(html.as_str().contains("type=\"submit\""));
	assert!(html.as_str().ends_with("</button></div>"));
}

#[rstest]
fn test_engine_modules_are_reexported() {
	assert_eq!(hxui::escape::escape_text("a < b"), "a &lt; b");
	assert_eq!(hxui::hx::normalize_key("hx_push_url").unwrap(), "hx-push-url");
}

#[rstest]
fn test_configuration_errors_surface_through_facade() {
	let err = Card::new("", "body").build().unwrap_err();
	assert!(matches!(err, hxui::ConfigurationError::EmptyField { field: "title" }));
}
