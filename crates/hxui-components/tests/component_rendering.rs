//! Rendering tests for the builtin components
//!
//! Covers escaping, variant resolution, interaction attribute passthrough and
//! composition of components into containers.

use hxui_components::{Button, ButtonSize, ButtonVariant, Card, Text};
use hxui_core::hx::HxAttributes;
use hxui_core::{Component, Content, Fragment, Theme, Variant};
use proptest::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn theme() -> Theme {
	Theme::default_theme()
}

// ============================================================================
// Escaping
// ============================================================================

#[rstest]
fn test_card_text_is_escaped_once(theme: Theme) {
	let html = Card::new("Hello", "A & B").build().unwrap().render_with(&theme);

	assert!(html.as_str().contains(">A &amp; B</p>"));
	assert!(!html.as_str().contains("A & B"));
	assert!(!html.as_str().contains("&amp;amp;"));
}

#[rstest]
fn test_script_in_label_is_inert(theme: Theme) {
	let html = Button::new("<script>alert(1)</script>")
		.build()
		.unwrap()
		.render_with(&theme);

	assert!(html.as_str().contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
	assert!(!html.as_str().contains("<script>"));
}

#[rstest]
fn test_attribute_value_cannot_break_out(theme: Theme) {
	let html = Button::new("Go")
		.attr("title", "\" onmouseover=\"steal()")
		.build()
		.unwrap()
		.render_with(&theme);

	assert!(!html.as_str().contains("\" onmouseover=\""));
}

// ============================================================================
// Variant resolution
// ============================================================================

#[rstest]
fn test_preset_variant_resolves_from_table() {
	let theme = Theme::default_theme()
		.button_variant("success", "bg-green-600")
		.unwrap();
	let html = Button::new("Go")
		.variant("success")
		.build()
		.unwrap()
		.render_with(&theme);

	assert!(html.as_str().contains("bg-green-600"));
}

#[rstest]
fn test_unknown_variant_passes_through_verbatim(theme: Theme) {
	let html = Button::new("X")
		.variant("bg-gradient-to-r from-purple-500")
		.build()
		.unwrap()
		.render_with(&theme);

	assert!(
		html.as_str()
			.contains(" bg-gradient-to-r from-purple-500\" type=\"button\"")
	);
}

#[rstest]
fn test_raw_variant_is_never_looked_up(theme: Theme) {
	let html = Button::new("X")
		.variant(Variant::raw("success"))
		.build()
		.unwrap()
		.render_with(&theme);

	assert!(html.as_str().contains(" success\""));
	assert!(!html.as_str().contains("bg-green-600"));
}

#[rstest]
fn test_missing_variant_uses_table_default(theme: Theme) {
	let implicit = Button::new("Go").build().unwrap().render_with(&theme);
	let explicit = Button::new("Go")
		.variant(ButtonVariant::Default)
		.size(ButtonSize::Md)
		.build()
		.unwrap()
		.render_with(&theme);

	assert_eq!(implicit, explicit);
}

#[rstest]
fn test_variant_matching_is_case_sensitive(theme: Theme) {
	let html = Button::new("Go")
		.variant("Success")
		.build()
		.unwrap()
		.render_with(&theme);

	assert!(html.as_str().contains(" Success\""));
}

// ============================================================================
// Interaction attributes
// ============================================================================

#[rstest]
fn test_card_hx_attributes_keep_order(theme: Theme) {
	let html = Card::new("T", "C")
		.hx("hx_get", "/refresh")
		.hx("hx_trigger", "click")
		.build()
		.unwrap()
		.render_with(&theme);

	assert!(html.as_str().contains("hx-get=\"/refresh\" hx-trigger=\"click\""));
}

#[rstest]
fn test_typed_hx_setters(theme: Theme) {
	let hx = HxAttributes::new()
		.delete("/items/7")
		.confirm("Delete item?")
		.swap("outerHTML")
		.swap_oob("true");
	let html = Button::new("Delete")
		.variant(ButtonVariant::Danger)
		.hx_attributes(&hx)
		.build()
		.unwrap()
		.render_with(&theme);

	assert!(html.as_str().contains(
		"hx-delete=\"/items/7\" hx-confirm=\"Delete item?\" hx-swap=\"outerHTML\" hx-swap-oob=\"true\""
	));
}

#[rstest]
fn test_extra_attributes_follow_hx(theme: Theme) {
	let html = Text::new("Status")
		.attr("id", "status")
		.hx("hx_get", "/status")
		.attr("data-live", "")
		.build()
		.unwrap()
		.render_with(&theme);

	assert_eq!(
		html,
		"<p class=\"text-gray-600\" hx-get=\"/status\" id=\"status\" data-live=\"\">Status</p>"
	);
}

#[rstest]
#[case("get")]
#[case("hx-get")]
#[case("hx_")]
#[case("hx_get!")]
fn test_invalid_hx_keys_fail_construction(#[case] key: &str) {
	assert!(Button::new("Go").hx(key, "/x").build().is_err());
}

// ============================================================================
// Composition
// ============================================================================

#[rstest]
fn test_nested_component_is_spliced_verbatim(theme: Theme) {
	let child_html = Button::new("A & B").build().unwrap().render_with(&theme);
	let card = Card::new("Outer", Button::new("A & B").build().unwrap())
		.build()
		.unwrap();
	let html = card.render_with(&theme);

	assert!(html.as_str().contains(child_html.as_str()));
	assert!(!html.as_str().contains("&amp;amp;"));
}

#[rstest]
fn test_component_list_renders_in_order(theme: Theme) {
	let children: Vec<Box<dyn Component>> = vec![
		Box::new(Text::new("first").build().unwrap()),
		Box::new(Button::new("second").build().unwrap()),
	];
	let html = Card::new("List", children).build().unwrap().render_with(&theme);

	let first = html.as_str().find("first").unwrap();
	let second = html.as_str().find("second").unwrap();
	assert!(first < second);
}

#[rstest]
fn test_fragment_content(theme: Theme) {
	let row = Fragment::new()
		.push(Button::new("Save").build().unwrap())
		.push(Button::new("Cancel").variant("ghost").build().unwrap());
	let expected = format!(
		"{}{}",
		Button::new("Save").build().unwrap().render_with(&theme),
		Button::new("Cancel")
			.variant("ghost")
			.build()
			.unwrap()
			.render_with(&theme)
	);

	assert_eq!(row.render_with(&theme), expected);

	let html = Card::new("Actions", Content::from(row))
		.build()
		.unwrap()
		.render_with(&theme);
	assert!(html.as_str().contains(&expected));
}

#[rstest]
fn test_children_use_parent_theme() {
	let theme = Theme::default_theme()
		.button_variant("default", "bg-brand")
		.unwrap();
	let card = Card::new("Themed", Button::new("Go").build().unwrap())
		.build()
		.unwrap();

	assert!(card.render_with(&theme).as_str().contains("bg-brand"));
}

// ============================================================================
// Properties
// ============================================================================

#[rstest]
fn test_rendering_is_deterministic(theme: Theme) {
	proptest!(|(title in "[a-zA-Z0-9 &<>\"']{1,24}", body in "[a-zA-Z0-9 &<>\"']{1,48}")| {
		prop_assume!(!title.trim().is_empty() && !body.trim().is_empty());
		let card = Card::new(title.clone(), body.clone())
			.hx("hx_post", "/save")
			.build()
			.unwrap();

		prop_assert_eq!(card.render_with(&theme), card.render_with(&theme));
		let rebuilt = Card::new(title, body).hx("hx_post", "/save").build().unwrap();
		prop_assert_eq!(card.render_with(&theme), rebuilt.render_with(&theme));
	});
}

#[rstest]
fn test_text_round_trips_through_escaping(theme: Theme) {
	proptest!(|(value in "[ -~]{1,64}")| {
		prop_assume!(!value.trim().is_empty());
		let html = Text::new(value.clone()).classes("").build().unwrap().render_with(&theme);
		let inner = html
			.as_str()
			.strip_prefix("<p>")
			.and_then(|rest| rest.strip_suffix("</p>"))
			.unwrap();

		prop_assert!(!inner.contains('<'));
		prop_assert!(!inner.contains('>'));
		prop_assert_eq!(html_escape::decode_html_entities(inner), value.trim());
	});
}
