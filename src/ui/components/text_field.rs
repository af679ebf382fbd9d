//! Text field component for input-like elements.

use leptos::prelude::*;

use crate::style::{ElementKind, SizeClass, StyleVariant, merge, resolve};

/// Final class string for a text field.
///
/// Controls use the button radius token rather than the card radius.
#[must_use]
pub fn text_field_classes(variant: StyleVariant, size: SizeClass, class: &str) -> String {
    let resolved = resolve(ElementKind::Control, variant, size, class).to_class_string();
    merge([
        "block w-full placeholder:text-muted focus-visible:outline-none \
         disabled:cursor-not-allowed disabled:opacity-50",
        resolved.as_str(),
    ])
}

/// Text input styled with design tokens.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <TextField name="ticker" placeholder="AAPL" size=SizeClass::Small />
/// }
/// ```
#[component]
pub fn TextField(
    /// Input name attribute.
    #[prop(into)]
    name: String,
    /// Input type (text, email, search, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(optional, into)]
    placeholder: String,
    /// Default value.
    #[prop(optional, into)]
    value: String,
    /// Whether the input is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Color pairing.
    #[prop(default = StyleVariant::Default)]
    variant: StyleVariant,
    /// Padding and font size.
    #[prop(default = SizeClass::Medium)]
    size: SizeClass,
    /// Additional CSS classes, applied last.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let classes = text_field_classes(variant, size, &class);

    view! {
        <input
            type=input_type
            class=classes
            name=name
            placeholder=placeholder
            value=value
            disabled=disabled
        />
    }
}
