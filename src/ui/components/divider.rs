//! Divider component for visual division.

use leptos::prelude::*;

use crate::style::merge;
use crate::tokens::ColorToken;

/// Dashed horizontal rule between page sections.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <p>"Above"</p>
///     <Divider />
///     <p>"Below"</p>
/// }
/// ```
#[component]
pub fn Divider(
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let color = ColorToken::Divider.class("border");
    let classes = merge(["w-full border-0 border-t border-dashed", color.as_str(), class.as_str()]);

    view! {
        <hr role="separator" class=classes />
    }
}
