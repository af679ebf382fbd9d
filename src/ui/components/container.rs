//! Page-width container.

use leptos::prelude::*;

use crate::style::merge;

/// Centered, monospace wrapper that bounds page width.
#[component]
pub fn Container(
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
    /// Page content.
    children: Children,
) -> impl IntoView {
    let classes = merge(["mx-auto w-full max-w-6xl px-6 font-mono text-ink", class.as_str()]);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
