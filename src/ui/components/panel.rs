//! Panel component: the design system's base container.

use leptos::prelude::*;

use crate::style::{ElementKind, SizeClass, StyleVariant, resolve};

/// Final class string for a panel.
#[must_use]
pub fn panel_classes(variant: StyleVariant, size: SizeClass, class: &str) -> String {
    resolve(ElementKind::Card, variant, size, class).to_class_string()
}

/// Dashed-border container wrapping arbitrary content.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Panel variant=StyleVariant::Accent size=SizeClass::Large class="mt-8">
///         <h3>"Revenue"</h3>
///     </Panel>
/// }
/// ```
#[component]
pub fn Panel(
    /// Color pairing.
    #[prop(default = StyleVariant::Default)]
    variant: StyleVariant,
    /// Padding and font size.
    #[prop(default = SizeClass::Medium)]
    size: SizeClass,
    /// Additional CSS classes, applied last.
    #[prop(optional, into)]
    class: String,
    /// Panel content.
    children: Children,
) -> impl IntoView {
    let classes = panel_classes(variant, size, &class);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classes() {
        assert_eq!(
            panel_classes(StyleVariant::default(), SizeClass::default(), ""),
            "font-mono border border-dashed border-divider rounded-[var(--radius-card)] \
             p-6 text-base bg-cream text-ink"
        );
    }

    #[test]
    fn test_unset_props_use_defaults() {
        let html = view! { <Panel>"x"</Panel> }.to_html();
        assert!(
            html.contains(
                "<div class=\"font-mono border border-dashed border-divider \
                 rounded-[var(--radius-card)] p-6 text-base bg-cream text-ink\">"
            ),
            "{html}"
        );
    }

    #[test]
    fn test_renders_single_container_with_children() {
        let html = view! {
            <Panel variant=StyleVariant::Accent size=SizeClass::Small class="mt-4">
                <span>"Hello"</span>
            </Panel>
        }
        .to_html();

        assert!(html.contains("<div class=\"font-mono border"));
        assert!(html.contains("p-3 text-sm bg-charcoal/5 text-ink mt-4\""));
        assert!(html.contains("<span>Hello</span>"));
        assert_eq!(html.matches("<div").count(), 1);
    }
}
