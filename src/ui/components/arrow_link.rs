//! Arrow link component for section navigation.

use leptos::prelude::*;

use crate::style::merge;

/// Which way the arrow points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArrowDirection {
    /// Arrow after the label.
    #[default]
    Forward,
    /// Arrow before the label.
    Back,
}

/// Text link decorated with an arrow.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ArrowLink href="/" direction=ArrowDirection::Back>"Back to home"</ArrowLink>
/// }
/// ```
#[component]
pub fn ArrowLink(
    /// Link target.
    #[prop(into)]
    href: String,
    /// Arrow placement.
    #[prop(default = ArrowDirection::Forward)]
    direction: ArrowDirection,
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: String,
    /// Link label.
    children: Children,
) -> impl IntoView {
    let classes = merge([
        "inline-flex items-center gap-2 font-mono text-ink hover:text-muted transition-colors",
        class.as_str(),
    ]);

    match direction {
        ArrowDirection::Back => view! {
            <a href=href class=classes>
                <span aria-hidden="true">"←"</span>
                {children()}
            </a>
        }
        .into_any(),
        ArrowDirection::Forward => view! {
            <a href=href class=classes>
                {children()}
                <span aria-hidden="true">"→"</span>
            </a>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_arrow_leads() {
        let html = view! {
            <ArrowLink href="/" direction=ArrowDirection::Back>"Back to home"</ArrowLink>
        }
        .to_html();
        assert!(html.contains("href=\"/\""));
        let arrow = html.find('←').unwrap();
        let label = html.find("Back to home").unwrap();
        assert!(arrow < label);
    }

    #[test]
    fn test_forward_arrow_trails() {
        let html = view! { <ArrowLink href="/research">"All research"</ArrowLink> }.to_html();
        let arrow = html.find('→').unwrap();
        let label = html.find("All research").unwrap();
        assert!(label < arrow);
    }
}
