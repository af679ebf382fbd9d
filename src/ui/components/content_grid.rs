//! Grid of content cards for section listings.

use leptos::prelude::*;

use crate::content::ContentItem;
use crate::style::{ElementKind, SizeClass, StyleVariant, merge, resolve};

/// Responsive column class for a column count, clamped to 1..=4.
fn column_class(columns: u8) -> &'static str {
    match columns.clamp(1, 4) {
        1 => "md:grid-cols-1",
        2 => "md:grid-cols-2",
        3 => "md:grid-cols-3",
        _ => "md:grid-cols-4",
    }
}

/// Grid listing content items as linked cards.
///
/// Each card links to `{base_path}/{slug}`.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ContentGrid items=posts base_path="/research" columns=3 />
/// }
/// ```
#[component]
pub fn ContentGrid(
    /// Items to list, in display order.
    items: Vec<ContentItem>,
    /// Path prefix for item links.
    #[prop(into)]
    base_path: String,
    /// Columns on medium screens and up.
    #[prop(default = 3)]
    columns: u8,
) -> impl IntoView {
    let grid_classes = merge(["grid grid-cols-1 gap-6", column_class(columns)]);
    let card_classes = resolve(
        ElementKind::Card,
        StyleVariant::Default,
        SizeClass::Medium,
        "block hover:bg-charcoal/5 transition-colors",
    )
    .to_class_string();
    let base = base_path.trim_end_matches('/');

    let cards = items
        .into_iter()
        .map(|item| {
            let href = format!("{base}/{}", item.slug);
            let date = item.date.map(|date| date.format("%Y-%m-%d").to_string());

            view! {
                <a href=href class={card_classes.clone()}>
                    {date.map(|date| {
                        let datetime = date.clone();
                        view! {
                        <time datetime=datetime class="block mb-2 text-sm text-muted">{date}</time>
                        }
                    })}
                    <h3 class="font-bold text-ink">{item.title}</h3>
                    {item.summary.map(|summary| view! {
                        <p class="mt-2 text-sm text-muted">{summary}</p>
                    })}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class=grid_classes>
            {cards}
        </div>
    }
}
