//! Page template component.

use leptos::prelude::*;

use crate::page::{Page, Region};
use crate::ui::components::{ArrowDirection, ArrowLink, Container, ContentGrid, Divider};

/// Standard page layout.
///
/// Renders [`Region::ORDER`] inside a [`Container`]. Every region is always
/// present and tagged with `data-region`; the content region keeps its
/// heading even when there is nothing to list.
///
/// # Example
///
/// ```rust,ignore
/// view! { <PageTemplate page=page /> }
/// ```
#[component]
pub fn PageTemplate(
    /// Page inputs and listed content.
    page: Page,
) -> impl IntoView {
    let regions = Region::ORDER
        .into_iter()
        .map(|region| render_region(region, &page))
        .collect_view();

    view! {
        <Container>
            {regions}
        </Container>
    }
}

fn render_region(region: Region, page: &Page) -> AnyView {
    let spec = page.spec();
    match region {
        Region::Header => {
            let title = spec.title().to_string();
            let description = spec.description().to_string();
            view! {
                <div data-region="header" class="py-16">
                    <h1 class="mb-4 text-4xl md:text-5xl font-bold tracking-tight text-ink">
                        {title}
                    </h1>
                    <p class="max-w-2xl text-lg text-muted">{description}</p>
                </div>
            }
            .into_any()
        }
        Region::Divider => view! {
            <div data-region="divider">
                <Divider />
            </div>
        }
        .into_any(),
        Region::Content => {
            let heading = spec.heading().to_string();
            let grid = (!page.items().is_empty()).then(|| {
                let items = page.items().to_vec();
                let base_path = spec.base_path().to_string();
                let columns = spec.columns();
                view! { <ContentGrid items=items base_path=base_path columns=columns /> }
            });
            view! {
                <section data-region="content" class="py-12">
                    <h2 class="mb-8 text-2xl font-bold tracking-tight text-ink">{heading}</h2>
                    {grid}
                </section>
            }
            .into_any()
        }
        Region::Navigation => {
            let href = spec.back_href().to_string();
            let label = spec.back_label().to_string();
            view! {
                <nav data-region="navigation" class="pb-16">
                    <ArrowLink href=href direction=ArrowDirection::Back>
                        {label}
                    </ArrowLink>
                </nav>
            }
            .into_any()
        }
    }
}
