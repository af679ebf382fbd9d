use chrono::NaiveDate;
use stocktaper_design::content::{ContentItem, ContentProvider, StaticContentProvider};
use stocktaper_design::page::{Page, PageSpec, Region};
use stocktaper_design::style::{
    ElementKind, SizeClass, StyleError, StyleVariant, audit, resolve, resolve_named,
};
use stocktaper_design::tokens::DesignTokens;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("content backend unavailable")]
struct BackendDown;

struct FailingProvider;

impl ContentProvider for FailingProvider {
    type Error = BackendDown;

    fn fetch_content_list(&self, _section_id: &str) -> Result<Vec<ContentItem>, Self::Error> {
        Err(BackendDown)
    }
}

/// Lists one item named after the requested section.
struct SectionEcho;

impl ContentProvider for SectionEcho {
    type Error = std::convert::Infallible;

    fn fetch_content_list(&self, section_id: &str) -> Result<Vec<ContentItem>, Self::Error> {
        Ok(vec![ContentItem::new(section_id, format!("From {section_id}"))])
    }
}

fn research_spec() -> PageSpec {
    PageSpec::builder()
        .title("Research")
        .description("Our research.")
        .heading("Papers")
        .build()
        .unwrap()
}

fn region_positions(html: &str) -> Vec<usize> {
    Region::ORDER
        .iter()
        .map(|region| {
            html.find(&format!("data-region=\"{region}\""))
                .unwrap_or_else(|| panic!("region {region} missing in {html}"))
        })
        .collect()
}

#[test]
fn test_research_page_without_collaborator() {
    let page = Page::new(research_spec());
    assert_eq!(page.regions(), Region::ORDER);

    let html = page.render_html();
    let positions = region_positions(&html);
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    let content = &html[positions[2]..positions[3]];
    assert!(content.contains("Papers"));
    assert!(!content.contains("href="));
    assert!(html[positions[3]..].contains("href=\"/\""));
}

#[test]
fn test_collaborator_errors_propagate_unchanged() {
    let err = Page::with_content(research_spec(), &FailingProvider).unwrap_err();
    assert_eq!(err, BackendDown);
}

#[test]
fn test_collaborator_receives_section_id() {
    let spec = PageSpec::builder()
        .title("Thoughts")
        .description("Notes.")
        .heading("Essays")
        .section("thoughts")
        .build()
        .unwrap();
    let page = Page::with_content(spec, &SectionEcho).unwrap();
    assert_eq!(page.items()[0].slug, "thoughts");
    assert!(page.render_html().contains("href=\"/thoughts/thoughts\""));
}

#[test]
fn test_non_ascii_heading_names_the_section() {
    let spec = PageSpec::builder()
        .title("Research")
        .description("Our research.")
        .heading("研究")
        .build()
        .unwrap();
    let page = Page::with_content(spec, &SectionEcho).unwrap();
    assert_eq!(page.items()[0].slug, "研究");
    assert_eq!(page.spec().base_path(), "/研究");
}

#[test]
fn test_region_order_holds_with_content() {
    let provider = StaticContentProvider::new().with_section(
        "papers",
        vec![
            ContentItem::new("moats", "Moats")
                .with_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
                .with_summary("Durable advantages."),
        ],
    );
    let html = Page::with_content(research_spec(), &provider)
        .unwrap()
        .render_html();
    let positions = region_positions(&html);
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(html[positions[2]..positions[3]].contains("Durable advantages."));
}

#[test]
fn test_document_inlines_token_stylesheet() {
    let html = Page::new(research_spec()).render_document(&DesignTokens::default());
    assert!(html.contains("<title>Research</title>"));
    assert!(html.contains("--color-divider:"));
    assert!(html.contains("--radius-card:"));
    assert!(html.find("</head>").unwrap() < html.find("data-region=\"header\"").unwrap());
}

#[test]
fn test_resolver_scenarios() {
    let accent = resolve(
        ElementKind::Card,
        StyleVariant::Accent,
        SizeClass::Large,
        "text-red-500",
    );
    let list: Vec<&str> = accent.iter().collect();
    for directive in ["p-8", "text-lg", "bg-charcoal/5", "text-ink"] {
        assert!(list.contains(&directive), "{directive} missing");
    }
    assert_eq!(accent.last(), Some("text-red-500"));

    let plain = resolve(ElementKind::Card, StyleVariant::Default, SizeClass::Small, "");
    assert_eq!(
        plain.iter().collect::<Vec<_>>(),
        [
            "font-mono",
            "border",
            "border-dashed",
            "border-divider",
            "rounded-[var(--radius-card)]",
            "p-3",
            "text-sm",
            "bg-cream",
            "text-ink",
        ]
    );
    assert!(audit(&plain.to_class_string()).is_empty());

    assert_eq!(
        resolve_named(ElementKind::Card, "bold", "md", ""),
        Err(StyleError::InvalidVariant("bold".to_string()))
    );
}
