//! Page layout contract.
//!
//! Every design-system page is laid out as the same four regions, in the
//! same order: a header with title and description, a divider, a content
//! section with a heading, and a navigation link back out. [`PageSpec`]
//! holds the inputs, [`Page`] pairs them with the listed content, and
//! [`crate::ui::page::PageTemplate`] renders them.
//!
//! # Example
//!
//! ```rust
//! use stocktaper_design::page::{Page, PageSpec, Region};
//!
//! let spec = PageSpec::builder()
//!     .title("Research")
//!     .description("Our research.")
//!     .heading("Papers")
//!     .build()
//!     .unwrap();
//! let page = Page::new(spec);
//!
//! assert_eq!(page.regions(), Region::ORDER);
//! assert_eq!(page.spec().back_href(), "/");
//! assert!(page.items().is_empty());
//! ```

use std::fmt;

use leptos::prelude::*;

use crate::content::{ContentItem, ContentProvider};
use crate::tokens::DesignTokens;
use crate::ui::document::Document;
use crate::ui::page::PageTemplate;

/// Link target used when no back target is given.
pub const DEFAULT_BACK_HREF: &str = "/";
/// Label of the navigation link when none is given.
pub const DEFAULT_BACK_LABEL: &str = "Back to home";
/// Content grid columns when none are given.
pub const DEFAULT_COLUMNS: u8 = 3;

/// Errors raised while building a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// A required text field was absent or blank.
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),
}

/// Structural slot of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Header,
    Divider,
    Content,
    Navigation,
}

impl Region {
    /// Render order shared by every page.
    pub const ORDER: [Self; 4] = [Self::Header, Self::Divider, Self::Content, Self::Navigation];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Divider => "divider",
            Self::Content => "content",
            Self::Navigation => "navigation",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated page inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpec {
    title: String,
    description: String,
    heading: String,
    section: String,
    base_path: String,
    back_href: String,
    back_label: String,
    columns: u8,
}

impl PageSpec {
    pub fn builder() -> PageSpecBuilder {
        PageSpecBuilder::default()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Section id passed to the content provider.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Prefix for content item links.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    #[must_use]
    pub fn back_href(&self) -> &str {
        &self.back_href
    }

    #[must_use]
    pub fn back_label(&self) -> &str {
        &self.back_label
    }

    #[must_use]
    pub fn columns(&self) -> u8 {
        self.columns
    }
}

/// Builder for [`PageSpec`].
#[derive(Debug, Clone, Default)]
pub struct PageSpecBuilder {
    title: Option<String>,
    description: Option<String>,
    heading: Option<String>,
    section: Option<String>,
    base_path: Option<String>,
    back_href: Option<String>,
    back_label: Option<String>,
    columns: Option<u8>,
}

impl PageSpecBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Section id; defaults to the heading, slugified. Required when the
    /// heading has no letters or digits.
    #[must_use]
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Link prefix for content items; defaults to `/{section}`.
    #[must_use]
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    #[must_use]
    pub fn back_href(mut self, back_href: impl Into<String>) -> Self {
        self.back_href = Some(back_href.into());
        self
    }

    #[must_use]
    pub fn back_label(mut self, back_label: impl Into<String>) -> Self {
        self.back_label = Some(back_label.into());
        self
    }

    /// Content grid columns, clamped to 1..=4.
    #[must_use]
    pub fn columns(mut self, columns: u8) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn build(self) -> Result<PageSpec, PageError> {
        let title = required(self.title, "title")?;
        let description = required(self.description, "description")?;
        let heading = required(self.heading, "heading")?;

        let section = match self.section.filter(|section| !section.trim().is_empty()) {
            Some(section) => section,
            None => Some(slugify(&heading))
                .filter(|slug| !slug.is_empty())
                .ok_or(PageError::MissingRequiredField("section"))?,
        };
        let base_path = self
            .base_path
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| format!("/{section}"));
        let back_href = self
            .back_href
            .filter(|href| !href.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACK_HREF.to_string());
        let back_label = self
            .back_label
            .filter(|label| !label.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACK_LABEL.to_string());

        Ok(PageSpec {
            title,
            description,
            heading,
            section,
            base_path,
            back_href,
            back_label,
            columns: self.columns.unwrap_or(DEFAULT_COLUMNS).clamp(1, 4),
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, PageError> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or(PageError::MissingRequiredField(field))
}

/// Lowercase slug: letters and digits kept, everything else collapsed to `-`.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// A page ready to render: its inputs plus the listed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    spec: PageSpec,
    items: Vec<ContentItem>,
}

impl Page {
    /// Page without a content provider; its content region is empty.
    #[must_use]
    pub fn new(spec: PageSpec) -> Self {
        Self {
            spec,
            items: Vec::new(),
        }
    }

    /// Page listing the section named in `spec`, fetched from `provider`.
    ///
    /// Provider errors are returned as-is.
    pub fn with_content<P: ContentProvider>(spec: PageSpec, provider: &P) -> Result<Self, P::Error> {
        let items = provider.fetch_content_list(spec.section())?;
        tracing::info!(
            name: "page.content.loaded",
            section = %spec.section(),
            items = items.len(),
            "Page content loaded"
        );
        Ok(Self { spec, items })
    }

    #[must_use]
    pub fn spec(&self) -> &PageSpec {
        &self.spec
    }

    #[must_use]
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Regions in render order.
    #[must_use]
    pub fn regions(&self) -> [Region; 4] {
        Region::ORDER
    }

    /// Render the page body as an HTML fragment.
    #[must_use]
    pub fn render_html(&self) -> String {
        let page = self.clone();
        view! { <PageTemplate page=page /> }.to_html()
    }

    /// Render a complete HTML document with the token stylesheet inlined.
    #[must_use]
    pub fn render_document(&self, tokens: &DesignTokens) -> String {
        let page = self.clone();
        let title = self.spec.title.clone();
        let stylesheet = tokens.css_variables();
        view! {
            <Document title=title stylesheet=stylesheet>
                <PageTemplate page=page />
            </Document>
        }
        .to_html()
    }
}
