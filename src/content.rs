//! Content listing collaborators for page templates.
//!
//! A page's content region lists the items of one section (e.g. `research`).
//! Where those items come from is up to the caller: anything implementing
//! [`ContentProvider`] can feed a page. [`StaticContentProvider`] keeps
//! sections in memory and can be loaded from a YAML or JSON manifest:
//!
//! ```yaml
//! sections:
//!   research:
//!     - slug: margins
//!       title: Reading Margins
//!       date: 2024-03-01
//!       summary: What gross margin trends tell you.
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single entry in a content listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// URL segment, appended to the page's base path.
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl ContentItem {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            date: None,
            summary: None,
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// Source of content listings.
///
/// Errors are returned to the caller of the page template untouched.
pub trait ContentProvider {
    type Error: std::error::Error;

    /// List the items of a section.
    fn fetch_content_list(&self, section_id: &str) -> Result<Vec<ContentItem>, Self::Error>;
}

/// Errors that can occur while loading a content manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is neither YAML nor JSON.
    #[error("Unsupported manifest format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    sections: BTreeMap<String, Vec<ContentItem>>,
}

/// In-memory content provider.
///
/// Items come back newest first; undated items follow dated ones in their
/// original order. Unknown sections are empty.
#[derive(Debug, Clone, Default)]
pub struct StaticContentProvider {
    sections: BTreeMap<String, Vec<ContentItem>>,
}

impl StaticContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section, replacing any previous items with the same id.
    #[must_use]
    pub fn with_section(mut self, section_id: impl Into<String>, items: Vec<ContentItem>) -> Self {
        self.sections.insert(section_id.into(), items);
        self
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_yaml::from_str(yaml)?;
        Ok(Self {
            sections: manifest.sections,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Ok(Self {
            sections: manifest.sections,
        })
    }

    /// Load a manifest, picking the format from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let provider = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&raw)?,
            Some("json") => Self::from_json_str(&raw)?,
            _ => return Err(ManifestError::UnsupportedFormat(path.display().to_string())),
        };

        tracing::debug!(
            name: "content.manifest.loaded",
            path = %path.display(),
            sections = provider.sections.len(),
            "Content manifest loaded"
        );
        Ok(provider)
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

impl ContentProvider for StaticContentProvider {
    type Error = std::convert::Infallible;

    fn fetch_content_list(&self, section_id: &str) -> Result<Vec<ContentItem>, Self::Error> {
        let mut items = self.sections.get(section_id).cloned().unwrap_or_default();
        // Stable sort keeps manifest order among equal dates.
        items.sort_by(|a, b| match (a.date, b.date) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_unknown_section_is_empty() {
        let provider = StaticContentProvider::new();
        assert_eq!(provider.fetch_content_list("research").unwrap(), vec![]);
    }

    #[test]
    fn test_newest_first_undated_last() {
        let provider = StaticContentProvider::new().with_section(
            "research",
            vec![
                ContentItem::new("undated", "Undated"),
                ContentItem::new("old", "Old").with_date(date(2023, 1, 5)),
                ContentItem::new("new", "New").with_date(date(2024, 6, 1)),
            ],
        );
        let slugs: Vec<String> = provider
            .fetch_content_list("research")
            .unwrap()
            .into_iter()
            .map(|item| item.slug)
            .collect();
        assert_eq!(slugs, ["new", "old", "undated"]);
    }

    #[test]
    fn test_yaml_manifest() {
        let yaml = r"
sections:
  research:
    - slug: margins
      title: Reading Margins
      date: 2024-03-01
      summary: What gross margin trends tell you.
  thoughts:
    - slug: patience
      title: On Patience
";
        let provider = StaticContentProvider::from_yaml_str(yaml).unwrap();
        assert_eq!(provider.section_ids().collect::<Vec<_>>(), ["research", "thoughts"]);

        let research = provider.fetch_content_list("research").unwrap();
        assert_eq!(research.len(), 1);
        assert_eq!(research[0].date, Some(date(2024, 3, 1)));
        assert_eq!(
            research[0].summary.as_deref(),
            Some("What gross margin trends tell you.")
        );

        let thoughts = provider.fetch_content_list("thoughts").unwrap();
        assert_eq!(thoughts[0], ContentItem::new("patience", "On Patience"));
    }

    #[test]
    fn test_json_manifest() {
        let json = r#"{"sections": {"research": [{"slug": "a", "title": "A"}]}}"#;
        let provider = StaticContentProvider::from_json_str(json).unwrap();
        assert_eq!(provider.fetch_content_list("research").unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_manifest() {
        let err = StaticContentProvider::from_yaml_str("sections: [1, 2]").unwrap_err();
        assert!(matches!(err, ManifestError::Yaml(_)));
    }
}
