//! Style token resolver.

use std::fmt;

use super::{SizeClass, StyleError, StyleVariant, merge};
use crate::tokens::{ColorToken, RadiusToken};

/// Structural role of an element, which selects its radius token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Cards, panels and other containers.
    #[default]
    Card,
    /// Inputs, buttons and other controls.
    Control,
}

impl ElementKind {
    #[must_use]
    pub fn radius(self) -> RadiusToken {
        match self {
            Self::Card => RadiusToken::Card,
            Self::Control => RadiusToken::Button,
        }
    }
}

/// Ordered list of atomic style directives.
///
/// Order is significant: when handed to [`merge`], later directives win over
/// earlier ones targeting the same property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives(Vec<String>);

impl Directives {
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Collapse the list into the final class attribute value.
    #[must_use]
    pub fn to_class_string(&self) -> String {
        merge(&self.0)
    }
}

impl fmt::Display for Directives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_class_string())
    }
}

impl IntoIterator for Directives {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Compute the directive list for an element.
///
/// The list is built in fixed precedence: monospace base, dashed divider
/// border with the kind's radius, the size pair, the variant pair, and
/// finally `class_override` verbatim when it is not blank.
#[must_use]
pub fn resolve(
    kind: ElementKind,
    variant: StyleVariant,
    size: SizeClass,
    class_override: &str,
) -> Directives {
    let mut directives = Vec::with_capacity(11);

    directives.push("font-mono".to_string());

    directives.push("border".to_string());
    directives.push("border-dashed".to_string());
    directives.push(ColorToken::Divider.class("border"));
    directives.push(kind.radius().class());

    directives.extend(size.directives().iter().map(ToString::to_string));
    directives.extend(variant.directives());

    if !class_override.trim().is_empty() {
        directives.push(class_override.to_string());
    }

    tracing::trace!(
        name: "style.resolved",
        ?kind,
        %variant,
        %size,
        count = directives.len(),
        "Style directives resolved"
    );

    Directives(directives)
}

/// Like [`resolve`], but for variant and size names supplied at runtime.
pub fn resolve_named(
    kind: ElementKind,
    variant: &str,
    size: &str,
    class_override: &str,
) -> Result<Directives, StyleError> {
    let variant: StyleVariant = variant.parse()?;
    let size: SizeClass = size.parse()?;
    Ok(resolve(kind, variant, size, class_override))
}
