//! Variant and size inputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::StyleError;
use crate::tokens::ColorToken;

/// Color pairing of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleVariant {
    /// Cream surface, ink text.
    #[default]
    Default,
    /// Tinted charcoal surface, ink text.
    Accent,
}

impl StyleVariant {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Accent => "accent",
        }
    }

    /// Background and foreground directives for this variant.
    #[must_use]
    pub fn directives(self) -> [String; 2] {
        match self {
            Self::Default => [ColorToken::Cream.class("bg"), ColorToken::Ink.class("text")],
            Self::Accent => [
                format!("{}/5", ColorToken::Charcoal.class("bg")),
                ColorToken::Ink.class("text"),
            ],
        }
    }
}

impl FromStr for StyleVariant {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "accent" => Ok(Self::Accent),
            _ => Err(StyleError::InvalidVariant(s.to_string())),
        }
    }
}

impl fmt::Display for StyleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Padding and font-size pairing of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    #[serde(rename = "sm", alias = "small")]
    Small,
    #[default]
    #[serde(rename = "md", alias = "medium")]
    Medium,
    #[serde(rename = "lg", alias = "large")]
    Large,
}

impl SizeClass {
    /// Short name (`sm`, `md`, `lg`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
        }
    }

    /// Padding and font-size directives for this size.
    #[must_use]
    pub fn directives(self) -> [&'static str; 2] {
        match self {
            Self::Small => ["p-3", "text-sm"],
            Self::Medium => ["p-6", "text-base"],
            Self::Large => ["p-8", "text-lg"],
        }
    }
}

impl FromStr for SizeClass {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sm" | "small" => Ok(Self::Small),
            "md" | "medium" => Ok(Self::Medium),
            "lg" | "large" => Ok(Self::Large),
            _ => Err(StyleError::InvalidSize(s.to_string())),
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(StyleVariant::default(), StyleVariant::Default);
        assert_eq!(SizeClass::default(), SizeClass::Medium);
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!("accent".parse::<StyleVariant>(), Ok(StyleVariant::Accent));
        assert_eq!("Default".parse::<StyleVariant>(), Ok(StyleVariant::Default));
        assert_eq!(
            "bold".parse::<StyleVariant>(),
            Err(StyleError::InvalidVariant("bold".to_string()))
        );
        assert!("".parse::<StyleVariant>().is_err());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!("sm".parse::<SizeClass>(), Ok(SizeClass::Small));
        assert_eq!("medium".parse::<SizeClass>(), Ok(SizeClass::Medium));
        assert_eq!("LG".parse::<SizeClass>(), Ok(SizeClass::Large));
        assert_eq!(
            "xl".parse::<SizeClass>(),
            Err(StyleError::InvalidSize("xl".to_string()))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for size in [SizeClass::Small, SizeClass::Medium, SizeClass::Large] {
            assert_eq!(size.to_string().parse::<SizeClass>(), Ok(size));
        }
        for variant in [StyleVariant::Default, StyleVariant::Accent] {
            assert_eq!(variant.to_string().parse::<StyleVariant>(), Ok(variant));
        }
    }

    #[test]
    fn test_serde_names() {
        let size: SizeClass = serde_json::from_str("\"large\"").unwrap();
        assert_eq!(size, SizeClass::Large);
        assert_eq!(serde_json::to_string(&SizeClass::Small).unwrap(), "\"sm\"");
        assert_eq!(
            serde_json::to_string(&StyleVariant::Accent).unwrap(),
            "\"accent\""
        );
    }
}
