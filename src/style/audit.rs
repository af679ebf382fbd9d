//! Design rule checks for class strings.
//!
//! The design system only allows the monospace family, regular and bold
//! weights, palette colors and token radii, and no shadows, gradients or
//! blur. [`audit`] reports every class breaking one of those rules.

use std::fmt;

use super::merge::ParsedClass;
use crate::tokens::{ColorToken, RadiusToken};

/// A design rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Only `font-mono` is allowed.
    MonospaceOnly,
    /// Only `font-normal` and `font-bold` are allowed.
    RegularOrBoldWeight,
    /// No shadows, gradients or blur.
    FlatSurfaces,
    /// Colors must name a palette token.
    PaletteColor,
    /// Radii must use a radius token.
    TokenRadius,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MonospaceOnly => "only the monospace font family is allowed",
            Self::RegularOrBoldWeight => "font weight must be normal or bold",
            Self::FlatSurfaces => "shadows, gradients and blur are not allowed",
            Self::PaletteColor => "color must be a design token",
            Self::TokenRadius => "radius must be a design token",
        })
    }
}

/// A class that breaks a design rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub class: String,
    pub rule: Rule,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`: {}", self.class, self.rule)
    }
}

const COLOR_KEYWORDS: &[&str] = &["transparent", "current", "inherit"];
const COLOR_PREFIXES: &[&str] = &["ring", "outline", "divide", "fill", "stroke", "decoration"];
const EFFECT_PREFIXES: &[&str] = &[
    "shadow",
    "drop-shadow",
    "blur",
    "backdrop-blur",
    "bg-gradient",
    "from",
    "via",
];

/// Check every class in `classes` against the design rules.
#[must_use]
pub fn audit(classes: &str) -> Vec<Violation> {
    classes
        .split_whitespace()
        .filter_map(|class| {
            check(class).map(|rule| Violation {
                class: class.to_string(),
                rule,
            })
        })
        .collect()
}

fn check(class: &str) -> Option<Rule> {
    let parsed = ParsedClass::parse(class);
    let utility = parsed.utility;

    if EFFECT_PREFIXES
        .iter()
        .any(|prefix| utility == *prefix || utility.starts_with(&format!("{prefix}-")))
    {
        return Some(Rule::FlatSurfaces);
    }

    parsed
        .group()
        .and_then(|group| match group.id {
            "font-family" => (utility != "font-mono").then_some(Rule::MonospaceOnly),
            "font-weight" => (!matches!(utility, "font-normal" | "font-bold"))
                .then_some(Rule::RegularOrBoldWeight),
            "text-color" | "bg-color" | "border-color" => {
                let value = utility.split_once('-').map_or("", |(_, value)| value);
                (!is_palette_color(value)).then_some(Rule::PaletteColor)
            }
            "rounded" => {
                let value = utility.strip_prefix("rounded-").unwrap_or("");
                (!is_token_radius(value)).then_some(Rule::TokenRadius)
            }
            id if id.starts_with("border-color-") => {
                let value = utility.splitn(3, '-').nth(2).unwrap_or("");
                (!is_palette_color(value)).then_some(Rule::PaletteColor)
            }
            id if id.starts_with("rounded-") => {
                let value = utility.splitn(3, '-').nth(2).unwrap_or("");
                (!is_token_radius(value)).then_some(Rule::TokenRadius)
            }
            _ => None,
        })
        .or_else(|| {
            COLOR_PREFIXES
                .iter()
                .find_map(|prefix| utility.strip_prefix(&format!("{prefix}-")))
                .filter(|value| looks_like_color(value) && !is_palette_color(value))
                .map(|_| Rule::PaletteColor)
        })
}

fn is_palette_color(value: &str) -> bool {
    let name = value.split_once('/').map_or(value, |(name, _opacity)| name);
    if COLOR_KEYWORDS.contains(&name) || ColorToken::from_name(name).is_some() {
        return true;
    }
    name.strip_prefix("[var(--color-")
        .and_then(|rest| rest.strip_suffix(")]"))
        .is_some_and(|token| ColorToken::from_name(token).is_some())
}

fn is_token_radius(value: &str) -> bool {
    matches!(value, "none" | "full")
        || RadiusToken::ALL
            .iter()
            .any(|token| value == format!("[{}]", token.css_var()))
}

/// Width and offset utilities share prefixes with color utilities.
fn looks_like_color(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with(|c: char| c.is_ascii_digit())
        && !matches!(
            value,
            "none" | "dashed" | "dotted" | "solid" | "double" | "hidden" | "inset" | "x" | "y"
        )
        && !value.starts_with("offset")
        && !value.starts_with("x-")
        && !value.starts_with("y-")
}
