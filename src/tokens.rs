//! Design token registry.
//!
//! Every color and radius used by the design system is referenced by name
//! through this module. Components never emit raw color or length literals;
//! they emit utility classes naming a token (`bg-cream`, `border-divider`,
//! `rounded-[var(--radius-card)]`) and the stylesheet produced by
//! [`DesignTokens::css_variables`] binds those names to values.
//!
//! The registry is process-wide and read-only. It can be replaced exactly
//! once with [`install`], before anything reads it; afterwards [`registry`]
//! always returns the same instance.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;
use std::sync::OnceLock;

static REGISTRY: OnceLock<DesignTokens> = OnceLock::new();

/// Errors raised while building or installing the token registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// An override named a token that does not exist.
    #[error("Unknown design token: {0}")]
    UnknownToken(String),

    /// The registry was already initialized.
    #[error("Design token registry is already installed")]
    AlreadyInstalled,
}

/// Named palette colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorToken {
    /// Page background.
    Cream,
    /// Primary text.
    Ink,
    /// Dark surface, used at low opacity for accents.
    Charcoal,
    /// Secondary text.
    Muted,
    /// Borders and rules.
    Divider,
    /// Gains.
    Positive,
    /// Losses.
    Negative,
}

impl ColorToken {
    /// All color tokens, in palette order.
    pub const ALL: [Self; 7] = [
        Self::Cream,
        Self::Ink,
        Self::Charcoal,
        Self::Muted,
        Self::Divider,
        Self::Positive,
        Self::Negative,
    ];

    /// Token name as it appears in utility classes.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Cream => "cream",
            Self::Ink => "ink",
            Self::Charcoal => "charcoal",
            Self::Muted => "muted",
            Self::Divider => "divider",
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }

    /// Look a token up by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }

    /// Utility class applying this color with the given prefix, e.g.
    /// `ColorToken::Ink.class("text")` is `text-ink`.
    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.name())
    }
}

/// Named corner radii.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RadiusToken {
    /// Cards and containers.
    Card,
    /// Buttons and input-like controls.
    Button,
}

impl RadiusToken {
    /// All radius tokens.
    pub const ALL: [Self; 2] = [Self::Card, Self::Button];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Button => "button",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }

    /// CSS custom property reference, e.g. `var(--radius-card)`.
    #[must_use]
    pub fn css_var(self) -> String {
        format!("var(--radius-{})", self.name())
    }

    /// Rounded-corner utility class bound to this token.
    #[must_use]
    pub fn class(self) -> String {
        format!("rounded-[{}]", self.css_var())
    }
}

/// Token values for the whole design system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignTokens {
    colors: BTreeMap<ColorToken, String>,
    radii: BTreeMap<RadiusToken, String>,
    font_mono: String,
}

impl Default for DesignTokens {
    fn default() -> Self {
        let colors = [
            (ColorToken::Cream, "#f7f3e8"),
            (ColorToken::Ink, "#1a1a1a"),
            (ColorToken::Charcoal, "#2b2b2b"),
            (ColorToken::Muted, "#6b6b6b"),
            (ColorToken::Divider, "#c9c2b2"),
            (ColorToken::Positive, "#1f7a4d"),
            (ColorToken::Negative, "#b23a2e"),
        ]
        .into_iter()
        .map(|(token, value)| (token, value.to_string()))
        .collect();

        let radii = [(RadiusToken::Card, "6px"), (RadiusToken::Button, "4px")]
            .into_iter()
            .map(|(token, value)| (token, value.to_string()))
            .collect();

        Self {
            colors,
            radii,
            font_mono: "\"IBM Plex Mono\", ui-monospace, monospace".to_string(),
        }
    }
}

impl DesignTokens {
    /// Replace token values by name.
    ///
    /// Only values change; the set of token names is fixed, so an unknown
    /// name is rejected rather than added.
    pub fn with_overrides(
        mut self,
        colors: &HashMap<String, String>,
        radii: &HashMap<String, String>,
    ) -> Result<Self, TokenError> {
        for (name, value) in colors {
            let token =
                ColorToken::from_name(name).ok_or_else(|| TokenError::UnknownToken(name.clone()))?;
            self.colors.insert(token, value.clone());
        }
        for (name, value) in radii {
            let token = RadiusToken::from_name(name)
                .ok_or_else(|| TokenError::UnknownToken(name.clone()))?;
            self.radii.insert(token, value.clone());
        }
        Ok(self)
    }

    /// Value bound to a color token.
    #[must_use]
    pub fn color(&self, token: ColorToken) -> &str {
        self.colors.get(&token).map_or("", String::as_str)
    }

    /// Value bound to a radius token.
    #[must_use]
    pub fn radius(&self, token: RadiusToken) -> &str {
        self.radii.get(&token).map_or("", String::as_str)
    }

    /// `:root` block declaring every token as a CSS custom property.
    #[must_use]
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (token, value) in &self.colors {
            let _ = writeln!(css, "  --color-{}: {value};", token.name());
        }
        for (token, value) in &self.radii {
            let _ = writeln!(css, "  --radius-{}: {value};", token.name());
        }
        let _ = writeln!(css, "  --font-mono: {};", self.font_mono);
        css.push_str("}\n");
        css
    }
}

/// The process-wide token registry.
pub fn registry() -> &'static DesignTokens {
    REGISTRY.get_or_init(DesignTokens::default)
}

/// Install a custom registry. Must run before the first [`registry`] call.
pub fn install(tokens: DesignTokens) -> Result<(), TokenError> {
    REGISTRY
        .set(tokens)
        .map_err(|_already| TokenError::AlreadyInstalled)?;
    tracing::debug!(name: "tokens.installed", "Design token registry installed");
    Ok(())
}
