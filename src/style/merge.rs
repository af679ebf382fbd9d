//! Class merging with "last write wins" conflict resolution.
//!
//! A directive list is flattened into individual utility classes. Each class
//! is assigned a conflict group (padding, text color, radius, ...); when two
//! classes share a group under the same modifiers, only the later one
//! survives. Broader groups also clear narrower ones that appear earlier
//! (`p-6` removes a preceding `px-3`) but a narrower class never removes a
//! broader one.
//!
//! Classes that do not belong to a known group are kept, with exact
//! duplicates collapsed to their last occurrence.

use std::collections::HashSet;

/// A conflict group and the narrower groups it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Group {
    pub id: &'static str,
    pub overrides: &'static [&'static str],
}

impl Group {
    const fn plain(id: &'static str) -> Self {
        Self { id, overrides: &[] }
    }
}

/// A single utility class split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedClass<'a> {
    /// Variant modifiers such as `hover` or `md`, in source order.
    pub modifiers: Vec<&'a str>,
    pub important: bool,
    /// The utility itself, without modifiers, `!` or leading `-`.
    pub utility: &'a str,
}

impl<'a> ParsedClass<'a> {
    pub fn parse(class: &'a str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0usize;
        let mut start = 0usize;
        for (idx, ch) in class.char_indices() {
            match ch {
                '[' => depth += 1,
                ']' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    modifiers.push(&class[start..idx]);
                    start = idx + 1;
                }
                _ => {}
            }
        }

        let mut utility = &class[start..];
        let important = utility.starts_with('!') || utility.ends_with('!');
        utility = utility.trim_start_matches('!').trim_end_matches('!');
        // Negative values conflict with positive ones.
        utility = utility.trim_start_matches('-');

        Self {
            modifiers,
            important,
            utility,
        }
    }

    pub fn group(&self) -> Option<Group> {
        classify(self.utility)
    }

    fn key(&self, group_id: &str) -> String {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort_unstable();
        let bang = if self.important { "!" } else { "" };
        format!("{}:{bang}{group_id}", modifiers.join(":"))
    }
}

/// Merge directives into a single class string.
///
/// Each directive may itself hold several whitespace-separated classes.
/// Surviving classes keep their relative order.
///
/// # Example
///
/// ```rust
/// use stocktaper_design::style::merge;
///
/// assert_eq!(merge(["p-6 text-ink", "px-2 text-negative"]), "p-6 px-2 text-negative");
/// assert_eq!(merge(["px-2", "p-6"]), "p-6");
/// ```
pub fn merge<I, S>(directives: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let directives: Vec<S> = directives.into_iter().collect();
    let classes: Vec<&str> = directives
        .iter()
        .flat_map(|directive| directive.as_ref().split_whitespace())
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(classes.len());

    for &class in classes.iter().rev() {
        let parsed = ParsedClass::parse(class);
        if let Some(group) = parsed.group() {
            let key = parsed.key(group.id);
            if seen.contains(&key) {
                continue;
            }
            for narrower in group.overrides {
                seen.insert(parsed.key(narrower));
            }
            seen.insert(key);
        } else if !seen.insert(format!("raw:{class}")) {
            continue;
        }
        kept.push(class);
    }

    kept.reverse();
    kept.join(" ")
}

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const TEXT_WRAP: &[&str] = &["wrap", "nowrap", "balance", "pretty"];
const FONT_FAMILIES: &[&str] = &["mono", "sans", "serif"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "hidden",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const PADDING_ALL: &[&str] = &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"];
const MARGIN_ALL: &[&str] = &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"];
const ROUNDED_SIDES: &[&str] = &[
    "rounded-t",
    "rounded-r",
    "rounded-b",
    "rounded-l",
    "rounded-tl",
    "rounded-tr",
    "rounded-br",
    "rounded-bl",
];
const BORDER_SIDES: &[&str] = &[
    "border-w-x",
    "border-w-y",
    "border-w-t",
    "border-w-r",
    "border-w-b",
    "border-w-l",
];
const BORDER_COLOR_SIDES: &[&str] = &[
    "border-color-x",
    "border-color-y",
    "border-color-t",
    "border-color-r",
    "border-color-b",
    "border-color-l",
];

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']')
}

/// `[2px]`, `[0.5rem]` and the like; `[#fff]` or `[var(--x)]` are not lengths.
fn is_arbitrary_length(value: &str) -> bool {
    is_arbitrary(value) && value[1..].starts_with(|c: char| c.is_ascii_digit())
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '/')
}

/// Value following `prefix-`, or `Some("")` for the bare utility.
fn value_of<'u>(utility: &'u str, prefix: &str) -> Option<&'u str> {
    let rest = utility.strip_prefix(prefix)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('-')
    }
}

/// Side selector (`t`, `x`, `tl`, ...) at the start of a value, if any.
fn side_of(value: &str, sides: &[&'static str]) -> Option<&'static str> {
    sides
        .iter()
        .copied()
        .find(|side| value == *side || value.starts_with(&format!("{side}-")))
}

#[allow(clippy::too_many_lines)]
pub(crate) fn classify(utility: &str) -> Option<Group> {
    macro_rules! spacing {
        ($all:literal, $x:literal, $y:literal, $every:expr, [$($side:literal),*]) => {
            if value_of(utility, $all).is_some_and(|v| !v.is_empty()) {
                return Some(Group { id: $all, overrides: $every });
            }
            if value_of(utility, $x).is_some_and(|v| !v.is_empty()) {
                return Some(Group { id: $x, overrides: &[concat!($all, "r"), concat!($all, "l"), concat!($all, "s"), concat!($all, "e")] });
            }
            if value_of(utility, $y).is_some_and(|v| !v.is_empty()) {
                return Some(Group { id: $y, overrides: &[concat!($all, "t"), concat!($all, "b")] });
            }
            $(
                if value_of(utility, $side).is_some_and(|v| !v.is_empty()) {
                    return Some(Group::plain($side));
                }
            )*
        };
    }

    spacing!("p", "px", "py", PADDING_ALL, ["ps", "pe", "pt", "pr", "pb", "pl"]);
    spacing!("m", "mx", "my", MARGIN_ALL, ["ms", "me", "mt", "mr", "mb", "ml"]);

    if let Some(value) = value_of(utility, "text") {
        if value.is_empty() {
            return None;
        }
        let id = if TEXT_SIZES.contains(&value) || is_arbitrary_length(value) {
            "text-size"
        } else if TEXT_ALIGN.contains(&value) {
            "text-align"
        } else if TEXT_WRAP.contains(&value) {
            "text-wrap"
        } else {
            "text-color"
        };
        return Some(Group::plain(id));
    }

    if let Some(value) = value_of(utility, "font") {
        if FONT_FAMILIES.contains(&value) || is_arbitrary(value) {
            return Some(Group::plain("font-family"));
        }
        if FONT_WEIGHTS.contains(&value) || is_numeric(value) {
            return Some(Group::plain("font-weight"));
        }
        return None;
    }

    if let Some(value) = value_of(utility, "bg") {
        if value.is_empty() {
            return None;
        }
        if value == "none" || value.starts_with("gradient") {
            return Some(Group::plain("bg-image"));
        }
        return Some(Group::plain("bg-color"));
    }

    if let Some(value) = value_of(utility, "border") {
        if value.is_empty() || is_numeric(value) {
            return Some(Group {
                id: "border-w",
                overrides: BORDER_SIDES,
            });
        }
        if let Some(side) = side_of(value, &["x", "y", "t", "r", "b", "l"]) {
            let rest = value[side.len()..].trim_start_matches('-');
            let width = rest.is_empty() || is_numeric(rest) || is_arbitrary_length(rest);
            let id = match (side, width) {
                ("x", true) => "border-w-x",
                ("y", true) => "border-w-y",
                ("t", true) => "border-w-t",
                ("r", true) => "border-w-r",
                ("b", true) => "border-w-b",
                ("l", true) => "border-w-l",
                ("x", false) => "border-color-x",
                ("y", false) => "border-color-y",
                ("t", false) => "border-color-t",
                ("r", false) => "border-color-r",
                ("b", false) => "border-color-b",
                _ => "border-color-l",
            };
            return Some(Group::plain(id));
        }
        if BORDER_STYLES.contains(&value) {
            return Some(Group::plain("border-style"));
        }
        if is_arbitrary_length(value) {
            return Some(Group {
                id: "border-w",
                overrides: BORDER_SIDES,
            });
        }
        return Some(Group {
            id: "border-color",
            overrides: BORDER_COLOR_SIDES,
        });
    }

    if let Some(value) = value_of(utility, "rounded") {
        if let Some(side) = side_of(value, &["tl", "tr", "br", "bl", "t", "r", "b", "l"]) {
            let id = ROUNDED_SIDES
                .iter()
                .copied()
                .find(|id| id.strip_prefix("rounded-") == Some(side))?;
            return Some(Group::plain(id));
        }
        return Some(Group {
            id: "rounded",
            overrides: ROUNDED_SIDES,
        });
    }

    if value_of(utility, "size").is_some_and(|v| !v.is_empty()) {
        return Some(Group {
            id: "size",
            overrides: &["w", "h"],
        });
    }
    for prefix in ["min-w", "min-h", "max-w", "max-h", "w", "h"] {
        if value_of(utility, prefix).is_some_and(|v| !v.is_empty()) {
            return Some(Group::plain(prefix));
        }
    }

    if value_of(utility, "gap").is_some_and(|v| !v.is_empty()) {
        if utility.starts_with("gap-x-") {
            return Some(Group::plain("gap-x"));
        }
        if utility.starts_with("gap-y-") {
            return Some(Group::plain("gap-y"));
        }
        return Some(Group {
            id: "gap",
            overrides: &["gap-x", "gap-y"],
        });
    }

    if DISPLAY.contains(&utility) {
        return Some(Group::plain("display"));
    }
    if POSITION.contains(&utility) {
        return Some(Group::plain("position"));
    }

    if let Some(value) = value_of(utility, "flex") {
        let id = match value {
            "row" | "col" | "row-reverse" | "col-reverse" => "flex-direction",
            "wrap" | "nowrap" | "wrap-reverse" => "flex-wrap",
            _ => "flex",
        };
        return Some(Group::plain(id));
    }

    if value_of(utility, "overflow").is_some_and(|v| !v.is_empty()) {
        if utility.starts_with("overflow-x-") {
            return Some(Group::plain("overflow-x"));
        }
        if utility.starts_with("overflow-y-") {
            return Some(Group::plain("overflow-y"));
        }
        return Some(Group {
            id: "overflow",
            overrides: &["overflow-x", "overflow-y"],
        });
    }

    for prefix in [
        "grid-cols",
        "col-span",
        "items",
        "justify",
        "self",
        "tracking",
        "leading",
        "opacity",
        "z",
        "space-x",
        "space-y",
        "underline-offset",
        "duration",
    ] {
        if value_of(utility, prefix).is_some_and(|v| !v.is_empty()) {
            return Some(Group::plain(prefix));
        }
    }

    for prefix in ["shadow", "blur", "transition"] {
        if value_of(utility, prefix).is_some() {
            return Some(Group::plain(prefix));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_color_wins() {
        assert_eq!(merge(["bg-cream text-ink", "text-red-500"]), "bg-cream text-red-500");
    }

    #[test]
    fn test_text_size_and_color_do_not_conflict() {
        assert_eq!(merge(["text-base text-ink", "text-lg"]), "text-ink text-lg");
    }

    #[test]
    fn test_broad_padding_clears_narrow() {
        assert_eq!(merge(["px-3 pt-1", "p-6"]), "p-6");
        assert_eq!(merge(["p-6", "px-3"]), "p-6 px-3");
        assert_eq!(merge(["py-2 pt-4", "py-8"]), "py-8");
    }

    #[test]
    fn test_border_groups() {
        assert_eq!(
            merge(["border border-dashed border-divider", "border-solid"]),
            "border border-divider border-solid"
        );
        assert_eq!(merge(["border-t-2", "border"]), "border");
        assert_eq!(merge(["border-ink", "border-b"]), "border-ink border-b");
    }

    #[test]
    fn test_side_color_keeps_side_width() {
        assert_eq!(
            merge(["w-full border-0 border-t border-dashed border-divider", "border-t-ink"]),
            "w-full border-0 border-t border-dashed border-divider border-t-ink"
        );
        assert_eq!(merge(["border-l-4", "border-l-ink"]), "border-l-4 border-l-ink");
        assert_eq!(merge(["border-t-ink", "border-t-muted"]), "border-t-muted");
        assert_eq!(merge(["border-t-ink", "border-divider"]), "border-divider");
        assert_eq!(merge(["border-b-2", "border-b-[3px]"]), "border-b-[3px]");
        assert_eq!(classify("border-x-divider").map(|g| g.id), Some("border-color-x"));
        assert_eq!(classify("border-y").map(|g| g.id), Some("border-w-y"));
    }

    #[test]
    fn test_rounded_arbitrary() {
        assert_eq!(
            merge(["rounded-[var(--radius-card)]", "rounded-none"]),
            "rounded-none"
        );
        assert_eq!(
            merge(["rounded-t-lg", "rounded-[var(--radius-button)]"]),
            "rounded-[var(--radius-button)]"
        );
    }

    #[test]
    fn test_modifiers_scope_conflicts() {
        assert_eq!(
            merge(["text-ink hover:text-muted", "text-charcoal"]),
            "hover:text-muted text-charcoal"
        );
        assert_eq!(
            merge(["md:hover:text-ink", "hover:md:text-muted"]),
            "hover:md:text-muted"
        );
    }

    #[test]
    fn test_bracket_modifier_split() {
        let parsed = ParsedClass::parse("supports-[display:grid]:grid");
        assert_eq!(parsed.modifiers, vec!["supports-[display:grid]"]);
        assert_eq!(parsed.utility, "grid");
    }

    #[test]
    fn test_important_and_negative() {
        let parsed = ParsedClass::parse("!-mt-2");
        assert!(parsed.important);
        assert_eq!(parsed.utility, "mt-2");
        assert_eq!(merge(["mt-4", "-mt-2"]), "-mt-2");
        assert_eq!(merge(["!p-2", "p-4"]), "!p-2 p-4");
    }

    #[test]
    fn test_unknown_classes_deduplicate() {
        assert_eq!(merge(["foo bar", "foo"]), "bar foo");
        assert_eq!(merge(["data-x", ""]), "data-x");
    }

    #[test]
    fn test_empty() {
        assert_eq!(merge(Vec::<String>::new()), "");
        assert_eq!(merge(["  "]), "");
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("bg-charcoal/5").map(|g| g.id), Some("bg-color"));
        assert_eq!(classify("font-mono").map(|g| g.id), Some("font-family"));
        assert_eq!(classify("font-bold").map(|g| g.id), Some("font-weight"));
        assert_eq!(classify("max-w-2xl").map(|g| g.id), Some("max-w"));
        assert_eq!(classify("mx-auto").map(|g| g.id), Some("mx"));
        assert_eq!(classify("flex").map(|g| g.id), Some("display"));
        assert_eq!(classify("flex-col").map(|g| g.id), Some("flex-direction"));
        assert_eq!(classify("shadow").map(|g| g.id), Some("shadow"));
        assert_eq!(classify("antialiased"), None);
    }
}
