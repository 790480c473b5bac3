//! Named styles and their ANSI SGR codes.
//!
//! The registry is an immutable name → code table. It is built once, either
//! through [`StyleRegistry::new`] (optionally extended with
//! [`StyleRegistry::with_style`]) or lazily through [`StyleRegistry::global`],
//! and only read afterwards, so a shared reference can be handed to any number
//! of parsers on any number of threads.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// SGR code used when a name is not in the registry (gray).
pub const FALLBACK_CODE: &str = "37";

/// A named ANSI style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// Lowercase lookup name, e.g. `"red"` or `"b"`.
    pub name: String,
    /// SGR parameter, e.g. `"31"`.
    pub code: String,
    /// Whether this style sets a foreground color (as opposed to a modifier).
    pub is_color: bool,
}

impl Style {
    /// Creates a modifier style (bold, underline, ...).
    pub fn modifier(name: &str, code: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            code: code.to_string(),
            is_color: false,
        }
    }

    /// Creates a color style.
    pub fn color(name: &str, code: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            code: code.to_string(),
            is_color: true,
        }
    }
}

/// The built-in vocabulary: `(name, code, is_color)`.
pub const DEFAULT_STYLES: &[(&str, &str, bool)] = &[
    ("reset", "0", false),
    ("unstyle", "22", false),
    ("b", "1", false),
    ("i", "3", false),
    ("u", "4", false),
    ("s", "9", false),
    ("blink", "5", false),
    ("x", "7", false),
    ("white", "97", true),
    ("gray", "37", true),
    ("red", "31", true),
    ("green", "32", true),
    ("cyan", "36", true),
    ("blue", "34", true),
    ("yellow", "33", true),
];

static GLOBAL: Lazy<StyleRegistry> = Lazy::new(StyleRegistry::new);

/// Name → [`Style`] table.
///
/// # Example
///
/// ```rust
/// use richline_bbparser::{Style, StyleRegistry};
///
/// let registry = StyleRegistry::new().with_style(Style::color("magenta", "35"));
///
/// assert_eq!(registry.resolve("RED"), "31");
/// assert_eq!(registry.resolve("magenta"), "35");
/// assert_eq!(registry.resolve("nope"), "37");
/// ```
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: HashMap<String, Style>,
    // Insertion order, so iteration is stable.
    order: Vec<String>,
}

impl StyleRegistry {
    /// Creates a registry holding the built-in vocabulary.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for (name, code, is_color) in DEFAULT_STYLES {
            registry.insert(Style {
                name: (*name).to_string(),
                code: (*code).to_string(),
                is_color: *is_color,
            });
        }
        registry
    }

    /// Creates a registry with no styles at all.
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Returns the process-wide default registry.
    pub fn global() -> &'static StyleRegistry {
        &GLOBAL
    }

    /// Adds or replaces a style, returning the updated registry for chaining.
    pub fn with_style(mut self, style: Style) -> Self {
        self.insert(style);
        self
    }

    fn insert(&mut self, mut style: Style) {
        style.name = style.name.to_lowercase();
        if !self.styles.contains_key(&style.name) {
            self.order.push(style.name.clone());
        }
        self.styles.insert(style.name.clone(), style);
    }

    /// Looks up a style by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&Style> {
        match self.styles.get(name) {
            Some(style) => Some(style),
            None => self.styles.get(&name.to_lowercase()),
        }
    }

    /// Returns `true` if `name` is a known style.
    pub fn has(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Returns the SGR code for `name`, or [`FALLBACK_CODE`] when unknown.
    pub fn resolve(&self, name: &str) -> &str {
        self.lookup(name)
            .map(|style| style.code.as_str())
            .unwrap_or(FALLBACK_CODE)
    }

    /// Returns the full escape sequence for `name`, e.g. `"\x1b[31m"`.
    pub fn escape(&self, name: &str) -> String {
        format!("\x1b[{}m", self.resolve(name))
    }

    /// Iterates over all styles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.order.iter().filter_map(|name| self.styles.get(name))
    }

    /// Iterates over color styles.
    pub fn colors(&self) -> impl Iterator<Item = &Style> {
        self.iter().filter(|style| style.is_color)
    }

    /// Iterates over modifier styles.
    pub fn modifiers(&self) -> impl Iterator<Item = &Style> {
        self.iter().filter(|style| !style.is_color)
    }

    /// Number of registered styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns `true` if no styles are registered.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_is_complete() {
        let registry = StyleRegistry::new();
        assert_eq!(registry.len(), 15);
        for name in [
            "reset", "unstyle", "b", "i", "u", "s", "blink", "x", "white", "gray", "red",
            "green", "cyan", "blue", "yellow",
        ] {
            assert!(registry.has(name), "missing {}", name);
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let registry = StyleRegistry::new();
        assert_eq!(registry.resolve("red"), "31");
        assert_eq!(registry.resolve("RED"), "31");
        assert_eq!(registry.resolve("Blue"), "34");
    }

    #[test]
    fn test_resolve_unknown_falls_back() {
        let registry = StyleRegistry::new();
        assert_eq!(registry.resolve("magenta"), FALLBACK_CODE);
        assert_eq!(registry.escape("magenta"), "\x1b[37m");
    }

    #[test]
    fn test_with_style_overrides_and_extends() {
        let registry = StyleRegistry::new()
            .with_style(Style::color("Magenta", "35"))
            .with_style(Style::color("red", "91"));

        assert_eq!(registry.resolve("magenta"), "35");
        assert_eq!(registry.resolve("red"), "91");
        assert_eq!(registry.len(), 16);
    }

    #[test]
    fn test_colors_and_modifiers_partition() {
        let registry = StyleRegistry::new();
        let colors: Vec<_> = registry.colors().map(|s| s.name.as_str()).collect();
        let modifiers: Vec<_> = registry.modifiers().map(|s| s.name.as_str()).collect();

        assert_eq!(
            colors,
            vec!["white", "gray", "red", "green", "cyan", "blue", "yellow"]
        );
        assert_eq!(modifiers.len(), 8);
        assert!(modifiers.contains(&"b"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = StyleRegistry::empty();
        assert!(registry.is_empty());
        assert_eq!(registry.resolve("red"), FALLBACK_CODE);
    }

    #[test]
    fn test_global_is_default_table() {
        assert_eq!(StyleRegistry::global().resolve("green"), "32");
    }
}
