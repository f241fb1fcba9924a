//! Named styles used by every consoleio renderer.
//!
//! Styles are looked up by name (`"info"`, `"err"`, `"choice-i"`...). Log-line
//! styles also carry `-bar` and `-pre` variants for the leading glyph and the
//! `(Prefix)` label; [`ConsoleTheme::variant`] falls back to the base style
//! when a variant is missing.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use console::Style;

/// Style table in `console`'s dotted notation.
const DEFAULT_STYLES: &[(&str, &str)] = &[
    ("echo", "on_black"),
    ("echo-bar", "on_black"),
    ("echo-pre", "dim.on_black"),
    ("info", ""),
    ("info-bar", ""),
    ("info-pre", "dim"),
    ("warn", "red"),
    ("warn-bar", "red"),
    ("warn-pre", "dim.red"),
    ("err", "white.bright.on_red"),
    ("err-bar", "red.bright"),
    ("err-pre", "dim.red.bright"),
    ("ask", "yellow"),
    ("ask-bar", "yellow"),
    ("ask-pre", "dim.yellow"),
    ("muted", "dim.white.bright"),
    ("muted-bar", "dim.white"),
    ("muted-pre", "dim.white"),
    ("title", "yellow.bright"),
    ("pause", "magenta"),
    ("choice-i", "yellow"),
    ("choice-cmd", "yellow.bright.underlined"),
    ("choice-item", "white"),
    ("choice-mark", "cyan"),
    ("choice-check", "green.bright"),
    ("dim", "dim"),
];

/// A table of named styles.
#[derive(Debug, Clone)]
pub struct ConsoleTheme {
    styles: BTreeMap<String, Style>,
}

impl ConsoleTheme {
    /// Build the default consoleio theme.
    #[must_use]
    pub fn new() -> Self {
        let styles = DEFAULT_STYLES
            .iter()
            .map(|(name, spec)| ((*name).to_string(), Style::from_dotted_str(spec)))
            .collect();
        Self { styles }
    }

    /// Override or add a style using dotted notation (`"bold.red.on_white"`).
    #[must_use]
    pub fn with_style(mut self, name: impl Into<String>, spec: &str) -> Self {
        self.styles.insert(name.into(), Style::from_dotted_str(spec));
        self
    }

    /// Whether a style with this exact name exists.
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Style by name, or an unstyled default.
    pub fn style(&self, name: &str) -> Style {
        self.styles.get(name).cloned().unwrap_or_default()
    }

    /// Name of `<base>-<suffix>` if the theme defines it, otherwise `base`.
    pub fn variant_name<'a>(&self, base: &'a str, suffix: &str) -> std::borrow::Cow<'a, str> {
        let full = format!("{base}-{suffix}");
        if self.has(&full) {
            std::borrow::Cow::Owned(full)
        } else {
            std::borrow::Cow::Borrowed(base)
        }
    }

    /// Style for `<base>-<suffix>`, falling back to `base`.
    pub fn variant(&self, base: &str, suffix: &str) -> Style {
        self.style(&self.variant_name(base, suffix))
    }

    /// All style names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }
}

impl Default for ConsoleTheme {
    fn default() -> Self {
        Self::new()
    }
}

static THEME: OnceLock<ConsoleTheme> = OnceLock::new();

/// The process-wide default theme.
#[must_use]
pub fn theme() -> &'static ConsoleTheme {
    THEME.get_or_init(ConsoleTheme::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_line_styles_have_variants() {
        let t = ConsoleTheme::new();
        for base in ["echo", "info", "warn", "err", "ask", "muted"] {
            assert!(t.has(base), "missing {base}");
            assert!(t.has(&format!("{base}-bar")), "missing {base}-bar");
            assert!(t.has(&format!("{base}-pre")), "missing {base}-pre");
        }
    }

    #[test]
    fn test_variant_falls_back_to_base() {
        let t = ConsoleTheme::new();
        assert_eq!(t.variant_name("title", "pre"), "title");
        assert_eq!(t.variant_name("warn", "pre"), "warn-pre");
    }

    #[test]
    fn test_unknown_style_is_plain() {
        let t = ConsoleTheme::new();
        assert!(!t.has("nope"));
        let styled = t.style("nope").force_styling(true).apply_to("x").to_string();
        assert_eq!(styled, "x");
    }

    #[test]
    fn test_with_style_overrides() {
        let t = ConsoleTheme::new().with_style("custom", "bold");
        assert!(t.has("custom"));
        let styled = t.style("custom").force_styling(true).apply_to("x").to_string();
        assert_ne!(styled, "x");
    }

    #[test]
    fn test_global_theme_is_singleton() {
        assert!(std::ptr::eq(theme(), theme()));
    }
}
