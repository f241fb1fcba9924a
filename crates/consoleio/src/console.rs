//! Configured console wrapper

use crate::config::ConsoleConfig;
use crate::render::{Glyphs, Panel, render_rule};
use crate::theme::ConsoleTheme;
use console::Term;
use std::io::{self, Write};
use std::sync::{Mutex, OnceLock};

/// Fallback width when the writer is not a terminal.
const DEFAULT_WIDTH: usize = 80;

/// The styled output sink every consoleio operation writes through.
///
/// Output methods return `&Self` so calls can be chained:
///
/// ```ignore
/// use consoleio::console::IoConsole;
///
/// let out = IoConsole::with_enabled(false);
/// out.title("setup").info("reading config").rule("");
/// ```
pub struct IoConsole {
    out: Mutex<Box<dyn Write + Send>>,
    enabled: bool,
    glyphs: Glyphs,
    theme: &'static ConsoleTheme,
    width: Option<usize>,
    is_tty: bool,
}

impl IoConsole {
    /// Create with automatic detection
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&ConsoleConfig::from_env())
    }

    /// Create from an explicit configuration, writing to stdout
    #[must_use]
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            out: Mutex::new(Box::new(io::stdout())),
            enabled: config.should_use_rich(),
            glyphs: config.glyphs(),
            theme: crate::theme::theme(),
            width: config.width,
            is_tty: Term::stdout().is_term(),
        }
    }

    /// Create with explicit enable/disable, writing to stdout
    #[must_use]
    pub fn with_enabled(enabled: bool) -> Self {
        Self::from_config(&ConsoleConfig::new().with_context(if enabled {
            crate::detection::DisplayContext::Human
        } else {
            crate::detection::DisplayContext::Agent
        }))
    }

    /// Create writing to stderr (used by the logger)
    #[must_use]
    pub fn stderr(config: &ConsoleConfig) -> Self {
        Self {
            out: Mutex::new(Box::new(io::stderr())),
            is_tty: Term::stderr().is_term(),
            ..Self::from_config(config)
        }
    }

    /// Create with custom writer (for testing)
    #[must_use]
    pub fn with_writer<W: Write + Send + 'static>(writer: W, enabled: bool) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
            enabled,
            glyphs: Glyphs::unicode(),
            theme: crate::theme::theme(),
            width: None,
            is_tty: false,
        }
    }

    /// Replace the glyph set
    #[must_use]
    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Fix the output width
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    // ─────────────────────────────────────────────────
    // State Queries
    // ─────────────────────────────────────────────────

    /// Check if styled output is enabled
    pub fn is_rich(&self) -> bool {
        self.enabled
    }

    /// Get the theme
    pub fn theme(&self) -> &ConsoleTheme {
        self.theme
    }

    /// Get the glyph set
    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// Output width: configured, terminal columns, or 80
    pub fn width(&self) -> usize {
        if let Some(w) = self.width {
            return w;
        }
        if self.is_tty {
            if let Some((_, cols)) = Term::stdout().size_checked() {
                return usize::from(cols);
            }
        }
        DEFAULT_WIDTH
    }

    // ─────────────────────────────────────────────────
    // Styling
    // ─────────────────────────────────────────────────

    /// Apply a named theme style to `text` (identity when styling is off)
    pub fn paint(&self, text: &str, style: &str) -> String {
        if !self.enabled || style.is_empty() || text.is_empty() {
            return text.to_string();
        }
        self.theme
            .style(style)
            .force_styling(true)
            .apply_to(text)
            .to_string()
    }

    // ─────────────────────────────────────────────────
    // Output Methods
    // ─────────────────────────────────────────────────

    /// Print one line verbatim
    pub fn print(&self, content: &str) -> &Self {
        self.write_line(content);
        self
    }

    /// Print one line in a named theme style
    pub fn print_styled(&self, text: &str, style: &str) -> &Self {
        self.write_line(&self.paint(text, style));
        self
    }

    /// Write text without a trailing newline and flush (prompts)
    pub fn print_inline(&self, text: &str) -> &Self {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.write_all(text.as_bytes());
            let _ = out.flush();
        }
        self
    }

    /// Print a blank line
    pub fn newline(&self) -> &Self {
        self.write_line("");
        self
    }

    /// Print `count` blank lines (at least one)
    pub fn br(&self, count: usize) -> &Self {
        for _ in 0..count.max(1) {
            self.write_line("");
        }
        self
    }

    /// Print a horizontal rule, with `title` centered when non-empty
    pub fn rule(&self, title: &str) -> &Self {
        let line = render_rule(title, &self.glyphs, self.width());
        self.print_styled(&line, "dim")
    }

    /// Print a bordered panel
    pub fn panel(&self, panel: &Panel) -> &Self {
        let border = match panel.explicit_border_style() {
            Some(style) => style.to_string(),
            None if panel.body_style().is_empty() => String::new(),
            None => {
                let name = self.theme.variant_name(panel.body_style(), "pre");
                if name == panel.body_style() {
                    String::new()
                } else {
                    name.into_owned()
                }
            }
        };
        let paint = |text: &str, style: &str| self.paint(text, style);
        for line in panel.render_lines(&self.glyphs, self.width(), &border, &paint) {
            self.write_line(&line);
        }
        self
    }

    /// Print `text` upper-cased in a fitted panel
    pub fn title(&self, text: &str) -> &Self {
        let text = text.to_uppercase();
        self.panel(
            &Panel::new(text.trim())
                .expand(false)
                .style("title")
                .border_style("title"),
        )
    }

    /// Session start marker
    pub fn start(&self) -> &Self {
        self.br(1)
    }

    /// Session end marker
    pub fn end(&self) -> &Self {
        self.print(self.glyphs.session_end)
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.write_all(format!("{line}\n").as_bytes());
            let _ = out.flush();
        }
    }
}

impl Default for IoConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IoConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IoConsole")
            .field("enabled", &self.enabled)
            .field("glyphs", &self.glyphs)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

// ─────────────────────────────────────────────────────────
// Global Console Accessors
// ─────────────────────────────────────────────────────────

static CONSOLE: OnceLock<IoConsole> = OnceLock::new();
static LOG_CONSOLE: OnceLock<IoConsole> = OnceLock::new();

/// Get the global stdout console
#[must_use]
pub fn console() -> &'static IoConsole {
    CONSOLE.get_or_init(IoConsole::new)
}

/// Get the global stderr console used for log records
#[must_use]
pub fn log_console() -> &'static IoConsole {
    LOG_CONSOLE.get_or_init(|| IoConsole::stderr(&ConsoleConfig::from_env()))
}

/// Initialize the global consoles with specific settings.
/// Must be called before any output; returns error if already initialized
pub fn init_console(config: &ConsoleConfig) -> Result<(), &'static str> {
    CONSOLE
        .set(IoConsole::from_config(config))
        .map_err(|_| "Console already initialized")?;
    // The stderr console may already exist if something logged early
    let _ = LOG_CONSOLE.set(IoConsole::stderr(config));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestConsole;

    #[test]
    fn test_console_with_enabled_true() {
        let console = IoConsole::with_enabled(true);
        assert!(console.is_rich());
    }

    #[test]
    fn test_console_with_enabled_false() {
        let console = IoConsole::with_enabled(false);
        assert!(!console.is_rich());
    }

    #[test]
    fn test_paint_is_identity_when_plain() {
        let console = IoConsole::with_enabled(false);
        assert_eq!(console.paint("text", "err"), "text");
    }

    #[test]
    fn test_paint_styles_when_rich() {
        let console = IoConsole::with_writer(io::sink(), true);
        let painted = console.paint("text", "err");
        assert_ne!(painted, "text");
        assert_eq!(::console::strip_ansi_codes(&painted), "text");
    }

    #[test]
    fn test_width_override() {
        let console = IoConsole::with_writer(io::sink(), false).with_width(42);
        assert_eq!(console.width(), 42);
    }

    #[test]
    fn test_width_default_for_non_tty() {
        let console = IoConsole::with_writer(io::sink(), false);
        assert_eq!(console.width(), DEFAULT_WIDTH);
    }

    #[test]
    fn test_br_prints_at_least_one_line() {
        let tc = TestConsole::new();
        tc.console().br(0);
        assert_eq!(tc.output(), vec![String::new()]);
        tc.clear();
        tc.console().br(2);
        assert_eq!(tc.output().len(), 2);
    }

    #[test]
    fn test_end_marker_follows_glyphs() {
        let tc = TestConsole::with_glyphs(Glyphs::ascii());
        tc.console().end();
        assert_eq!(tc.output(), vec!["`"]);

        let tc = TestConsole::new();
        tc.console().end();
        assert_eq!(tc.output(), vec!["╰"]);
    }

    #[test]
    fn test_title_is_upper_cased_panel() {
        let tc = TestConsole::with_glyphs(Glyphs::ascii());
        tc.console().title("  abc ");
        assert_eq!(tc.output(), vec!["+-----+", "| ABC |", "+-----+"]);
    }

    #[test]
    fn test_rule_fills_width() {
        let tc = TestConsole::with_glyphs(Glyphs::ascii());
        tc.console().rule("");
        assert_eq!(tc.output(), vec!["-".repeat(DEFAULT_WIDTH)]);
    }

    #[test]
    fn test_chaining_returns_same_console() {
        let tc = TestConsole::new();
        let console = tc.console();
        let chained = console.print("a").newline().print("b");
        assert!(std::ptr::eq(console, chained));
        assert_eq!(tc.output(), vec!["a", "", "b"]);
    }
}
