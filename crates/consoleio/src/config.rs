//! Centralized configuration for consoleio output.
//!
//! `ConsoleConfig` is the single place where display mode, glyph set and
//! logging options are decided, either programmatically through the builder
//! methods or from environment variables.

use crate::detection::DisplayContext;
use crate::render::Glyphs;
use std::env;

/// Configuration for a [`IoConsole`](crate::console::IoConsole) and its logger
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    // Display mode
    /// Override display context (None = auto-detect)
    pub context: Option<DisplayContext>,
    /// Force styled output even in non-TTY
    pub force_color: Option<bool>,
    /// Force plain text mode (no styling)
    pub force_plain: bool,
    /// Draw bars, boxes and marks with ASCII characters only
    pub ascii: bool,
    /// Fixed output width (None = terminal width)
    pub width: Option<usize>,

    // Logging
    /// Log level filter
    pub log_level: Option<log::Level>,
    /// Show timestamps in logs
    pub log_timestamps: bool,
    /// Show target module in logs
    pub log_targets: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            context: None,
            force_color: None,
            force_plain: false,
            ascii: false,
            width: None,
            log_level: None,
            log_timestamps: true,
            log_targets: true,
        }
    }
}

impl ConsoleConfig {
    /// Create config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config from environment variables
    ///
    /// # Environment Variables
    ///
    /// | Variable | Values | Description |
    /// |----------|--------|-------------|
    /// | `CONSOLEIO_FORCE_COLOR` | (set) | Force styled output |
    /// | `CONSOLEIO_PLAIN` | (set) | Force plain output |
    /// | `NO_COLOR` | (set) | Disable colors (standard) |
    /// | `CONSOLEIO_ASCII` | 0/1 | ASCII-only glyphs |
    /// | `CONSOLEIO_LOG` | trace/debug/info/warn/error | Log level |
    /// | `CONSOLEIO_LOG_TIMESTAMPS` | 0/1 | Show timestamps |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if env::var("CONSOLEIO_FORCE_COLOR").is_ok() {
            config.force_color = Some(true);
        }
        if env::var("CONSOLEIO_PLAIN").is_ok() || env::var("NO_COLOR").is_ok() {
            config.force_plain = true;
        }

        if let Ok(val) = env::var("CONSOLEIO_ASCII") {
            config.ascii = parse_flag(&val);
        }

        if let Ok(level) = env::var("CONSOLEIO_LOG") {
            config.log_level = parse_level(&level);
        }
        if env::var("CONSOLEIO_LOG_TIMESTAMPS")
            .map(|v| !parse_flag(&v))
            .unwrap_or(false)
        {
            config.log_timestamps = false;
        }

        config
    }

    // ─────────────────────────────────────────────────
    // Builder Methods
    // ─────────────────────────────────────────────────

    /// Force styled output
    #[must_use]
    pub fn force_color(mut self, force: bool) -> Self {
        self.force_color = Some(force);
        self
    }

    /// Enable plain text mode (no styling)
    #[must_use]
    pub fn plain_mode(mut self) -> Self {
        self.force_plain = true;
        self
    }

    /// Use ASCII glyphs instead of box-drawing characters
    #[must_use]
    pub fn ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }

    /// Use a fixed output width
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the log level
    #[must_use]
    pub fn with_log_level(mut self, level: log::Level) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Toggle log timestamps
    #[must_use]
    pub fn with_log_timestamps(mut self, show: bool) -> Self {
        self.log_timestamps = show;
        self
    }

    /// Set display context explicitly
    #[must_use]
    pub fn with_context(mut self, context: DisplayContext) -> Self {
        self.context = Some(context);
        self
    }

    // ─────────────────────────────────────────────────
    // Resolution Methods
    // ─────────────────────────────────────────────────

    /// Resolve the display context based on config and environment
    #[must_use]
    pub fn resolve_context(&self) -> DisplayContext {
        if self.force_plain {
            return DisplayContext::new_agent();
        }
        if let Some(true) = self.force_color {
            return DisplayContext::new_human();
        }
        self.context.unwrap_or_else(DisplayContext::detect)
    }

    /// Check if styled output should be used based on resolved context
    #[must_use]
    pub fn should_use_rich(&self) -> bool {
        self.resolve_context().is_human()
    }

    /// Glyph set selected by the `ascii` flag
    #[must_use]
    pub fn glyphs(&self) -> Glyphs {
        if self.ascii {
            Glyphs::ascii()
        } else {
            Glyphs::unicode()
        }
    }
}

fn parse_flag(val: &str) -> bool {
    !matches!(val.to_lowercase().as_str(), "" | "0" | "false" | "no" | "off")
}

/// Parse a log level name as accepted by `CONSOLEIO_LOG` and `--log-level`.
#[must_use]
pub fn parse_level(level: &str) -> Option<log::Level> {
    match level.to_lowercase().as_str() {
        "trace" => Some(log::Level::Trace),
        "debug" => Some(log::Level::Debug),
        "info" => Some(log::Level::Info),
        "warn" | "warning" => Some(log::Level::Warn),
        "error" => Some(log::Level::Error),
        _ => None,
    }
}
