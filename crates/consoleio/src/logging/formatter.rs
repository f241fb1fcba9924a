//! Turns log events into echo lines.

use log::Level;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::console::IoConsole;
use crate::echo::{EchoOptions, LineKind};

/// A log record independent of the `log` and `tracing` front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub level: Level,
    pub message: String,
    pub target: String,
    pub timestamp: Option<String>,
    pub fields: Vec<(String, String)>,
}

impl LogEvent {
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            target: String::new(),
            timestamp: None,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }
}

/// Line kind and label a level is shown with.
pub fn level_line(level: Level) -> (LineKind, &'static str) {
    match level {
        Level::Error => (LineKind::Err, "error"),
        Level::Warn => (LineKind::Warn, "warning"),
        Level::Info => (LineKind::Info, "info"),
        Level::Debug => (LineKind::Muted, "debug"),
        Level::Trace => (LineKind::Muted, "trace"),
    }
}

/// Current UTC time as `HH:MM:SS`.
pub fn timestamp_now() -> Option<String> {
    let fmt = format_description!("[hour]:[minute]:[second]");
    OffsetDateTime::now_utc().format(fmt).ok()
}

/// Formats [`LogEvent`]s as `│ (Level) [time] target: message key=value`.
#[derive(Debug, Clone, Copy)]
pub struct LogFormatter {
    show_timestamps: bool,
    show_targets: bool,
}

impl Default for LogFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            show_timestamps: true,
            show_targets: true,
        }
    }

    #[must_use]
    pub fn with_timestamps(mut self, show: bool) -> Self {
        self.show_timestamps = show;
        self
    }

    #[must_use]
    pub fn with_targets(mut self, show: bool) -> Self {
        self.show_targets = show;
        self
    }

    pub fn shows_timestamps(&self) -> bool {
        self.show_timestamps
    }

    /// Message text after the level label
    pub fn body(&self, event: &LogEvent) -> String {
        let mut parts = Vec::with_capacity(3 + event.fields.len());
        if self.show_timestamps {
            if let Some(ts) = &event.timestamp {
                parts.push(format!("[{ts}]"));
            }
        }
        let target = short_target(&event.target);
        if self.show_targets && !target.is_empty() {
            parts.push(format!("{target}:"));
        }
        parts.push(event.message.clone());
        parts.extend(event.fields.iter().map(|(k, v)| format!("{k}={v}")));
        parts.join(" ")
    }

    /// Full styled line for `console`
    pub fn format_line(&self, console: &IoConsole, event: &LogEvent) -> String {
        let (kind, label) = level_line(event.level);
        let opts: EchoOptions = kind.options().pre(label);
        console.compose_echo(&self.body(event), &opts)
    }
}

fn short_target(target: &str) -> &str {
    target.strip_prefix("consoleio::").unwrap_or(target)
}
