//! `log` facade backend writing echo lines to stderr.
//!
//! ```ignore
//! use consoleio::logging::ConsoleLogger;
//! use log::Level;
//!
//! ConsoleLogger::init(Level::Info)?;
//!
//! ConsoleLogger::builder()
//!     .level(Level::Debug)
//!     .with_timestamps(false)
//!     .init()?;
//! ```

use log::{Level, LevelFilter, Log, Metadata, Record};

use super::{LogEvent, LogFormatter, timestamp_now};
use crate::config::ConsoleConfig;
use crate::console::{IoConsole, log_console};

/// Logger that prints records as `│ (Level) …` lines.
pub struct ConsoleLogger {
    console: &'static IoConsole,
    formatter: LogFormatter,
    max_level: LevelFilter,
}

impl ConsoleLogger {
    /// Logger on the global stderr console.
    #[must_use]
    pub fn new(min_level: Level) -> Self {
        Self {
            console: log_console(),
            formatter: LogFormatter::new(),
            max_level: min_level.to_level_filter(),
        }
    }

    #[must_use]
    pub fn builder() -> ConsoleLoggerBuilder {
        ConsoleLoggerBuilder::new()
    }

    /// Install as the global logger.
    ///
    /// Returns an error if a logger has already been set.
    pub fn init(min_level: Level) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(min_level)))?;
        log::set_max_level(min_level.to_level_filter());
        Ok(())
    }

    /// Install as the global logger, ignoring errors if already set.
    pub fn try_init(min_level: Level) {
        let _ = Self::init(min_level);
    }

    fn record_to_event(&self, record: &Record) -> LogEvent {
        let mut event = LogEvent::new(record.level(), record.args().to_string())
            .with_target(record.target());
        if self.formatter.shows_timestamps() {
            if let Some(ts) = timestamp_now() {
                event = event.with_timestamp(ts);
            }
        }
        event
    }
}

/// Builder for [`ConsoleLogger`].
#[derive(Debug)]
pub struct ConsoleLoggerBuilder {
    max_level: LevelFilter,
    show_timestamps: bool,
    show_targets: bool,
    console: Option<&'static IoConsole>,
}

impl Default for ConsoleLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_level: LevelFilter::Info,
            show_timestamps: true,
            show_targets: true,
            console: None,
        }
    }

    /// Level, timestamp and target settings from `config`.
    #[must_use]
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            max_level: config.log_level.unwrap_or(Level::Info).to_level_filter(),
            show_timestamps: config.log_timestamps,
            show_targets: config.log_targets,
            console: None,
        }
    }

    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.max_level = level.to_level_filter();
        self
    }

    /// `LevelFilter::Off` disables every record.
    #[must_use]
    pub fn level_filter(mut self, filter: LevelFilter) -> Self {
        self.max_level = filter;
        self
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

    /// Write to `console` instead of the global stderr console.
    #[must_use]
    pub fn with_console(mut self, console: &'static IoConsole) -> Self {
        self.console = Some(console);
        self
    }

    /// Build the logger without installing it.
    #[must_use]
    pub fn build(self) -> ConsoleLogger {
        ConsoleLogger {
            console: self.console.unwrap_or_else(log_console),
            formatter: LogFormatter::new()
                .with_timestamps(self.show_timestamps)
                .with_targets(self.show_targets),
            max_level: self.max_level,
        }
    }

    /// Build and install as the global logger.
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let filter = self.max_level;
        log::set_boxed_logger(Box::new(self.build()))?;
        log::set_max_level(filter);
        Ok(())
    }

    /// Build and install, ignoring errors if already set.
    pub fn try_init(self) {
        let _ = self.init();
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let event = self.record_to_event(record);
        self.console
            .print(&self.formatter.format_line(self.console, &event));
    }

    fn flush(&self) {}
}
