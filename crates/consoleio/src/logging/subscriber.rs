//! `tracing` integration: a layer that prints events as echo lines.

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use super::{LogEvent, LogFormatter, timestamp_now};
use crate::console::{IoConsole, log_console};

/// A tracing layer that renders events through [`LogFormatter`].
pub struct ConsoleLayer {
    formatter: LogFormatter,
    console: &'static IoConsole,
}

impl ConsoleLayer {
    /// Layer on the global stderr console.
    #[must_use]
    pub fn new(formatter: LogFormatter) -> Self {
        Self::with_console(formatter, log_console())
    }

    #[must_use]
    pub fn with_console(formatter: LogFormatter, console: &'static IoConsole) -> Self {
        Self { formatter, console }
    }
}

#[derive(Default)]
struct FieldCollector {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl FieldCollector {
    fn record_value(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            if self.message.is_none() {
                self.message = Some(value);
            }
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_value(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record_value(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_value(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record_value(field, value.to_string());
    }
}

fn to_log_level(level: tracing::Level) -> log::Level {
    match level {
        tracing::Level::ERROR => log::Level::Error,
        tracing::Level::WARN => log::Level::Warn,
        tracing::Level::INFO => log::Level::Info,
        tracing::Level::DEBUG => log::Level::Debug,
        tracing::Level::TRACE => log::Level::Trace,
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut collector = FieldCollector::default();
        event.record(&mut collector);

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                collector.fields.push(("span".to_string(), spans.join("::")));
            }
        }

        let message = collector
            .message
            .unwrap_or_else(|| metadata.name().to_string());
        let mut log_event =
            LogEvent::new(to_log_level(*metadata.level()), message).with_target(metadata.target());
        if self.formatter.shows_timestamps() {
            if let Some(ts) = timestamp_now() {
                log_event = log_event.with_timestamp(ts);
            }
        }
        for (key, value) in collector.fields {
            log_event = log_event.with_field(key, value);
        }

        self.console
            .print(&self.formatter.format_line(self.console, &log_event));
    }
}

/// Builder for a registry with a [`ConsoleLayer`] on top.
#[derive(Debug)]
pub struct ConsoleSubscriberBuilder {
    show_timestamps: bool,
    show_targets: bool,
    level_filter: LevelFilter,
    console: Option<&'static IoConsole>,
}

impl Default for ConsoleSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSubscriberBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            show_timestamps: true,
            show_targets: true,
            level_filter: LevelFilter::INFO,
            console: None,
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

    #[must_use]
    pub fn with_level_filter(mut self, filter: LevelFilter) -> Self {
        self.level_filter = filter;
        self
    }

    /// Write to `console` instead of the global stderr console.
    #[must_use]
    pub fn with_console(mut self, console: &'static IoConsole) -> Self {
        self.console = Some(console);
        self
    }

    /// Build the subscriber without installing it.
    #[must_use]
    pub fn build(self) -> impl Subscriber + Send + Sync {
        let formatter = LogFormatter::new()
            .with_timestamps(self.show_timestamps)
            .with_targets(self.show_targets);
        let layer = ConsoleLayer::with_console(formatter, self.console.unwrap_or_else(log_console));

        tracing_subscriber::registry()
            .with(self.level_filter)
            .with(layer)
    }

    /// Build and install as the global subscriber.
    pub fn init(self) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
        tracing::subscriber::set_global_default(self.build())
    }
}
