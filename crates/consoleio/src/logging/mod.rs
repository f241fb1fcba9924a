//! Log output rendered as console echo lines.
//!
//! - [`LogFormatter`] turns a [`LogEvent`] into `│ (Level) target: message`
//! - [`ConsoleLogger`] is a `log` crate backend
//! - [`ConsoleSubscriberBuilder`] installs a `tracing` subscriber
//!
//! Both backends write to the stderr console so log lines never mix with
//! prompt output on stdout.
//!
//! ```ignore
//! use consoleio::logging::ConsoleLoggerBuilder;
//!
//! ConsoleLoggerBuilder::from_config(&consoleio::ConsoleConfig::from_env()).try_init();
//! log::info!("ready");
//! ```

mod formatter;
mod logger;
mod subscriber;

pub use formatter::{LogEvent, LogFormatter, level_line, timestamp_now};
pub use logger::{ConsoleLogger, ConsoleLoggerBuilder};
pub use subscriber::{ConsoleLayer, ConsoleSubscriberBuilder};
