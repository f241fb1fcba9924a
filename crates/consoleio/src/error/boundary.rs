//! ErrorBoundary wrapper for automatic error display.
//!
//! The [`ErrorBoundary`] type wraps operations and reports failures as
//! `(Error)` lines on the console, so call sites do not each format errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use consoleio::error::ErrorBoundary;
//! use consoleio::{console, read_file};
//!
//! let boundary = ErrorBoundary::new(console());
//!
//! // Simple usage - returns Option<T>
//! let text = boundary.wrap(read_file("notes.txt"));
//!
//! // With context message
//! let text = boundary.wrap_with_context(read_file("notes.txt"), "Loading notes");
//!
//! if boundary.has_errors() {
//!     eprintln!("Encountered {} errors", boundary.error_count());
//! }
//! ```

use std::fmt::Display;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::console::IoConsole;

/// Wraps operations and displays errors on failure.
///
/// # Thread Safety
///
/// The error count is tracked with atomics, so a boundary can be shared.
///
/// # Exit on Error
///
/// For CLI applications, [`with_exit_on_error`](ErrorBoundary::with_exit_on_error)
/// makes the first error terminate the process with exit code 1.
pub struct ErrorBoundary<'a> {
    console: &'a IoConsole,
    exit_on_error: bool,
    error_count: AtomicUsize,
}

impl<'a> ErrorBoundary<'a> {
    /// Creates a new `ErrorBoundary` reporting on the given console.
    #[must_use]
    pub fn new(console: &'a IoConsole) -> Self {
        Self {
            console,
            exit_on_error: false,
            error_count: AtomicUsize::new(0),
        }
    }

    /// Configures the boundary to exit the process on error.
    #[must_use]
    pub fn with_exit_on_error(mut self, exit: bool) -> Self {
        self.exit_on_error = exit;
        self
    }

    /// Wraps a `Result`, displaying the error if `Err`.
    ///
    /// Returns `Some(value)` on success, or `None` on error.
    pub fn wrap<T, E: Display>(&self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.handle_error(&e);
                None
            }
        }
    }

    /// Wraps a `Result` with a context line shown before the error.
    pub fn wrap_with_context<T, E: Display>(&self, result: Result<T, E>, context: &str) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.console.mute(&format!("Context: {context}"));
                self.handle_error(&e);
                None
            }
        }
    }

    /// Wraps a `Result`, displaying and then returning the error.
    pub fn wrap_result<T, E: Display>(&self, result: Result<T, E>) -> Result<T, E> {
        if let Err(e) = &result {
            self.handle_error(e);
        }
        result
    }

    /// Displays an error directly without wrapping a `Result`.
    pub fn display_error(&self, error: &dyn Display) {
        self.handle_error(error);
    }

    /// Gets the total number of errors that have occurred.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Checks if any errors have occurred.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Resets the error count to zero.
    pub fn reset_count(&self) {
        self.error_count.store(0, Ordering::Relaxed);
    }

    fn handle_error(&self, error: &dyn Display) {
        self.error_count.fetch_add(1, Ordering::Relaxed);
        log::debug!(target: "consoleio::error", "reporting error: {error}");
        self.console.err(&error.to_string());

        if self.exit_on_error {
            std::process::exit(1);
        }
    }
}

/// Convenience macro for trying an operation with error display.
///
/// If the operation fails, the error is displayed and the macro returns
/// early from the current function.
///
/// ```rust,ignore
/// fn show(boundary: &ErrorBoundary) {
///     let text = try_display!(boundary, read_file("a.txt"));
///     let other = try_display!(boundary, read_file("b.txt"), "Reading b.txt");
/// }
/// ```
#[macro_export]
macro_rules! try_display {
    ($boundary:expr, $expr:expr) => {
        match $boundary.wrap($expr) {
            Some(v) => v,
            None => return,
        }
    };
    ($boundary:expr, $expr:expr, $ctx:expr) => {
        match $boundary.wrap_with_context($expr, $ctx) {
            Some(v) => v,
            None => return,
        }
    };
}
