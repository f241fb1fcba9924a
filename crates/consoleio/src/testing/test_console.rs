//! TestConsole for capturing output in tests
//!
//! Provides a console that captures all output for assertion instead of writing to stdout.

use crate::console::IoConsole;
use crate::render::Glyphs;
use std::io::Write;
use std::sync::{Arc, Mutex};
use strip_ansi_escapes::strip;

/// A console that captures output for testing
///
/// Wraps an [`IoConsole`] with a buffer writer. Use `console()` to get the
/// inner console, then `output()`, `contains()` and the assertion methods to
/// verify what was written.
pub struct TestConsole {
    inner: Arc<IoConsole>,
    buffer: Arc<Mutex<TestBuffer>>,
    /// Whether this console reports as rich (for is_rich() method)
    report_as_rich: bool,
}

#[derive(Debug, Default)]
struct TestBuffer {
    /// Everything written, ANSI codes stripped
    text: String,
    /// Everything written, ANSI codes preserved
    raw: String,
}

impl TestConsole {
    /// Create a new test console that captures output
    ///
    /// Note: Internally styling is on so that style handling is exercised.
    /// ANSI codes are stripped when reading via `output()` and `text()`.
    #[must_use]
    pub fn new() -> Self {
        Self::new_inner(false, Glyphs::unicode())
    }

    /// Create a test console that reports itself as rich
    #[must_use]
    pub fn new_rich() -> Self {
        Self::new_inner(true, Glyphs::unicode())
    }

    /// Create a test console drawing with the given glyph set
    #[must_use]
    pub fn with_glyphs(glyphs: Glyphs) -> Self {
        Self::new_inner(false, glyphs)
    }

    fn new_inner(report_as_rich: bool, glyphs: Glyphs) -> Self {
        let buffer = Arc::new(Mutex::new(TestBuffer::default()));
        let writer = BufferWriter(buffer.clone());

        Self {
            inner: Arc::new(IoConsole::with_writer(writer, true).with_glyphs(glyphs)),
            buffer,
            report_as_rich,
        }
    }

    /// Get the underlying console for passing to renderers and prompts
    #[must_use]
    pub fn console(&self) -> &IoConsole {
        &self.inner
    }

    /// Shared handle to the underlying console
    #[must_use]
    pub fn shared(&self) -> Arc<IoConsole> {
        self.inner.clone()
    }

    /// Everything written so far (ANSI codes stripped), including any
    /// trailing partial line such as an unanswered prompt
    #[must_use]
    pub fn text(&self) -> String {
        self.buffer
            .lock()
            .map(|b| b.text.clone())
            .unwrap_or_default()
    }

    /// Everything written so far (with ANSI codes)
    #[must_use]
    pub fn raw_text(&self) -> String {
        self.buffer
            .lock()
            .map(|b| b.raw.clone())
            .unwrap_or_default()
    }

    /// Captured output split into lines (ANSI codes stripped)
    #[must_use]
    pub fn output(&self) -> Vec<String> {
        self.text().lines().map(String::from).collect()
    }

    /// Get output as a single string
    #[must_use]
    pub fn output_string(&self) -> String {
        self.output().join("\n")
    }

    /// Check if output contains a string (case-insensitive)
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        let output = self.output_string().to_lowercase();
        output.contains(&needle.to_lowercase())
    }

    /// Check if output contains all of the given strings
    #[must_use]
    pub fn contains_all(&self, needles: &[&str]) -> bool {
        needles.iter().all(|n| self.contains(n))
    }

    /// Count non-overlapping occurrences of `needle` (case-sensitive)
    #[must_use]
    pub fn count(&self, needle: &str) -> usize {
        self.text().matches(needle).count()
    }

    /// Check if output matches a regex pattern
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        match regex::Regex::new(pattern) {
            Ok(re) => re.is_match(&self.output_string()),
            Err(_) => false,
        }
    }

    /// Assert that output contains a string
    ///
    /// # Panics
    ///
    /// Panics if the output does not contain the needle string.
    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.contains(needle),
            "Output did not contain '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert that output does NOT contain a string
    ///
    /// # Panics
    ///
    /// Panics if the output contains the needle string.
    pub fn assert_not_contains(&self, needle: &str) {
        assert!(
            !self.contains(needle),
            "Output unexpectedly contained '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert output has specific number of lines
    ///
    /// # Panics
    ///
    /// Panics if the line count doesn't match expected.
    pub fn assert_line_count(&self, expected: usize) {
        let actual = self.output().len();
        assert_eq!(
            actual, expected,
            "Expected {} lines but got {}. Actual output:\n{}",
            expected, actual, self.output_string()
        );
    }

    /// Clear the buffer
    pub fn clear(&self) {
        if let Ok(mut buf) = self.buffer.lock() {
            buf.text.clear();
            buf.raw.clear();
        }
    }

    /// Print output for debugging (in tests)
    pub fn debug_print(&self) {
        eprintln!("=== TestConsole Output ===");
        for (i, line) in self.output().iter().enumerate() {
            eprintln!("{:3}: {}", i + 1, line);
        }
        eprintln!("==========================");
    }

    /// Check if the console reports as rich mode
    ///
    /// Note: The internal console always styles its output,
    /// this returns the mode the TestConsole was created with.
    #[must_use]
    pub fn is_rich(&self) -> bool {
        self.report_as_rich
    }
}

impl Default for TestConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TestConsole {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            buffer: self.buffer.clone(),
            report_as_rich: self.report_as_rich,
        }
    }
}

impl std::fmt::Debug for TestConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestConsole")
            .field("is_rich", &self.is_rich())
            .field("line_count", &self.output().len())
            .finish()
    }
}

/// Writer that captures to a buffer
struct BufferWriter(Arc<Mutex<TestBuffer>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut buffer) = self.0.lock() {
            buffer.raw.push_str(&String::from_utf8_lossy(buf));
            let stripped = strip(buf);
            buffer.text.push_str(&String::from_utf8_lossy(&stripped));
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_plain_console() {
        let tc = TestConsole::new();
        assert!(!tc.is_rich());
    }

    #[test]
    fn test_new_rich_creates_rich_console() {
        let tc = TestConsole::new_rich();
        assert!(tc.is_rich());
    }

    #[test]
    fn test_output_capture() {
        let tc = TestConsole::new();
        tc.console().print("Hello, world!");
        assert!(tc.contains("Hello"));
        assert!(tc.contains("world"));
    }

    #[test]
    fn test_styled_output_is_stripped() {
        let tc = TestConsole::new();
        tc.console().print_styled("alert", "err");
        assert_eq!(tc.output(), vec!["alert"]);
        assert!(tc.raw_text().contains('\x1b'));
    }

    #[test]
    fn test_contains_case_insensitive() {
        let tc = TestConsole::new();
        tc.console().print("Hello World");
        assert!(tc.contains("hello"));
        assert!(tc.contains("WORLD"));
    }

    #[test]
    fn test_contains_all() {
        let tc = TestConsole::new();
        tc.console().print("The quick brown fox");
        assert!(tc.contains_all(&["quick", "brown", "fox"]));
        assert!(!tc.contains_all(&["quick", "lazy"]));
    }

    #[test]
    fn test_partial_line_is_kept() {
        let tc = TestConsole::new();
        tc.console().print("menu").print_inline("> ");
        assert_eq!(tc.text(), "menu\n> ");
        assert_eq!(tc.output(), vec!["menu", "> "]);
    }

    #[test]
    fn test_count() {
        let tc = TestConsole::new();
        tc.console().print("again").print("again");
        assert_eq!(tc.count("again"), 2);
    }

    #[test]
    fn test_clear() {
        let tc = TestConsole::new();
        tc.console().print("Some output");
        assert!(!tc.output().is_empty());
        tc.clear();
        assert!(tc.output().is_empty());
    }

    #[test]
    fn test_matches_regex() {
        let tc = TestConsole::new();
        tc.console().print("Error code: 42");
        assert!(tc.matches(r"code: \d+"));
        assert!(!tc.matches(r"code: [a-z]+"));
    }

    #[test]
    fn test_clone_shares_buffer() {
        let tc = TestConsole::new();
        tc.console().print("Test");
        let tc2 = tc.clone();
        assert!(tc2.contains("Test"));
    }
}
