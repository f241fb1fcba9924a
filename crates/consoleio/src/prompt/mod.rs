//! Interactive prompts: free-text input, single-choice and multi-choice menus.
//!
//! A [`Prompter`] pairs a console with a line-based [`InputSource`]. Every
//! prompt blocks until a line arrives. Invalid answers are reported on the
//! console and asked again; only I/O failure or end of input is returned as
//! an error.
//!
//! ```ignore
//! use consoleio::prompt::{ChoiceOptions, Prompter};
//!
//! let mut prompter = Prompter::stdin(consoleio::console());
//! let fruit = prompter.get_choice(&["Apple", "Banana"], &ChoiceOptions::default())?;
//! ```

mod choice;
mod choices;
mod input;

pub use choice::{ChoiceOptions, resolve_choice};
pub use choices::{MultiOptions, Selection};
pub use input::{InputRequest, PAUSE_MESSAGE};

use std::io::{self, BufRead};

use crate::console::IoConsole;
use crate::error::{ConsoleIoError, Result};

/// Message shown for an answer that matches nothing.
pub const INVALID_CHOICE: &str = "Please enter a valid choice.";

/// Source of answer lines.
pub trait InputSource {
    /// Next line without its line terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}

/// Reads answers from the process's standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Words that stand for menu commands instead of entries.
///
/// A default word is replaced by a spelled-out one when it collides with an
/// entry, so `"0"` can still be chosen in `["0", "1"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentinels {
    pub exit: String,
    pub done: String,
    pub all: String,
}

impl Sentinels {
    pub fn for_choices<S: AsRef<str>>(choices: &[S]) -> Self {
        let has = |word: &str| choices.iter().any(|c| c.as_ref() == word);
        let zero_taken = has("0");
        Self {
            exit: if zero_taken { "exit" } else { "0" }.to_string(),
            done: if zero_taken { "done" } else { "0" }.to_string(),
            all: if has("a") { "all" } else { "a" }.to_string(),
        }
    }

    /// Column width of menu keys: the longest sentinel, at least 2.
    pub fn key_width(&self) -> usize {
        [self.exit.len(), self.done.len(), self.all.len(), 2]
            .into_iter()
            .max()
            .unwrap_or(2)
    }
}

/// Runs prompts against a console and an input source.
pub struct Prompter<'c, I: InputSource> {
    console: &'c IoConsole,
    input: I,
}

impl<'c> Prompter<'c, StdinInput> {
    /// Prompt on `console`, reading answers from stdin.
    #[must_use]
    pub fn stdin(console: &'c IoConsole) -> Self {
        Self::new(console, StdinInput)
    }
}

impl<'c, I: InputSource> Prompter<'c, I> {
    #[must_use]
    pub fn new(console: &'c IoConsole, input: I) -> Self {
        Self { console, input }
    }

    /// The console prompts are written to
    pub fn console(&self) -> &'c IoConsole {
        self.console
    }

    /// Give back the input source
    pub fn into_input(self) -> I {
        self.input
    }

    /// One raw line, or `InputClosed` at end of input
    fn next_line(&mut self) -> Result<String> {
        match self.input.read_line()? {
            Some(line) => Ok(line),
            None => {
                log::debug!(target: "consoleio::prompt", "input closed while waiting for an answer");
                Err(ConsoleIoError::InputClosed)
            }
        }
    }

    /// `│  1) ` style menu key
    fn menu_key(&self, key: &str, width: usize) -> String {
        let console = self.console;
        format!(
            "{} {}{}",
            console.glyphs().bar,
            console.paint(&format!("{key:>width$}"), "choice-i"),
            console.paint(")", "dim")
        )
    }

    /// `│  0) ── EXIT ──` style command row
    fn command_row(&self, key: &str, label: &str, width: usize) -> String {
        let console = self.console;
        let deco = console.paint(console.glyphs().deco, "dim");
        format!(
            "{} {deco} {} {deco}",
            self.menu_key(key, width),
            console.paint(label, "choice-cmd")
        )
    }
}

/// Parse a 1-based menu index; only plain ASCII digits count.
pub(crate) fn parse_index(input: &str, len: usize) -> Option<usize> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: usize = input.parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_default() {
        let s = Sentinels::for_choices(&["Apple", "Banana"]);
        assert_eq!(s.exit, "0");
        assert_eq!(s.done, "0");
        assert_eq!(s.all, "a");
        assert_eq!(s.key_width(), 2);
    }

    #[test]
    fn test_sentinels_remapped_on_collision() {
        let s = Sentinels::for_choices(&["0", "a", "b"]);
        assert_eq!(s.exit, "exit");
        assert_eq!(s.done, "done");
        assert_eq!(s.all, "all");
        assert_eq!(s.key_width(), 4);
    }

    #[test]
    fn test_sentinels_only_zero_taken() {
        let s = Sentinels::for_choices(&["0"]);
        assert_eq!(s.exit, "exit");
        assert_eq!(s.all, "a");
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("1", 2), Some(0));
        assert_eq!(parse_index("2", 2), Some(1));
        assert_eq!(parse_index("0", 2), None);
        assert_eq!(parse_index("3", 2), None);
        assert_eq!(parse_index("-1", 2), None);
        assert_eq!(parse_index("+1", 2), None);
        assert_eq!(parse_index("", 2), None);
        assert_eq!(parse_index("1.0", 2), None);
        assert_eq!(parse_index("99999999999999999999999", 2), None);
    }
}
