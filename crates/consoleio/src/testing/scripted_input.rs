//! Pre-recorded input lines for driving prompts in tests.

use std::collections::VecDeque;
use std::io;

use crate::prompt::InputSource;

/// An [`InputSource`] that replays a fixed list of lines, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    consumed: usize,
}

impl ScriptedInput {
    /// Replay `lines` in order.
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            consumed: 0,
        }
    }

    /// Build from newline-separated text, like a piped stdin.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// Number of lines read so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of lines not read yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let line = self.lines.pop_front();
        if line.is_some() {
            self.consumed += 1;
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order_then_ends() {
        let mut input = ScriptedInput::new(["a", "b"]);
        assert_eq!(input.read_line().unwrap().as_deref(), Some("a"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("b"));
        assert_eq!(input.read_line().unwrap(), None);
        assert_eq!(input.consumed(), 2);
    }

    #[test]
    fn test_from_text_splits_lines() {
        let input = ScriptedInput::from_text("1\n0\n");
        assert_eq!(input.remaining(), 2);
    }
}
