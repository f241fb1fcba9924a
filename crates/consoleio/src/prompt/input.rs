use super::{InputSource, Prompter};
use crate::error::Result;

/// Parameters of a free-text prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRequest {
    /// Shown as a `(?)` line before the prompt when non-empty
    pub question: String,
    /// Written before the cursor
    pub prompt: String,
    /// Returned when the answer is empty
    pub default: String,
    /// Trim surrounding whitespace from the answer
    pub strip: bool,
}

impl Default for InputRequest {
    fn default() -> Self {
        Self {
            question: String::new(),
            prompt: "> ".to_string(),
            default: String::new(),
            strip: true,
        }
    }
}

impl InputRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    #[must_use]
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    #[must_use]
    pub fn strip(mut self, strip: bool) -> Self {
        self.strip = strip;
        self
    }
}

impl<I: InputSource> Prompter<'_, I> {
    /// Ask for one line of free text.
    ///
    /// An answer that is empty after trimming yields `request.default`.
    pub fn get_input(&mut self, request: &InputRequest) -> Result<String> {
        let console = self.console;
        if !request.question.is_empty() {
            console.ask(&request.question);
        }

        let mut prompt = request.prompt.clone();
        if !request.default.is_empty() {
            prompt.push_str(&console.paint(&format!("({}) ", request.default), "dim"));
        }
        console.print_inline(&prompt);

        let line = self.next_line()?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !request.default.is_empty() {
                console.newline();
            }
            return Ok(request.default.clone());
        }
        Ok(if request.strip { trimmed.to_string() } else { line })
    }

    /// Ask `question` with the default `> ` prompt.
    pub fn ask_line(&mut self, question: &str) -> Result<String> {
        self.get_input(&InputRequest::new().question(question))
    }

    /// Show `msg` and wait for Enter. Returns whatever was typed.
    pub fn pause(&mut self, msg: &str) -> Result<String> {
        let console = self.console;
        console.print_inline(&console.paint(msg, "pause"));
        let line = self.next_line()?;
        console.newline();
        Ok(line)
    }
}

/// Default message of [`Prompter::pause`].
pub const PAUSE_MESSAGE: &str = "Press [Enter] to Continue...";
