use super::{INVALID_CHOICE, InputRequest, InputSource, Prompter, Sentinels, parse_index};
use crate::error::Result;

/// Options of a single-choice menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceOptions {
    /// Offer an EXIT row; choosing it returns `None`
    pub exitable: bool,
    /// Answer used when the user just presses Enter
    pub default: String,
}

impl ChoiceOptions {
    #[must_use]
    pub fn exitable(mut self, exitable: bool) -> Self {
        self.exitable = exitable;
        self
    }

    #[must_use]
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }
}

/// Position of the entry an answer selects: exact text first, then 1-based index.
pub fn resolve_choice<S: AsRef<str>>(choices: &[S], answer: &str) -> Option<usize> {
    choices
        .iter()
        .position(|c| c.as_ref() == answer)
        .or_else(|| parse_index(answer, choices.len()))
}

impl<I: InputSource> Prompter<'_, I> {
    /// Show a numbered menu and return the chosen entry.
    ///
    /// Returns `Ok(None)` only when `opts.exitable` is set and the exit word
    /// was entered. Anything unrecognized prints an error and asks again.
    pub fn get_choice<S: AsRef<str>>(
        &mut self,
        choices: &[S],
        opts: &ChoiceOptions,
    ) -> Result<Option<String>> {
        let console = self.console;
        let sentinels = Sentinels::for_choices(choices);
        let width = sentinels.exit.len().max(2);
        let request = InputRequest::new().default_value(opts.default.as_str());

        loop {
            for (index, item) in choices.iter().enumerate() {
                let key = self.menu_key(&(index + 1).to_string(), width);
                console.print(&format!("{key} {}", console.paint(item.as_ref(), "choice-item")));
            }
            if opts.exitable {
                console.print(&self.command_row(&sentinels.exit, "EXIT", width));
            }

            let answer = self.get_input(&request)?;
            let answer = answer.trim();

            if opts.exitable && answer == sentinels.exit {
                log::debug!(target: "consoleio::prompt", "choice menu exited");
                return Ok(None);
            }
            if let Some(index) = resolve_choice(choices, answer) {
                let chosen = choices[index].as_ref().to_string();
                log::debug!(target: "consoleio::prompt", "chose #{}: {}", index + 1, chosen);
                return Ok(Some(chosen));
            }
            console.err(INVALID_CHOICE);
        }
    }
}
