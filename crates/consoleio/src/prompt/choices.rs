use super::{INVALID_CHOICE, InputRequest, InputSource, Prompter, Sentinels, resolve_choice};
use crate::error::Result;

/// Options of a multi-choice menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiOptions {
    /// Offer an ALL row toggling every entry at once
    pub allable: bool,
    /// Allow finishing with nothing selected
    pub exitable: bool,
}

impl MultiOptions {
    #[must_use]
    pub fn allable(mut self, allable: bool) -> Self {
        self.allable = allable;
        self
    }

    #[must_use]
    pub fn exitable(mut self, exitable: bool) -> Self {
        self.exitable = exitable;
        self
    }
}

/// Entries picked so far, in the order they were toggled on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<String>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `item` if present, otherwise append it.
    pub fn toggle(&mut self, item: &str) {
        match self.items.iter().position(|s| s == item) {
            Some(pos) => {
                self.items.remove(pos);
            }
            None => self.items.push(item.to_string()),
        }
    }

    /// Clear when everything is selected, otherwise select all in list order.
    pub fn toggle_all<S: AsRef<str>>(&mut self, choices: &[S]) {
        if self.items.len() == choices.len() {
            self.items.clear();
        } else {
            self.items = choices.iter().map(|c| c.as_ref().to_string()).collect();
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|s| s == item)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<I: InputSource> Prompter<'_, I> {
    /// Show a checklist and let the user toggle entries until done.
    ///
    /// The done word (or an empty answer) finishes once something is
    /// selected; with `opts.exitable` it also finishes on an empty selection.
    pub fn get_choices<S: AsRef<str>>(
        &mut self,
        choices: &[S],
        opts: MultiOptions,
    ) -> Result<Vec<String>> {
        let console = self.console;
        let sentinels = Sentinels::for_choices(choices);
        let width = sentinels.key_width();
        let request = InputRequest::new();
        let mut selection = Selection::new();

        loop {
            if opts.allable {
                console.print(&self.command_row(&sentinels.all, "ALL", width));
            }
            for (index, item) in choices.iter().enumerate() {
                let item = item.as_ref();
                let key = self.menu_key(&(index + 1).to_string(), width);
                let mark = self.check_mark(selection.contains(item));
                console.print(&format!("{key} {mark} {}", console.paint(item, "choice-item")));
            }
            if !selection.is_empty() {
                console.print(&self.command_row(&sentinels.done, "DONE", width));
            } else if opts.exitable {
                console.print(&self.command_row(&sentinels.exit, "EXIT", width));
            }

            let answer = self.get_input(&request)?;
            let answer = answer.trim();

            if answer.is_empty() || answer == sentinels.done || answer == sentinels.exit {
                if opts.exitable || !selection.is_empty() {
                    log::debug!(
                        target: "consoleio::prompt",
                        "checklist finished with {} of {} selected",
                        selection.len(),
                        choices.len()
                    );
                    return Ok(selection.into_vec());
                }
                continue;
            }

            if opts.allable && answer == sentinels.all {
                selection.toggle_all(choices);
            } else if let Some(index) = resolve_choice(choices, answer) {
                selection.toggle(choices[index].as_ref());
            } else {
                console.err(INVALID_CHOICE);
            }
        }
    }

    /// `[✓]` or `[ ]`
    fn check_mark(&self, checked: bool) -> String {
        let console = self.console;
        let inner = if checked {
            console.paint(&console.glyphs().check.to_string(), "choice-check")
        } else {
            " ".to_string()
        };
        format!(
            "{}{inner}{}",
            console.paint("[", "choice-mark"),
            console.paint("]", "choice-mark")
        )
    }
}
