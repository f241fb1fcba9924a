#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod config;
pub mod console;
pub mod detection;
pub mod echo; // Prefixed log lines
pub mod error; // Error type and error boundary
pub mod exit; // bye / bye_with_error
pub mod files; // Encoding-fallback reader, writer
pub mod logging; // log and tracing backends
pub mod prompt; // Input, choice and checklist prompts
pub mod render; // Glyphs, panels, rules
pub mod session; // Start/title/end bracketing
pub mod testing; // Test utilities
pub mod theme;

pub use config::ConsoleConfig;
pub use crate::console::{IoConsole, console, init_console, log_console};
pub use detection::{DisplayContext, is_agent_context, should_enable_rich};
pub use echo::{EchoOptions, LineKind};
pub use error::{ConsoleIoError, ErrorBoundary, Result};
pub use exit::{Outcome, bye, bye_with_error, farewell};
pub use files::{Decoded, TextEncoding, decode_bytes, read_file, read_file_with_encoding, write_file};
pub use prompt::{ChoiceOptions, InputRequest, MultiOptions, PAUSE_MESSAGE, Prompter};
pub use render::{Glyphs, Panel};
pub use session::{Session, as_session, as_session_titled, title_from_ident};
pub use theme::theme;

/// Ask on the global console, reading the answer from stdin.
pub fn get_input(request: &InputRequest) -> Result<String> {
    Prompter::stdin(console()).get_input(request)
}

/// Single-choice menu on the global console.
pub fn get_choice<S: AsRef<str>>(choices: &[S], opts: &ChoiceOptions) -> Result<Option<String>> {
    Prompter::stdin(console()).get_choice(choices, opts)
}

/// Multi-choice checklist on the global console.
pub fn get_choices<S: AsRef<str>>(choices: &[S], opts: MultiOptions) -> Result<Vec<String>> {
    Prompter::stdin(console()).get_choices(choices, opts)
}

/// Wait for Enter on the global console.
pub fn pause(msg: &str) -> Result<String> {
    Prompter::stdin(console()).pause(msg)
}
