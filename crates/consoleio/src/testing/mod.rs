//! Testing utilities for consoleio
//!
//! Provides `TestConsole` for capturing and asserting on console output, and
//! `ScriptedInput` for answering prompts.

mod scripted_input;
mod test_console;

pub use scripted_input::ScriptedInput;
pub use test_console::TestConsole;
