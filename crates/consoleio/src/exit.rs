//! Program termination with a final message.

use crate::console::{IoConsole, console};

/// How the program is ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

/// Print the closing message and return the process exit code.
///
/// Success prints `msg` as a plain line, failure as an `(Error)` line. An
/// empty message prints nothing.
pub fn farewell(console: &IoConsole, msg: &str, outcome: Outcome) -> i32 {
    if !msg.is_empty() {
        match outcome {
            Outcome::Success => console.print(msg),
            Outcome::Failure => console.err(msg),
        };
    }
    log::debug!(target: "consoleio::exit", "exiting with {:?}", outcome);
    outcome.exit_code()
}

/// Print `msg` and exit with status 0.
pub fn bye(msg: &str) -> ! {
    std::process::exit(farewell(console(), msg, Outcome::Success))
}

/// Print `msg` as an error and exit with status 1.
pub fn bye_with_error(msg: &str) -> ! {
    std::process::exit(farewell(console(), msg, Outcome::Failure))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestConsole;

    #[test]
    fn test_farewell_success() {
        let tc = TestConsole::new();
        assert_eq!(farewell(tc.console(), "See you", Outcome::Success), 0);
        assert_eq!(tc.output(), vec!["See you"]);
    }

    #[test]
    fn test_farewell_failure() {
        let tc = TestConsole::new();
        assert_eq!(farewell(tc.console(), "disk full", Outcome::Failure), 1);
        assert_eq!(tc.output(), vec!["│ (Error) disk full"]);
    }

    #[test]
    fn test_farewell_silent() {
        let tc = TestConsole::new();
        assert_eq!(farewell(tc.console(), "", Outcome::Failure), 1);
        assert!(tc.text().is_empty());
    }
}
