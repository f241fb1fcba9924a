//! consoleio CLI - console prompts and encoding-tolerant file reads for shell scripts.
//!
//! Commands:
//! - `cat` - Print a text file, decoding legacy encodings
//! - `choose` - Show a numbered menu and print the chosen entry
//! - `pick` - Show a checklist and print the selected entries
//! - `ask` - Ask a question and print the answer
//! - `write` - Append or overwrite a UTF-8 text file

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use consoleio::config::parse_level;
use consoleio::logging::ConsoleLoggerBuilder;
use consoleio::{
    ChoiceOptions, ConsoleConfig, ErrorBoundary, InputRequest, MultiOptions, console, init_console,
};

/// Console prompts and file helpers.
#[derive(Parser)]
#[command(name = "consoleio")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Draw bars, boxes and marks with ASCII characters only.
    #[arg(long, global = true)]
    ascii: bool,

    /// Never style output, even on a terminal.
    #[arg(long, global = true)]
    plain: bool,

    /// Diagnostics level on stderr (trace, debug, info, warn, error).
    #[arg(long, global = true, value_name = "LEVEL", env = "CONSOLEIO_LOG", value_parser = parse_log_level)]
    log_level: Option<log::Level>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a text file.
    ///
    /// Tries utf-8, gbk, cp1252, windows-1252 and latin-1 in that order.
    Cat {
        /// File to read.
        path: PathBuf,

        /// Report which encoding decoded the file.
        #[arg(long)]
        show_encoding: bool,
    },

    /// Show a numbered menu and print the chosen entry.
    Choose {
        /// Menu entries, in display order.
        #[arg(required = true)]
        choices: Vec<String>,

        /// Offer an EXIT row; choosing it prints nothing.
        #[arg(long)]
        exitable: bool,

        /// Answer used when Enter is pressed on an empty line.
        #[arg(long)]
        default: Option<String>,
    },

    /// Show a checklist and print the selected entries, one per line.
    Pick {
        /// Checklist entries, in display order.
        #[arg(required = true)]
        choices: Vec<String>,

        /// Offer an ALL row.
        #[arg(long)]
        all: bool,

        /// Allow finishing with nothing selected.
        #[arg(long)]
        exitable: bool,
    },

    /// Ask a question and print the answer.
    Ask {
        /// Question shown before the prompt.
        question: String,

        /// Answer used when Enter is pressed on an empty line.
        #[arg(long)]
        default: Option<String>,
    },

    /// Write text to a file as UTF-8.
    Write {
        /// Target file; created if missing.
        path: PathBuf,

        /// Text to write.
        content: String,

        /// Replace the file instead of appending.
        #[arg(long)]
        overwrite: bool,
    },
}

fn parse_log_level(value: &str) -> Result<log::Level, String> {
    parse_level(value).ok_or_else(|| format!("unknown log level '{value}'"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = ConsoleConfig::from_env();
    if cli.ascii {
        config = config.ascii(true);
    }
    if cli.plain {
        config = config.plain_mode();
    }
    if let Some(level) = cli.log_level {
        config = config.with_log_level(level);
    }
    if let Err(e) = init_console(&config) {
        eprintln!("{e}");
    }
    ConsoleLoggerBuilder::from_config(&config).try_init();

    let result = match cli.command {
        Commands::Cat {
            path,
            show_encoding,
        } => cmd_cat(&path, show_encoding),
        Commands::Choose {
            choices,
            exitable,
            default,
        } => cmd_choose(&choices, exitable, default.unwrap_or_default()),
        Commands::Pick {
            choices,
            all,
            exitable,
        } => cmd_pick(&choices, all, exitable),
        Commands::Ask { question, default } => cmd_ask(&question, default.unwrap_or_default()),
        Commands::Write {
            path,
            content,
            overwrite,
        } => cmd_write(&path, &content, overwrite),
    };

    let boundary = ErrorBoundary::new(console());
    match boundary.wrap(result) {
        Some(()) => ExitCode::SUCCESS,
        None => ExitCode::FAILURE,
    }
}

/// Cat command: print a file's decoded text.
fn cmd_cat(path: &Path, show_encoding: bool) -> consoleio::Result<()> {
    let decoded = consoleio::read_file_with_encoding(path)?;
    let out = console();
    if show_encoding {
        out.info(&format!("{}: {}", path.display(), decoded.encoding));
    }
    out.print_inline(&decoded.text);
    if !decoded.text.is_empty() && !decoded.text.ends_with('\n') {
        out.newline();
    }
    Ok(())
}

/// Choose command: single-choice menu.
fn cmd_choose(choices: &[String], exitable: bool, default: String) -> consoleio::Result<()> {
    let opts = ChoiceOptions::default()
        .exitable(exitable)
        .default_value(default);
    match consoleio::get_choice(choices, &opts)? {
        Some(choice) => {
            console().print(&choice);
        }
        None => log::info!(target: "consoleio::cli", "menu exited without a choice"),
    }
    Ok(())
}

/// Pick command: multi-choice checklist.
fn cmd_pick(choices: &[String], all: bool, exitable: bool) -> consoleio::Result<()> {
    let opts = MultiOptions::default().allable(all).exitable(exitable);
    let picked = consoleio::get_choices(choices, opts)?;
    let out = console();
    for item in &picked {
        out.print(item);
    }
    Ok(())
}

/// Ask command: free-text question.
fn cmd_ask(question: &str, default: String) -> consoleio::Result<()> {
    let request = InputRequest::new().question(question).default_value(default);
    let answer = consoleio::get_input(&request)?;
    console().print(&answer);
    Ok(())
}

/// Write command: append or overwrite a file.
fn cmd_write(path: &Path, content: &str, overwrite: bool) -> consoleio::Result<()> {
    let written = consoleio::write_file(path, content, overwrite)?;
    console().info(&format!(
        "{} {} chars to {}",
        if overwrite { "Wrote" } else { "Appended" },
        written,
        path.display()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_choose_with_flags() {
        let cli = Cli::parse_from(["consoleio", "--ascii", "choose", "a", "b", "--exitable"]);
        assert!(cli.ascii);
        match cli.command {
            Commands::Choose {
                choices,
                exitable,
                default,
            } => {
                assert_eq!(choices, ["a", "b"]);
                assert!(exitable);
                assert_eq!(default, None);
            }
            _ => panic!("expected choose"),
        }
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("WARN"), Ok(log::Level::Warn));
        assert!(parse_log_level("loud").is_err());
    }

    #[test]
    fn test_choose_requires_entries() {
        assert!(Cli::try_parse_from(["consoleio", "choose"]).is_err());
    }
}
