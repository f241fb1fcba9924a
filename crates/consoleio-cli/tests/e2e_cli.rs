//! E2E tests for the consoleio binary.
//!
//! These tests spawn the actual CLI binary with piped stdin and verify:
//! - Exit codes
//! - stdout output
//! - Prompt behavior with scripted answers

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Path to the compiled binary (in debug or release mode).
fn get_binary_path() -> String {
    env!("CARGO_BIN_EXE_consoleio").to_string()
}

/// Run the CLI with `stdin` piped in and capture output.
fn run_cli_with_input(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(get_binary_path())
        .args(args)
        .env("CONSOLEIO_PLAIN", "1")
        .env_remove("CONSOLEIO_FORCE_COLOR")
        .env_remove("CONSOLEIO_ASCII")
        .env_remove("CONSOLEIO_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI binary");

    if let Some(mut pipe) = child.stdin.take() {
        pipe.write_all(stdin.as_bytes()).expect("Failed to write stdin");
    }
    child.wait_with_output().expect("Failed to wait for CLI binary")
}

fn run_cli(args: &[&str]) -> Output {
    run_cli_with_input(args, "")
}

fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is UTF-8")
}

// =============================================================================
// Help
// =============================================================================

#[test]
fn e2e_cli_help_lists_commands() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success(), "help should exit 0");

    let stdout = stdout_str(&output);
    for command in ["cat", "choose", "pick", "ask", "write"] {
        assert!(stdout.contains(command), "help should list {command}");
    }
}

#[test]
fn e2e_cli_rejects_unknown_log_level() {
    let output = run_cli(&["--log-level", "loud", "ask", "x"]);
    assert!(!output.status.success());
}

// =============================================================================
// Files
// =============================================================================

#[test]
fn e2e_cli_write_then_cat() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("note.txt");

    let output = run_cli(&["write", path_str(&path), "abc", "--overwrite"]);
    assert!(output.status.success());
    assert!(stdout_str(&output).contains("(Info) Wrote 3 chars"));

    let output = run_cli(&["cat", path_str(&path)]);
    assert!(output.status.success());
    assert_eq!(stdout_str(&output), "abc\n");
}

#[test]
fn e2e_cli_write_appends() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.txt");

    run_cli(&["write", path_str(&path), "one "]);
    run_cli(&["write", path_str(&path), "two"]);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "one two");
}

#[test]
fn e2e_cli_cat_reports_legacy_encoding() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.txt");
    std::fs::write(&path, [0xD6, 0xD0, 0xCE, 0xC4, b'\n']).unwrap();

    let output = run_cli(&["cat", "--show-encoding", path_str(&path)]);
    assert!(output.status.success());
    let stdout = stdout_str(&output);
    assert!(stdout.contains(": gbk"), "stdout: {stdout}");
    assert!(stdout.ends_with("中文\n"));
}

#[test]
fn e2e_cli_cat_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["cat", path_str(&dir.path().join("missing.txt"))]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_str(&output).contains("(Error) I/O error"));
}

// =============================================================================
// Prompts
// =============================================================================

#[test]
fn e2e_cli_choose_reprompts_then_prints_choice() {
    let output = run_cli_with_input(&["choose", "Apple", "Banana"], "9\n2\n");
    assert!(output.status.success());

    let stdout = stdout_str(&output);
    assert!(stdout.contains("│  1) Apple"));
    assert!(stdout.contains("(Error) Please enter a valid choice."));
    assert!(stdout.trim_end().ends_with("Banana"));
}

#[test]
fn e2e_cli_choose_exit_prints_nothing_chosen() {
    let output = run_cli_with_input(&["--ascii", "choose", "Apple", "--exitable"], "0\n");
    assert!(output.status.success());

    let stdout = stdout_str(&output);
    assert!(stdout.contains("|  0) -- EXIT --"));
    assert!(stdout.trim_end().ends_with('>'));
}

#[test]
fn e2e_cli_choose_closed_input_fails() {
    let output = run_cli_with_input(&["choose", "Apple"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_str(&output).contains("Input closed"));
}

#[test]
fn e2e_cli_pick_prints_selection() {
    let output = run_cli_with_input(&["pick", "Apple", "Banana", "Cherry"], "3\n1\n0\n");
    assert!(output.status.success());

    let stdout = stdout_str(&output);
    assert!(stdout.contains("[✓] Cherry"));
    assert!(stdout.ends_with("Cherry\nApple\n"), "stdout: {stdout}");
}

#[test]
fn e2e_cli_ask_uses_default() {
    let output = run_cli_with_input(&["ask", "Name?", "--default", "guest"], "\n");
    assert!(output.status.success());

    let stdout = stdout_str(&output);
    assert!(stdout.starts_with("│ (?) Name?\n> (guest) \n"));
    assert!(stdout.ends_with("guest\n"));
}
