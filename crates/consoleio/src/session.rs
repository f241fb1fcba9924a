//! Session bracketing: a blank line, a title panel, the work, an end marker.
//!
//! ```ignore
//! use consoleio::session::as_session;
//!
//! fn build_index() -> usize { 42 }
//!
//! let n = as_session(consoleio::console(), build_index);
//! ```

use std::any::type_name;

use crate::console::IoConsole;

/// Title used when no name can be derived from the function.
pub const FALLBACK_TITLE: &str = "session";

/// Turn an identifier into title words: `under_scoreCamel` → `under score Camel`.
pub fn title_from_ident(ident: &str) -> String {
    let mut title = String::with_capacity(ident.len() + 4);
    for c in ident.chars() {
        if c.is_uppercase() {
            title.push(' ');
            title.push(c);
        } else if c == '_' {
            title.push(' ');
        } else {
            title.push(c);
        }
    }
    title
}

/// Pointer types whose type name hides the callable they hold.
const WRAPPERS: [&str; 3] = ["Box", "Rc", "Arc"];

/// Last path segment of a callable's type name, generics removed.
///
/// Only fn items carry a name. Closures, fn pointers (`fn() -> u32`) and
/// boxed or borrowed trait objects yield `None`.
pub fn fn_ident<F>() -> Option<&'static str> {
    let full = type_name::<F>().trim_start_matches('&');
    if full.starts_with("fn(") || full.starts_with("dyn ") {
        return None;
    }
    let path = full.split('<').next().unwrap_or(full);
    let ident = path.rsplit("::").next().unwrap_or(path);
    if ident.is_empty() || ident.contains(['{', '(', ' ']) || WRAPPERS.contains(&ident) {
        None
    } else {
        Some(ident)
    }
}

/// A titled section of console output.
#[derive(Debug, Clone)]
pub struct Session<'c> {
    console: &'c IoConsole,
    title: String,
}

impl<'c> Session<'c> {
    #[must_use]
    pub fn titled(console: &'c IoConsole, title: impl Into<String>) -> Self {
        Self {
            console,
            title: title.into(),
        }
    }

    /// Title the session after the function `f`.
    #[must_use]
    pub fn for_fn<F>(console: &'c IoConsole, _f: &F) -> Self {
        let title = fn_ident::<F>().map_or_else(|| FALLBACK_TITLE.to_string(), title_from_ident);
        Self::titled(console, title)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Bracket `op` with the start marker, title panel and end marker.
    pub fn run<R>(&self, op: impl FnOnce() -> R) -> R {
        log::debug!(target: "consoleio::session", "session start: {}", self.title);
        self.console.start().title(&self.title);
        let result = op();
        self.console.end();
        log::debug!(target: "consoleio::session", "session end: {}", self.title);
        result
    }

    /// Reusable wrapper that brackets every call of `f`.
    ///
    /// `f` takes one argument. Operations with several arguments take them as
    /// a tuple: `session.wrap(|(a, b): (u32, u32)| add(a, b))` is then called
    /// as `wrapped((1, 2))`.
    pub fn wrap<A, R, F>(self, f: F) -> impl Fn(A) -> R
    where
        F: Fn(A) -> R,
    {
        move |arg| self.run(|| f(arg))
    }
}

/// Run `f` as a session titled after its function name.
pub fn as_session<R, F: FnOnce() -> R>(console: &IoConsole, f: F) -> R {
    Session::for_fn(console, &f).run(f)
}

/// Run `f` as a session with an explicit title.
pub fn as_session_titled<R, F: FnOnce() -> R>(console: &IoConsole, title: &str, f: F) -> R {
    Session::titled(console, title).run(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Glyphs;
    use crate::testing::TestConsole;

    #[allow(non_snake_case)]
    fn underscore_orCamel() -> u32 {
        7
    }

    fn double(n: u32) -> u32 {
        n * 2
    }

    fn build_index() -> u32 {
        3
    }

    fn add(a: u32, b: u32) -> u32 {
        a + b
    }

    #[test]
    fn test_title_from_ident() {
        assert_eq!(title_from_ident("under_scoreCamel"), "under score Camel");
        assert_eq!(title_from_ident("plain"), "plain");
        assert_eq!(title_from_ident("HTTPGet"), " H T T P Get");
    }

    #[test]
    fn test_fn_ident() {
        fn named() {}
        let f = named;
        fn ident_of<F>(_: &F) -> Option<&'static str> {
            fn_ident::<F>()
        }
        assert_eq!(ident_of(&f), Some("named"));
        assert_eq!(ident_of(&|| ()), None);
    }

    #[test]
    fn test_fn_ident_without_a_name() {
        assert_eq!(fn_ident::<fn() -> u32>(), None);
        assert_eq!(fn_ident::<Box<dyn FnOnce() -> u32>>(), None);
        assert_eq!(fn_ident::<std::rc::Rc<dyn Fn(u32) -> u32>>(), None);
        assert_eq!(fn_ident::<std::sync::Arc<dyn Fn()>>(), None);
        assert_eq!(fn_ident::<&dyn Fn()>(), None);
    }

    #[test]
    fn test_fn_pointer_and_boxed_closure_fall_back() {
        let tc = TestConsole::new();
        let f: fn() -> u32 = build_index;
        assert_eq!(as_session(tc.console(), f), 3);
        let boxed = Box::new(|| 2u32) as Box<dyn FnOnce() -> u32>;
        assert_eq!(as_session(tc.console(), boxed), 2);

        assert_eq!(tc.count("│ SESSION │"), 2);
        tc.assert_not_contains("FN()");
        tc.assert_not_contains("BOX");
    }

    #[test]
    fn test_fn_item_by_reference_keeps_name() {
        let tc = TestConsole::new();
        as_session(tc.console(), &build_index);
        tc.assert_contains("│ BUILD INDEX │");
    }

    #[test]
    fn test_as_session_brackets_and_titles() {
        let tc = TestConsole::with_glyphs(Glyphs::ascii());
        let value = as_session(tc.console(), underscore_orCamel);
        assert_eq!(value, 7);
        assert_eq!(
            tc.output(),
            vec![
                "",
                "+---------------------+",
                "| UNDERSCORE OR CAMEL |",
                "+---------------------+",
                "`",
            ]
        );
    }

    #[test]
    fn test_closure_falls_back() {
        let tc = TestConsole::new();
        as_session(tc.console(), || ());
        tc.assert_contains("│ SESSION │");
        assert_eq!(tc.output().last().map(String::as_str), Some("╰"));
    }

    #[test]
    fn test_as_session_titled() {
        let tc = TestConsole::new();
        let out = as_session_titled(tc.console(), "  report  ", || "done");
        assert_eq!(out, "done");
        tc.assert_contains("│ REPORT │");
    }

    #[test]
    fn test_output_inside_session_is_between_markers() {
        let tc = TestConsole::new();
        Session::titled(tc.console(), "work").run(|| {
            tc.console().info("inside");
        });
        let lines = tc.output();
        let inside = lines.iter().position(|l| l == "│ (Info) inside").unwrap();
        assert!(inside > 1);
        assert_eq!(inside, lines.len() - 2);
    }

    #[test]
    fn test_wrap_brackets_every_call() {
        let tc = TestConsole::new();
        let wrapped = Session::for_fn(tc.console(), &double).wrap(double);
        assert_eq!(wrapped(2), 4);
        assert_eq!(wrapped(5), 10);
        assert_eq!(tc.count("│ DOUBLE │"), 2);
        assert_eq!(tc.count("╰\n"), 2);
    }

    #[test]
    fn test_wrap_multi_argument_as_tuple() {
        let tc = TestConsole::new();
        let wrapped = Session::titled(tc.console(), "add").wrap(|(a, b): (u32, u32)| add(a, b));
        assert_eq!(wrapped((2, 3)), 5);
        tc.assert_contains("│ ADD │");
    }
}
