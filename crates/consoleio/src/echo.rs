//! Prefixed log lines: `│ (Info) message`.
//!
//! Every line is a bar glyph, an optional `(Prefix)` label and the message,
//! each part painted with its own theme style (`<style>-bar`, `<style>-pre`,
//! `<style>`).

use crate::console::IoConsole;

/// How an echo line is decorated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoOptions {
    /// Label shown capitalized in parentheses; empty for none
    pub pre: String,
    /// Leading glyph; `None` uses the console's bar, `Some("")` drops it
    pub bar: Option<String>,
    /// Base theme style
    pub style: String,
}

impl Default for EchoOptions {
    fn default() -> Self {
        Self {
            pre: String::new(),
            bar: None,
            style: "echo".to_string(),
        }
    }
}

impl EchoOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pre(mut self, pre: impl Into<String>) -> Self {
        self.pre = pre.into();
        self
    }

    #[must_use]
    pub fn bar(mut self, bar: impl Into<String>) -> Self {
        self.bar = Some(bar.into());
        self
    }

    #[must_use]
    pub fn no_bar(self) -> Self {
        self.bar("")
    }

    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }
}

/// The fixed-label wrappers around [`IoConsole::echo_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Echo,
    Info,
    Warn,
    Err,
    Ask,
    Muted,
}

impl LineKind {
    /// Prefix label, before capitalization
    pub fn pre(self) -> &'static str {
        match self {
            Self::Echo | Self::Muted => "",
            Self::Info => "info",
            Self::Warn => "warning",
            Self::Err => "error",
            Self::Ask => "?",
        }
    }

    /// Theme style name
    pub fn style(self) -> &'static str {
        match self {
            Self::Echo => "echo",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Err => "err",
            Self::Ask => "ask",
            Self::Muted => "muted",
        }
    }

    pub fn options(self) -> EchoOptions {
        EchoOptions::new().pre(self.pre()).style(self.style())
    }
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Join display values with single spaces.
pub fn join_args<I, D>(args: I) -> String
where
    I: IntoIterator<Item = D>,
    D: std::fmt::Display,
{
    args.into_iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl IoConsole {
    /// Compose an echo line without printing it
    pub fn compose_echo(&self, text: &str, opts: &EchoOptions) -> String {
        let theme = self.theme();
        let mut line = String::new();

        let bar = opts.bar.as_deref().unwrap_or(self.glyphs().bar);
        if !bar.is_empty() {
            line.push_str(&self.paint(bar, &theme.variant_name(&opts.style, "bar")));
            line.push(' ');
        }
        if !opts.pre.is_empty() {
            let label = format!("({})", capitalize(&opts.pre));
            line.push_str(&self.paint(&label, &theme.variant_name(&opts.style, "pre")));
            line.push(' ');
        }
        line.push_str(&self.paint(text, &opts.style));
        line
    }

    /// Print a decorated line
    pub fn echo_with(&self, text: &str, opts: &EchoOptions) -> &Self {
        self.print(&self.compose_echo(text, opts))
    }

    /// Print a plain echo line (`│ text`)
    pub fn echo(&self, text: &str) -> &Self {
        self.echo_with(text, &EchoOptions::default())
    }

    /// Print several values joined by spaces as one echo line
    pub fn echo_all<I, D>(&self, args: I, kind: LineKind) -> &Self
    where
        I: IntoIterator<Item = D>,
        D: std::fmt::Display,
    {
        self.line(kind, &join_args(args))
    }

    /// Print a line of the given kind
    pub fn line(&self, kind: LineKind, text: &str) -> &Self {
        self.echo_with(text, &kind.options())
    }

    /// `│ (Info) text`
    pub fn info(&self, text: &str) -> &Self {
        self.line(LineKind::Info, text)
    }

    /// `│ (Warning) text`
    pub fn warn(&self, text: &str) -> &Self {
        self.line(LineKind::Warn, text)
    }

    /// `│ (Error) text`
    pub fn err(&self, text: &str) -> &Self {
        self.line(LineKind::Err, text)
    }

    /// `│ (?) text`
    pub fn ask(&self, text: &str) -> &Self {
        self.line(LineKind::Ask, text)
    }

    /// `│ text` in the muted style
    pub fn mute(&self, text: &str) -> &Self {
        self.line(LineKind::Muted, text)
    }
}
