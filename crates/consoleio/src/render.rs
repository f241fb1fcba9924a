//! Glyph sets, panels and rules.
//!
//! Layout is computed on plain text widths and styling is applied last through
//! a `paint(text, style_name)` callback supplied by the console, so the same
//! layout code serves styled and plain output.

use console::measure_text_width;

/// Characters used to draw a bordered box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

/// Rounded box-drawing corners.
pub const ROUNDED: BoxChars = BoxChars {
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    horizontal: '─',
    vertical: '│',
};

/// Plain ASCII box.
pub const ASCII: BoxChars = BoxChars {
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    horizontal: '-',
    vertical: '|',
};

/// Every glyph the console draws on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Leading bar of log lines and menu rows
    pub bar: &'static str,
    /// Decoration around menu commands (`── EXIT ──`)
    pub deco: &'static str,
    /// Mark of a selected entry in a multi-choice menu
    pub check: &'static str,
    /// Closing marker of a session
    pub session_end: &'static str,
    /// Horizontal rule character
    pub rule: char,
    /// Panel borders
    pub boxes: BoxChars,
}

impl Glyphs {
    #[must_use]
    pub const fn unicode() -> Self {
        Self {
            bar: "│",
            deco: "──",
            check: "✓",
            session_end: "╰",
            rule: '─',
            boxes: ROUNDED,
        }
    }

    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            bar: "|",
            deco: "--",
            check: "+",
            session_end: "`",
            rule: '-',
            boxes: ASCII,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::unicode()
    }
}

/// A bordered block of text with optional title and subtitle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    body: String,
    title: String,
    subtitle: String,
    expand: bool,
    style: String,
    border_style: Option<String>,
}

impl Panel {
    /// Create an expanding panel around `body`.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            title: String::new(),
            subtitle: String::new(),
            expand: true,
            style: String::new(),
            border_style: None,
        }
    }

    /// Title centered in the top border.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Subtitle centered in the bottom border.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Fill the whole console width (`true`) or fit the content (`false`).
    #[must_use]
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Theme style for the body text. The border uses `<style>-pre` when
    /// the theme has it, unless [`Panel::border_style`] is set.
    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Explicit theme style for the border.
    #[must_use]
    pub fn border_style(mut self, style: impl Into<String>) -> Self {
        self.border_style = Some(style.into());
        self
    }

    pub(crate) fn body_style(&self) -> &str {
        &self.style
    }

    pub(crate) fn explicit_border_style(&self) -> Option<&str> {
        self.border_style.as_deref()
    }

    /// Lay the panel out for a console `width` columns wide.
    pub fn render_lines(
        &self,
        glyphs: &Glyphs,
        width: usize,
        border_style: &str,
        paint: &dyn Fn(&str, &str) -> String,
    ) -> Vec<String> {
        let b = glyphs.boxes;
        let body: Vec<&str> = if self.body.is_empty() {
            vec![""]
        } else {
            self.body.lines().collect()
        };

        let content_w = body.iter().map(|l| measure_text_width(l)).max().unwrap_or(0);
        let label_w = |s: &str| if s.is_empty() { 0 } else { measure_text_width(s) + 2 };
        let fit = content_w
            .max(label_w(&self.title).saturating_sub(2))
            .max(label_w(&self.subtitle).saturating_sub(2));
        let inner = if self.expand {
            width.saturating_sub(4).max(fit)
        } else {
            fit
        };
        let edge_len = inner + 2;

        let mut lines = Vec::with_capacity(body.len() + 2);

        let top = format!(
            "{}{}{}",
            b.top_left,
            labelled_edge(&self.title, b.horizontal, edge_len),
            b.top_right
        );
        lines.push(paint(&top, border_style));

        let side = paint(&b.vertical.to_string(), border_style);
        for line in body {
            let pad = inner.saturating_sub(measure_text_width(line));
            let text = format!("{line}{}", " ".repeat(pad));
            lines.push(format!("{side} {} {side}", paint(&text, &self.style)));
        }

        let bottom = format!(
            "{}{}{}",
            b.bottom_left,
            labelled_edge(&self.subtitle, b.horizontal, edge_len),
            b.bottom_right
        );
        lines.push(paint(&bottom, border_style));

        lines
    }
}

/// A horizontal line of `len` columns with `label` centered in it.
pub(crate) fn labelled_edge(label: &str, fill: char, len: usize) -> String {
    if label.is_empty() {
        return fill.to_string().repeat(len);
    }
    let label_w = measure_text_width(label) + 2;
    if label_w >= len {
        return format!(" {label} ");
    }
    let left = (len - label_w) / 2;
    let right = len - label_w - left;
    format!(
        "{} {label} {}",
        fill.to_string().repeat(left),
        fill.to_string().repeat(right)
    )
}

/// A full-width rule, with an optional centered title.
pub fn render_rule(title: &str, glyphs: &Glyphs, width: usize) -> String {
    labelled_edge(title, glyphs.rule, width.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str, _style: &str) -> String {
        text.to_string()
    }

    #[test]
    fn test_fit_panel_wraps_content() {
        let lines = Panel::new("ABC")
            .expand(false)
            .render_lines(&Glyphs::unicode(), 80, "", &plain);
        assert_eq!(lines, vec!["╭─────╮", "│ ABC │", "╰─────╯"]);
    }

    #[test]
    fn test_ascii_panel() {
        let lines = Panel::new("ABC")
            .expand(false)
            .render_lines(&Glyphs::ascii(), 80, "", &plain);
        assert_eq!(lines, vec!["+-----+", "| ABC |", "+-----+"]);
    }

    #[test]
    fn test_expanded_panel_fills_width() {
        let lines = Panel::new("hi").render_lines(&Glyphs::unicode(), 20, "", &plain);
        for line in &lines {
            assert_eq!(measure_text_width(line), 20, "{line:?}");
        }
    }

    #[test]
    fn test_panel_title_and_subtitle() {
        let lines = Panel::new("body text")
            .title("T")
            .subtitle("end")
            .expand(false)
            .render_lines(&Glyphs::ascii(), 80, "", &plain);
        assert!(lines[0].contains(" T "));
        assert!(lines[2].contains(" end "));
        assert_eq!(measure_text_width(&lines[0]), measure_text_width(&lines[1]));
        assert_eq!(measure_text_width(&lines[2]), measure_text_width(&lines[1]));
    }

    #[test]
    fn test_long_title_widens_fit_panel() {
        let lines = Panel::new("x")
            .title("a much longer title")
            .expand(false)
            .render_lines(&Glyphs::ascii(), 80, "", &plain);
        assert!(lines[0].contains("a much longer title"));
        assert_eq!(measure_text_width(&lines[0]), measure_text_width(&lines[1]));
    }

    #[test]
    fn test_multiline_body() {
        let lines = Panel::new("one\nthree")
            .expand(false)
            .render_lines(&Glyphs::ascii(), 80, "", &plain);
        assert_eq!(lines, vec!["+-------+", "| one   |", "| three |", "+-------+"]);
    }

    #[test]
    fn test_rule_without_title() {
        assert_eq!(render_rule("", &Glyphs::ascii(), 5), "-----");
    }

    #[test]
    fn test_rule_centers_title() {
        assert_eq!(render_rule("ab", &Glyphs::ascii(), 10), "--- ab ---");
        assert_eq!(render_rule("abc", &Glyphs::unicode(), 10), "── abc ───");
    }
}
