use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Bordered block of text lines
#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<String>,
    lines: Vec<String>,
    style: PanelStyle,
}

impl Panel {
    pub fn titled(title: impl Into<String>, style: PanelStyle) -> Self {
        Self {
            title: Some(title.into()),
            lines: Vec::new(),
            style,
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        self.lines.extend(line.lines().map(str::to_string));
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let rows: Vec<&str> = self
            .title
            .iter()
            .map(String::as_str)
            .chain(self.lines.iter().map(String::as_str))
            .collect();
        let inner = rows.iter().map(|r| visible_width(r)).max().unwrap_or(0) + 2;

        let b = theme::glyphs(supports_unicode).borders;
        let edge = |s: &str| paint_border(s, supports_color, self.style);
        let h = b.horizontal.repeat(inner);
        let v = edge(b.vertical);

        let mut out = edge(&format!("{}{}{}", b.top_left, h, b.top_right));
        out.push('\n');
        for row in rows {
            let pad = inner - 1 - visible_width(row);
            out.push_str(&format!("{} {}{}{}\n", v, row, " ".repeat(pad), v));
        }
        out.push_str(&edge(&format!("{}{}{}", b.bottom_left, h, b.bottom_right)));
        out.push('\n');
        out
    }
}

fn paint_border(s: &str, supports_color: bool, style: PanelStyle) -> String {
    if !supports_color {
        return s.to_string();
    }
    let color = match style {
        PanelStyle::Info => theme::colors::INFO,
        PanelStyle::Success => theme::colors::SUCCESS,
        PanelStyle::Warning => theme::colors::WARNING,
        PanelStyle::Error => theme::colors::ERROR,
    };
    format!("{}", s.with(color))
}

/// Display width ignoring ANSI color sequences
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (false, c) => out.push(c),
            // ESC [ ... <final letter>
            (true, c) if c.is_ascii_alphabetic() => in_escape = false,
            (true, _) => {}
        }
    }
    Cow::Owned(out)
}
