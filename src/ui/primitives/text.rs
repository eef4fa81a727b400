use crossterm::style::{Color, Stylize};

use crate::ui::theme::colors;

/// Text in one of the theme colors, printed plain when color is off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Color,
    bold: bool,
}

impl ColoredText {
    fn painted(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::painted(text, colors::SUCCESS)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::painted(text, colors::ERROR)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::painted(text, colors::WARNING)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::painted(text, colors::INFO)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::painted(text, colors::DIM)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        match (supports_color, self.bold) {
            (false, _) => self.text.clone(),
            (true, false) => self.text.as_str().with(self.color).to_string(),
            (true, true) => self.text.as_str().with(self.color).bold().to_string(),
        }
    }
}
