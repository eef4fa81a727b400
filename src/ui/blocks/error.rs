use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// An error message with an optional remediation hint
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    context: Option<String>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            fix: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut panel = Panel::titled(
            ColoredText::error("ERROR").bold().render(supports_color),
            PanelStyle::Error,
        );
        if let Some(context) = &self.context {
            panel.push(ColoredText::dim(context.as_str()).render(supports_color));
        }
        panel.blank();
        panel.push(self.message.as_str());
        if let Some(fix) = &self.fix {
            panel.blank();
            panel.push(format!("FIX: {}", fix));
        }
        panel.render(supports_color, supports_unicode)
    }
}
