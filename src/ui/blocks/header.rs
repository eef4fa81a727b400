use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// First lines of a command's output: icon, title and labelled facts
#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    items: Vec<(&'static str, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, label: &'static str, value: impl Into<String>) {
        self.items.push((label, value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            ColoredText::info(self.title.as_str())
                .bold()
                .render(supports_color)
        );
        for (label, value) in &self.items {
            out.push_str(&format!(
                "  {} {}\n",
                ColoredText::dim(format!("{}:", label)).render(supports_color),
                value
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_ascii_icon_when_unicode_unsupported() {
        let mut header = CommandHeader::new(Icon::Sync, "Sync nas");
        header.add("Host", "ops@nas.lan");

        let rendered = header.render(false, false);
        assert!(rendered.contains("[SYNC] Sync nas"));
        assert!(rendered.contains("  Host: ops@nas.lan"));
    }
}
