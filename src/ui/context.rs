use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use homelab::presentation::ColorWhen;

/// Output decisions made once per invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(json, verbose, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        // NDJSON consumers never get escape codes, even with --color always.
        let color = !json
            && match cli_color.unwrap_or(ColorWhen::Auto) {
                ColorWhen::Never => false,
                ColorWhen::Always => true,
                ColorWhen::Auto => caps.supports_color && !caps.is_ci,
            };

        Self {
            json,
            verbose,
            color,
            unicode: caps.supports_unicode,
        }
    }

    /// Run events are also forwarded to the logger
    pub fn mirrors_events_to_log(&self) -> bool {
        self.json || self.verbose >= 2
    }
}
