//! Design tokens for the homelab CLI.
//!
//! Every color and glyph printed by the binary comes from this module.
//! Each glyph table has a unicode variant and an ASCII variant, since CI logs
//! and `C`-locale terminals get the ASCII one.

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

/// Box corners and edges, clockwise from the top left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Borders {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_right: &'static str,
    pub bottom_left: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

/// Every glyph for one rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    /// Deployed but not running
    pub inactive: &'static str,
    /// Leads a "next step" hint
    pub hint: &'static str,
    pub add: &'static str,
    pub remove: &'static str,
    pub update: &'static str,
    pub sync: &'static str,
    pub status: &'static str,
    pub borders: Borders,
}

pub const UNICODE: Glyphs = Glyphs {
    success: "✓",
    error: "✗",
    warning: "⚠",
    inactive: "○",
    hint: "↳",
    add: "+",
    remove: "-",
    update: "~",
    sync: "⟳",
    status: "🔍",
    borders: Borders {
        top_left: "╭",
        top_right: "╮",
        bottom_right: "╯",
        bottom_left: "╰",
        horizontal: "─",
        vertical: "│",
    },
};

pub const ASCII: Glyphs = Glyphs {
    success: "[OK]",
    error: "[FAIL]",
    warning: "[WARN]",
    inactive: "[ ]",
    hint: "[>]",
    add: "+",
    remove: "-",
    update: "~",
    sync: "[SYNC]",
    status: "[STATUS]",
    borders: Borders {
        top_left: "+",
        top_right: "+",
        bottom_right: "+",
        bottom_left: "+",
        horizontal: "-",
        vertical: "|",
    },
};

pub fn glyphs(supports_unicode: bool) -> &'static Glyphs {
    if supports_unicode {
        &UNICODE
    } else {
        &ASCII
    }
}
