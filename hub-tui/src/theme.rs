//! Dashboard themes and color utilities.

use hub_core::{Rgb, Variant};
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct HubTheme {
    pub bg: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl HubTheme {
    /// Neon on black: magenta, purple, cyan.
    pub fn cyber() -> Self {
        Self {
            bg: Color::Rgb(0, 0, 0),
            bg_highlight: Color::Rgb(31, 41, 55),
            primary: Color::Rgb(0xFF, 0x00, 0x80),
            secondary: Color::Rgb(0x79, 0x28, 0xCA),
            tertiary: Color::Rgb(0x00, 0xD4, 0xFF),
            success: Color::Rgb(74, 222, 128),
            warning: Color::Rgb(250, 204, 21),
            error: Color::Rgb(248, 113, 113),
            text: Color::Rgb(255, 255, 255),
            text_dim: Color::Rgb(156, 163, 175),
            border: Color::Rgb(55, 65, 81),
            border_focus: Color::Rgb(0x00, 0xD4, 0xFF),
        }
    }

    /// Muted grays with a single blue accent.
    pub fn classic() -> Self {
        Self {
            bg: Color::Reset,
            bg_highlight: Color::Rgb(229, 231, 235),
            primary: Color::Rgb(0x3B, 0x82, 0xF6),
            secondary: Color::Rgb(75, 85, 99),
            tertiary: Color::Rgb(107, 114, 128),
            success: Color::Rgb(22, 163, 74),
            warning: Color::Rgb(202, 138, 4),
            error: Color::Rgb(220, 38, 38),
            text: Color::Reset,
            text_dim: Color::Rgb(107, 114, 128),
            border: Color::Rgb(156, 163, 175),
            border_focus: Color::Rgb(0x3B, 0x82, 0xF6),
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Cyber => Self::cyber(),
            Variant::Classic => Self::classic(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "cyber" => Some(Self::cyber()),
            "classic" => Some(Self::classic()),
            _ => None,
        }
    }
}

impl Default for HubTheme {
    fn default() -> Self {
        Self::cyber()
    }
}

pub fn rgb(color: Rgb) -> Color {
    let Rgb(r, g, b) = color;
    Color::Rgb(r, g, b)
}

/// Positive growth is green, everything else red.
pub fn growth_color(growth: f64, theme: &HubTheme) -> Color {
    if growth > 0.0 {
        theme.success
    } else {
        theme.error
    }
}

pub fn focus_border(focused: bool, theme: &HubTheme) -> Color {
    if focused {
        theme.border_focus
    } else {
        theme.border
    }
}
