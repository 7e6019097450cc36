//! Inline colors applied to fields, notifications and the estimate

use ratatui::style::Color;

pub const VALID_GREEN: Color = Color::Rgb(0x4C, 0xAF, 0x50);
pub const INVALID_RED: Color = Color::Rgb(0xFF, 0x44, 0x44);
pub const INFO_BLUE: Color = Color::Rgb(0x21, 0x96, 0xF3);
pub const WARNING_ORANGE: Color = Color::Rgb(0xFF, 0x98, 0x00);

pub const ESTIMATE_LOW: Color = Color::Rgb(0x4C, 0xAF, 0x50);
pub const ESTIMATE_MEDIUM: Color = Color::Rgb(0xFF, 0x98, 0x00);
pub const ESTIMATE_HIGH: Color = Color::Rgb(0xFF, 0x57, 0x22);
pub const ESTIMATE_VERY_HIGH: Color = Color::Rgb(0xF4, 0x43, 0x36);

pub const TOOLTIP_BACKGROUND: Color = Color::Rgb(0x33, 0x33, 0x33);

/// Tooltip text color for a given opacity, blending from the background to white
pub fn tooltip_foreground(opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    let channel = 0x33 as f32 + (0xFF - 0x33) as f32 * opacity;
    let c = channel.round() as u8;
    Color::Rgb(c, c, c)
}
