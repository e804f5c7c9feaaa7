use ratatui::style::Color;

pub const HEART_RED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PROGRESS_FILL: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const PROGRESS_TRACK: Color = Color::Rgb(0x3a, 0x3a, 0x3a);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
