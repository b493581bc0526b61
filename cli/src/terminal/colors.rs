use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Yellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const PROMPT: Color = Color::BrightCyan;

pub const SKILL: Color = Color::Cyan;
pub const AGE: Color = Color::Magenta;
pub const ADULT: Color = Color::Green;
pub const MINOR: Color = Color::BrightRed;
