//! Color constants and small display helpers for the TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::estimate::Category;
use crate::household::Appliance;

/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::Blue;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Validation error text.
pub const ERROR_FG: Color = Color::Red;
/// Result summary text.
pub const RESULT_FG: Color = Color::Green;
/// Magnitude chart bars.
pub const BAR_COLOR: Color = Color::Cyan;
/// Distribution gauge colors, cycled per breakdown line.
pub const SLICE_COLORS: [Color; 4] = [Color::Yellow, Color::Cyan, Color::Magenta, Color::Green];

/// Style for the focused form row.
pub fn focused() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Checkbox glyph.
pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Label short enough to sit under a bar.
pub fn short_label(category: &Category) -> &'static str {
    match category {
        Category::Base(_) => "Base",
        Category::Appliance(Appliance::AirConditioning) => "AC",
        Category::Appliance(Appliance::Refrigerator) => "Fridge",
        Category::Appliance(Appliance::WashingMachine) => "Washer",
    }
}
