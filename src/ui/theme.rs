use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub frame: Color, // Tower frame and tick marks
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    frame: Color::Rgb(186, 194, 222),
};

/// Terminal color for a shape's palette name.
///
/// The element palette cycles through seven names; "black" is used by the
/// tower frame and tick marks. Unknown names fall back to the foreground.
pub fn shape_color(name: &str) -> Color {
    match name {
        "blue" => Color::Rgb(137, 180, 250),
        "red" => Color::Rgb(243, 139, 168),
        "green" => Color::Rgb(166, 227, 161),
        "yellow" => Color::Rgb(249, 226, 175),
        "magenta" => Color::Rgb(203, 166, 247),
        "cyan" => Color::Rgb(148, 226, 213),
        "orange" => Color::Rgb(250, 179, 135),
        "black" => DEFAULT_THEME.frame,
        _ => DEFAULT_THEME.fg,
    }
}
