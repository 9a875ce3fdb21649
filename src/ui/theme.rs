use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_normal: Color,
    pub border_done: Color,
    pub panel_bg: Color,
    pub bar: Color,
    pub bar_highlight: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(15, 18, 25),
    fg: Color::Rgb(235, 235, 235),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(185, 185, 185),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_normal: Color::Rgb(70, 70, 90),
    border_done: Color::Rgb(166, 227, 161), // Green border once a lane finishes
    panel_bg: Color::Rgb(22, 26, 36),
    bar: Color::Rgb(90, 170, 255),
    bar_highlight: Color::Rgb(255, 165, 0), // Orange for indices touched by the last step
};
