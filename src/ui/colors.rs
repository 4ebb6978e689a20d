use crossterm::style::Color;

pub fn accent_fg() -> Color {
    Color::Rgb { r: 228, g: 3, b: 45 }
}
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
}
pub fn muted_fg() -> Color {
    Color::Rgb {
        r: 142,
        g: 142,
        b: 147,
    }
}
pub fn score_fg() -> Color {
    Color::AnsiValue(46)
}
pub fn warning_fg() -> Color {
    Color::AnsiValue(226)
}
