use ratatui::style::{Color, Modifier, Style};

pub(crate) const YEAR_BAR: Color = Color::Rgb(166, 227, 161);
pub(crate) const MONTH_BAR: Color = Color::Rgb(137, 180, 250);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);

pub(crate) fn title_style() -> Style {
    Style::default()
        .fg(TEXT_DIM)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn value_style() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(OVERLAY)
}
