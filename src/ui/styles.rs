// UI Styles
// Color scheme and styling for the catalog screen

use ratatui::style::{Color, Modifier, Style};

/// Accent used by the title bar and tab strip
pub const ACCENT: Color = Color::Rgb(128, 0, 128);

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Title / Status ===

    pub fn title_bar() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn status_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    // === Tab Strip ===

    pub fn tab_strip() -> Style {
        Style::default().fg(Color::White).bg(ACCENT)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Color::Rgb(210, 180, 210))
    }

    pub fn tab_indicator() -> Style {
        Style::default().fg(Color::White)
    }

    // === Product List ===

    pub fn section_heading() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn product_title() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn product_subtitle() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn product_price() -> Style {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    }
}
