// App View
// Top-level screen layout and rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::product_list::render_product_list;
use super::tab_strip::render_tab_strip;
use super::Styles;
use crate::core::geometry::FrameRect;
use crate::core::App;

/// Rows of the tab strip: padding, labels, indicator
pub const TAB_STRIP_ROWS: u16 = 3;

/// Areas of the screen, split once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub tab_strip: Rect,
    pub content: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(TAB_STRIP_ROWS),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            title: chunks[0],
            tab_strip: chunks[1],
            content: chunks[2],
            status: chunks[3],
        }
    }
}

/// Screen rectangle as layout geometry
pub fn frame_rect(area: Rect) -> FrameRect {
    FrameRect::new(
        f32::from(area.x),
        f32::from(area.y),
        f32::from(area.width),
        f32::from(area.height),
    )
}

/// Render the whole screen
pub fn render_app(f: &mut Frame, app: &App, layout: &ScreenLayout) {
    let title = Paragraph::new(format!(" {}", app.config.application.title))
        .style(Styles::title_bar());
    f.render_widget(title, layout.title);

    render_product_list(f, app, layout.content);

    // Sticky header: shifted down while the content is pulled past its top
    let shift = (app.header_offset().round() as u16).min(layout.content.height);
    if shift > 0 {
        let vacated = Rect {
            height: shift,
            ..layout.tab_strip
        };
        f.render_widget(Block::default(), vacated);
    }
    let strip_area = Rect {
        y: layout.tab_strip.y + shift,
        ..layout.tab_strip
    };
    render_tab_strip(f, app, strip_area);

    render_status_bar(f, app, layout.status);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.active_category()),
        Styles::tab_active(),
    )];

    for binding in &app.config.application.bindings {
        spans.push(Span::styled(format!(" {}", binding.key), Styles::status_key()));
        spans.push(Span::styled(format!(" {}", binding.description), Styles::status_bar()));
    }

    if app.config.application.bindings.is_empty() {
        spans.push(Span::styled(
            app.config.application.status_bar.default_text.clone(),
            Styles::status_bar(),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let now = Instant::now();
        terminal
            .draw(|f| {
                let layout = ScreenLayout::new(f.area());
                app.layout(frame_rect(layout.content), frame_rect(layout.tab_strip), now);
                render_app(f, app, &layout);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_layout_splits_screen() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.title.height, 1);
        assert_eq!(layout.tab_strip.y, 1);
        assert_eq!(layout.content.y, 1 + TAB_STRIP_ROWS);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_renders_tabs_and_first_section() {
        let mut app = App::new(AppConfig::default());
        app.on_appear();

        let screen = draw(&mut app, 80, 24);

        assert!(screen.contains(&app.config.application.title));
        assert!(screen.contains("Phone"));
        assert!(screen.contains("Tablet"));
        assert!(screen.contains("Pocket Pro"));
        assert!(screen.contains('━'));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = App::new(AppConfig::default());
        app.on_appear();

        draw(&mut app, 10, 3);
    }
}
