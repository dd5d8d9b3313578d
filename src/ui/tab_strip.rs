// Tab Strip Component
// Horizontally scrolled category tabs with a sliding active indicator

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::Styles;
use crate::core::App;

/// Glyph drawn under the active tab
const INDICATOR: char = '━';

/// Render the tab strip into `area`: a blank row, the labels, then the indicator
pub fn render_tab_strip(f: &mut Frame, app: &App, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let layout = app.tab_layout();
    let active = app.active_category();

    let mut labels: Vec<Span> = Vec::with_capacity(layout.slots().len() * 2);
    let mut cursor = 0.0;
    for slot in layout.slots() {
        if slot.x > cursor {
            labels.push(Span::raw(" ".repeat((slot.x - cursor) as usize)));
        }
        let pad = " ".repeat(slot.padding as usize);
        let style = if slot.category == active {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        labels.push(Span::styled(
            format!("{}{}{}", pad, slot.category.label(), pad),
            style,
        ));
        cursor = slot.x + slot.width;
    }

    let lines = vec![
        Line::default(),
        Line::from(labels),
        Line::from(Span::styled(
            indicator_row(app.indicator(), layout.content_width()),
            Styles::tab_indicator(),
        )),
    ];

    let scroll_x = app.tab_offset().round().max(0.0) as u16;
    let strip = Paragraph::new(lines)
        .style(Styles::tab_strip())
        .scroll((0, scroll_x));

    f.render_widget(Clear, area);
    f.render_widget(strip, area);
}

/// One row of the strip's full width with the indicator drawn over (x, width)
fn indicator_row((x, width): (f32, f32), content_width: f32) -> String {
    let total = content_width.round().max(0.0) as usize;
    let start = x.round().max(0.0) as usize;
    let end = ((x + width).round().max(0.0) as usize).min(total);

    (0..total)
        .map(|col| if col >= start && col < end { INDICATOR } else { ' ' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_row_marks_span() {
        assert_eq!(indicator_row((1.0, 3.0), 6.0), " ━━━  ");
    }

    #[test]
    fn test_indicator_row_clips_to_strip() {
        assert_eq!(indicator_row((4.0, 10.0), 6.0), "    ━━");
        assert_eq!(indicator_row((-2.0, 3.0), 4.0), "━   ");
    }
}
