// Product List Component
// Renders the category sections inside the scrolled viewport

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Styles;
use crate::core::sections::{PRODUCT_ROWS, ROW_GAP, SECTION_PADDING, SECTION_SPACING};
use crate::core::{App, Product, ProductGroup};

/// Columns of left indent for section content
const INDENT: &str = "  ";

/// Render the product sections scrolled to the app's content offset
pub fn render_product_list(f: &mut Frame, app: &App, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let lines = content_lines(app.groups());
    let offset = app.content_offset().round();

    // Pulled past the top: the content starts further down the viewport
    let (area, scroll_y) = if offset < 0.0 {
        let shift = (-offset as u16).min(area.height);
        (
            Rect {
                y: area.y + shift,
                height: area.height - shift,
                ..area
            },
            0,
        )
    } else {
        (area, offset as u16)
    };

    let list = Paragraph::new(lines).scroll((scroll_y, 0));
    f.render_widget(list, area);
}

/// Every content row, matching the heights from `sections::layout_sections`
pub fn content_lines(groups: &[ProductGroup]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (idx, group) in groups.iter().enumerate() {
        if idx > 0 {
            blank(&mut lines, SECTION_SPACING);
        }
        blank(&mut lines, SECTION_PADDING);

        if !group.is_empty() {
            lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(group.category().label(), Styles::section_heading()),
            ]));
            for product in &group.products {
                blank(&mut lines, ROW_GAP);
                lines.extend(product_rows(product));
            }
        }

        blank(&mut lines, SECTION_PADDING);
    }

    lines
}

fn product_rows(product: &Product) -> [Line<'static>; PRODUCT_ROWS as usize] {
    [
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled(product.title.clone(), Styles::product_title()),
        ]),
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled(product.subtitle.clone(), Styles::product_subtitle()),
        ]),
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled(product.price.clone(), Styles::product_price()),
        ]),
    ]
}

fn blank(lines: &mut Vec<Line<'static>>, rows: u16) {
    lines.extend((0..rows).map(|_| Line::default()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::group_by_category;
    use crate::core::sections::layout_sections;

    #[test]
    fn test_line_count_matches_section_layout() {
        let groups = group_by_category(&Product::samples());
        let (_, content_height) = layout_sections(&groups);

        assert_eq!(content_lines(&groups).len(), content_height as usize);
    }

    #[test]
    fn test_line_count_with_empty_groups() {
        let groups = group_by_category(&Product::samples()[..1]);
        let (layouts, content_height) = layout_sections(&groups);

        assert_eq!(content_lines(&groups).len(), content_height as usize);
        assert_eq!(layouts[1].height, SECTION_PADDING * 2);
    }
}
