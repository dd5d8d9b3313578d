// Section Layout
// Vertical placement of category sections inside the scrolled content

use super::catalog::{Category, ProductGroup};

/// Blank rows above and below a section's body
pub const SECTION_PADDING: u16 = 1;
/// Rows between two sections
pub const SECTION_SPACING: u16 = 1;
/// Rows of the section heading
pub const HEADING_ROWS: u16 = 1;
/// Rows between the heading and a product, and between products
pub const ROW_GAP: u16 = 1;
/// Title, subtitle and price
pub const PRODUCT_ROWS: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub category: Category,
    /// First row of the section in content coordinates
    pub top: u16,
    pub height: u16,
}

/// Height of a section; an empty group keeps only its padding
pub fn section_height(group: &ProductGroup) -> u16 {
    let body = if group.is_empty() {
        0
    } else {
        HEADING_ROWS + group.len() as u16 * (ROW_GAP + PRODUCT_ROWS)
    };
    SECTION_PADDING * 2 + body
}

/// Stack sections top to bottom. Returns the layouts and the total content height.
pub fn layout_sections(groups: &[ProductGroup]) -> (Vec<SectionLayout>, u16) {
    let mut layouts = Vec::with_capacity(groups.len());
    let mut top = 0u16;

    for (idx, group) in groups.iter().enumerate() {
        if idx > 0 {
            top += SECTION_SPACING;
        }
        let height = section_height(group);
        layouts.push(SectionLayout {
            category: group.section(),
            top,
            height,
        });
        top += height;
    }

    (layouts, top)
}
