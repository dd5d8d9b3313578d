// Tab Strip Layout
// Horizontal placement of category tabs, centering targets and hit testing

use super::catalog::Category;

/// Horizontal extent of one tab in strip coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabSlot {
    pub category: Category,
    pub x: f32,
    pub width: f32,
    /// Columns between the slot edge and the label
    pub padding: f32,
}

impl TabSlot {
    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn contains(&self, x: f32) -> bool {
        x >= self.x && x < self.x + self.width
    }

    /// Extent of the active indicator: the label plus one column either side
    pub fn indicator(&self) -> (f32, f32) {
        let inset = (self.padding - 1.0).max(0.0);
        (self.x + inset, self.width - inset * 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabStripLayout {
    slots: Vec<TabSlot>,
    content_width: f32,
}

impl TabStripLayout {
    pub fn new(padding: u16, spacing: u16) -> Self {
        let padding = f32::from(padding);
        let spacing = f32::from(spacing);

        let mut slots = Vec::with_capacity(Category::ALL.len());
        let mut x = 0.0;
        for (idx, category) in Category::ALL.iter().enumerate() {
            if idx > 0 {
                x += spacing;
            }
            let width = category.label().len() as f32 + padding * 2.0;
            slots.push(TabSlot {
                category: *category,
                x,
                width,
                padding,
            });
            x += width;
        }

        Self {
            slots,
            content_width: x,
        }
    }

    pub fn slots(&self) -> &[TabSlot] {
        &self.slots
    }

    pub fn slot(&self, category: Category) -> TabSlot {
        self.slots[category.index()]
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Strip offset that puts the tab's center in the middle of the viewport
    /// (unclamped; the scroll axis clamps it)
    pub fn centering_offset(&self, category: Category, viewport_width: f32) -> f32 {
        self.slot(category).center() - viewport_width / 2.0
    }

    /// Tab under strip coordinate `x`
    pub fn tab_at(&self, x: f32) -> Option<Category> {
        self.slots.iter().find(|slot| slot.contains(x)).map(|slot| slot.category)
    }
}
