// Active-Category Resolver
// Decides which section's category should be highlighted from its measured frame

use super::app_config::compiled;
use super::catalog::Category;
use super::geometry::FrameRect;

/// Tuning for section activation. Values are in screen rows and tuned for the
/// row heights this screen uses; they do not scale with terminal size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverConfig {
    /// A section becomes eligible once its top is above this line
    pub activation_threshold: f32,
    /// ...and stays eligible while less than this share of its height has scrolled away
    pub height_fraction: f32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            activation_threshold: compiled::ACTIVATION_THRESHOLD,
            height_fraction: compiled::SECTION_HEIGHT_FRACTION,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActiveCategoryResolver {
    config: ResolverConfig,
}

impl ActiveCategoryResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Whether a section frame (relative to the scroll viewport) sits at the top
    pub fn is_at_top(&self, frame: &FrameRect) -> bool {
        let min_y = frame.min_y();
        min_y < self.config.activation_threshold
            && min_y.abs() < frame.height * self.config.height_fraction
    }

    /// The category to switch to for this section report, if any
    pub fn resolve(
        &self,
        section: Category,
        frame: &FrameRect,
        active: Category,
        tab_animating: bool,
    ) -> Option<Category> {
        if tab_animating || section == active {
            return None;
        }
        self.is_at_top(frame).then_some(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ActiveCategoryResolver {
        ActiveCategoryResolver::new(ResolverConfig {
            activation_threshold: 2.0,
            height_fraction: 0.5,
        })
    }

    fn section_at(min_y: f32, height: f32) -> FrameRect {
        FrameRect::new(0.0, min_y, 80.0, height)
    }

    #[test]
    fn test_section_at_top_becomes_active() {
        let frame = section_at(1.0, 10.0);
        assert_eq!(
            resolver().resolve(Category::Tablet, &frame, Category::Phone, false),
            Some(Category::Tablet)
        );
    }

    #[test]
    fn test_section_below_threshold_is_ignored() {
        let frame = section_at(2.0, 10.0);
        assert_eq!(resolver().resolve(Category::Tablet, &frame, Category::Phone, false), None);
    }

    #[test]
    fn test_section_mostly_scrolled_away_is_ignored() {
        let frame = section_at(-5.0, 10.0);
        assert_eq!(resolver().resolve(Category::Tablet, &frame, Category::Phone, false), None);

        let frame = section_at(-4.9, 10.0);
        assert_eq!(
            resolver().resolve(Category::Tablet, &frame, Category::Phone, false),
            Some(Category::Tablet)
        );
    }

    #[test]
    fn test_already_active_is_not_resolved_again() {
        let frame = section_at(0.0, 10.0);
        assert_eq!(resolver().resolve(Category::Phone, &frame, Category::Phone, false), None);
    }

    #[test]
    fn test_tab_animation_suppresses_resolution() {
        let frame = section_at(0.0, 10.0);
        assert_eq!(resolver().resolve(Category::Tablet, &frame, Category::Phone, true), None);
    }
}
