// Layout Geometry
// Frames measured relative to named coordinate spaces, reported on every layout pass
//
// Usage:
//   let tracker = OffsetTracker::new(CoordinateSpace::named(CONTENT_SPACE, origin_x, origin_y));
//   tracker.report(TrackedView::Content, content_frame, &mut app);
//   // app.offset_changed(TrackedView::Content, frame_relative_to_space) runs every time

use std::collections::HashMap;
use tracing::trace;

use super::catalog::Category;

/// Name of the coordinate space rooted at the top of the scroll viewport
pub const CONTENT_SPACE: &str = "CONTENTVIEW";

/// Axis-aligned rectangle in screen units (rows / columns)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FrameRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// The same rectangle expressed in `space`'s coordinates
    pub fn relative_to(&self, space: &CoordinateSpace) -> FrameRect {
        FrameRect {
            x: self.x - space.origin_x,
            y: self.y - space.origin_y,
            ..*self
        }
    }
}

/// A named reference frame; frames reported against it are offset by its origin
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSpace {
    pub name: String,
    pub origin_x: f32,
    pub origin_y: f32,
}

impl CoordinateSpace {
    pub fn named(name: &str, origin_x: f32, origin_y: f32) -> Self {
        Self {
            name: name.to_string(),
            origin_x,
            origin_y,
        }
    }
}

/// Views whose frames are tracked during a layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackedView {
    /// The scroll view itself; its frame gives the initial content position
    Viewport,
    /// The scrolled content stack
    Content,
    /// One category section inside the content
    Section(Category),
}

/// Receives measured frames; called once per tracked view per layout pass
pub trait OffsetObserver {
    fn offset_changed(&mut self, view: TrackedView, frame: FrameRect);
}

/// Converts global frames into a named space and forwards every measurement
#[derive(Debug, Clone)]
pub struct OffsetTracker {
    space: CoordinateSpace,
}

impl OffsetTracker {
    pub fn new(space: CoordinateSpace) -> Self {
        Self { space }
    }

    /// Report a frame. No filtering: unchanged frames are delivered too.
    pub fn report<O: OffsetObserver + ?Sized>(
        &self,
        view: TrackedView,
        global_frame: FrameRect,
        observer: &mut O,
    ) {
        let frame = global_frame.relative_to(&self.space);
        trace!(space = %self.space.name, ?view, y = frame.min_y(), "frame reported");
        observer.offset_changed(view, frame);
    }
}

/// Latest measured frame per view (last write wins)
#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    frames: HashMap<TrackedView, FrameRect>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, view: TrackedView, frame: FrameRect) {
        self.frames.insert(view, frame);
    }

    pub fn get(&self, view: TrackedView) -> Option<FrameRect> {
        self.frames.get(&view).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<(TrackedView, FrameRect)>,
    }

    impl OffsetObserver for Recorder {
        fn offset_changed(&mut self, view: TrackedView, frame: FrameRect) {
            self.seen.push((view, frame));
        }
    }

    #[test]
    fn test_frame_is_reported_relative_to_space() {
        let tracker = OffsetTracker::new(CoordinateSpace::named(CONTENT_SPACE, 2.0, 7.0));
        let mut recorder = Recorder::default();

        tracker.report(TrackedView::Content, FrameRect::new(2.0, 4.0, 80.0, 30.0), &mut recorder);

        assert_eq!(recorder.seen.len(), 1);
        let (_, frame) = recorder.seen[0];
        assert_eq!(frame.min_y(), -3.0);
        assert_eq!(frame.x, 0.0);
        assert_eq!(frame.height, 30.0);
        assert_eq!(frame.mid_y(), 12.0);
    }

    #[test]
    fn test_every_report_is_delivered() {
        let tracker = OffsetTracker::new(CoordinateSpace::named(CONTENT_SPACE, 0.0, 0.0));
        let mut recorder = Recorder::default();
        let frame = FrameRect::new(0.0, 1.0, 10.0, 10.0);

        tracker.report(TrackedView::Viewport, frame, &mut recorder);
        tracker.report(TrackedView::Viewport, frame, &mut recorder);

        assert_eq!(recorder.seen.len(), 2);
    }

    #[test]
    fn test_registry_keeps_latest_frame() {
        let mut registry = LayoutRegistry::new();
        let view = TrackedView::Section(Category::Phone);
        registry.update(view, FrameRect::new(0.0, 0.0, 10.0, 5.0));
        registry.update(view, FrameRect::new(0.0, -4.0, 10.0, 5.0));

        assert_eq!(registry.get(view).map(|f| f.min_y()), Some(-4.0));
        assert_eq!(registry.get(TrackedView::Content), None);
    }
}
