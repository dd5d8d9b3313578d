// Scroll Model
// One scrolling axis: offset, extent, animated programmatic scrolls and overscroll bounce

use std::time::Instant;

use super::animation::{AnimatedValue, Animation};

/// Scroll position along one axis, in screen units
#[derive(Debug, Clone)]
pub struct ScrollAxis {
    offset: AnimatedValue,
    content_len: f32,
    viewport_len: f32,
    /// How far past the top the user may pull before the bounce
    max_overscroll: f32,
    animation: Animation,
}

impl ScrollAxis {
    pub fn new(animation: Animation, max_overscroll: f32) -> Self {
        Self {
            offset: AnimatedValue::new(0.0),
            content_len: 0.0,
            viewport_len: 0.0,
            max_overscroll: max_overscroll.max(0.0),
            animation,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    /// Final offset of the running animation, or the current offset
    pub fn target(&self) -> f32 {
        self.offset.target()
    }

    pub fn viewport_len(&self) -> f32 {
        self.viewport_len
    }

    /// Largest resting offset
    pub fn max_offset(&self) -> f32 {
        (self.content_len - self.viewport_len).max(0.0)
    }

    /// Update content and viewport sizes after a layout pass
    pub fn set_extent(&mut self, content_len: f32, viewport_len: f32) {
        self.content_len = content_len.max(0.0);
        self.viewport_len = viewport_len.max(0.0);

        if !self.offset.is_animating() && self.offset.get() > self.max_offset() {
            self.offset.set(self.max_offset());
        }
    }

    /// User-driven scroll. Cancels programmatic animation; pulling past the top
    /// overscrolls by at most `max_overscroll` and then springs back.
    pub fn scroll_by(&mut self, delta: f32, now: Instant) {
        let next = (self.offset.get() + delta).clamp(-self.max_overscroll, self.max_offset());
        self.offset.set(next);

        if next < 0.0 {
            self.offset.animate_to(0.0, &self.animation, now);
        }
    }

    /// Animated scroll to `target`, clamped to the resting range
    pub fn scroll_to(&mut self, target: f32, now: Instant) {
        let target = target.clamp(0.0, self.max_offset());
        self.offset.animate_to(target, &self.animation, now);
    }

    pub fn tick(&mut self, now: Instant) {
        self.offset.tick(now);
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn axis() -> ScrollAxis {
        let mut axis = ScrollAxis::new(Animation::ease_in_out(Duration::from_millis(300)), 3.0);
        axis.set_extent(100.0, 20.0);
        axis
    }

    #[test]
    fn test_scroll_by_clamps_to_content() {
        let now = Instant::now();
        let mut axis = axis();

        axis.scroll_by(500.0, now);
        assert_eq!(axis.offset(), 80.0);

        axis.scroll_by(-500.0, now);
        assert_eq!(axis.offset(), -3.0);
    }

    #[test]
    fn test_overscroll_springs_back() {
        let t0 = Instant::now();
        let mut axis = axis();

        axis.scroll_by(-2.0, t0);
        assert_eq!(axis.offset(), -2.0);
        assert!(axis.is_animating());

        axis.tick(t0 + Duration::from_millis(300));
        assert_eq!(axis.offset(), 0.0);
        assert!(!axis.is_animating());
    }

    #[test]
    fn test_scroll_to_animates_and_clamps() {
        let t0 = Instant::now();
        let mut axis = axis();

        axis.scroll_to(1000.0, t0);
        assert_eq!(axis.target(), 80.0);
        assert_eq!(axis.offset(), 0.0);

        axis.tick(t0 + Duration::from_millis(150));
        assert!(axis.offset() > 0.0 && axis.offset() < 80.0);

        axis.tick(t0 + Duration::from_millis(300));
        assert_eq!(axis.offset(), 80.0);
    }

    #[test]
    fn test_user_scroll_cancels_animation() {
        let t0 = Instant::now();
        let mut axis = axis();

        axis.scroll_to(40.0, t0);
        axis.tick(t0 + Duration::from_millis(150));
        let mid = axis.offset();

        axis.scroll_by(1.0, t0 + Duration::from_millis(160));
        assert!(!axis.is_animating());
        assert_eq!(axis.offset(), mid + 1.0);
    }

    #[test]
    fn test_shrinking_content_pulls_offset_back() {
        let now = Instant::now();
        let mut axis = axis();
        axis.scroll_by(80.0, now);

        axis.set_extent(50.0, 20.0);
        assert_eq!(axis.offset(), 30.0);

        axis.set_extent(10.0, 20.0);
        assert_eq!(axis.max_offset(), 0.0);
        assert_eq!(axis.offset(), 0.0);
    }
}
