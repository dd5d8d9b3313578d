// Animation
// Tween controller, one-shot completion signal and the next-turn deferred queue

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Timing curve applied to normalized progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out
    EaseInOut,
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Duration and curve shared by every animation on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub duration: Duration,
    pub easing: Easing,
}

impl Animation {
    pub fn ease_in_out(duration: Duration) -> Self {
        Self {
            duration,
            easing: Easing::EaseInOut,
        }
    }

    pub fn tween(&self, from: f32, to: f32, now: Instant) -> Tween {
        Tween {
            from,
            to,
            started_at: now,
            duration: self.duration,
            easing: self.easing,
        }
    }
}

/// Interpolates a value from `from` to `to` over `duration`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Normalized time in [0, 1]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Current value; exactly the target once the duration has elapsed
    pub fn value_at(&self, now: Instant) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    /// Continue from the current value toward a new target, restarting the clock
    pub fn retarget(&mut self, now: Instant, to: f32) {
        self.from = self.value_at(now);
        self.to = to;
        self.started_at = now;
    }
}

/// A value that either sits still or follows a tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    value: f32,
    tween: Option<Tween>,
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        Self { value, tween: None }
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    /// Where the value is heading, or where it is when still
    pub fn target(&self) -> f32 {
        self.tween.map(|t| t.target()).unwrap_or(self.value)
    }

    /// Jump without animating; cancels any tween
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.tween = None;
    }

    /// Animate to `target`, re-targeting a tween that is already running
    pub fn animate_to(&mut self, target: f32, animation: &Animation, now: Instant) {
        match self.tween.as_mut() {
            Some(tween) => tween.retarget(now, target),
            None => self.tween = Some(animation.tween(self.value, target, now)),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(tween) = self.tween {
            self.value = tween.value_at(now);
            if tween.is_finished(now) {
                self.tween = None;
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }
}

/// Work postponed to the next UI turn
#[derive(Debug)]
pub struct DeferredQueue<M> {
    pending: VecDeque<M>,
}

impl<M> Default for DeferredQueue<M> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }
}

impl<M> DeferredQueue<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: M) {
        self.pending.push_back(message);
    }

    /// Take everything queued so far; items pushed while handling them wait a turn
    pub fn drain(&mut self) -> Vec<M> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalState {
    Idle,
    Animating,
}

/// Animatable progress value that posts `on_end` once it reaches its target.
///
/// Idle → Animating when [`start`](Self::start) moves the value away from 0;
/// back to Idle when the deferred completion calls [`finish`](Self::finish),
/// which resets the value to 0.
#[derive(Debug, Clone)]
pub struct AnimationEndSignal<M: Clone> {
    animation: Animation,
    value: f32,
    end_value: f32,
    tween: Option<Tween>,
    completion_scheduled: bool,
    on_end: M,
}

impl<M: Clone> AnimationEndSignal<M> {
    pub fn new(animation: Animation, on_end: M) -> Self {
        Self {
            animation,
            value: 0.0,
            end_value: 0.0,
            tween: None,
            completion_scheduled: false,
            on_end,
        }
    }

    /// Animate toward `target`. An in-flight animation is re-targeted and any
    /// completion it already posted becomes stale.
    pub fn start(&mut self, target: f32, now: Instant) {
        self.tween = Some(match self.tween.take() {
            Some(mut tween) => {
                tween.retarget(now, target);
                tween
            }
            None => self.animation.tween(self.value, target, now),
        });
        self.end_value = target;
        self.completion_scheduled = false;
    }

    /// Advance one frame. Posts the completion when the value lands on its target.
    pub fn update(&mut self, now: Instant, queue: &mut DeferredQueue<M>) {
        let Some(tween) = self.tween else {
            return;
        };

        self.value = tween.value_at(now);

        if tween.is_finished(now) && self.value == self.end_value {
            self.tween = None;
            if !self.completion_scheduled {
                self.completion_scheduled = true;
                queue.push(self.on_end.clone());
            }
        }
    }

    /// Handle the posted completion. Returns false for a stale completion.
    pub fn finish(&mut self) -> bool {
        if self.tween.is_some() || !self.completion_scheduled {
            return false;
        }
        self.completion_scheduled = false;
        self.value = 0.0;
        self.end_value = 0.0;
        true
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn state(&self) -> SignalState {
        if self.tween.is_some() || self.value != 0.0 {
            SignalState::Animating
        } else {
            SignalState::Idle
        }
    }

    pub fn is_animating(&self) -> bool {
        self.state() == SignalState::Animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_300: Duration = Duration::from_millis(300);

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Done,
    }

    #[test]
    fn test_ease_in_out_endpoints_and_midpoint() {
        let easing = Easing::EaseInOut;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        assert!((easing.apply(0.5) - 0.5).abs() < 1e-6);
        assert!(easing.apply(0.25) < 0.25);
        assert!(easing.apply(0.75) > 0.75);
    }

    #[test]
    fn test_tween_lands_exactly_on_target() {
        let t0 = Instant::now();
        let tween = Animation::ease_in_out(MS_300).tween(0.0, 17.3, t0);

        assert_eq!(tween.value_at(t0), 0.0);
        let mid = tween.value_at(t0 + Duration::from_millis(150));
        assert!(mid > 0.0 && mid < 17.3);
        assert_eq!(tween.value_at(t0 + MS_300), 17.3);
        assert_eq!(tween.value_at(t0 + Duration::from_secs(5)), 17.3);
    }

    #[test]
    fn test_tween_retarget_starts_from_current_value() {
        let t0 = Instant::now();
        let mut tween = Animation::ease_in_out(MS_300).tween(0.0, 10.0, t0);
        let t1 = t0 + Duration::from_millis(150);
        let current = tween.value_at(t1);

        tween.retarget(t1, 20.0);

        assert_eq!(tween.value_at(t1), current);
        assert!(!tween.is_finished(t0 + MS_300));
        assert_eq!(tween.value_at(t1 + MS_300), 20.0);
    }

    #[test]
    fn test_animated_value_follows_and_settles() {
        let t0 = Instant::now();
        let animation = Animation::ease_in_out(MS_300);
        let mut value = AnimatedValue::new(4.0);

        value.animate_to(10.0, &animation, t0);
        assert_eq!(value.target(), 10.0);

        value.tick(t0 + Duration::from_millis(150));
        assert!(value.get() > 4.0 && value.get() < 10.0);
        assert!(value.is_animating());

        value.tick(t0 + MS_300);
        assert_eq!(value.get(), 10.0);
        assert!(!value.is_animating());

        value.set(2.0);
        assert_eq!(value.target(), 2.0);
    }

    #[test]
    fn test_deferred_queue_is_fifo() {
        let mut queue = DeferredQueue::new();
        queue.push(1);
        queue.push(2);

        assert_eq!(queue.drain(), vec![1, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_signal_completes_once_on_next_turn() {
        let t0 = Instant::now();
        let mut queue = DeferredQueue::new();
        let mut signal = AnimationEndSignal::new(Animation::ease_in_out(MS_300), Msg::Done);

        assert_eq!(signal.state(), SignalState::Idle);
        signal.start(1.0, t0);
        assert_eq!(signal.state(), SignalState::Animating);

        signal.update(t0 + Duration::from_millis(100), &mut queue);
        assert!(queue.is_empty());

        // Reaching the target posts the completion but does not run it
        signal.update(t0 + MS_300, &mut queue);
        signal.update(t0 + Duration::from_millis(316), &mut queue);
        assert_eq!(queue.len(), 1);
        assert!(signal.is_animating());

        assert_eq!(queue.drain(), vec![Msg::Done]);
        assert!(signal.finish());
        assert_eq!(signal.state(), SignalState::Idle);
        assert_eq!(signal.value(), 0.0);

        // A second finish is a no-op
        assert!(!signal.finish());
    }

    #[test]
    fn test_restart_invalidates_posted_completion() {
        let t0 = Instant::now();
        let mut queue = DeferredQueue::new();
        let mut signal = AnimationEndSignal::new(Animation::ease_in_out(MS_300), Msg::Done);

        signal.start(1.0, t0);
        signal.update(t0 + MS_300, &mut queue);
        assert_eq!(queue.len(), 1);

        let t1 = t0 + Duration::from_millis(310);
        signal.start(1.0, t1);
        queue.drain();
        assert!(!signal.finish());
        assert!(signal.is_animating());

        signal.update(t1 + MS_300, &mut queue);
        assert_eq!(queue.drain(), vec![Msg::Done]);
        assert!(signal.finish());
        assert!(!signal.is_animating());
    }
}
