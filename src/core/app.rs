// Application State
// Screen state and the scroll / tab synchronization that drives it

use std::time::Instant;
use tracing::{debug, info};

use super::animation::{AnimatedValue, Animation, AnimationEndSignal, DeferredQueue};
use super::catalog::{group_by_category, Category, Product, ProductGroup};
use super::geometry::{
    CoordinateSpace, FrameRect, LayoutRegistry, OffsetObserver, OffsetTracker, TrackedView,
    CONTENT_SPACE,
};
use super::resolver::ActiveCategoryResolver;
use super::scroll::ScrollAxis;
use super::sections::{layout_sections, SectionLayout};
use super::tab_strip::TabStripLayout;
use super::AppConfig;

/// Work posted to the next UI turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// The tap-initiated scroll animation reached its end
    TabAnimationEnded,
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: AppConfig,

    /// Static product list
    products: Vec<Product>,

    /// Products grouped per category; filled once on first appearance
    groups: Vec<ProductGroup>,

    /// Row placement of each section
    sections: Vec<SectionLayout>,

    /// Total content height in rows
    content_height: u16,

    /// Highlighted tab
    active_category: Category,

    /// Vertical product list
    content_scroll: ScrollAxis,

    /// Horizontal tab strip
    tab_scroll: ScrollAxis,

    tab_layout: TabStripLayout,

    /// Active tab indicator, slides between tabs
    indicator_x: AnimatedValue,
    indicator_width: AnimatedValue,

    /// Progress of the tap-initiated scroll; non-zero while in flight
    tab_animation: AnimationEndSignal<Deferred>,

    deferred: DeferredQueue<Deferred>,

    resolver: ActiveCategoryResolver,

    /// Frames from the latest layout pass, in the content coordinate space.
    /// A section is only re-resolved when its frame moved since the last pass.
    registry: LayoutRegistry,

    /// Content top when not scrolled
    initial_content_offset: f32,

    /// Content displacement from its initial position
    scroll_offset_delta: f32,

    /// Where the tab strip was laid out, for click detection
    tab_strip_area: Option<FrameRect>,

    animation: Animation,

    /// Time of the current frame
    frame_time: Instant,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create the screen over the sample catalog
    pub fn new(config: AppConfig) -> Self {
        Self::with_products(config, Product::samples())
    }

    pub fn with_products(config: AppConfig, products: Vec<Product>) -> Self {
        let animation = config.animation.animation();
        let tab_layout = TabStripLayout::new(config.tab_strip.padding, config.tab_strip.spacing);
        let active_category = Category::first();
        let (indicator_x, indicator_width) = tab_layout.slot(active_category).indicator();

        Self {
            products,
            groups: Vec::new(),
            sections: Vec::new(),
            content_height: 0,
            active_category,
            content_scroll: ScrollAxis::new(animation, f32::from(config.scroll.max_overscroll)),
            tab_scroll: ScrollAxis::new(animation, 0.0),
            tab_layout,
            indicator_x: AnimatedValue::new(indicator_x),
            indicator_width: AnimatedValue::new(indicator_width),
            tab_animation: AnimationEndSignal::new(animation, Deferred::TabAnimationEnded),
            deferred: DeferredQueue::new(),
            resolver: ActiveCategoryResolver::new(config.scroll.resolver()),
            registry: LayoutRegistry::new(),
            initial_content_offset: 0.0,
            scroll_offset_delta: 0.0,
            tab_strip_area: None,
            animation,
            frame_time: Instant::now(),
            should_quit: false,
            config,
        }
    }

    /// Group products into sections. Does nothing once groups exist.
    pub fn on_appear(&mut self) {
        if !self.groups.is_empty() {
            return;
        }

        self.groups = group_by_category(&self.products);
        let (sections, content_height) = layout_sections(&self.groups);
        self.sections = sections;
        self.content_height = content_height;

        info!(
            products = self.products.len(),
            sections = self.sections.len(),
            content_height,
            "catalog grouped"
        );
    }

    // === Accessors ===

    pub fn groups(&self) -> &[ProductGroup] {
        &self.groups
    }

    pub fn sections(&self) -> &[SectionLayout] {
        &self.sections
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn is_tab_animating(&self) -> bool {
        self.tab_animation.is_animating()
    }

    pub fn content_offset(&self) -> f32 {
        self.content_scroll.offset()
    }

    pub fn tab_offset(&self) -> f32 {
        self.tab_scroll.offset()
    }

    pub fn tab_layout(&self) -> &TabStripLayout {
        &self.tab_layout
    }

    /// Current indicator extent in strip coordinates: (x, width)
    pub fn indicator(&self) -> (f32, f32) {
        (self.indicator_x.get(), self.indicator_width.get())
    }

    pub fn scroll_offset_delta(&self) -> f32 {
        self.scroll_offset_delta
    }

    /// Downward shift applied to the tab strip so it travels with overscrolled content
    pub fn header_offset(&self) -> f32 {
        self.scroll_offset_delta.max(0.0)
    }

    // === Gestures ===

    /// Tap on a tab: highlight it now, then scroll both views to it
    pub fn tap_tab(&mut self, category: Category, now: Instant) {
        debug!(%category, "tab tapped");
        self.frame_time = now;

        self.set_active_category(category, now);
        self.tab_animation.start(1.0, now);

        let target = self.section_scroll_target(category);
        self.content_scroll.scroll_to(target, now);
        self.center_tab(category, now);
    }

    pub fn select_next(&mut self, now: Instant) {
        if let Some(next) = Category::from_index(self.active_category.index() + 1) {
            self.tap_tab(next, now);
        }
    }

    pub fn select_previous(&mut self, now: Instant) {
        if let Some(index) = self.active_category.index().checked_sub(1) {
            if let Some(previous) = Category::from_index(index) {
                self.tap_tab(previous, now);
            }
        }
    }

    /// User scroll of the product list, in rows (positive scrolls down)
    pub fn scroll_by(&mut self, rows: f32, now: Instant) {
        self.content_scroll.scroll_by(rows, now);
    }

    pub fn scroll_up(&mut self, now: Instant) {
        self.scroll_by(-f32::from(self.config.scroll.line_step), now);
    }

    pub fn scroll_down(&mut self, now: Instant) {
        self.scroll_by(f32::from(self.config.scroll.line_step), now);
    }

    pub fn page_up(&mut self, now: Instant) {
        self.scroll_by(-f32::from(self.config.scroll.page_step), now);
    }

    pub fn page_down(&mut self, now: Instant) {
        self.scroll_by(f32::from(self.config.scroll.page_step), now);
    }

    pub fn scroll_to_top(&mut self, now: Instant) {
        self.content_scroll.scroll_to(0.0, now);
    }

    pub fn scroll_to_bottom(&mut self, now: Instant) {
        self.content_scroll.scroll_to(self.content_scroll.max_offset(), now);
    }

    /// Left click at a screen cell; taps the tab under it, if any
    pub fn click(&mut self, column: u16, row: u16, now: Instant) {
        let Some(area) = self.tab_strip_area else {
            return;
        };
        let (x, y) = (f32::from(column), f32::from(row) - self.header_offset());
        if x < area.x || x >= area.x + area.width || y < area.min_y() || y >= area.max_y() {
            return;
        }
        if let Some(category) = self.tab_layout.tab_at(x - area.x + self.tab_scroll.offset()) {
            self.tap_tab(category, now);
        }
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // === Frame loop ===

    /// Advance one UI turn: run work deferred by the previous turn, then step animations
    pub fn tick(&mut self, now: Instant) {
        self.frame_time = now;

        for message in self.deferred.drain() {
            match message {
                Deferred::TabAnimationEnded => {
                    if self.tab_animation.finish() {
                        debug!(active = %self.active_category, "tab animation finished");
                    }
                }
            }
        }

        self.content_scroll.tick(now);
        self.tab_scroll.tick(now);
        self.indicator_x.tick(now);
        self.indicator_width.tick(now);
        self.tab_animation.update(now, &mut self.deferred);
    }

    /// Layout pass: size both scroll views and report every tracked frame
    pub fn layout(&mut self, content_area: FrameRect, tab_strip_area: FrameRect, now: Instant) {
        self.frame_time = now;
        self.tab_strip_area = Some(tab_strip_area);

        self.content_scroll
            .set_extent(f32::from(self.content_height), content_area.height);
        self.tab_scroll
            .set_extent(self.tab_layout.content_width(), tab_strip_area.width);

        let tracker = OffsetTracker::new(CoordinateSpace::named(
            CONTENT_SPACE,
            content_area.x,
            content_area.min_y(),
        ));

        tracker.report(TrackedView::Viewport, content_area, self);

        let content_top = content_area.min_y() - self.content_scroll.offset();
        let content = FrameRect::new(
            content_area.x,
            content_top,
            content_area.width,
            f32::from(self.content_height),
        );
        tracker.report(TrackedView::Content, content, self);

        for idx in 0..self.sections.len() {
            let section = self.sections[idx];
            let frame = FrameRect::new(
                content_area.x,
                content_top + f32::from(section.top),
                content_area.width,
                f32::from(section.height),
            );
            tracker.report(TrackedView::Section(section.category), frame, self);
        }
    }

    // === Internals ===

    fn set_active_category(&mut self, category: Category, now: Instant) {
        if category == self.active_category {
            return;
        }
        debug!(from = %self.active_category, to = %category, "active category changed");
        self.active_category = category;

        let (x, width) = self.tab_layout.slot(category).indicator();
        self.indicator_x.animate_to(x, &self.animation, now);
        self.indicator_width.animate_to(width, &self.animation, now);
        self.center_tab(category, now);
    }

    fn center_tab(&mut self, category: Category, now: Instant) {
        let target = self
            .tab_layout
            .centering_offset(category, self.tab_scroll.viewport_len());
        self.tab_scroll.scroll_to(target, now);
    }

    /// Content offset that brings the section's top to the top of the viewport
    fn section_scroll_target(&self, category: Category) -> f32 {
        self.sections
            .iter()
            .find(|s| s.category == category)
            .map(|s| f32::from(s.top))
            .unwrap_or(0.0)
    }
}

impl OffsetObserver for App {
    fn offset_changed(&mut self, view: TrackedView, frame: FrameRect) {
        let previous = self.registry.get(view);
        self.registry.update(view, frame);

        match view {
            TrackedView::Viewport => {
                self.initial_content_offset = frame.min_y();
            }
            TrackedView::Content => {
                self.scroll_offset_delta = frame.min_y() - self.initial_content_offset;
            }
            TrackedView::Section(section) => {
                if previous == Some(frame) {
                    return;
                }
                let next = self.resolver.resolve(
                    section,
                    &frame,
                    self.active_category,
                    self.is_tab_animating(),
                );
                if let Some(category) = next {
                    self.set_active_category(category, self.frame_time);
                }
            }
        }
    }
}
