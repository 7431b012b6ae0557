//! Simulated page-swiping container.
//!
//! Reports scroll progress the way a pager widget does: the page under the
//! left edge of the viewport plus the fraction of the next page that is
//! showing. Positive drag distances move toward later pages.

use circle_indicator::{CircleIndicator, IndicatorColor, Widget};

/// Frames emitted while a released drag settles onto a page.
pub const SETTLE_STEPS: u32 = 4;

/// Receives pager callbacks.
pub trait PagerListener {
    /// `offset` is in `[0, 1)`, the fraction of page `position + 1` in view.
    fn on_page_scrolled(&mut self, position: usize, offset: f32);
    /// A new page was chosen when the gesture ended.
    fn on_page_selected(&mut self, position: usize);
}

/// Which pager callback an indicator follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Follow {
    /// Every scroll frame, via `set_position_offset`.
    Scroll,
    /// Page selection only, via `set_position`.
    Selection,
}

/// An indicator wired to one pager callback.
#[derive(Debug, Clone)]
pub struct IndicatorBinding<C> {
    pub follow: Follow,
    pub indicator: CircleIndicator<C>,
}

impl<C: IndicatorColor> IndicatorBinding<C> {
    pub fn new(follow: Follow, indicator: CircleIndicator<C>) -> Self {
        Self { follow, indicator }
    }

    pub fn is_dirty(&self) -> bool {
        self.indicator.is_dirty()
    }
}

impl<C: IndicatorColor> PagerListener for IndicatorBinding<C> {
    fn on_page_scrolled(&mut self, position: usize, offset: f32) {
        if self.follow == Follow::Scroll {
            self.indicator.set_position_offset(position, offset);
        }
    }

    fn on_page_selected(&mut self, position: usize) {
        if self.follow == Follow::Selection {
            self.indicator.set_position(position);
        }
    }
}

impl<L: PagerListener> PagerListener for [L] {
    fn on_page_scrolled(&mut self, position: usize, offset: f32) {
        for listener in self.iter_mut() {
            listener.on_page_scrolled(position, offset);
        }
    }

    fn on_page_selected(&mut self, position: usize) {
        for listener in self.iter_mut() {
            listener.on_page_selected(position);
        }
    }
}

impl<L: PagerListener> PagerListener for Vec<L> {
    fn on_page_scrolled(&mut self, position: usize, offset: f32) {
        self.as_mut_slice().on_page_scrolled(position, offset);
    }

    fn on_page_selected(&mut self, position: usize) {
        self.as_mut_slice().on_page_selected(position);
    }
}

/// Horizontal pager over `page_count` pages of `page_width` pixels.
#[derive(Debug, Clone)]
pub struct PagerHost {
    page_count: usize,
    page_width: u32,
    scroll: f32,
    selected: usize,
}

impl PagerHost {
    /// `page_count` and `page_width` are raised to at least 1.
    pub fn new(page_count: usize, page_width: u32) -> Self {
        Self {
            page_count: page_count.max(1),
            page_width: page_width.max(1),
            scroll: 0.0,
            selected: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn page_width(&self) -> u32 {
        self.page_width
    }

    /// Scroll distance from the left edge of page 0, in pixels.
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Last page reported through `on_page_selected`.
    pub fn selected_page(&self) -> usize {
        self.selected
    }

    /// Current `(position, offset)` as reported to listeners.
    pub fn scroll_position(&self) -> (usize, f32) {
        let pages = self.scroll / self.page_width as f32;
        let last = self.page_count - 1;
        let position = (pages as usize).min(last);
        if position == last {
            return (last, 0.0);
        }
        (position, pages - position as f32)
    }

    /// Move the content by `dx` pixels, clamped to the first and last page.
    pub fn drag_by<L: PagerListener + ?Sized>(&mut self, dx: f32, listener: &mut L) {
        self.scroll = (self.scroll + dx).clamp(0.0, self.max_scroll());
        self.emit_scrolled(listener);
    }

    /// End the gesture: select the nearest page and settle onto it.
    ///
    /// Returns the settled page.
    pub fn release<L: PagerListener + ?Sized>(&mut self, listener: &mut L) -> usize {
        let pages = self.scroll / self.page_width as f32;
        let target = ((pages + 0.5) as usize).min(self.page_count - 1);
        if target != self.selected {
            self.selected = target;
            log::debug!("page selected {target}");
            listener.on_page_selected(target);
        }

        let start = self.scroll;
        let end = self.page_scroll(target);
        for step in 1..SETTLE_STEPS {
            self.scroll = start + (end - start) * step as f32 / SETTLE_STEPS as f32;
            self.emit_scrolled(listener);
        }
        self.scroll = end;
        self.emit_scrolled(listener);
        target
    }

    /// Script a whole gesture: drag to `page` in `steps` frames, then release.
    pub fn swipe_to<L: PagerListener + ?Sized>(
        &mut self,
        page: usize,
        steps: u32,
        listener: &mut L,
    ) -> usize {
        let page = page.min(self.page_count - 1);
        let distance = self.page_scroll(page) - self.scroll;
        let steps = steps.max(1);
        for _ in 0..steps {
            self.drag_by(distance / steps as f32, listener);
        }
        // Drop accumulated rounding before settling
        self.scroll = self.page_scroll(page);
        self.release(listener)
    }

    fn page_scroll(&self, page: usize) -> f32 {
        page as f32 * self.page_width as f32
    }

    fn max_scroll(&self) -> f32 {
        self.page_scroll(self.page_count - 1)
    }

    fn emit_scrolled<L: PagerListener + ?Sized>(&self, listener: &mut L) {
        let (position, offset) = self.scroll_position();
        listener.on_page_scrolled(position, offset);
    }
}
