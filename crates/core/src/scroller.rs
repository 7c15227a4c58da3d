//! Drag-to-scroll math for the real-world carousel.
//!
//! The carousel amplifies pointer drags so a short drag traverses more
//! content, and pages by a fixed pixel step on the prev/next buttons. All
//! offsets are clamped to the scrollable range so neither path can land in
//! blank space past the last card.
//!
//! Pointer-leave must terminate a drag exactly like pointer-up: a "still
//! dragging" state after the pointer has left the element is a defect.

/// Amplification applied to pointer drag distance. 1.0 would track the
/// pointer exactly; 2.0 means a half-width drag traverses a full width.
pub const DRAG_SPEED_MULTIPLIER: f64 = 2.0;

/// Fixed pixel distance for the prev/next buttons — roughly one card plus
/// its gap at the default card width.
pub const BUTTON_SCROLL_STEP: f64 = 340.0;

/// Paging direction for [`step_target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Prev,
    Next,
}

/// Pointer-drag tracking for one scrollable viewport.
///
/// `begin` on pointer-down, `offset_for` on every pointer-move, `end` on
/// pointer-up *and* pointer-leave. `end` is idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragScroll {
    origin_x: f64,
    origin_scroll: f64,
    dragging: bool,
}

impl DragScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Starts tracking from the pointer position and the viewport's current
    /// scroll offset.
    pub fn begin(&mut self, pointer_x: f64, scroll_offset: f64) {
        self.origin_x = pointer_x;
        self.origin_scroll = scroll_offset;
        self.dragging = true;
    }

    /// Scroll offset for the current pointer position, amplified by
    /// [`DRAG_SPEED_MULTIPLIER`] and clamped to `[0, max_scroll]`.
    /// Returns `None` when no drag is in progress.
    pub fn offset_for(&self, pointer_x: f64, max_scroll: f64) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        let dx = pointer_x - self.origin_x;
        Some(clamp_scroll(
            self.origin_scroll - dx * DRAG_SPEED_MULTIPLIER,
            max_scroll,
        ))
    }

    /// Stops tracking. Safe to call when no drag is in progress.
    pub fn end(&mut self) {
        self.dragging = false;
    }
}

/// Clamps a scroll offset to `[0, max_scroll]`. A non-scrollable viewport
/// (`max_scroll <= 0`) always yields 0.
pub fn clamp_scroll(offset: f64, max_scroll: f64) -> f64 {
    offset.max(0.0).min(max_scroll.max(0.0))
}

/// Target offset for one prev/next button press: a fixed step from the
/// current offset, clamped to the scrollable range.
pub fn step_target(current: f64, direction: ScrollDirection, max_scroll: f64) -> f64 {
    let delta = match direction {
        ScrollDirection::Prev => -BUTTON_SCROLL_STEP,
        ScrollDirection::Next => BUTTON_SCROLL_STEP,
    };
    clamp_scroll(current + delta, max_scroll)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_amplifies_pointer_distance() {
        let mut d = DragScroll::new();
        d.begin(400.0, 100.0);
        // Pointer moved 50px left => content scrolls 100px right.
        assert_eq!(d.offset_for(350.0, 1000.0), Some(200.0));
        // Pointer moved 50px right of origin => content scrolls 100px left.
        assert_eq!(d.offset_for(450.0, 1000.0), Some(0.0));
    }

    #[test]
    fn drag_offsets_are_clamped_to_the_scroll_range() {
        let mut d = DragScroll::new();
        d.begin(0.0, 0.0);
        assert_eq!(d.offset_for(-10_000.0, 500.0), Some(500.0));
        assert_eq!(d.offset_for(10_000.0, 500.0), Some(0.0));
    }

    #[test]
    fn moves_without_a_drag_report_nothing() {
        let d = DragScroll::new();
        assert_eq!(d.offset_for(123.0, 1000.0), None);
    }

    #[test]
    fn pointer_leave_ends_the_drag_like_pointer_up() {
        let mut d = DragScroll::new();
        d.begin(10.0, 0.0);
        assert!(d.is_dragging());
        d.end();
        assert!(!d.is_dragging());
        assert_eq!(d.offset_for(50.0, 1000.0), None);
        // Idempotent: a pointer-up after a leave is harmless.
        d.end();
        assert!(!d.is_dragging());
    }

    #[test]
    fn button_paging_never_exceeds_the_bounds() {
        let max = BUTTON_SCROLL_STEP * 1.5;
        let mut offset = 0.0;
        offset = step_target(offset, ScrollDirection::Next, max);
        assert_eq!(offset, BUTTON_SCROLL_STEP);
        offset = step_target(offset, ScrollDirection::Next, max);
        assert_eq!(offset, max);
        offset = step_target(offset, ScrollDirection::Next, max);
        assert_eq!(offset, max);
        offset = step_target(offset, ScrollDirection::Prev, max);
        offset = step_target(offset, ScrollDirection::Prev, max);
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn non_scrollable_viewport_pins_to_zero() {
        assert_eq!(clamp_scroll(250.0, 0.0), 0.0);
        assert_eq!(step_target(0.0, ScrollDirection::Next, 0.0), 0.0);
    }
}
