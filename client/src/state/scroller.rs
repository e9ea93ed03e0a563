//! Gallery scroller: axis selection and scroll-step planning.
//!
//! DESIGN
//! ======
//! The axis is owned here instead of living in a free variable. One writer
//! (the breakpoint subscription) updates it; the previous/next arrows read it
//! and turn the list's measured extent into a signed `ScrollRequest`. The
//! component only measures and applies, so every decision is testable without
//! a viewport.

#[cfg(test)]
#[path = "scroller_test.rs"]
mod scroller_test;

/// Subtracted from the visible extent so the next page overlaps slightly.
pub const SCROLL_MARGIN_PX: f64 = 40.0;

/// Step used when the list has no measurable extent.
pub const MIN_SCROLL_PX: f64 = 100.0;

/// Axis the card list scrolls along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Narrow viewports: cards in a row.
    #[default]
    Horizontal,
    /// Wide viewports: cards in a column.
    Vertical,
}

impl ScrollDirection {
    /// Narrow (breakpoint matches) → horizontal, wide → vertical.
    pub fn from_breakpoint(matches: bool) -> Self {
        if matches { Self::Horizontal } else { Self::Vertical }
    }
}

/// The two arrow controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTrigger {
    Previous,
    Next,
}

/// Screen-space heading a trigger resolves to under the current axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollHeading {
    Left,
    Right,
    Up,
    Down,
}

/// Measured size of the visible card list, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ListExtent {
    pub width: f64,
    pub height: f64,
}

/// Signed offsets handed to `Element.scrollBy` with smooth behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollRequest {
    pub left: f64,
    pub top: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollerState {
    pub direction: ScrollDirection,
}

impl ScrollerState {
    pub fn new(breakpoint_matches: bool) -> Self {
        Self { direction: ScrollDirection::from_breakpoint(breakpoint_matches) }
    }

    /// Re-derive the axis after the breakpoint flips.
    pub fn on_breakpoint_change(&mut self, matches: bool) {
        self.direction = ScrollDirection::from_breakpoint(matches);
    }

    pub fn heading(&self, trigger: ScrollTrigger) -> ScrollHeading {
        match (self.direction, trigger) {
            (ScrollDirection::Horizontal, ScrollTrigger::Previous) => ScrollHeading::Left,
            (ScrollDirection::Horizontal, ScrollTrigger::Next) => ScrollHeading::Right,
            (ScrollDirection::Vertical, ScrollTrigger::Previous) => ScrollHeading::Up,
            (ScrollDirection::Vertical, ScrollTrigger::Next) => ScrollHeading::Down,
        }
    }

    /// Distance of one scroll step along the active axis.
    pub fn step(&self, extent: ListExtent) -> f64 {
        let visible = match self.direction {
            ScrollDirection::Horizontal => extent.width,
            ScrollDirection::Vertical => extent.height,
        };
        let step = visible - SCROLL_MARGIN_PX;
        if step > 0.0 { step } else { MIN_SCROLL_PX }
    }

    pub fn request(&self, trigger: ScrollTrigger, extent: ListExtent) -> ScrollRequest {
        let step = self.step(extent);
        match self.heading(trigger) {
            ScrollHeading::Left => ScrollRequest { left: -step, top: 0.0 },
            ScrollHeading::Right => ScrollRequest { left: step, top: 0.0 },
            ScrollHeading::Up => ScrollRequest { left: 0.0, top: -step },
            ScrollHeading::Down => ScrollRequest { left: 0.0, top: step },
        }
    }
}
