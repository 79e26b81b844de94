//! Pointer gestures: swipe evaluation, click zones, and drag/touch scratch.
//!
//! `PointerTracker` holds the transient coordinates of the gesture in
//! progress. Each gesture starts fresh; a release with no matching press
//! yields nothing.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

/// Direction of travel through the slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Evaluate a horizontal swipe from `start_x` to `end_x`.
///
/// Travel must strictly exceed `threshold` pixels. Moving left (start right of
/// end) advances; moving right retreats.
#[must_use]
pub fn swipe_direction(start_x: f64, end_x: f64, threshold: f64) -> Option<Direction> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold {
        return None;
    }
    Some(if diff > 0.0 { Direction::Next } else { Direction::Prev })
}

/// Map a click to the half of the carousel it landed in.
#[must_use]
pub fn click_zone(client_x: f64, rect_left: f64, rect_width: f64) -> Direction {
    if client_x - rect_left < rect_width / 2.0 { Direction::Prev } else { Direction::Next }
}

/// What a click landed on, as far as click-zone exclusion cares.
pub trait ClickTarget {
    /// The target is a link or sits inside one.
    fn inside_link(&self) -> bool;
    fn has_class(&self, class: &str) -> bool;
}

/// Clicks that pass through without click-zone navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickExclusion {
    /// Links inside the carousel keep working.
    InsideLink,
    /// The target itself carries this class (dot indicators).
    TargetHasClass(String),
}

impl ClickExclusion {
    pub fn excludes(&self, target: &impl ClickTarget) -> bool {
        match self {
            Self::InsideLink => target.inside_link(),
            Self::TargetHasClass(class) => target.has_class(class),
        }
    }
}

/// Scratch coordinates for the mouse drag and touch in progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerTracker {
    drag_start: Option<f64>,
    drag_last: Option<f64>,
    touch_start: Option<f64>,
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }

    /// Offset of the last tracked position from the drag start.
    #[must_use]
    pub fn drag_offset(&self) -> Option<f64> {
        Some(self.drag_last? - self.drag_start?)
    }

    pub fn mouse_down(&mut self, x: f64) {
        self.drag_start = Some(x);
        self.drag_last = Some(x);
    }

    /// Track the pointer during a drag. Returns the offset from the drag
    /// start, or `None` when no drag is active.
    pub fn mouse_move(&mut self, x: f64) -> Option<f64> {
        let start = self.drag_start?;
        self.drag_last = Some(x);
        Some(x - start)
    }

    /// End the drag, returning its `(start, end)` positions.
    pub fn mouse_up(&mut self, x: f64) -> Option<(f64, f64)> {
        let start = self.drag_start.take()?;
        self.drag_last = None;
        Some((start, x))
    }

    /// Abandon the drag without evaluating it.
    pub fn mouse_leave(&mut self) {
        self.drag_start = None;
        self.drag_last = None;
    }

    pub fn touch_start(&mut self, x: f64) {
        self.touch_start = Some(x);
    }

    /// End the touch, returning its `(start, end)` positions.
    pub fn touch_end(&mut self, x: f64) -> Option<(f64, f64)> {
        let start = self.touch_start.take()?;
        Some((start, x))
    }
}
