//! Slide carousels: the homepage carousel and the per-page design carousels.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both kinds share one controller. [`CarouselController`] turns browser
//! events (keys, dot clicks, body clicks, drags, touches) into slide changes
//! against a [`state::Carousel`], with per-kind switches in
//! [`CarouselBehavior`]. The DOM binding in `bind` is the only part that
//! touches `web-sys`; everything here runs natively under test.


pub mod gesture;
pub mod state;

#[cfg(feature = "hydrate")]
mod bind;

#[cfg(feature = "hydrate")]
pub use bind::{init_design, init_primary};

use crate::config::CarouselConfig;
use gesture::{ClickExclusion, ClickTarget, PointerTracker};
use state::{Carousel, Navigation};

/// Per-kind interaction switches.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselBehavior {
    /// Evaluate mouse drag release against the swipe threshold.
    pub drag_navigates: bool,
    /// Evaluate touch swipes.
    pub touch: bool,
    /// Arrow keys navigate this carousel.
    pub keyboard: bool,
    pub exclusion: ClickExclusion,
    pub swipe_threshold_px: f64,
    pub transition_ms: u32,
}

impl CarouselBehavior {
    /// The homepage carousel: keyboard driven, links pass through, drags are
    /// tracked but only navigate when configured to.
    #[must_use]
    pub fn primary(config: &CarouselConfig) -> Self {
        Self {
            drag_navigates: config.primary.drag_navigates,
            touch: false,
            keyboard: true,
            exclusion: ClickExclusion::InsideLink,
            swipe_threshold_px: config.swipe_threshold_px,
            transition_ms: config.transition_ms,
        }
    }

    /// A design carousel: swipe and drag driven, dot clicks bypass the click zones.
    #[must_use]
    pub fn design(config: &CarouselConfig) -> Self {
        Self {
            drag_navigates: true,
            touch: true,
            keyboard: false,
            exclusion: ClickExclusion::TargetHasClass(config.design.dot_class.clone()),
            swipe_threshold_px: config.swipe_threshold_px,
            transition_ms: config.transition_ms,
        }
    }
}

/// Event-level carousel logic for one instance.
///
/// Every handler returns the newly selected slide when the event caused a
/// change; the host checks that slide's input and schedules
/// [`CarouselController::finish_transition`] after `transition_ms`.
#[derive(Debug, Clone)]
pub struct CarouselController {
    carousel: Carousel,
    pointer: PointerTracker,
    behavior: CarouselBehavior,
}

impl CarouselController {
    /// `None` when there are no slides; the carousel stays inert.
    #[must_use]
    pub fn new(slide_count: usize, behavior: CarouselBehavior) -> Option<Self> {
        Some(Self {
            carousel: Carousel::new(slide_count)?,
            pointer: PointerTracker::new(),
            behavior,
        })
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    #[must_use]
    pub fn behavior(&self) -> &CarouselBehavior {
        &self.behavior
    }

    pub fn navigate(&mut self, nav: Navigation) -> Option<usize> {
        self.carousel.navigate(nav)
    }

    /// `ArrowLeft` / `ArrowRight`; other keys are ignored.
    pub fn key(&mut self, key: &str) -> Option<usize> {
        if !self.behavior.keyboard {
            return None;
        }
        match key {
            "ArrowRight" => self.navigate(Navigation::Next),
            "ArrowLeft" => self.navigate(Navigation::Prev),
            _ => None,
        }
    }

    pub fn dot(&mut self, index: usize) -> Option<usize> {
        self.navigate(Navigation::To(index))
    }

    /// A click on the carousel body: left half retreats, right half advances.
    pub fn click(&mut self, target: &impl ClickTarget, client_x: f64, rect_left: f64, rect_width: f64) -> Option<usize> {
        if self.behavior.exclusion.excludes(target) {
            return None;
        }
        let direction = gesture::click_zone(client_x, rect_left, rect_width);
        self.navigate(direction.into())
    }

    pub fn mouse_down(&mut self, x: f64) {
        self.pointer.mouse_down(x);
    }

    pub fn mouse_move(&mut self, x: f64) {
        if let Some(offset) = self.pointer.mouse_move(x) {
            log::trace!("carousel drag offset {offset}");
        }
    }

    /// Drag release. Navigates only when the behavior evaluates drags.
    pub fn mouse_up(&mut self, x: f64) -> Option<usize> {
        let (start, end) = self.pointer.mouse_up(x)?;
        if !self.behavior.drag_navigates {
            return None;
        }
        self.swipe(start, end)
    }

    pub fn mouse_leave(&mut self) {
        self.pointer.mouse_leave();
    }

    pub fn touch_start(&mut self, x: f64) {
        if self.behavior.touch {
            self.pointer.touch_start(x);
        }
    }

    pub fn touch_end(&mut self, x: f64) -> Option<usize> {
        if !self.behavior.touch {
            return None;
        }
        let (start, end) = self.pointer.touch_end(x)?;
        self.swipe(start, end)
    }

    pub fn finish_transition(&mut self) {
        self.carousel.finish_transition();
    }

    fn swipe(&mut self, start: f64, end: f64) -> Option<usize> {
        let direction = gesture::swipe_direction(start, end, self.behavior.swipe_threshold_px)?;
        self.navigate(direction.into())
    }
}
