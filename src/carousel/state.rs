//! Slide index and transition lock for a single carousel.
//!
//! A slide change engages the lock; while it is held, further navigation is
//! dropped rather than queued. The host clears the lock from a one-shot timer
//! via [`Carousel::finish_transition`].

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use super::gesture::Direction;

/// Transition phase of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Accepting navigation.
    #[default]
    Idle,
    /// A slide change is animating; navigation is ignored.
    Transitioning,
}

/// A navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Prev,
    /// Jump to a slide by index (dot indicators).
    To(usize),
}

impl From<Direction> for Navigation {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Next => Self::Next,
            Direction::Prev => Self::Prev,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    phase: Phase,
}

impl Carousel {
    /// A carousel over `len` slides, starting at slide 0. `None` when there
    /// are no slides to show.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, current: 0, phase: Phase::Idle })
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    /// Move to `index`, wrapping in both directions, and engage the lock.
    ///
    /// Returns the slide now selected, or `None` if the request was dropped
    /// because a transition is in progress.
    pub fn go_to(&mut self, index: isize) -> Option<usize> {
        if self.is_transitioning() {
            log::debug!("slide change to {index} dropped during transition");
            return None;
        }
        let len = isize::try_from(self.len).unwrap_or(isize::MAX);
        self.current = usize::try_from(index.rem_euclid(len)).unwrap_or(0);
        self.phase = Phase::Transitioning;
        Some(self.current)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.go_to(signed(self.current).saturating_add(1))
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.go_to(signed(self.current).saturating_sub(1))
    }

    pub fn navigate(&mut self, nav: Navigation) -> Option<usize> {
        match nav {
            Navigation::Next => self.next(),
            Navigation::Prev => self.prev(),
            Navigation::To(index) => self.go_to(signed(index)),
        }
    }

    /// Release the transition lock.
    pub fn finish_transition(&mut self) {
        self.phase = Phase::Idle;
    }
}

fn signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}
