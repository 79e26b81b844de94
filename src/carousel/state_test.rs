use super::*;

// =============================================================
// Construction
// =============================================================

#[test]
fn empty_carousel_is_refused() {
    assert!(Carousel::new(0).is_none());
}

#[test]
fn new_carousel_starts_idle_at_zero() {
    let c = Carousel::new(4).unwrap();
    assert_eq!(c.slide_count(), 4);
    assert_eq!(c.current(), 0);
    assert_eq!(c.phase(), Phase::Idle);
}

// =============================================================
// Wrap-around
// =============================================================

#[test]
fn go_to_minus_one_selects_last() {
    let mut c = Carousel::new(5).unwrap();
    assert_eq!(c.go_to(-1), Some(4));
}

#[test]
fn go_to_len_selects_first() {
    let mut c = Carousel::new(5).unwrap();
    c.go_to(3);
    c.finish_transition();
    assert_eq!(c.go_to(5), Some(0));
}

#[test]
fn go_to_far_negative_wraps() {
    let mut c = Carousel::new(3).unwrap();
    assert_eq!(c.go_to(-7), Some(2));
}

#[test]
fn prev_from_first_wraps_to_last() {
    let mut c = Carousel::new(3).unwrap();
    assert_eq!(c.prev(), Some(2));
}

#[test]
fn next_from_last_wraps_to_first() {
    let mut c = Carousel::new(3).unwrap();
    c.go_to(2);
    c.finish_transition();
    assert_eq!(c.next(), Some(0));
}

#[test]
fn single_slide_always_selects_zero() {
    let mut c = Carousel::new(1).unwrap();
    assert_eq!(c.next(), Some(0));
    c.finish_transition();
    assert_eq!(c.prev(), Some(0));
}

// =============================================================
// Transition lock
// =============================================================

#[test]
fn go_to_engages_lock() {
    let mut c = Carousel::new(3).unwrap();
    c.next();
    assert!(c.is_transitioning());
}

#[test]
fn rapid_triggers_change_slide_once() {
    let mut c = Carousel::new(4).unwrap();
    assert_eq!(c.next(), Some(1));
    assert_eq!(c.next(), None);
    assert_eq!(c.current(), 1);
}

#[test]
fn dropped_request_is_not_replayed_after_unlock() {
    let mut c = Carousel::new(4).unwrap();
    c.next();
    c.navigate(Navigation::To(3));
    c.finish_transition();
    assert_eq!(c.current(), 1);
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn navigation_resumes_after_finish() {
    let mut c = Carousel::new(4).unwrap();
    c.next();
    c.finish_transition();
    assert_eq!(c.next(), Some(2));
}

#[test]
fn finish_when_idle_is_harmless() {
    let mut c = Carousel::new(2).unwrap();
    c.finish_transition();
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.current(), 0);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn navigate_to_index_jumps_directly() {
    let mut c = Carousel::new(6).unwrap();
    assert_eq!(c.navigate(Navigation::To(4)), Some(4));
}

#[test]
fn navigate_to_out_of_range_index_wraps() {
    let mut c = Carousel::new(3).unwrap();
    assert_eq!(c.navigate(Navigation::To(7)), Some(1));
}

#[test]
fn direction_maps_to_navigation() {
    assert_eq!(Navigation::from(Direction::Next), Navigation::Next);
    assert_eq!(Navigation::from(Direction::Prev), Navigation::Prev);
}
