use super::*;

#[test]
fn register_assigns_sequential_ids() {
    let mut tracker = RevealTracker::new();
    assert_eq!(tracker.register(), RevealId(0));
    assert_eq!(tracker.register(), RevealId(1));
    assert_eq!(tracker.watching(), 2);
}

#[test]
fn non_intersecting_notification_does_nothing() {
    let mut tracker = RevealTracker::new();
    let id = tracker.register();
    assert!(!tracker.observe(id, false));
    assert!(!tracker.is_revealed(id));
}

#[test]
fn first_intersection_reveals() {
    let mut tracker = RevealTracker::new();
    let id = tracker.register();
    assert!(tracker.observe(id, true));
    assert!(tracker.is_revealed(id));
    assert_eq!(tracker.watching(), 0);
}

#[test]
fn reveal_fires_at_most_once() {
    let mut tracker = RevealTracker::new();
    let id = tracker.register();
    let fired = [true, false, true, true, false]
        .into_iter()
        .filter(|visible| tracker.observe(id, *visible))
        .count();
    assert_eq!(fired, 1);
    assert!(tracker.is_revealed(id));
}

#[test]
fn leaving_viewport_never_unreveals() {
    let mut tracker = RevealTracker::new();
    let id = tracker.register();
    tracker.observe(id, true);
    tracker.observe(id, false);
    assert!(tracker.is_revealed(id));
}

#[test]
fn targets_are_independent() {
    let mut tracker = RevealTracker::new();
    let a = tracker.register();
    let b = tracker.register();
    assert!(tracker.observe(b, true));
    assert!(!tracker.is_revealed(a));
    assert!(tracker.observe(a, true));
}

#[test]
fn unknown_target_is_ignored() {
    let mut tracker = RevealTracker::new();
    assert!(!tracker.observe(RevealId(7), true));
    assert!(!tracker.is_revealed(RevealId(7)));
}
