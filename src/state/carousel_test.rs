use super::*;

#[test]
fn empty_track_has_no_carousel() {
    assert_eq!(Carousel::new(0), None);
}

#[test]
fn starts_at_first_slide() {
    let carousel = Carousel::new(3).unwrap();
    assert_eq!(carousel.index(), 0);
    assert_eq!(carousel.count(), 3);
    assert_eq!(carousel.track_transform(), "translateX(-0%)");
}

#[test]
fn next_n_times_returns_to_start() {
    for n in 1..=6 {
        let mut carousel = Carousel::new(n).unwrap();
        for _ in 0..n {
            carousel.next();
        }
        assert_eq!(carousel.index(), 0, "n = {n}");
    }
}

#[test]
fn prev_from_start_wraps_to_last() {
    for n in 1..=6 {
        let mut carousel = Carousel::new(n).unwrap();
        assert_eq!(carousel.prev(), n - 1, "n = {n}");
    }
}

#[test]
fn next_then_prev_is_identity() {
    let mut carousel = Carousel::new(4).unwrap();
    carousel.next();
    carousel.next();
    let here = carousel.index();
    carousel.next();
    carousel.prev();
    assert_eq!(carousel.index(), here);
}

#[test]
fn index_stays_in_range() {
    let mut carousel = Carousel::new(3).unwrap();
    for step in 0..20 {
        let index = if step % 3 == 0 { carousel.prev() } else { carousel.next() };
        assert!(index < 3);
    }
}

#[test]
fn transform_scales_with_index() {
    let mut carousel = Carousel::new(4).unwrap();
    carousel.next();
    carousel.next();
    assert_eq!(carousel.track_transform(), "translateX(-200%)");
}

#[test]
fn single_slide_never_moves() {
    let mut carousel = Carousel::new(1).unwrap();
    assert_eq!(carousel.next(), 0);
    assert_eq!(carousel.prev(), 0);
}
