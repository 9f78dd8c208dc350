//! Carousel host: prev/next buttons plus a fixed-interval auto-advance.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{Element, HtmlElement};

use crate::state::carousel::Carousel;
use crate::util::dom::{DomError, EventListener, report};

/// Holds the button listeners and the auto-advance timer. Dropping it
/// stops auto-advance.
pub struct CarouselHost {
    _listeners: Vec<EventListener>,
    _autoplay: Interval,
}

fn render(track: &HtmlElement, carousel: &Carousel) -> Result<(), DomError> {
    track
        .style()
        .set_property("transform", &carousel.track_transform())
        .map_err(|err| DomError::js("move carousel track", err))
}

/// Wire the carousel over `track`'s current children.
///
/// Returns `Ok(None)` for a track without slides.
///
/// # Errors
///
/// Returns [`DomError`] if a button listener cannot be registered.
pub fn mount(
    track: HtmlElement,
    next_button: Option<Element>,
    prev_button: Option<Element>,
    interval_ms: u32,
) -> Result<Option<CarouselHost>, DomError> {
    let slide_count = track.children().length() as usize;
    let Some(carousel) = Carousel::new(slide_count) else {
        log::debug!("carousel: track has no slides");
        return Ok(None);
    };
    let carousel = Rc::new(RefCell::new(carousel));

    let advance = {
        let carousel = Rc::clone(&carousel);
        let track = track.clone();
        move || {
            let mut state = carousel.borrow_mut();
            state.next();
            report("carousel", render(&track, &state));
        }
    };
    let retreat = {
        let carousel = Rc::clone(&carousel);
        let track = track.clone();
        move || {
            let mut state = carousel.borrow_mut();
            state.prev();
            report("carousel", render(&track, &state));
        }
    };

    let mut listeners = Vec::with_capacity(2);
    if let Some(button) = next_button {
        let advance = advance.clone();
        listeners.push(EventListener::new(&button, "click", move |_| advance())?);
    }
    if let Some(button) = prev_button {
        listeners.push(EventListener::new(&button, "click", move |_| retreat())?);
    }

    let autoplay = Interval::new(interval_ms, advance);

    log::debug!("carousel: {slide_count} slides, advancing every {interval_ms}ms");
    Ok(Some(CarouselHost { _listeners: listeners, _autoplay: autoplay }))
}
