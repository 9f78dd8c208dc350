//! Scroll reveal host built on `IntersectionObserver`.
//!
//! Each target is tagged `animate-on-scroll` and a `data-reveal-id` that maps
//! observer entries back to the [`RevealTracker`].

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::state::reveal::{PENDING_CLASS, RevealId, RevealTracker, VISIBLE_CLASS};
use crate::util::dom::{DomError, add_class, report};

const ID_ATTR: &str = "data-reveal-id";

pub struct ScrollReveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn reveal_id(target: &Element) -> Option<RevealId> {
    let raw = target.get_attribute(ID_ATTR)?;
    match raw.parse::<usize>() {
        Ok(index) => Some(RevealId(index)),
        Err(_) => None,
    }
}

fn on_entries(entries: &Array, observer: &IntersectionObserver, tracker: &RefCell<RevealTracker>) -> Result<(), DomError> {
    for value in entries.iter() {
        let Ok(entry) = value.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        let target = entry.target();
        let Some(id) = reveal_id(&target) else {
            continue;
        };
        if tracker.borrow_mut().observe(id, entry.is_intersecting()) {
            add_class(&target, VISIBLE_CLASS)?;
            observer.unobserve(&target);
        }
    }
    Ok(())
}

/// Observe `targets` at `threshold` visibility.
///
/// # Errors
///
/// Returns [`DomError`] if the observer cannot be created or a target
/// cannot be tagged.
pub fn mount(targets: Vec<Element>, threshold: f64) -> Result<ScrollReveal, DomError> {
    let tracker = Rc::new(RefCell::new(RevealTracker::new()));

    let tracker_for_cb = Rc::clone(&tracker);
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        report("reveal", on_entries(&entries, &observer, &tracker_for_cb));
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|err| DomError::js("create intersection observer", err))?;

    for target in &targets {
        let id = tracker.borrow_mut().register();
        add_class(target, PENDING_CLASS)?;
        target
            .set_attribute(ID_ATTR, &id.0.to_string())
            .map_err(|err| DomError::js("tag reveal target", err))?;
        observer.observe(target);
    }

    log::debug!("reveal: observing {} elements", targets.len());
    Ok(ScrollReveal { observer, _callback: callback })
}
