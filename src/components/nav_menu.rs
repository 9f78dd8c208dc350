//! Mobile navigation host: hamburger toggles the link list, any link closes it.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::Element;

use crate::state::nav::{NavMenu, OPEN_CLASS};
use crate::util::dom::{DomError, EventListener, report, set_class};

pub struct NavMenuHost {
    _listeners: Vec<EventListener>,
}

/// Wire `hamburger` to open/close `links`, and each of `link_anchors` to
/// close it.
///
/// # Errors
///
/// Returns [`DomError`] if a listener cannot be registered.
pub fn mount(hamburger: Element, links: Element, link_anchors: Vec<Element>) -> Result<NavMenuHost, DomError> {
    let menu = Rc::new(Cell::new(NavMenu::default()));
    let mut listeners = Vec::with_capacity(link_anchors.len() + 1);

    let toggle_menu = Rc::clone(&menu);
    let toggle_links = links.clone();
    listeners.push(EventListener::new(&hamburger, "click", move |_| {
        let mut state = toggle_menu.get();
        let open = state.toggle();
        toggle_menu.set(state);
        report("nav", set_class(&toggle_links, OPEN_CLASS, open));
    })?);

    for anchor in &link_anchors {
        let close_menu = Rc::clone(&menu);
        let close_links = links.clone();
        listeners.push(EventListener::new(anchor, "click", move |_| {
            let mut state = close_menu.get();
            let open = state.close();
            close_menu.set(state);
            report("nav", set_class(&close_links, OPEN_CLASS, open));
        })?);
    }

    log::debug!("nav: wired {} links", link_anchors.len());
    Ok(NavMenuHost { _listeners: listeners })
}
