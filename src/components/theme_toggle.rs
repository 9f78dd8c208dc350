//! Theme toggle host.
//!
//! Applies the saved mode on mount, then flips `dark-mode` on `<body>` on
//! each click of the toggle. The toggle is also moved next to the hamburger
//! so it stays reachable when the link list is collapsed on mobile.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, HtmlElement, Node};

use crate::state::theme::{DARK_CLASS, ThemeController, ThemeMode};
use crate::util::dom::{DomError, EventListener, report, set_class};
use crate::util::storage::LocalStorage;

pub struct ThemeToggle {
    _click: EventListener,
}

/// Apply `mode` to the page body.
///
/// # Errors
///
/// Propagates a failed class-list update.
pub fn apply(body: &HtmlElement, mode: ThemeMode) -> Result<(), DomError> {
    set_class(body, DARK_CLASS, mode.is_dark())
}

/// Move `toggle` into `navbar` just before `hamburger`. If it used to sit in
/// an `<li>`, that list item is removed.
///
/// # Errors
///
/// Propagates a failed DOM insertion.
pub fn relocate(toggle: &Element, navbar: &Element, hamburger: &Element) -> Result<(), DomError> {
    let old_parent = toggle.parent_element();
    let anchor: &Node = hamburger;
    navbar
        .insert_before(toggle, Some(anchor))
        .map_err(|err| DomError::js("move theme toggle", err))?;
    if let Some(li) = old_parent.filter(|p| p.tag_name().eq_ignore_ascii_case("li")) {
        li.remove();
    }
    Ok(())
}

/// Apply the stored preference to `body` and, if a toggle control exists,
/// wire it up.
///
/// # Errors
///
/// Returns [`DomError`] if the saved mode cannot be applied or the click
/// listener cannot be registered.
pub fn mount(body: HtmlElement, toggle: Option<Element>) -> Result<Option<ThemeToggle>, DomError> {
    let theme = ThemeController::load(LocalStorage);
    apply(&body, theme.mode())?;

    let Some(toggle) = toggle else {
        log::debug!("theme: no toggle control, saved mode applied only");
        return Ok(None);
    };

    let theme = Rc::new(RefCell::new(theme));
    let click = EventListener::new(&toggle, "click", move |_| {
        let mode = theme.borrow_mut().toggle();
        report("theme", apply(&body, mode));
    })?;
    Ok(Some(ThemeToggle { _click: click }))
}
