//! Browser DOM glue shared by the component hosts.
//!
//! Everything except [`DomError`] is hydrate-only. Listener registrations are
//! returned as [`EventListener`] handles that detach on drop, so the
//! composition root decides how long each feature stays wired.

use std::fmt;

/// A browser API call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("no global `window`")]
    NoWindow,
    #[error("no `document` on window")]
    NoDocument,
    #[error("`{0}` is not the expected element type")]
    WrongElement(String),
    #[error("{context}: {message}")]
    Js { context: String, message: String },
}

impl DomError {
    pub fn js(context: impl fmt::Display, err: impl fmt::Debug) -> Self {
        Self::Js { context: context.to_string(), message: format!("{err:?}") }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::*;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, Event, EventTarget, Window};

    use super::DomError;

    pub fn window() -> Result<Window, DomError> {
        web_sys::window().ok_or(DomError::NoWindow)
    }

    pub fn document() -> Result<Document, DomError> {
        window()?.document().ok_or(DomError::NoDocument)
    }

    /// Log a failed listener body instead of letting the error vanish.
    pub fn report(feature: &str, result: Result<(), DomError>) {
        if let Err(err) = result {
            log::warn!("{feature}: {err}");
        }
    }

    /// First element matching `selector`, or `None` when absent or the
    /// selector is invalid.
    pub fn query(document: &Document, selector: &str) -> Option<Element> {
        match document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("bad selector `{selector}`: {err:?}");
                None
            }
        }
    }

    /// All elements matching `selector`, in document order.
    pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
        let list = match document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("bad selector `{selector}`: {err:?}");
                return Vec::new();
            }
        };
        let mut elements = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            if let Some(Ok(element)) = list.item(i).map(|node| node.dyn_into::<Element>()) {
                elements.push(element);
            }
        }
        elements
    }

    pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), DomError> {
        element
            .class_list()
            .toggle_with_force(class, on)
            .map(|_| ())
            .map_err(|err| DomError::js(format_args!("toggle class `{class}`"), err))
    }

    pub fn add_class(element: &Element, class: &str) -> Result<(), DomError> {
        set_class(element, class, true)
    }

    /// A DOM event listener that is removed when dropped.
    pub struct EventListener {
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    }

    impl EventListener {
        /// Attach `handler` to `event` on `target`.
        ///
        /// # Errors
        ///
        /// Returns [`DomError::Js`] if the browser rejects the registration.
        pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, DomError>
        where
            F: FnMut(Event) + 'static,
        {
            let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
            target
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                .map_err(|err| DomError::js(format_args!("listen for `{event}`"), err))?;
            Ok(Self { target: target.clone(), event, callback })
        }
    }

    impl Drop for EventListener {
        fn drop(&mut self) {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            {
                log::debug!("detach `{}` listener: {err:?}", self.event);
            }
        }
    }
}
