//! Contact form host.
//!
//! Native submission is always suppressed. Valid input navigates to a
//! `mailto:` link and resets the form; invalid input raises an alert.

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::state::contact::{ContactFields, ContactForm};
use crate::util::dom::{self, DomError, EventListener, report};

pub const FORM_ID: &str = "contactForm";

pub struct ContactFormHost {
    _submit: EventListener,
}

/// Current value of the `<input>` or `<textarea>` with `id`. A missing
/// field reads as empty, which fails validation.
fn field_value(document: &Document, id: &str) -> String {
    let Some(element) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn read_fields(document: &Document) -> ContactFields {
    ContactFields {
        name: field_value(document, "name"),
        email: field_value(document, "email"),
        message: field_value(document, "message"),
    }
}

fn on_submit(event: &Event, form: &HtmlFormElement, contact: &ContactForm) -> Result<(), DomError> {
    event.prevent_default();
    let window = dom::window()?;
    let document = dom::document()?;

    match contact.submit(&read_fields(&document)) {
        Ok(link) => {
            window
                .location()
                .set_href(link.as_str())
                .map_err(|err| DomError::js("open mail client", err))?;
            form.reset();
            log::info!("contact: handed message to mail client");
        }
        Err(err) => {
            window
                .alert_with_message(&err.to_string())
                .map_err(|e| DomError::js("alert", e))?;
        }
    }
    Ok(())
}

/// Intercept submissions of `form`.
///
/// # Errors
///
/// Returns [`DomError`] if the submit listener cannot be registered.
pub fn mount(form: HtmlFormElement, contact: ContactForm) -> Result<ContactFormHost, DomError> {
    let target = form.clone();
    let submit = EventListener::new(&target, "submit", move |event| {
        report("contact", on_submit(&event, &form, &contact));
    })?;
    Ok(ContactFormHost { _submit: submit })
}
