//! Contact form validation and message construction.
//!
//! Sending is delegated to the visitor's mail client: a valid submission
//! becomes a [`MailtoLink`] the host navigates to. Whether the mail is
//! actually sent is not observable from the page.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::util::mailto::MailtoLink;

/// Validation failures. `Display` is the text shown in the blocking alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Raw field values as read from the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    recipient: String,
}

impl ContactForm {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self { recipient: recipient.into() }
    }

    /// Validate `fields` and build the outgoing link.
    ///
    /// Fields are trimmed first. Emptiness is checked before the email
    /// shape, so a blank form always reports [`ContactError::MissingFields`].
    ///
    /// # Errors
    ///
    /// [`ContactError::MissingFields`] if any trimmed field is empty,
    /// otherwise [`ContactError::InvalidEmail`] if the email has no `@`.
    pub fn submit(&self, fields: &ContactFields) -> Result<MailtoLink, ContactError> {
        let name = fields.name.trim();
        let email = fields.email.trim();
        let message = fields.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !email.contains('@') {
            return Err(ContactError::InvalidEmail);
        }

        let subject = format!("Portfolio Contact from {name}");
        let body = format!("Name: {name}\nEmail: {email}\n\nMessage:\n{message}");
        Ok(MailtoLink::new(&self.recipient, &subject, &body))
    }
}
