//! `mailto:` URI construction.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use std::fmt;

/// A fully encoded `mailto:` URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoLink(String);

impl MailtoLink {
    /// Build `mailto:{recipient}?subject=..&body=..`, percent-encoding the
    /// subject and body. The recipient is used verbatim.
    #[must_use]
    pub fn new(recipient: &str, subject: &str, body: &str) -> Self {
        Self(format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(subject),
            urlencoding::encode(body)
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decoded value of a query parameter, if present.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<String> {
        let (_, query) = self.0.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| match urlencoding::decode(value) {
                Ok(decoded) => Some(decoded.into_owned()),
                Err(_) => None,
            })
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
