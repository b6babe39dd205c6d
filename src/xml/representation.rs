//! The XML-encoded form of an entity as exchanged over the wire.

use std::fmt;

/// Media type sent with request bodies and accepted in replies.
pub const XML_MEDIA_TYPE: &str = "application/xml";

/// An XML document body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Representation {
    text: String,
}

impl Representation {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn media_type(&self) -> &'static str {
        XML_MEDIA_TYPE
    }
}

impl From<String> for Representation {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Representation {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
