//! Message body content

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref API_KEY_REGEX: Regex = Regex::new(r"SG\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+").unwrap();
}

/// Well-known MIME types for [`Content`]
pub mod mime_type {
    /// Plain text body
    pub const TEXT_PLAIN: &str = "text/plain";

    /// HTML body
    pub const TEXT_HTML: &str = "text/html";
}

/// One body part of the message
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Content {
    #[serde(rename = "type")]
    mime_type: String,

    value: String,
}

impl Content {
    /// Create content of an arbitrary MIME type
    pub fn new(mime_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            value: value.into(),
        }
    }

    /// `text/plain` content
    pub fn plain_text(value: impl Into<String>) -> Self {
        Self::new(mime_type::TEXT_PLAIN, value)
    }

    /// `text/html` content
    pub fn html(value: impl Into<String>) -> Self {
        Self::new(mime_type::TEXT_HTML, value)
    }

    /// The MIME type
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The body
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Position in the serialized content list: plain text, then HTML, then
    /// everything else.
    pub(crate) fn priority(&self) -> u8 {
        match self.mime_type.as_str() {
            mime_type::TEXT_PLAIN => 0,
            mime_type::TEXT_HTML => 1,
            _ => 2,
        }
    }

    /// Whether the body contains something shaped like an API key
    pub(crate) fn contains_api_key(&self) -> bool {
        API_KEY_REGEX.is_match(&self.value)
    }
}
