//! File attachments

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

/// How the recipient's client should present an attachment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Displayed within the body, referenced by content id
    Inline,

    /// Offered as a separate download
    Attachment,
}

/// A file attached to the message
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Attachment {
    content: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    file_type: Option<String>,

    filename: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    disposition: Option<Disposition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    content_id: Option<String>,
}

impl Attachment {
    /// Create an attachment from already base64 encoded content
    pub fn new(content: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            file_type: None,
            filename: filename.into(),
            disposition: None,
            content_id: None,
        }
    }

    /// Create an attachment from raw bytes, base64 encoding them
    pub fn from_bytes(bytes: impl AsRef<[u8]>, filename: impl Into<String>) -> Self {
        Self::new(STANDARD.encode(bytes), filename)
    }

    /// Set the MIME type of the file
    pub fn file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = Some(file_type.into());
        self
    }

    /// Set the disposition
    pub fn disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = Some(disposition);
        self
    }

    /// Set the content id used to reference an inline attachment
    pub fn content_id(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = Some(content_id.into());
        self
    }

    /// The base64 encoded content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The file name
    pub fn filename(&self) -> &str {
        &self.filename
    }
}
