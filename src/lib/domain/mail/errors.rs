//! Mail payload errors

use thiserror::Error;

/// Errors raised while serializing a [`Message`](super::Message).
///
/// Building a message never fails; every check is deferred to
/// serialization, which either produces the whole payload or one of these.
#[derive(Debug, Error)]
pub enum MailError {
    /// Neither content nor a template id was given
    #[error("message has no content and no template id")]
    MissingContent,

    /// No personalization, so no recipient at all
    #[error("message has no personalizations")]
    EmptyPersonalizations,

    /// A personalization has no `to` recipient
    #[error("personalization {index} has no `to` recipient")]
    MissingRecipient {
        /// Index the personalization was created at
        index: usize,
    },

    /// Content contains something that looks like an API key
    #[error("content appears to include an API key")]
    ApiKeyIncluded,

    /// Too many unsubscribe groups to display
    #[error("{count} groups to display exceeds the maximum of {max}")]
    TooManyGroupsToDisplay {
        /// Number of groups given
        count: usize,

        /// Maximum accepted
        max: usize,
    },

    /// A leaf could not be serialized
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
