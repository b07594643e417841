//! Small value records attached to a message or a personalization

use chrono::{DateTime, Utc};
use serde::{ser::SerializeMap, Serialize, Serializer};

/// Maximum number of unsubscribe groups an [`Asm`] may display
pub const MAX_GROUPS_TO_DISPLAY: usize = 25;

macro_rules! key_value {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            key: String,
            value: String,
        }

        impl $name {
            #[doc = concat!("Create a new [`", stringify!($name), "`]")]
            pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
                Self {
                    key: key.into(),
                    value: value.into(),
                }
            }

            /// The key
            pub fn key(&self) -> &str {
                &self.key
            }

            /// The value
            pub fn value(&self) -> &str {
                &self.value
            }

            pub(crate) fn into_pair(self) -> (String, String) {
                (self.key, self.value)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(&self.key, &self.value)?;
                map.end()
            }
        }
    };
}

key_value! {
    /// A custom email header, e.g. `X-Campaign: spring`
    Header
}

key_value! {
    /// A custom argument echoed back in event webhooks
    CustomArg
}

key_value! {
    /// A tag replaced in the body and subject for one personalization
    Substitution
}

key_value! {
    /// A section tag whose value may itself contain substitution tags
    Section
}

/// A category used to group messages in statistics
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The category name
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Scheduled delivery time as a unix timestamp in seconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SendAt(i64);

impl SendAt {
    /// The unix timestamp
    pub fn timestamp(&self) -> i64 {
        self.0
    }
}

impl From<i64> for SendAt {
    fn from(timestamp: i64) -> Self {
        Self(timestamp)
    }
}

impl From<DateTime<Utc>> for SendAt {
    fn from(at: DateTime<Utc>) -> Self {
        Self(at.timestamp())
    }
}

/// Advanced suppression management: the unsubscribe group of the message
/// and the groups offered on the preferences page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Asm {
    group_id: u32,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    groups_to_display: Vec<u32>,
}

impl Asm {
    /// Create suppression settings for `group_id`
    pub fn new(group_id: u32) -> Self {
        Self {
            group_id,
            groups_to_display: Vec::new(),
        }
    }

    /// Set the groups displayed on the unsubscribe preferences page.
    ///
    /// At most [`MAX_GROUPS_TO_DISPLAY`] are accepted by the endpoint; a
    /// longer list is rejected when the message is serialized.
    pub fn groups_to_display(mut self, groups: impl IntoIterator<Item = u32>) -> Self {
        self.groups_to_display = groups.into_iter().collect();
        self
    }

    /// The unsubscribe group id
    pub fn group_id(&self) -> u32 {
        self.group_id
    }

    pub(crate) fn display_count(&self) -> usize {
        self.groups_to_display.len()
    }
}
