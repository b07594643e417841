//! Personalization: one recipient group and its overrides

use std::{collections::BTreeMap, mem};

use serde::Serialize;
use serde_json::{Map, Value};

use super::{Address, CustomArg, Header, SendAt, Substitution};

/// One addressing context of a [`Message`](super::Message).
///
/// Every personalization becomes a separate outbound email. Recipient lists
/// and the header, substitution, custom argument and template data maps
/// accumulate; `subject` and `send_at` are overwritten by the last call.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Personalization {
    to: Vec<Address>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    cc: Vec<Address>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    bcc: Vec<Address>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    headers: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    substitutions: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    custom_args: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Map::is_empty")]
    dynamic_template_data: Map<String, Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    send_at: Option<SendAt>,
}

/// Fields that may also be given message-wide
#[derive(Debug)]
pub(crate) struct Overrides {
    pub(crate) subject: Option<String>,
    pub(crate) send_at: Option<SendAt>,
    pub(crate) headers: BTreeMap<String, String>,
    pub(crate) custom_args: BTreeMap<String, String>,
}

impl Personalization {
    /// Create an empty personalization
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `to` recipients
    pub fn add_to(&mut self, recipients: impl IntoIterator<Item = Address>) -> &mut Self {
        self.to.extend(recipients);
        self
    }

    /// Append `cc` recipients
    pub fn add_cc(&mut self, recipients: impl IntoIterator<Item = Address>) -> &mut Self {
        self.cc.extend(recipients);
        self
    }

    /// Append `bcc` recipients
    pub fn add_bcc(&mut self, recipients: impl IntoIterator<Item = Address>) -> &mut Self {
        self.bcc.extend(recipients);
        self
    }

    /// Merge headers; a repeated name replaces the earlier value
    pub fn add_headers(&mut self, headers: impl IntoIterator<Item = Header>) -> &mut Self {
        self.headers.extend(headers.into_iter().map(Header::into_pair));
        self
    }

    /// Merge substitutions; a repeated tag replaces the earlier value
    pub fn add_substitutions(
        &mut self,
        substitutions: impl IntoIterator<Item = Substitution>,
    ) -> &mut Self {
        self.substitutions
            .extend(substitutions.into_iter().map(Substitution::into_pair));
        self
    }

    /// Merge custom arguments; a repeated key replaces the earlier value
    pub fn add_custom_args(&mut self, args: impl IntoIterator<Item = CustomArg>) -> &mut Self {
        self.custom_args
            .extend(args.into_iter().map(CustomArg::into_pair));
        self
    }

    /// Set one dynamic template data entry
    pub fn add_dynamic_template_data(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.dynamic_template_data.insert(key.into(), value.into());
        self
    }

    /// Override the message subject for this personalization
    pub fn set_subject(&mut self, subject: impl Into<String>) -> &mut Self {
        self.subject = Some(subject.into());
        self
    }

    /// Override the message send time for this personalization
    pub fn set_send_at(&mut self, send_at: impl Into<SendAt>) -> &mut Self {
        self.send_at = Some(send_at.into());
        self
    }

    /// `to` recipients
    pub fn to(&self) -> &[Address] {
        &self.to
    }

    /// `cc` recipients
    pub fn cc(&self) -> &[Address] {
        &self.cc
    }

    /// `bcc` recipients
    pub fn bcc(&self) -> &[Address] {
        &self.bcc
    }

    /// Substitutions
    pub fn substitutions(&self) -> &BTreeMap<String, String> {
        &self.substitutions
    }

    /// Subject override
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Send time override
    pub fn send_at(&self) -> Option<SendAt> {
        self.send_at
    }

    pub(crate) fn has_subject(&self) -> bool {
        self.subject.is_some()
    }

    pub(crate) fn has_send_at(&self) -> bool {
        self.send_at.is_some()
    }

    pub(crate) fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    pub(crate) fn has_custom_arg(&self, key: &str) -> bool {
        self.custom_args.contains_key(key)
    }

    /// Moves the overridable fields out, leaving them unset
    pub(crate) fn take_overrides(&mut self) -> Overrides {
        Overrides {
            subject: self.subject.take(),
            send_at: self.send_at.take(),
            headers: mem::take(&mut self.headers),
            custom_args: mem::take(&mut self.custom_args),
        }
    }

    /// Adds message-wide substitutions without replacing own values
    pub(crate) fn inherit_substitutions(&mut self, globals: &BTreeMap<String, String>) {
        for (tag, value) in globals {
            self.substitutions
                .entry(tag.clone())
                .or_insert_with(|| value.clone());
        }
    }
}
