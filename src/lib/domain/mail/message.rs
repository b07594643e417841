//! Message aggregate root and its serialization into the request payload

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{
    errors::MailError, Address, Asm, Attachment, Category, Content, CustomArg, Header,
    MailSettings, Personalization, SendAt, Section, Substitution, TrackingSettings,
    MAX_GROUPS_TO_DISPLAY,
};

/// A transactional email request under construction.
///
/// Scalar fields (`from`, `reply_to`, `subject`, `send_at`, `template_id`,
/// `batch_id`, `ip_pool_name`, `asm`, `mail_settings`, `tracking_settings`)
/// are overwritten by every `set_*` call. List and map fields are extended by
/// the `add_*` calls; these take any [`IntoIterator`], so a single item is
/// passed as `[item]`.
///
/// Recipients live in [`Personalization`]s addressed by index through
/// [`Message::personalization_at`]. Nothing is validated until
/// [`Message::to_json`].
///
/// # Examples
///
/// ```
/// use sendgrid_mail::domain::mail::{Address, Content, Message};
///
/// let mut message = Message::new();
/// message
///     .set_from(Address::parse("a@x.com", Some("A"))?)
///     .set_subject("S")
///     .add_content([Content::html("<b>hello</b>"), Content::plain_text("hello")]);
/// message
///     .personalization_at(0)
///     .add_to([Address::parse("b@x.com", Some("B"))?]);
///
/// let payload = message.to_json()?;
/// assert_eq!(payload["content"][0]["type"], "text/plain");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Message {
    from: Option<Address>,
    reply_to: Option<Address>,
    subject: Option<String>,
    contents: Vec<Content>,
    attachments: Vec<Attachment>,
    template_id: Option<String>,
    sections: BTreeMap<String, String>,
    headers: BTreeMap<String, String>,
    categories: Vec<Category>,
    custom_args: BTreeMap<String, String>,
    send_at: Option<SendAt>,
    batch_id: Option<String>,
    asm: Option<Asm>,
    ip_pool_name: Option<String>,
    mail_settings: Option<MailSettings>,
    tracking_settings: Option<TrackingSettings>,
    global_substitutions: BTreeMap<String, String>,
    personalizations: BTreeMap<usize, Personalization>,
}

/// Wire shape of the request body
#[derive(Serialize)]
struct Payload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<&'a Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    content: Vec<&'a Content>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<&'a Attachment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    template_id: Option<&'a str>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    sections: BTreeMap<&'a str, &'a str>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    headers: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    categories: Vec<&'a Category>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    custom_args: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    send_at: Option<SendAt>,

    #[serde(skip_serializing_if = "Option::is_none")]
    batch_id: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    asm: Option<&'a Asm>,

    #[serde(skip_serializing_if = "Option::is_none")]
    ip_pool_name: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    mail_settings: Option<&'a MailSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    tracking_settings: Option<&'a TrackingSettings>,

    personalizations: Vec<Personalization>,
}

impl Message {
    /// Create an empty message
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a message for a single recipient
    pub fn single(
        from: Address,
        to: Address,
        subject: impl Into<String>,
        contents: impl IntoIterator<Item = Content>,
    ) -> Self {
        let mut message = Self::new();
        message
            .set_from(from)
            .set_subject(subject)
            .add_content(contents)
            .add_to([to]);
        message
    }

    /// Set the sender
    pub fn set_from(&mut self, from: Address) -> &mut Self {
        self.from = Some(from);
        self
    }

    /// Set the reply-to address
    pub fn set_reply_to(&mut self, reply_to: Address) -> &mut Self {
        self.reply_to = Some(reply_to);
        self
    }

    /// Set the default subject
    pub fn set_subject(&mut self, subject: impl Into<String>) -> &mut Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the default send time
    pub fn set_send_at(&mut self, send_at: impl Into<SendAt>) -> &mut Self {
        self.send_at = Some(send_at.into());
        self
    }

    /// Set the template id
    pub fn set_template_id(&mut self, template_id: impl Into<String>) -> &mut Self {
        self.template_id = Some(template_id.into());
        self
    }

    /// Set the batch id used to cancel or pause a scheduled send
    pub fn set_batch_id(&mut self, batch_id: impl Into<String>) -> &mut Self {
        self.batch_id = Some(batch_id.into());
        self
    }

    /// Set the IP pool to send from
    pub fn set_ip_pool_name(&mut self, ip_pool_name: impl Into<String>) -> &mut Self {
        self.ip_pool_name = Some(ip_pool_name.into());
        self
    }

    /// Set the suppression group settings
    pub fn set_asm(&mut self, asm: Asm) -> &mut Self {
        self.asm = Some(asm);
        self
    }

    /// Set the mail settings
    pub fn set_mail_settings(&mut self, mail_settings: MailSettings) -> &mut Self {
        self.mail_settings = Some(mail_settings);
        self
    }

    /// Set the tracking settings
    pub fn set_tracking_settings(&mut self, tracking_settings: TrackingSettings) -> &mut Self {
        self.tracking_settings = Some(tracking_settings);
        self
    }

    /// Append content. Plain text and HTML are always serialized first, so
    /// the insertion order only matters among other MIME types.
    pub fn add_content(&mut self, contents: impl IntoIterator<Item = Content>) -> &mut Self {
        self.contents.extend(contents);
        self
    }

    /// Append attachments
    pub fn add_attachments(
        &mut self,
        attachments: impl IntoIterator<Item = Attachment>,
    ) -> &mut Self {
        self.attachments.extend(attachments);
        self
    }

    /// Append categories; duplicates are kept
    pub fn add_categories(&mut self, categories: impl IntoIterator<Item = Category>) -> &mut Self {
        self.categories.extend(categories);
        self
    }

    /// Merge default headers
    pub fn add_headers(&mut self, headers: impl IntoIterator<Item = Header>) -> &mut Self {
        self.headers.extend(headers.into_iter().map(Header::into_pair));
        self
    }

    /// Merge default custom arguments
    pub fn add_custom_args(&mut self, args: impl IntoIterator<Item = CustomArg>) -> &mut Self {
        self.custom_args
            .extend(args.into_iter().map(CustomArg::into_pair));
        self
    }

    /// Merge sections
    pub fn add_sections(&mut self, sections: impl IntoIterator<Item = Section>) -> &mut Self {
        self.sections
            .extend(sections.into_iter().map(Section::into_pair));
        self
    }

    /// Merge substitutions copied into every personalization when
    /// serialized. A personalization's own value for a tag takes precedence.
    pub fn add_global_substitutions(
        &mut self,
        substitutions: impl IntoIterator<Item = Substitution>,
    ) -> &mut Self {
        self.global_substitutions
            .extend(substitutions.into_iter().map(Substitution::into_pair));
        self
    }

    /// The personalization at `index`, created empty if it does not exist
    pub fn personalization_at(&mut self, index: usize) -> &mut Personalization {
        self.personalizations.entry(index).or_default()
    }

    /// The personalization at `index`, if it exists
    pub fn personalization(&self, index: usize) -> Option<&Personalization> {
        self.personalizations.get(&index)
    }

    /// Number of personalizations
    pub fn personalization_count(&self) -> usize {
        self.personalizations.len()
    }

    /// Store `personalization` one past the highest index in use and return
    /// that index
    pub fn add_personalization(&mut self, personalization: Personalization) -> usize {
        let index = self.next_index();
        self.personalizations.insert(index, personalization);
        index
    }

    /// Append `to` recipients to personalization 0
    pub fn add_to(&mut self, recipients: impl IntoIterator<Item = Address>) -> &mut Self {
        self.personalization_at(0).add_to(recipients);
        self
    }

    /// Append `cc` recipients to personalization 0
    pub fn add_cc(&mut self, recipients: impl IntoIterator<Item = Address>) -> &mut Self {
        self.personalization_at(0).add_cc(recipients);
        self
    }

    /// Append `bcc` recipients to personalization 0
    pub fn add_bcc(&mut self, recipients: impl IntoIterator<Item = Address>) -> &mut Self {
        self.personalization_at(0).add_bcc(recipients);
        self
    }

    /// Give every recipient a personalization of its own, so each receives
    /// a separate email
    pub fn add_to_individually(
        &mut self,
        recipients: impl IntoIterator<Item = Address>,
    ) -> &mut Self {
        for recipient in recipients {
            let index = self.next_index();
            self.personalization_at(index).add_to([recipient]);
        }
        self
    }

    /// Serialize into the request body.
    ///
    /// With a single personalization, its subject, send time, headers and
    /// custom arguments are emitted at the top level, taking precedence over
    /// the message defaults; header and custom argument maps are merged by
    /// key. With several, each keeps its own overrides and a message default
    /// (for maps, a single key) is dropped once every personalization
    /// overrides it.
    pub fn to_json(&self) -> Result<Value, MailError> {
        self.validate()?;

        let mut personalizations: Vec<Personalization> =
            self.personalizations.values().cloned().collect();

        for personalization in &mut personalizations {
            personalization.inherit_substitutions(&self.global_substitutions);
        }

        let mut subject = self.subject.clone();
        let mut send_at = self.send_at;
        let mut headers = self.headers.clone();
        let mut custom_args = self.custom_args.clone();

        if personalizations.len() == 1 {
            let overrides = personalizations[0].take_overrides();

            subject = overrides.subject.or(subject);
            send_at = overrides.send_at.or(send_at);

            headers.extend(overrides.headers);
            custom_args.extend(overrides.custom_args);
        } else {
            if personalizations.iter().all(Personalization::has_subject) {
                subject = None;
            }

            if personalizations.iter().all(Personalization::has_send_at) {
                send_at = None;
            }

            headers.retain(|name, _| !personalizations.iter().all(|p| p.has_header(name)));
            custom_args.retain(|key, _| !personalizations.iter().all(|p| p.has_custom_arg(key)));
        }

        let mut content: Vec<&Content> = self.contents.iter().collect();
        content.sort_by_key(|c| c.priority());

        debug!(
            personalizations = personalizations.len(),
            contents = content.len(),
            attachments = self.attachments.len(),
            "serializing message"
        );

        let payload = Payload {
            from: self.from.as_ref(),
            reply_to: self.reply_to.as_ref(),
            subject,
            content,
            attachments: self.attachments.iter().collect(),
            template_id: self.template_id.as_deref(),
            sections: self
                .sections
                .iter()
                .map(|(tag, value)| (tag.as_str(), value.as_str()))
                .collect(),
            headers,
            categories: self.categories.iter().collect(),
            custom_args,
            send_at,
            batch_id: self.batch_id.as_deref(),
            asm: self.asm.as_ref(),
            ip_pool_name: self.ip_pool_name.as_deref(),
            mail_settings: self.mail_settings.as_ref().filter(|s| !s.is_empty()),
            tracking_settings: self.tracking_settings.as_ref().filter(|s| !s.is_empty()),
            personalizations,
        };

        Ok(serde_json::to_value(payload)?)
    }

    /// Serialize into compact JSON text
    pub fn to_json_string(&self) -> Result<String, MailError> {
        Ok(serde_json::to_string(&self.to_json()?)?)
    }

    fn validate(&self) -> Result<(), MailError> {
        if self.contents.is_empty() && self.template_id.is_none() {
            debug!("message has neither content nor a template id");
            return Err(MailError::MissingContent);
        }

        if self.personalizations.is_empty() {
            debug!("message has no personalizations");
            return Err(MailError::EmptyPersonalizations);
        }

        if let Some(index) = self
            .personalizations
            .iter()
            .find_map(|(index, p)| p.to().is_empty().then_some(*index))
        {
            debug!(index, "personalization has no `to` recipient");
            return Err(MailError::MissingRecipient { index });
        }

        if self.contents.iter().any(Content::contains_api_key) {
            warn!("refusing to serialize content containing an API key");
            return Err(MailError::ApiKeyIncluded);
        }

        if let Some(asm) = &self.asm {
            let count = asm.display_count();

            if count > MAX_GROUPS_TO_DISPLAY {
                return Err(MailError::TooManyGroupsToDisplay {
                    count,
                    max: MAX_GROUPS_TO_DISPLAY,
                });
            }
        }

        Ok(())
    }

    fn next_index(&self) -> usize {
        self.personalizations
            .keys()
            .next_back()
            .map_or(0, |index| index + 1)
    }
}
