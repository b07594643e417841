//! Mail request payload module.
//!
//! Leaf settings are attached either to the [`Message`] itself (message-wide
//! defaults) or to an indexed [`Personalization`], and the whole graph is
//! serialized with [`Message::to_json`].

mod address;
mod attachment;
mod content;
mod email_address;
mod mail_settings;
mod message;
mod personalization;
mod settings;
mod tracking_settings;

pub mod errors;

pub use address::Address;
pub use attachment::{Attachment, Disposition};
pub use content::{mime_type, Content};
pub use email_address::{EmailAddress, EmailAddressError};
pub use errors::MailError;
pub use mail_settings::{
    BccSettings, BypassListManagement, FooterSettings, MailSettings, SandBoxMode, SpamCheck,
};
pub use message::Message;
pub use personalization::Personalization;
pub use settings::{
    Asm, Category, CustomArg, Header, SendAt, Section, Substitution, MAX_GROUPS_TO_DISPLAY,
};
pub use tracking_settings::{
    ClickTracking, Ganalytics, OpenTracking, SubscriptionTracking, TrackingSettings,
};
