//! Message defaults read from the command line or environment

use clap::Parser;
use tracing::debug;

use crate::domain::mail::{Address, EmailAddressError, MailSettings, Message, SandBoxMode};

/// Sender and delivery defaults applied to every new message
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
pub struct MessageDefaultsConfig {
    /// The sender email address
    #[clap(long, env = "MAIL_FROM_EMAIL")]
    pub from_email: String,

    /// The sender display name
    #[clap(long, env = "MAIL_FROM_NAME")]
    pub from_name: Option<String>,

    /// The reply-to email address
    #[clap(long, env = "MAIL_REPLY_TO")]
    pub reply_to: Option<String>,

    /// The IP pool to send from
    #[clap(long, env = "MAIL_IP_POOL_NAME")]
    pub ip_pool_name: Option<String>,

    /// Validate requests without delivering them
    #[clap(long, env = "MAIL_SANDBOX_MODE", default_value = "false")]
    pub sandbox_mode: bool,
}

impl MessageDefaultsConfig {
    /// Create a message seeded with these defaults
    pub fn message(&self) -> Result<Message, EmailAddressError> {
        let mut message = Message::new();

        message.set_from(Address::parse(
            &self.from_email,
            self.from_name.as_deref(),
        )?);

        if let Some(reply_to) = &self.reply_to {
            message.set_reply_to(Address::parse(reply_to, None)?);
        }

        if let Some(ip_pool_name) = &self.ip_pool_name {
            message.set_ip_pool_name(ip_pool_name);
        }

        if self.sandbox_mode {
            debug!("sandbox mode enabled, messages will not be delivered");
            message.set_mail_settings(MailSettings::new().sandbox_mode(SandBoxMode::new(true)));
        }

        Ok(message)
    }
}
