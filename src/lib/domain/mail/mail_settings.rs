//! Mail settings
//!
//! Every toggle serializes its `enable` flag even when it is `false`, since
//! an explicit `false` overrides the account default while an absent
//! setting does not.

use serde::Serialize;

use super::EmailAddress;

/// Blind copy every message to a fixed address
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BccSettings {
    enable: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<EmailAddress>,
}

impl BccSettings {
    /// Create the setting, optionally naming the copy address
    pub fn new(enable: bool, email: Option<EmailAddress>) -> Self {
        Self { enable, email }
    }
}

/// Deliver regardless of unsubscribe and suppression lists
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BypassListManagement {
    enable: bool,
}

impl BypassListManagement {
    /// Create the setting
    pub fn new(enable: bool) -> Self {
        Self { enable }
    }
}

/// Append a footer to every message
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterSettings {
    enable: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
}

impl FooterSettings {
    /// Create the setting without footer bodies
    pub fn new(enable: bool) -> Self {
        Self {
            enable,
            text: None,
            html: None,
        }
    }

    /// Plain text footer
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// HTML footer
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }
}

/// Validate the request without delivering it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SandBoxMode {
    enable: bool,
}

impl SandBoxMode {
    /// Create the setting
    pub fn new(enable: bool) -> Self {
        Self { enable }
    }
}

/// Score message content for spam
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SpamCheck {
    enable: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    threshold: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    post_to_url: Option<String>,
}

impl SpamCheck {
    /// Create the setting
    pub fn new(enable: bool) -> Self {
        Self {
            enable,
            threshold: None,
            post_to_url: None,
        }
    }

    /// Spam score (1 to 10) above which a message is flagged
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// URL that receives a copy of flagged messages
    pub fn post_to_url(mut self, url: impl Into<String>) -> Self {
        self.post_to_url = Some(url.into());
        self
    }
}

/// Message-wide handling settings
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MailSettings {
    #[serde(rename = "bcc", skip_serializing_if = "Option::is_none")]
    bcc_settings: Option<BccSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    bypass_list_management: Option<BypassListManagement>,

    #[serde(rename = "footer", skip_serializing_if = "Option::is_none")]
    footer_settings: Option<FooterSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    sandbox_mode: Option<SandBoxMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    spam_check: Option<SpamCheck>,
}

impl MailSettings {
    /// Create empty mail settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the BCC setting
    pub fn bcc_settings(mut self, bcc_settings: BccSettings) -> Self {
        self.bcc_settings = Some(bcc_settings);
        self
    }

    /// Set the list management bypass
    pub fn bypass_list_management(mut self, bypass: BypassListManagement) -> Self {
        self.bypass_list_management = Some(bypass);
        self
    }

    /// Set the footer
    pub fn footer_settings(mut self, footer: FooterSettings) -> Self {
        self.footer_settings = Some(footer);
        self
    }

    /// Set sandbox mode
    pub fn sandbox_mode(mut self, sandbox_mode: SandBoxMode) -> Self {
        self.sandbox_mode = Some(sandbox_mode);
        self
    }

    /// Set the spam check
    pub fn spam_check(mut self, spam_check: SpamCheck) -> Self {
        self.spam_check = Some(spam_check);
        self
    }

    /// Whether no setting has been given
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
