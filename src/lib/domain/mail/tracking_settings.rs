//! Tracking settings

use serde::Serialize;

/// Rewrite links so clicks are tracked
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ClickTracking {
    enable: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    enable_text: Option<bool>,
}

impl ClickTracking {
    /// Create the setting; `enable_text` also tracks links in the plain
    /// text body
    pub fn new(enable: bool, enable_text: bool) -> Self {
        Self {
            enable,
            enable_text: Some(enable_text),
        }
    }

    /// Create the setting without an opinion on plain text links
    pub fn enabled(enable: bool) -> Self {
        Self {
            enable,
            enable_text: None,
        }
    }
}

/// Insert a tracking pixel to detect opens
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OpenTracking {
    enable: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    substitution_tag: Option<String>,
}

impl OpenTracking {
    /// Create the setting
    pub fn new(enable: bool) -> Self {
        Self {
            enable,
            substitution_tag: None,
        }
    }

    /// Tag replaced by the tracking pixel instead of appending it
    pub fn substitution_tag(mut self, tag: impl Into<String>) -> Self {
        self.substitution_tag = Some(tag.into());
        self
    }
}

/// Add an unsubscribe link
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubscriptionTracking {
    enable: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    substitution_tag: Option<String>,
}

impl SubscriptionTracking {
    /// Create the setting
    pub fn new(enable: bool) -> Self {
        Self {
            enable,
            text: None,
            html: None,
            substitution_tag: None,
        }
    }

    /// Plain text unsubscribe snippet
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// HTML unsubscribe snippet
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Tag replaced by the unsubscribe URL
    pub fn substitution_tag(mut self, tag: impl Into<String>) -> Self {
        self.substitution_tag = Some(tag.into());
        self
    }
}

/// Google Analytics campaign parameters appended to links
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Ganalytics {
    enable: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    utm_source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    utm_medium: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    utm_term: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    utm_content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    utm_campaign: Option<String>,
}

impl Ganalytics {
    /// Create the setting without parameters
    pub fn new(enable: bool) -> Self {
        Self {
            enable,
            utm_source: None,
            utm_medium: None,
            utm_term: None,
            utm_content: None,
            utm_campaign: None,
        }
    }

    /// `utm_source`
    pub fn utm_source(mut self, value: impl Into<String>) -> Self {
        self.utm_source = Some(value.into());
        self
    }

    /// `utm_medium`
    pub fn utm_medium(mut self, value: impl Into<String>) -> Self {
        self.utm_medium = Some(value.into());
        self
    }

    /// `utm_term`
    pub fn utm_term(mut self, value: impl Into<String>) -> Self {
        self.utm_term = Some(value.into());
        self
    }

    /// `utm_content`
    pub fn utm_content(mut self, value: impl Into<String>) -> Self {
        self.utm_content = Some(value.into());
        self
    }

    /// `utm_campaign`
    pub fn utm_campaign(mut self, value: impl Into<String>) -> Self {
        self.utm_campaign = Some(value.into());
        self
    }
}

/// Message-wide tracking settings
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TrackingSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    click_tracking: Option<ClickTracking>,

    #[serde(skip_serializing_if = "Option::is_none")]
    open_tracking: Option<OpenTracking>,

    #[serde(skip_serializing_if = "Option::is_none")]
    subscription_tracking: Option<SubscriptionTracking>,

    #[serde(skip_serializing_if = "Option::is_none")]
    ganalytics: Option<Ganalytics>,
}

impl TrackingSettings {
    /// Create empty tracking settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set click tracking
    pub fn click_tracking(mut self, click_tracking: ClickTracking) -> Self {
        self.click_tracking = Some(click_tracking);
        self
    }

    /// Set open tracking
    pub fn open_tracking(mut self, open_tracking: OpenTracking) -> Self {
        self.open_tracking = Some(open_tracking);
        self
    }

    /// Set subscription tracking
    pub fn subscription_tracking(mut self, subscription_tracking: SubscriptionTracking) -> Self {
        self.subscription_tracking = Some(subscription_tracking);
        self
    }

    /// Set Google Analytics tracking
    pub fn ganalytics(mut self, ganalytics: Ganalytics) -> Self {
        self.ganalytics = Some(ganalytics);
        self
    }

    /// Whether no setting has been given
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
