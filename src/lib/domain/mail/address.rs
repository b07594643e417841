//! Sender and recipient addresses

use serde::Serialize;

use super::{EmailAddress, EmailAddressError};

/// An email address with an optional display name.
///
/// Used for the sender, the reply-to address, every `to`/`cc`/`bcc`
/// recipient and the BCC mail setting. Serializes as
/// `{"email": ..., "name": ...}` with `name` left out when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Address {
    email: EmailAddress,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Address {
    /// Create an address without a display name
    pub fn new(email: EmailAddress) -> Self {
        Self { email, name: None }
    }

    /// Create an address with a display name
    pub fn with_name(email: EmailAddress, name: impl Into<String>) -> Self {
        Self {
            email,
            name: Some(name.into()),
        }
    }

    /// Parse `email` and attach an optional display name
    pub fn parse(email: &str, name: Option<&str>) -> Result<Self, EmailAddressError> {
        Ok(Self {
            email: EmailAddress::new(email)?,
            name: name.map(str::to_string),
        })
    }

    /// The email address
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// The display name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl From<EmailAddress> for Address {
    fn from(email: EmailAddress) -> Self {
        Self::new(email)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_address_with_name() -> TestResult {
        let address = Address::parse("a@x.com", Some("A"))?;

        assert_eq!(
            serde_json::to_value(&address)?,
            json!({"email": "a@x.com", "name": "A"})
        );

        Ok(())
    }

    #[test]
    fn test_address_without_name_omits_name() -> TestResult {
        let address = Address::from(EmailAddress::new("test@example.com")?);

        assert_eq!(address.name(), None);
        assert_eq!(
            serde_json::to_value(&address)?,
            json!({"email": "test@example.com"})
        );

        Ok(())
    }

    #[test]
    fn test_address_rejects_invalid_email() {
        assert!(Address::parse("not an email", None).is_err());
    }
}
