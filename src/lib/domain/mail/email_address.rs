//! Email Address

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use EmailAddressError::*;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]*?@[^@\s]*?\.[^@\s]*$").unwrap();
}

/// An error that can occur when creating an email address
#[derive(Debug, Error)]
pub enum EmailAddressError {
    /// The email address is empty
    #[error("email is empty")]
    EmptyEmailAddress,

    /// The email address is invalid
    #[error("email is invalid")]
    InvalidEmailAddress,
}

/// An email address
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address, trimming surrounding whitespace
    pub fn new(raw: &str) -> Result<Self, EmailAddressError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(EmptyEmailAddress);
        }

        if !EMAIL_REGEX.is_match(trimmed) {
            return Err(InvalidEmailAddress);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create an email address without validating it
    pub fn new_unchecked(raw: &str) -> Self {
        Self(raw.to_string())
    }

    /// The address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = EmailAddressError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_email_address_display() -> TestResult {
        let email = EmailAddress::new("test+from@example.com")?;

        assert_eq!(format!("{}", email), "test+from@example.com".to_string());

        Ok(())
    }

    #[test]
    fn test_email_address_is_trimmed() -> TestResult {
        let email = EmailAddress::new("  dx@sendgrid.com \n")?;

        assert_eq!(email.as_str(), "dx@sendgrid.com");

        Ok(())
    }

    #[test]
    fn test_empty_email_address_is_invalid() {
        let result = EmailAddress::new("   ");
        assert!(matches!(result, Err(EmptyEmailAddress)));
    }

    #[test]
    fn test_email_address_without_at_symbol_is_invalid() {
        let result = EmailAddress::new("example.com");
        assert!(matches!(result, Err(InvalidEmailAddress)));
    }

    #[test]
    fn test_email_address_serializes_as_string() -> TestResult {
        let email = EmailAddress::try_from("a@x.com")?;

        assert_eq!(serde_json::to_value(&email)?, serde_json::json!("a@x.com"));

        Ok(())
    }
}
