//! User model
//!
//! A user with an email address that can only be written through a
//! validating setter. The field itself is private; reads go through
//! [`User::email`] and writes through [`User::set_email`], which rejects
//! malformed addresses and leaves the stored value untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user with a validated email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name, stored as given
    pub username: String,

    /// Email address, only writable through `set_email`
    email: Option<String>,
}

impl User {
    /// Create a new user with no email address
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
        }
    }

    /// Get the current email address, if one has been set
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Set the email address, validating it first
    ///
    /// On rejection the previously stored address (or its absence) is left
    /// unchanged, and the error carries the offending input. The user can
    /// be rewritten any number of times.
    pub fn set_email(
        &mut self,
        new_email: impl Into<String>,
    ) -> Result<(), EmailValidationError> {
        let new_email = new_email.into();
        if !is_valid_email(&new_email) {
            return Err(EmailValidationError::Malformed(new_email));
        }
        self.email = Some(new_email);
        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.email {
            Some(email) => write!(f, "{} <{}>", self.username, email),
            None => write!(f, "{}", self.username),
        }
    }
}

/// Check a candidate address against the email shape rule
///
/// The rule is deliberately loose: at least one non-`@` character, an `@`,
/// then at least two characters of which the first two are not `@`. No
/// requirement that the domain contain a dot.
fn is_valid_email(candidate: &str) -> bool {
    match candidate.find('@') {
        Some(at) if at > 0 => {
            let after = &candidate[at + 1..];
            after.chars().take(2).filter(|c| *c != '@').count() == 2
        }
        _ => false,
    }
}

/// Validation errors for user email addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    Malformed(String),
}

impl fmt::Display for EmailValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(value) => {
                write!(f, "Not a valid email address: {}", value)
            }
        }
    }
}

impl std::error::Error for EmailValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_email() {
        let user = User::new("jsmith");
        assert_eq!(user.username, "jsmith");
        assert_eq!(user.email(), None);
    }

    #[test]
    fn test_rejects_address_without_domain_chars() {
        let mut user = User::new("jsmith");

        let err = user.set_email("jsmith@").unwrap_err();
        assert_eq!(err, EmailValidationError::Malformed("jsmith@".to_string()));
        assert_eq!(user.email(), None);
    }

    #[test]
    fn test_accepts_valid_address() {
        let mut user = User::new("jsmith");

        user.set_email("jsmith@g.co").unwrap();
        assert_eq!(user.email(), Some("jsmith@g.co"));
    }

    #[test]
    fn test_invalid_write_keeps_previous_value() {
        let mut user = User::new("jsmith");
        user.set_email("jsmith@g.co").unwrap();

        assert!(user.set_email("not-an-email").is_err());
        assert_eq!(user.email(), Some("jsmith@g.co"));
    }

    #[test]
    fn test_valid_rewrite_replaces_value() {
        let mut user = User::new("jsmith");
        user.set_email("jsmith@g.co").unwrap();
        user.set_email("jsmith@example.org").unwrap();

        assert_eq!(user.email(), Some("jsmith@example.org"));
    }

    #[test]
    fn test_error_message_carries_rejected_input() {
        let mut user = User::new("jsmith");
        let err = user.set_email("bogus").unwrap_err();

        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_email_shape_rule() {
        assert!(is_valid_email("a@bc"));
        assert!(is_valid_email("jsmith@g.co"));
        assert!(is_valid_email("a@bc@anything")); // loose rule, trailing junk allowed

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("jsmith"));
        assert!(!is_valid_email("jsmith@"));
        assert!(!is_valid_email("a@b")); // only one character after the @
        assert!(!is_valid_email("@g.co")); // empty local part
        assert!(!is_valid_email("a@b@cc")); // @ within the first two domain chars
    }

    #[test]
    fn test_display() {
        let mut user = User::new("jsmith");
        assert_eq!(user.to_string(), "jsmith");

        user.set_email("jsmith@g.co").unwrap();
        assert_eq!(user.to_string(), "jsmith <jsmith@g.co>");
    }

    #[test]
    fn test_serialization() {
        let mut user = User::new("jsmith");
        user.set_email("jsmith@g.co").unwrap();

        let json = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, deserialized);
    }
}
