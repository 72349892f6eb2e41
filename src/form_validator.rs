//! Contact Form Validation
//!
//! Field checks and per-attempt state for the contact form.

use std::sync::LazyLock;

use reactive_stores::Store;
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("valid email regex"));

/// Toast text shown after a successful submit
pub const SENT_MESSAGE: &str = "Message sent successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// First failing check of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingName,
    MissingEmail,
    InvalidEmail,
    MissingMessage,
}

impl ValidationError {
    /// The field to flag and focus
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingName => Field::Name,
            ValidationError::MissingEmail | ValidationError::InvalidEmail => Field::Email,
            ValidationError::MissingMessage => Field::Message,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ValidationError::MissingName => "Please enter your name.",
            ValidationError::MissingEmail => "Please enter your email address.",
            ValidationError::InvalidEmail => "Please enter a valid email address.",
            ValidationError::MissingMessage => "Please enter a message.",
        };
        f.write_str(text)
    }
}

impl std::error::Error for ValidationError {}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check the fields in order; the first failure wins
pub fn validate(name: &str, email: &str, message: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if message.trim().is_empty() {
        return Err(ValidationError::MissingMessage);
    }
    Ok(())
}

/// Result of one submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(ValidationError),
    Sent,
}

/// Contact form state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Field carrying the `invalid` style, at most one per attempt
    pub invalid: Option<Field>,
    /// Inline error text under the form
    pub notice: Option<String>,
}

impl ContactForm {
    /// Run one submit attempt. Flags are cleared first; on success the fields are emptied.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.invalid = None;
        self.notice = None;

        match validate(&self.name, &self.email, &self.message) {
            Err(err) => {
                self.invalid = Some(err.field());
                self.notice = Some(err.to_string());
                SubmitOutcome::Rejected(err)
            }
            Ok(()) => {
                self.clear_fields();
                SubmitOutcome::Sent
            }
        }
    }

    /// Empty every field and drop any error state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}
