use std::{fmt, sync::LazyLock};

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::macros::trimmed_string;

/// Deliberately permissive: something without whitespace, an `@`, and a
/// domain containing at least one dot.
pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Minimum length of a trimmed contact message, in UTF-16 code units.
pub const CONTACT_MESSAGE_MIN_LENGTH: usize = 10;

/// Strips surrounding whitespace the way browsers trim form values: the byte
/// order mark counts as whitespace, U+0085 does not.
pub fn trim_contact_value(value: &str) -> &str {
    value.trim_matches(|c: char| c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}'))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// All fields in the order in which they appear on the page.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed validation rule. The display text is the message shown next to
/// the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address (e.g., name@example.com)")]
    EmailInvalid,
    #[error("Subject is required")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

/// `Ok` if the field passed all of its rules, otherwise the first rule that
/// failed.
pub type ValidationResult = Result<(), ContactFieldError>;

/// What the page currently shows for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// Never evaluated, or an error was dismissed by typing.
    #[default]
    Untouched,
    Valid,
    Invalid(ContactFieldError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    /// The raw value read from the page during the last evaluation.
    pub value: String,
    pub status: FieldStatus,
}

impl FieldState {
    pub fn error(&self) -> Option<ContactFieldError> {
        match self.status {
            FieldStatus::Invalid(err) => Some(err),
            FieldStatus::Untouched | FieldStatus::Valid => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error().map(|err| err.to_string())
    }

    pub fn has_error(&self) -> bool {
        self.error().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub name: FieldState,
    pub email: FieldState,
    pub subject: FieldState,
    pub message: FieldState,
    /// Set while the success indicator is shown and the form is hidden.
    pub submitted: bool,
}

impl FormState {
    pub fn field(&self, field: ContactField) -> &FieldState {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut FieldState {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn is_valid(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| !self.field(field).has_error())
    }

    /// Returns the first field in page order that currently shows an error.
    pub fn first_invalid(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|&field| self.field(field).has_error())
    }

    pub fn values(&self) -> ContactFormValues {
        ContactFormValues {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            subject: self.subject.value.clone(),
            message: self.message.value.clone(),
        }
    }
}

/// Raw input of all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormValues {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Snapshot of a successfully submitted contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: ContactSubject,
    pub message: ContactMessageContent,
    pub timestamp: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn new(values: ContactFormValues, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: values.name.into(),
            email: values.email.into(),
            subject: values.subject.into(),
            message: values.message.into(),
            timestamp,
        }
    }
}

trimmed_string!(ContactName);
trimmed_string!(ContactEmail);
trimmed_string!(ContactSubject);
trimmed_string!(ContactMessageContent);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactFormEvent {
    /// A keystroke changed the value of a field.
    Input(ContactField),
    /// A field lost focus.
    Blur(ContactField),
    /// The user tried to submit the form.
    Submit,
}

/// A page element the contact form cannot work without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactFormElement {
    Form,
    SuccessIndicator,
    Input(ContactField),
    Error(ContactField),
}

impl ContactFormElement {
    pub const REQUIRED: [Self; 10] = [
        Self::Form,
        Self::Input(ContactField::Name),
        Self::Input(ContactField::Email),
        Self::Input(ContactField::Subject),
        Self::Input(ContactField::Message),
        Self::Error(ContactField::Name),
        Self::Error(ContactField::Email),
        Self::Error(ContactField::Subject),
        Self::Error(ContactField::Message),
        Self::SuccessIndicator,
    ];
}

impl fmt::Display for ContactFormElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Form => f.write_str("contact-form"),
            Self::SuccessIndicator => f.write_str("test-contact-success"),
            Self::Input(field) => write!(f, "test-contact-{field}"),
            Self::Error(field) => write!(f, "test-contact-error-{field}"),
        }
    }
}
