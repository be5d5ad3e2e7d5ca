use std::{sync::LazyLock, time::Duration};

use chrono::{DateTime, TimeZone, Utc};
use folio_models::contact::{ContactFormValues, ContactSubmission};

pub const RESET_DELAY: Duration = Duration::from_millis(5000);

pub static NOW: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| Utc.with_ymd_and_hms(2024, 3, 14, 13, 37, 42).unwrap());

/// Passes every rule, with surrounding whitespace left in on purpose.
pub static VALID_VALUES: LazyLock<ContactFormValues> = LazyLock::new(|| ContactFormValues {
    name: "  Max Mustermann ".into(),
    email: "max.mustermann@example.de".into(),
    subject: " Hello ".into(),
    message: "  Hello World, how are you?  ".into(),
});

pub static SUBMISSION_1: LazyLock<ContactSubmission> =
    LazyLock::new(|| ContactSubmission::new(VALID_VALUES.clone(), *NOW));

/// Only the email address and the message are invalid.
pub static INVALID_EMAIL_AND_MESSAGE: LazyLock<ContactFormValues> =
    LazyLock::new(|| ContactFormValues {
        name: "Max Mustermann".into(),
        email: "max.mustermann@example".into(),
        subject: "Hello".into(),
        message: "short".into(),
    });

pub static WHITESPACE_ONLY: LazyLock<ContactFormValues> = LazyLock::new(|| ContactFormValues {
    name: "   ".into(),
    email: "\t".into(),
    subject: "\n ".into(),
    message: "          ".into(),
});
