use folio_models::contact::{
    trim_contact_value, ContactField, ContactFieldError, ValidationResult, CONTACT_EMAIL_REGEX,
    CONTACT_MESSAGE_MIN_LENGTH,
};

/// A check applied to the raw value of a field, together with the error
/// reported if the check fails.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRule {
    pub name: &'static str,
    pub check: fn(&str) -> bool,
    pub error: ContactFieldError,
}

impl ValidationRule {
    pub fn apply(&self, value: &str) -> ValidationResult {
        if (self.check)(value) {
            Ok(())
        } else {
            Err(self.error)
        }
    }
}

const NAME_RULES: &[ValidationRule] = &[ValidationRule {
    name: "required",
    check: is_present,
    error: ContactFieldError::NameRequired,
}];

const EMAIL_RULES: &[ValidationRule] = &[
    ValidationRule {
        name: "required",
        check: is_present,
        error: ContactFieldError::EmailRequired,
    },
    ValidationRule {
        name: "format",
        check: is_email_address,
        error: ContactFieldError::EmailInvalid,
    },
];

const SUBJECT_RULES: &[ValidationRule] = &[ValidationRule {
    name: "required",
    check: is_present,
    error: ContactFieldError::SubjectRequired,
}];

const MESSAGE_RULES: &[ValidationRule] = &[
    ValidationRule {
        name: "required",
        check: is_present,
        error: ContactFieldError::MessageRequired,
    },
    ValidationRule {
        name: "min_length",
        check: has_message_min_length,
        error: ContactFieldError::MessageTooShort,
    },
];

/// Returns the rules of a field in evaluation order.
pub fn rules(field: ContactField) -> &'static [ValidationRule] {
    match field {
        ContactField::Name => NAME_RULES,
        ContactField::Email => EMAIL_RULES,
        ContactField::Subject => SUBJECT_RULES,
        ContactField::Message => MESSAGE_RULES,
    }
}

/// Applies the rules of `field` to `value`, stopping at the first failure.
pub fn evaluate(field: ContactField, value: &str) -> ValidationResult {
    rules(field).iter().try_for_each(|rule| rule.apply(value))
}

fn is_present(value: &str) -> bool {
    !trim_contact_value(value).is_empty()
}

fn is_email_address(value: &str) -> bool {
    CONTACT_EMAIL_REGEX.is_match(value)
}

fn has_message_min_length(value: &str) -> bool {
    trim_contact_value(value).encode_utf16().count() >= CONTACT_MESSAGE_MIN_LENGTH
}
