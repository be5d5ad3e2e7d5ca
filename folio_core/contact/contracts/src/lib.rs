use folio_models::contact::{
    ContactField, ContactFormEvent, ContactSubmission, FormState, ValidationResult,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormService: Send + Sync + 'static {
    /// Mark all fields as not invalid. Called once when the page is mounted.
    fn initialize(&self);

    /// Evaluate the rules of a single field against its current value and
    /// show or clear the resulting error message.
    fn validate_field(&self, field: ContactField) -> ValidationResult;

    /// Validate every field, including the ones after the first failure.
    ///
    /// Returns `true` iff all fields are valid.
    fn validate_form(&self) -> bool;

    /// Validate the whole form and, if it is valid, hide it behind the
    /// success indicator, record the submission and clear all fields.
    ///
    /// The form comes back automatically after the configured delay.
    fn handle_submit(&self) -> Result<ContactSubmission, ContactFormSubmitError>;

    /// Dismiss the error shown for a field while the user is typing.
    ///
    /// This does not revalidate the field.
    fn clear_field_error_on_input(&self, field: ContactField);

    /// Dispatch a user interaction to the matching handler.
    fn handle_event(&self, event: ContactFormEvent);

    /// Return a snapshot of the current form state.
    fn form_state(&self) -> FormState;
}

#[derive(Debug, Error)]
pub enum ContactFormSubmitError {
    #[error("The contact form contains invalid fields.")]
    Invalid {
        /// The first invalid field in page order, which received the focus.
        focused: Option<ContactField>,
    },
}

#[cfg(feature = "mock")]
impl MockContactFormService {
    pub fn with_initialize(mut self) -> Self {
        self.expect_initialize().once().return_const(());
        self
    }

    pub fn with_handle_event(mut self, event: ContactFormEvent) -> Self {
        self.expect_handle_event()
            .once()
            .with(mockall::predicate::eq(event))
            .return_const(());
        self
    }
}
