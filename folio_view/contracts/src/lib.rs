use folio_models::contact::{ContactField, ContactFormElement, ContactFormEvent, ContactSubmission};

/// The presentation layer of the contact page.
///
/// Implementations own the actual input values and decide how errors,
/// visibility and focus are rendered.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormView: Send + Sync + 'static {
    /// Return whether the page contains the given element.
    fn has_element(&self, element: ContactFormElement) -> bool;

    /// Return the raw (untrimmed) value of a field.
    fn read_field_value(&self, field: ContactField) -> String;

    /// Display `message` next to the field and mark the field as invalid.
    fn show_field_error(&self, field: ContactField, message: &str);

    /// Hide the error message of the field and mark the field as valid.
    fn clear_field_error(&self, field: ContactField);

    fn set_form_visible(&self, visible: bool);

    fn set_success_indicator_visible(&self, visible: bool);

    fn focus_field(&self, field: ContactField);

    /// Reset all input values to empty strings.
    fn reset_field_values(&self);

    /// Hand a successfully submitted form to whatever records submissions.
    /// No delivery happens here.
    fn emit_submission_record(&self, record: &ContactSubmission);
}

pub type ContactFormEventHandler = Box<dyn Fn(ContactFormEvent) + Send + Sync + 'static>;

/// Source of user interaction events on the contact page.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormEventSource: Send + Sync + 'static {
    /// Register a handler that is invoked for every event, in the order in
    /// which events occur.
    fn subscribe(&self, handler: ContactFormEventHandler);
}

#[cfg(feature = "mock")]
impl MockContactFormView {
    pub fn with_has_element(mut self, element: ContactFormElement, result: bool) -> Self {
        self.expect_has_element()
            .once()
            .with(mockall::predicate::eq(element))
            .return_const(result);
        self
    }

    /// Expects one read of `field` per evaluation, `times` in total.
    pub fn with_read_field_value(
        mut self,
        field: ContactField,
        value: impl Into<String>,
        times: usize,
    ) -> Self {
        self.expect_read_field_value()
            .times(times)
            .with(mockall::predicate::eq(field))
            .return_const(value.into());
        self
    }

    pub fn with_show_field_error(mut self, field: ContactField, message: &'static str) -> Self {
        self.expect_show_field_error()
            .once()
            .withf(move |f, m| *f == field && m == message)
            .return_const(());
        self
    }

    pub fn with_clear_field_error(mut self, field: ContactField, times: usize) -> Self {
        self.expect_clear_field_error()
            .times(times)
            .with(mockall::predicate::eq(field))
            .return_const(());
        self
    }

    pub fn with_set_form_visible(mut self, visible: bool) -> Self {
        self.expect_set_form_visible()
            .once()
            .with(mockall::predicate::eq(visible))
            .return_const(());
        self
    }

    pub fn with_set_success_indicator_visible(mut self, visible: bool) -> Self {
        self.expect_set_success_indicator_visible()
            .once()
            .with(mockall::predicate::eq(visible))
            .return_const(());
        self
    }

    pub fn with_focus_field(mut self, field: ContactField) -> Self {
        self.expect_focus_field()
            .once()
            .with(mockall::predicate::eq(field))
            .return_const(());
        self
    }

    pub fn with_reset_field_values(mut self) -> Self {
        self.expect_reset_field_values().once().return_const(());
        self
    }

    pub fn with_emit_submission_record(mut self, record: ContactSubmission) -> Self {
        self.expect_emit_submission_record()
            .once()
            .withf(move |r| *r == record)
            .return_const(());
        self
    }
}
