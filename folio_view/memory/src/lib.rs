//! A headless contact page.
//!
//! [`MemoryContactFormView`] keeps everything a browser would render in
//! memory and lets callers simulate user interaction with
//! [`type_into`](MemoryContactFormView::type_into),
//! [`blur`](MemoryContactFormView::blur) and
//! [`submit`](MemoryContactFormView::submit).

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use folio_models::contact::{
    ContactField, ContactFormElement, ContactFormEvent, ContactFormValues, ContactSubmission,
};
use folio_utils::sync::MutexExt;
use folio_view_contracts::{ContactFormEventHandler, ContactFormEventSource, ContactFormView};
use tracing::trace;

#[derive(Default)]
pub struct MemoryContactFormView {
    page: Mutex<Page>,
    handlers: Mutex<Vec<Arc<ContactFormEventHandler>>>,
}

#[derive(Debug)]
struct Page {
    missing: HashSet<ContactFormElement>,
    values: ContactFormValues,
    errors: HashMap<ContactField, String>,
    form_visible: bool,
    success_visible: bool,
    focused: Option<ContactField>,
    submissions: Vec<ContactSubmission>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            missing: HashSet::new(),
            values: ContactFormValues::default(),
            errors: HashMap::new(),
            form_visible: true,
            success_visible: false,
            focused: None,
            submissions: Vec::new(),
        }
    }
}

impl MemoryContactFormView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a page on which `element` does not exist.
    pub fn without_element(self, element: ContactFormElement) -> Self {
        self.page.lock_unpoisoned().missing.insert(element);
        self
    }

    /// Replaces the value of a field without emitting an event.
    pub fn set_value(&self, field: ContactField, value: impl Into<String>) {
        *self.page.lock_unpoisoned().values.get_mut(field) = value.into();
    }

    /// Replaces all values without emitting events.
    pub fn fill(&self, values: ContactFormValues) {
        self.page.lock_unpoisoned().values = values;
    }

    /// Appends `text` to a field, emitting one input event per character.
    pub fn type_into(&self, field: ContactField, text: &str) {
        for c in text.chars() {
            self.page.lock_unpoisoned().values.get_mut(field).push(c);
            self.emit(ContactFormEvent::Input(field));
        }
    }

    /// Moves the focus to `field`.
    pub fn focus(&self, field: ContactField) {
        self.page.lock_unpoisoned().focused = Some(field);
    }

    /// Moves the focus away from `field` and emits a blur event.
    pub fn blur(&self, field: ContactField) {
        {
            let mut page = self.page.lock_unpoisoned();
            if page.focused == Some(field) {
                page.focused = None;
            }
        }
        self.emit(ContactFormEvent::Blur(field));
    }

    pub fn submit(&self) {
        self.emit(ContactFormEvent::Submit);
    }

    pub fn value(&self, field: ContactField) -> String {
        self.page.lock_unpoisoned().values.get(field).to_owned()
    }

    pub fn values(&self) -> ContactFormValues {
        self.page.lock_unpoisoned().values.clone()
    }

    /// Returns the error text currently shown next to `field`.
    pub fn error_text(&self, field: ContactField) -> Option<String> {
        self.page.lock_unpoisoned().errors.get(&field).cloned()
    }

    pub fn has_errors(&self) -> bool {
        !self.page.lock_unpoisoned().errors.is_empty()
    }

    pub fn is_form_visible(&self) -> bool {
        self.page.lock_unpoisoned().form_visible
    }

    pub fn is_success_indicator_visible(&self) -> bool {
        self.page.lock_unpoisoned().success_visible
    }

    pub fn focused(&self) -> Option<ContactField> {
        self.page.lock_unpoisoned().focused
    }

    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.page.lock_unpoisoned().submissions.clone()
    }

    fn emit(&self, event: ContactFormEvent) {
        trace!(?event, "emit");
        // Handlers call back into the view, so neither lock may be held here.
        let handlers = self.handlers.lock_unpoisoned().clone();
        for handler in handlers {
            (*handler)(event);
        }
    }
}

impl ContactFormView for MemoryContactFormView {
    fn has_element(&self, element: ContactFormElement) -> bool {
        !self.page.lock_unpoisoned().missing.contains(&element)
    }

    fn read_field_value(&self, field: ContactField) -> String {
        self.value(field)
    }

    fn show_field_error(&self, field: ContactField, message: &str) {
        self.page
            .lock_unpoisoned()
            .errors
            .insert(field, message.to_owned());
    }

    fn clear_field_error(&self, field: ContactField) {
        self.page.lock_unpoisoned().errors.remove(&field);
    }

    fn set_form_visible(&self, visible: bool) {
        self.page.lock_unpoisoned().form_visible = visible;
    }

    fn set_success_indicator_visible(&self, visible: bool) {
        self.page.lock_unpoisoned().success_visible = visible;
    }

    fn focus_field(&self, field: ContactField) {
        self.focus(field);
    }

    fn reset_field_values(&self) {
        self.page.lock_unpoisoned().values = ContactFormValues::default();
    }

    fn emit_submission_record(&self, record: &ContactSubmission) {
        self.page.lock_unpoisoned().submissions.push(record.clone());
    }
}

impl ContactFormEventSource for MemoryContactFormView {
    fn subscribe(&self, handler: ContactFormEventHandler) {
        self.handlers.lock_unpoisoned().push(Arc::new(handler));
    }
}
