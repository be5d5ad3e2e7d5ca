use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use folio_core_contact_contracts::{ContactFormService, ContactFormSubmitError};
use folio_models::contact::{
    ContactField, ContactFormEvent, ContactSubmission, FieldState, FieldStatus, FormState,
    ValidationResult,
};
use folio_shared_contracts::{scheduler::SchedulerService, time::TimeService};
use folio_utils::sync::MutexExt;
use folio_view_contracts::ContactFormView;
use tracing::{debug, info, instrument, trace};

pub mod rules;

#[cfg(test)]
mod tests;

#[derive(Debug)]
pub struct ContactFormServiceImpl<View, Time, Scheduler> {
    view: Arc<View>,
    time: Time,
    scheduler: Scheduler,
    config: ContactFormFeatureConfig,
    state: Arc<Mutex<FormState>>,
}

#[derive(Debug, Clone)]
pub struct ContactFormFeatureConfig {
    /// How long the success indicator replaces the form after a submission.
    pub success_reset_delay: Duration,
}

impl Default for ContactFormFeatureConfig {
    fn default() -> Self {
        Self {
            success_reset_delay: Duration::from_millis(5000),
        }
    }
}

impl<View, Time, Scheduler> ContactFormServiceImpl<View, Time, Scheduler> {
    pub fn new(
        view: Arc<View>,
        time: Time,
        scheduler: Scheduler,
        config: ContactFormFeatureConfig,
    ) -> Self {
        Self {
            view,
            time,
            scheduler,
            config,
            state: Default::default(),
        }
    }
}

impl<View, Time, Scheduler> ContactFormService for ContactFormServiceImpl<View, Time, Scheduler>
where
    View: ContactFormView,
    Time: TimeService,
    Scheduler: SchedulerService,
{
    #[instrument(skip(self))]
    fn initialize(&self) {
        self.clear_all_errors();
        info!("Contact form initialized");
    }

    #[instrument(skip(self), ret(level = "trace"))]
    fn validate_field(&self, field: ContactField) -> ValidationResult {
        let value = self.view.read_field_value(field);
        let result = rules::evaluate(field, &value);

        *self.state.lock_unpoisoned().field_mut(field) = FieldState {
            value,
            status: match result {
                Ok(()) => FieldStatus::Valid,
                Err(err) => FieldStatus::Invalid(err),
            },
        };

        match result {
            Ok(()) => self.view.clear_field_error(field),
            Err(err) => self.view.show_field_error(field, &err.to_string()),
        }

        result
    }

    #[instrument(skip(self), ret(level = "trace"))]
    fn validate_form(&self) -> bool {
        // Every field has to be evaluated so that all errors are shown at once.
        for field in ContactField::ALL {
            let _ = self.validate_field(field);
        }
        self.state.lock_unpoisoned().is_valid()
    }

    #[instrument(skip(self))]
    fn handle_submit(&self) -> Result<ContactSubmission, ContactFormSubmitError> {
        self.clear_all_errors();

        if !self.validate_form() {
            let focused = self.state.lock_unpoisoned().first_invalid();
            if let Some(field) = focused {
                self.view.focus_field(field);
            }
            debug!(?focused, "Contact form validation failed");
            return Err(ContactFormSubmitError::Invalid { focused });
        }

        self.view.set_form_visible(false);
        self.view.set_success_indicator_visible(true);

        let values = self.state.lock_unpoisoned().values();
        let submission = ContactSubmission::new(values, self.time.now());
        info!(?submission, "Contact form submitted successfully");
        self.view.emit_submission_record(&submission);

        self.view.reset_field_values();
        {
            let mut state = self.state.lock_unpoisoned();
            for field in ContactField::ALL {
                *state.field_mut(field) = FieldState::default();
            }
            state.submitted = true;
        }

        self.schedule_reset();

        Ok(submission)
    }

    #[instrument(skip(self))]
    fn clear_field_error_on_input(&self, field: ContactField) {
        let dismissed = {
            let mut state = self.state.lock_unpoisoned();
            let field_state = state.field_mut(field);
            let dismissed = field_state.has_error();
            if dismissed {
                field_state.status = FieldStatus::Untouched;
            }
            dismissed
        };

        if dismissed {
            trace!("dismiss error while typing");
            self.view.clear_field_error(field);
        }
    }

    #[instrument(skip(self))]
    fn handle_event(&self, event: ContactFormEvent) {
        match event {
            ContactFormEvent::Input(field) => self.clear_field_error_on_input(field),
            ContactFormEvent::Blur(field) => {
                // The outcome is already reflected next to the field.
                let _ = self.validate_field(field);
            }
            ContactFormEvent::Submit => {
                let _ = self.handle_submit();
            }
        }
    }

    fn form_state(&self) -> FormState {
        self.state.lock_unpoisoned().clone()
    }
}

impl<View, Time, Scheduler> ContactFormServiceImpl<View, Time, Scheduler>
where
    View: ContactFormView,
    Scheduler: SchedulerService,
{
    fn clear_all_errors(&self) {
        {
            let mut state = self.state.lock_unpoisoned();
            for field in ContactField::ALL {
                let field_state = state.field_mut(field);
                if field_state.has_error() {
                    field_state.status = FieldStatus::Untouched;
                }
            }
        }

        for field in ContactField::ALL {
            self.view.clear_field_error(field);
        }
    }

    /// Brings the form back once the success indicator has been shown for
    /// the configured delay.
    ///
    /// Pending resets are never cancelled, so submitting again before one
    /// fires leaves two resets in flight.
    fn schedule_reset(&self) {
        let view = Arc::clone(&self.view);
        let state = Arc::clone(&self.state);
        self.scheduler.schedule(
            self.config.success_reset_delay,
            Box::new(move || {
                state.lock_unpoisoned().submitted = false;
                view.set_success_indicator_visible(false);
                view.set_form_visible(true);
                debug!("Contact form reset");
            }),
        );
    }
}
