use std::{sync::Arc, time::Duration};

use folio_core_contact_contracts::{ContactFormService, ContactFormSubmitError};
use folio_demo::contact::{
    INVALID_EMAIL_AND_MESSAGE, NOW, RESET_DELAY, SUBMISSION_1, VALID_VALUES, WHITESPACE_ONLY,
};
use folio_models::contact::{ContactField, ContactFormValues, FieldState};
use folio_shared_contracts::{
    scheduler::{MockSchedulerService, PendingCallbacks},
    time::MockTimeService,
};
use folio_utils::assert_matches;
use folio_view_contracts::MockContactFormView;
use pretty_assertions::assert_eq;

use crate::{
    tests::{config, page, sut},
    ContactFormFeatureConfig, ContactFormServiceImpl,
};

#[test]
fn ok() {
    // Arrange
    let view = page(&VALID_VALUES);
    let time = MockTimeService::new().with_now(*NOW);
    let pending = PendingCallbacks::default();
    let scheduler =
        MockSchedulerService::new().with_schedule_pending(RESET_DELAY, 1, pending.clone());

    let sut = sut(&view, time, scheduler);

    // Act
    let result = sut.handle_submit();

    // Assert
    assert_eq!(result.unwrap(), *SUBMISSION_1);

    assert!(!view.is_form_visible());
    assert!(view.is_success_indicator_visible());
    assert!(!view.has_errors());
    assert_eq!(view.values(), ContactFormValues::default());
    assert_eq!(view.submissions(), [SUBMISSION_1.clone()]);

    let state = sut.form_state();
    assert!(state.submitted);
    for field in ContactField::ALL {
        assert_eq!(*state.field(field), FieldState::default());
    }
    assert_eq!(pending.len(), 1);
}

#[test]
fn ok_reset_after_delay() {
    // Arrange
    let view = page(&VALID_VALUES);
    let time = MockTimeService::new().with_now(*NOW);
    let pending = PendingCallbacks::default();
    let scheduler =
        MockSchedulerService::new().with_schedule_pending(RESET_DELAY, 1, pending.clone());

    let sut = sut(&view, time, scheduler);
    sut.handle_submit().unwrap();

    // Act
    let fired = pending.fire();

    // Assert
    assert_eq!(fired, 1);
    assert!(view.is_form_visible());
    assert!(!view.is_success_indicator_visible());
    assert!(!view.has_errors());
    assert_eq!(view.values(), ContactFormValues::default());

    let state = sut.form_state();
    assert!(!state.submitted);
    assert!(state.is_valid());
}

#[test]
fn ok_configured_delay() {
    // Arrange
    let delay = Duration::from_millis(1500);
    let view = page(&VALID_VALUES);
    let time = MockTimeService::new().with_now(*NOW);
    let scheduler = MockSchedulerService::new().with_schedule(delay);

    let sut = ContactFormServiceImpl::new(
        Arc::clone(&view),
        time,
        scheduler,
        ContactFormFeatureConfig {
            success_reset_delay: delay,
        },
    );

    // Act
    let result = sut.handle_submit();

    // Assert
    result.unwrap();
    assert!(!sut.form_state().submitted);
    assert!(view.is_form_visible());
    assert!(!view.is_success_indicator_visible());
}

#[test]
fn ok_clears_stale_errors() {
    // Arrange
    let view = page(&ContactFormValues::default());
    let time = MockTimeService::new().with_now(*NOW);
    let scheduler = MockSchedulerService::new().with_schedule(RESET_DELAY);

    let sut = sut(&view, time, scheduler);
    sut.validate_form();
    assert!(view.has_errors());
    view.fill(VALID_VALUES.clone());

    // Act
    let result = sut.handle_submit();

    // Assert
    result.unwrap();
    assert!(!view.has_errors());
    assert!(sut.form_state().is_valid());
}

#[test]
fn ok_resubmit_before_reset() {
    // Arrange
    let view = page(&VALID_VALUES);
    let time = MockTimeService::new().with_now(*NOW).with_now(*NOW);
    let pending = PendingCallbacks::default();
    let scheduler =
        MockSchedulerService::new().with_schedule_pending(RESET_DELAY, 2, pending.clone());

    let sut = sut(&view, time, scheduler);
    sut.handle_submit().unwrap();
    view.fill(VALID_VALUES.clone());

    // Act
    let result = sut.handle_submit();

    // Assert
    assert_eq!(result.unwrap(), *SUBMISSION_1);
    assert_eq!(view.submissions().len(), 2);
    assert_eq!(pending.len(), 2);

    assert_eq!(pending.fire(), 2);
    assert!(!sut.form_state().submitted);
    assert!(view.is_form_visible());
}

#[test]
fn ok_interactions() {
    // Arrange
    let view = ContactField::ALL
        .into_iter()
        .fold(MockContactFormView::new(), |view, field| {
            view.with_read_field_value(field, VALID_VALUES.get(field), 1)
                // once to drop stale errors, once because the field is valid
                .with_clear_field_error(field, 2)
        })
        .with_set_form_visible(false)
        .with_set_success_indicator_visible(true)
        .with_emit_submission_record(SUBMISSION_1.clone())
        .with_reset_field_values()
        .with_set_success_indicator_visible(false)
        .with_set_form_visible(true);

    let time = MockTimeService::new().with_now(*NOW);
    let pending = PendingCallbacks::default();
    let scheduler =
        MockSchedulerService::new().with_schedule_pending(RESET_DELAY, 1, pending.clone());

    let sut = ContactFormServiceImpl::new(Arc::new(view), time, scheduler, config());

    // Act
    let result = sut.handle_submit();
    pending.fire();

    // Assert
    assert_eq!(result.unwrap(), *SUBMISSION_1);
}

#[test]
fn invalid_focuses_first_invalid_field() {
    // Arrange
    let view = page(&INVALID_EMAIL_AND_MESSAGE);
    let sut = sut(&view, MockTimeService::new(), MockSchedulerService::new());

    // Act
    let result = sut.handle_submit();

    // Assert
    assert_matches!(
        result,
        Err(ContactFormSubmitError::Invalid {
            focused: Some(ContactField::Email)
        })
    );
    assert_eq!(view.focused(), Some(ContactField::Email));

    assert!(view.is_form_visible());
    assert!(!view.is_success_indicator_visible());
    assert!(view.submissions().is_empty());
    assert_eq!(view.values(), *INVALID_EMAIL_AND_MESSAGE);
    assert_eq!(view.error_text(ContactField::Name), None);
    assert_eq!(
        view.error_text(ContactField::Email).as_deref(),
        Some("Please enter a valid email address (e.g., name@example.com)")
    );
    assert_eq!(view.error_text(ContactField::Subject), None);
    assert_eq!(
        view.error_text(ContactField::Message).as_deref(),
        Some("Message must be at least 10 characters long")
    );

    let state = sut.form_state();
    assert!(!state.submitted);
    assert_eq!(state.values(), *INVALID_EMAIL_AND_MESSAGE);
}

#[test]
fn invalid_focus_order() {
    for (values, expected) in [
        (WHITESPACE_ONLY.clone(), ContactField::Name),
        (
            ContactFormValues {
                name: VALID_VALUES.name.clone(),
                ..WHITESPACE_ONLY.clone()
            },
            ContactField::Email,
        ),
        (
            ContactFormValues {
                subject: String::new(),
                message: "too short".into(),
                ..VALID_VALUES.clone()
            },
            ContactField::Subject,
        ),
        (
            ContactFormValues {
                message: "too short".into(),
                ..VALID_VALUES.clone()
            },
            ContactField::Message,
        ),
    ] {
        // Arrange
        let view = page(&values);
        let sut = sut(&view, MockTimeService::new(), MockSchedulerService::new());

        // Act
        let result = sut.handle_submit();

        // Assert
        assert_matches!(
            result,
            Err(ContactFormSubmitError::Invalid { focused: Some(f) }) if *f == expected
        );
        assert_eq!(view.focused(), Some(expected));
    }
}

#[test]
fn invalid_interactions() {
    // Arrange
    let view = MockContactFormView::new()
        .with_read_field_value(ContactField::Name, "Max", 1)
        .with_read_field_value(ContactField::Email, "max@example", 1)
        .with_read_field_value(ContactField::Subject, "Hi", 1)
        .with_read_field_value(ContactField::Message, "", 1)
        .with_clear_field_error(ContactField::Name, 2)
        .with_clear_field_error(ContactField::Email, 1)
        .with_clear_field_error(ContactField::Subject, 2)
        .with_clear_field_error(ContactField::Message, 1)
        .with_show_field_error(
            ContactField::Email,
            "Please enter a valid email address (e.g., name@example.com)",
        )
        .with_show_field_error(ContactField::Message, "Message is required")
        .with_focus_field(ContactField::Email);

    let sut = ContactFormServiceImpl::new(
        Arc::new(view),
        MockTimeService::new(),
        MockSchedulerService::new(),
        config(),
    );

    // Act
    let result = sut.handle_submit();

    // Assert
    assert_matches!(
        result,
        Err(ContactFormSubmitError::Invalid {
            focused: Some(ContactField::Email)
        })
    );
}
