use std::sync::Arc;

use folio_core_contact_contracts::ContactFormService;
use folio_core_contact_impl::ContactFormServiceImpl;
use folio_models::contact::ContactFormElement;
use folio_shared_impl::{scheduler::TokioSchedulerService, time::TimeServiceImpl};
use folio_view_contracts::{ContactFormEventSource, ContactFormView};
use thiserror::Error;
use tracing::{error, info};

use crate::environment::ConfigProvider;

pub type ContactForm<View> = ContactFormServiceImpl<View, TimeServiceImpl, TokioSchedulerService>;

/// A contact form attached to a view.
///
/// Events from the view reach the form for as long as the page is alive.
pub struct ContactPage<View> {
    contact_form: Arc<ContactForm<View>>,
}

#[derive(Debug, Error)]
pub enum ContactPageMountError {
    #[error(
        "The contact page is missing required elements: {}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    )]
    MissingElements(Vec<ContactFormElement>),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl<View> ContactPage<View>
where
    View: ContactFormView + ContactFormEventSource,
{
    /// Checks that the view has every required element, then wires a new
    /// contact form to it.
    ///
    /// Must be called from within a tokio runtime, which runs the delayed
    /// form reset.
    pub fn mount(view: Arc<View>, config: &ConfigProvider) -> Result<Self, ContactPageMountError> {
        ensure_elements(&*view)?;

        let scheduler = TokioSchedulerService::new()?;
        let contact_form = Arc::new(ContactFormServiceImpl::new(
            Arc::clone(&view),
            TimeServiceImpl,
            scheduler,
            config.contact_form.clone(),
        ));

        contact_form.initialize();
        subscribe(&*view, &contact_form);
        info!("Contact page mounted");

        Ok(Self { contact_form })
    }

    pub fn contact_form(&self) -> &Arc<ContactForm<View>> {
        &self.contact_form
    }
}

/// Fails with every required element the view does not have.
pub fn ensure_elements(view: &impl ContactFormView) -> Result<(), ContactPageMountError> {
    let missing = ContactFormElement::REQUIRED
        .into_iter()
        .filter(|&element| !view.has_element(element))
        .collect::<Vec<_>>();

    if missing.is_empty() {
        return Ok(());
    }

    let err = ContactPageMountError::MissingElements(missing);
    error!("{err}");
    Err(err)
}

/// Forwards every event of `events` to `service`.
///
/// The handler only holds a weak reference, so dropping the last strong
/// reference to the service silently disconnects it.
pub fn subscribe<Service>(events: &impl ContactFormEventSource, service: &Arc<Service>)
where
    Service: ContactFormService,
{
    let service = Arc::downgrade(service);
    events.subscribe(Box::new(move |event| {
        if let Some(service) = service.upgrade() {
            service.handle_event(event);
        }
    }));
}
