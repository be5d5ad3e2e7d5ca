use std::sync::Arc;

use folio_demo::contact::RESET_DELAY;
use folio_models::contact::ContactFormValues;
use folio_shared_contracts::{scheduler::MockSchedulerService, time::MockTimeService};
use folio_view_memory::MemoryContactFormView;

use crate::{ContactFormFeatureConfig, ContactFormServiceImpl};

mod handle_submit;

type Sut = ContactFormServiceImpl<MemoryContactFormView, MockTimeService, MockSchedulerService>;

fn config() -> ContactFormFeatureConfig {
    ContactFormFeatureConfig {
        success_reset_delay: RESET_DELAY,
    }
}

fn page(values: &ContactFormValues) -> Arc<MemoryContactFormView> {
    let view = MemoryContactFormView::new();
    view.fill(values.clone());
    Arc::new(view)
}

fn sut(
    view: &Arc<MemoryContactFormView>,
    time: MockTimeService,
    scheduler: MockSchedulerService,
) -> Sut {
    ContactFormServiceImpl::new(Arc::clone(view), time, scheduler, config())
}
