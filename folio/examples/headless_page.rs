//! Mounts the contact form on an in-memory page and walks through a failed
//! and a successful submission.
//!
//! Run with `RUST_LOG=debug` to see what the engine does.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use folio::{environment::ConfigProvider, page::ContactPage};
use folio_core_contact_contracts::ContactFormService;
use folio_demo::contact::{INVALID_EMAIL_AND_MESSAGE, VALID_VALUES};
use folio_models::contact::ContactField;
use folio_view_memory::MemoryContactFormView;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    folio::init_tracing()?;

    let config = folio_config::load_default().context("Failed to load config")?;
    let config = ConfigProvider::new(&config);

    let view = Arc::new(MemoryContactFormView::new());
    let page = ContactPage::mount(Arc::clone(&view), &config)?;

    view.fill(INVALID_EMAIL_AND_MESSAGE.clone());
    view.submit();
    for field in ContactField::ALL {
        if let Some(error) = view.error_text(field) {
            println!("{field}: {error}");
        }
    }
    println!("focused: {:?}", view.focused());

    view.fill(VALID_VALUES.clone());
    view.submit();
    for submission in view.submissions() {
        println!("submitted: {submission:?}");
    }

    let reset_delay = config.contact_form.success_reset_delay;
    tokio::time::sleep(reset_delay + Duration::from_millis(100)).await;
    println!(
        "form visible again: {}, submitted: {}",
        view.is_form_visible(),
        page.contact_form().form_state().submitted
    );

    Ok(())
}
