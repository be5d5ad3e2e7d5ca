use folio_config::Config;
use folio_core_contact_impl::ContactFormFeatureConfig;

/// Feature configurations derived from the loaded [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    pub contact_form: ContactFormFeatureConfig,
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        let contact_form = ContactFormFeatureConfig {
            success_reset_delay: config.contact.success_reset_delay.into(),
        };

        Self { contact_form }
    }
}
