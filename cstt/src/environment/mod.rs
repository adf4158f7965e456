use cstt_config::Config;
use cstt_core_contact_impl::ContactFeatureServiceImpl;
use cstt_core_inquiry_impl::InquiryFeatureServiceImpl;
use cstt_templates_impl::TemplateServiceImpl;
use cstt_web::{FlashKey, WebServerConfig};

pub mod types;

/// Assemble the web server from its service implementations.
pub fn web_server(config: &Config) -> types::WebServer {
    cstt_web::WebServer {
        config: WebServerConfig {
            flash_key: FlashKey::derive(&config.session.secret),
        },
        templates: TemplateServiceImpl::new(),
        contact: ContactFeatureServiceImpl,
        inquiry: InquiryFeatureServiceImpl,
    }
}
