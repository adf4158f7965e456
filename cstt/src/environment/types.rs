use cstt_core_contact_impl::ContactFeatureServiceImpl;
use cstt_core_inquiry_impl::InquiryFeatureServiceImpl;
use cstt_templates_impl::TemplateServiceImpl;

pub type WebServer =
    cstt_web::WebServer<TemplateServiceImpl, ContactFeatureServiceImpl, InquiryFeatureServiceImpl>;
