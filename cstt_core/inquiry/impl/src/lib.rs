use cstt_core_inquiry_contracts::InquiryFeatureService;
use cstt_models::{inquiry::ServiceInquirySubmission, Acknowledgment};
use tracing::info;

const ACKNOWLEDGMENT: &str =
    "Thank you for your service inquiry! Our team will contact you within 24 hours.";

#[derive(Debug, Clone, Copy, Default)]
pub struct InquiryFeatureServiceImpl;

impl InquiryFeatureService for InquiryFeatureServiceImpl {
    fn submit(&self, submission: ServiceInquirySubmission) -> Acknowledgment {
        info!(
            category = "service_inquiry",
            company = %submission.company,
            name = %submission.name,
            email = %submission.email,
            phone = submission.phone.as_deref().unwrap_or(""),
            service_type = submission.service_type.key(),
            project_details = %submission.project_details,
            "new service inquiry submission"
        );
        Acknowledgment::new(ACKNOWLEDGMENT)
    }
}
