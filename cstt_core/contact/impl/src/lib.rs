use cstt_core_contact_contracts::ContactFeatureService;
use cstt_models::{contact::ContactSubmission, Acknowledgment};
use tracing::info;

const ACKNOWLEDGMENT: &str =
    "Thank you for contacting us! We will respond to your message shortly.";

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFeatureServiceImpl;

impl ContactFeatureService for ContactFeatureServiceImpl {
    fn submit(&self, submission: ContactSubmission) -> Acknowledgment {
        info!(
            category = "contact",
            name = %submission.name,
            email = %submission.email,
            subject = %submission.subject,
            message = %submission.message,
            "new contact form submission"
        );
        Acknowledgment::new(ACKNOWLEDGMENT)
    }
}
