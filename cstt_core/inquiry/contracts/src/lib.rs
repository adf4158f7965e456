use cstt_models::{inquiry::ServiceInquirySubmission, Acknowledgment};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait InquiryFeatureService: Send + Sync + 'static {
    /// Record a validated service inquiry and return the acknowledgment shown
    /// to the submitter.
    fn submit(&self, submission: ServiceInquirySubmission) -> Acknowledgment;
}

#[cfg(feature = "mock")]
impl MockInquiryFeatureService {
    pub fn with_submit(
        mut self,
        submission: ServiceInquirySubmission,
        acknowledgment: Acknowledgment,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_const(acknowledgment);
        self
    }
}
