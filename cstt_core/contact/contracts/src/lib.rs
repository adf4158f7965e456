use cstt_models::{contact::ContactSubmission, Acknowledgment};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Record a validated contact submission and return the acknowledgment
    /// shown to the submitter.
    fn submit(&self, submission: ContactSubmission) -> Acknowledgment;
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        acknowledgment: Acknowledgment,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_const(acknowledgment);
        self
    }
}
