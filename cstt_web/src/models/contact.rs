use cstt_forms::FormData;
use serde::Deserialize;

/// Contact form fields exactly as the browser submitted them. Missing fields
/// default to the empty string, which the validator treats the same as a
/// blank value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    pub fn form_data(&self) -> FormData<'_> {
        FormData::new()
            .with("name", &self.name)
            .with("email", &self.email)
            .with("subject", &self.subject)
            .with("message", &self.message)
    }
}
