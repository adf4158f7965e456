use cstt_forms::FormData;
use serde::Deserialize;

/// Service inquiry form fields exactly as the browser submitted them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InquiryPayload {
    pub company: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub project_details: String,
}

impl InquiryPayload {
    pub fn form_data(&self) -> FormData<'_> {
        FormData::new()
            .with("company", &self.company)
            .with("name", &self.name)
            .with("email", &self.email)
            .with("phone", &self.phone)
            .with("service_type", &self.service_type)
            .with("project_details", &self.project_details)
    }
}
