use std::borrow::Cow;

use cstt_forms::FormData;
use serde::{Deserialize, Serialize};

pub mod contact;
pub mod flash;
pub mod inquiry;

/// User-facing success message returned after a valid submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment(pub Cow<'static, str>);

impl Acknowledgment {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Copy of a required field's value. Only called after schema validation, so
/// a blank value cannot occur on these fields.
pub(crate) fn required(data: &FormData, name: &str) -> String {
    data.value(name).unwrap_or_default().to_owned()
}
