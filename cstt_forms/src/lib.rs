//! Schema-driven validation for the site's lead-capture forms.
//!
//! A form is described by a static [`FormSchema`]; submitted input arrives as
//! [`FormData`]. Validation checks every field and collects every error, so a
//! single resubmission can fix all problems at once.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Accepts the usual `local@domain.tld` shape and nothing fancier.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Raw submitted form fields by name.
///
/// A field counts as *missing* when it was never submitted or its value is
/// blank after trimming. [`FormData::value`] hides missing fields;
/// [`FormData::raw`] returns whatever was submitted, for redisplay.
#[derive(Debug, Clone, Default)]
pub struct FormData<'a> {
    fields: BTreeMap<&'static str, &'a str>,
}

impl<'a> FormData<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: &'a str) -> Self {
        self.fields.insert(name, value);
        self
    }

    pub fn raw(&self, name: &str) -> Option<&'a str> {
        self.fields.get(name).copied()
    }

    pub fn value(&self, name: &str) -> Option<&'a str> {
        self.raw(name).filter(|value| !value.trim().is_empty())
    }
}

/// Static description of one form: its fields in display order.
#[derive(Debug, Clone, Copy)]
pub struct FormSchema {
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    /// Check every field and collect every error (no short-circuit). A field
    /// yields at most one error per pass: a missing required field reports
    /// only that it is missing.
    pub fn validate(&self, data: &FormData) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in self.fields {
            if let Some(error) = field.kind.check(data.value(field.name)) {
                errors.push(field.name, error);
            }
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Per-field rules. The messages shown to the submitter are part of the
/// schema, not the engine.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Required free text with inclusive length bounds.
    Text {
        required: &'static str,
        length: LengthRule,
    },
    /// Required email address.
    Email {
        required: &'static str,
        invalid: &'static str,
    },
    /// Free text that may be omitted entirely.
    OptionalText { length: LengthRule },
    /// Required choice from a fixed set. The placeholder empty option counts
    /// as missing, never as a valid answer.
    Select {
        required: &'static str,
        choices: &'static [SelectChoice],
    },
}

impl FieldKind {
    fn check(&self, value: Option<&str>) -> Option<FieldError> {
        match (*self, value) {
            (
                Self::Text { required, .. }
                | Self::Email { required, .. }
                | Self::Select { required, .. },
                None,
            ) => Some(FieldError::MissingRequiredField(required)),
            (Self::Text { length, .. }, Some(value)) => length.check(value),
            (Self::Email { invalid, .. }, Some(value)) => (!EMAIL_REGEX.is_match(value))
                .then_some(FieldError::InvalidFormat(invalid)),
            (Self::OptionalText { .. }, None) => None,
            (Self::OptionalText { length }, Some(value)) => length.check(value),
            (Self::Select { choices, .. }, Some(value)) => (!choices
                .iter()
                .any(|choice| choice.value == value))
            .then_some(FieldError::InvalidEnumChoice),
        }
    }
}

/// Inclusive bounds on the submitted value's character count (untrimmed).
#[derive(Debug, Clone, Copy)]
pub struct LengthRule {
    pub min: usize,
    pub max: usize,
    pub message: &'static str,
}

impl LengthRule {
    fn check(self, value: &str) -> Option<FieldError> {
        let length = value.chars().count();
        (length < self.min || length > self.max)
            .then_some(FieldError::LengthOutOfRange(self.message))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectChoice {
    pub value: &'static str,
    pub label: &'static str,
}

/// One reason a single field was rejected. Variants carry the exact message
/// the schema declares for that failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0}")]
    MissingRequiredField(&'static str),
    #[error("{0}")]
    LengthOutOfRange(&'static str),
    #[error("{0}")]
    InvalidFormat(&'static str),
    #[error("Not a valid choice.")]
    InvalidEnumChoice,
}

/// Field name → everything wrong with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, Vec<FieldError>>,
}

impl FieldErrors {
    pub fn of(field: &'static str, error: FieldError) -> Self {
        let mut errors = Self::default();
        errors.push(field, error);
        errors
    }

    pub fn push(&mut self, field: &'static str, error: FieldError) {
        self.errors.entry(field).or_default().push(error);
    }

    pub fn get(&self, field: &str) -> &[FieldError] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Erroring fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[FieldError])> + '_ {
        self.errors
            .iter()
            .map(|(field, errors)| (*field, errors.as_slice()))
    }

    fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// What a form page needs to redisplay a submission: every schema field's
/// submitted value paired with its rendered error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub values: BTreeMap<&'static str, String>,
    pub errors: BTreeMap<&'static str, Vec<String>>,
}

impl FormState {
    /// State of a form that has not been submitted yet.
    pub fn empty(schema: &FormSchema) -> Self {
        let mut state = Self::default();
        for field in schema.fields {
            state.values.insert(field.name, String::new());
            state.errors.insert(field.name, Vec::new());
        }
        state
    }

    /// State of a rejected submission: original values plus error messages.
    pub fn with_errors(schema: &FormSchema, data: &FormData, errors: &FieldErrors) -> Self {
        let mut state = Self::empty(schema);
        for field in schema.fields {
            if let Some(value) = data.raw(field.name) {
                state.values.insert(field.name, value.to_owned());
            }
        }
        for (field, field_errors) in errors.iter() {
            let messages = field_errors.iter().map(|error| error.to_string()).collect();
            state.errors.insert(field, messages);
        }
        state
    }
}
