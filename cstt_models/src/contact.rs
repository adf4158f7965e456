use cstt_forms::{FieldErrors, FieldKind, FieldSpec, FormData, FormSchema, LengthRule};

/// Schema of the general contact form.
pub const CONTACT_FORM: FormSchema = FormSchema {
    fields: &[
        FieldSpec {
            name: "name",
            kind: FieldKind::Text {
                required: "Please enter your full name",
                length: LengthRule {
                    min: 2,
                    max: 100,
                    message: "Name must be between 2 and 100 characters",
                },
            },
        },
        FieldSpec {
            name: "email",
            kind: FieldKind::Email {
                required: "Please enter your email address",
                invalid: "Please enter a valid email address",
            },
        },
        FieldSpec {
            name: "subject",
            kind: FieldKind::Text {
                required: "Please enter a subject",
                length: LengthRule {
                    min: 5,
                    max: 200,
                    message: "Subject must be between 5 and 200 characters",
                },
            },
        },
        FieldSpec {
            name: "message",
            kind: FieldKind::Text {
                required: "Please enter your message",
                length: LengthRule {
                    min: 10,
                    max: 2000,
                    message: "Message must be between 10 and 2000 characters",
                },
            },
        },
    ],
};

/// One message sent through the contact form, kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Validate `data` against [`CONTACT_FORM`] and construct the record.
    /// Either every field satisfies its constraints or the submission is
    /// rejected in entirety.
    pub fn parse(data: &FormData) -> Result<Self, FieldErrors> {
        CONTACT_FORM.validate(data)?;
        Ok(Self {
            name: crate::required(data, "name"),
            email: crate::required(data, "email"),
            subject: crate::required(data, "subject"),
            message: crate::required(data, "message"),
        })
    }
}

#[cfg(test)]
mod tests {
    use cstt_forms::FieldError;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accepts_boundary_length_input() {
        // Arrange
        let data = FormData::new()
            .with("name", "Al")
            .with("email", "a@b.com")
            .with("subject", "Hi there")
            .with("message", "1234567890");

        // Act
        let submission = ContactSubmission::parse(&data).unwrap();

        // Assert
        assert_eq!(
            submission,
            ContactSubmission {
                name: "Al".into(),
                email: "a@b.com".into(),
                subject: "Hi there".into(),
                message: "1234567890".into(),
            }
        );
    }

    #[test]
    fn rejects_every_failing_field_at_once() {
        // Arrange
        let data = FormData::new()
            .with("name", "A")
            .with("email", "bad-email")
            .with("subject", "Hi")
            .with("message", "short");

        // Act
        let errors = ContactSubmission::parse(&data).unwrap_err();

        // Assert
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get("name"),
            [FieldError::LengthOutOfRange(
                "Name must be between 2 and 100 characters"
            )]
        );
        assert_eq!(
            errors.get("email"),
            [FieldError::InvalidFormat("Please enter a valid email address")]
        );
        assert_eq!(
            errors.get("subject"),
            [FieldError::LengthOutOfRange(
                "Subject must be between 5 and 200 characters"
            )]
        );
        assert_eq!(
            errors.get("message"),
            [FieldError::LengthOutOfRange(
                "Message must be between 10 and 2000 characters"
            )]
        );
    }

    #[test]
    fn rejects_an_empty_submission_with_all_prompts() {
        // Act
        let errors = ContactSubmission::parse(&FormData::new()).unwrap_err();

        // Assert
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get("name"),
            [FieldError::MissingRequiredField("Please enter your full name")]
        );
        assert_eq!(
            errors.get("email"),
            [FieldError::MissingRequiredField(
                "Please enter your email address"
            )]
        );
        assert_eq!(
            errors.get("subject"),
            [FieldError::MissingRequiredField("Please enter a subject")]
        );
        assert_eq!(
            errors.get("message"),
            [FieldError::MissingRequiredField("Please enter your message")]
        );
    }

    #[test]
    fn name_length_bounds_are_inclusive() {
        for (length, ok) in [(2, true), (100, true), (1, false), (101, false)] {
            // Arrange
            let name = "x".repeat(length);
            let data = FormData::new()
                .with("name", &name)
                .with("email", "a@b.com")
                .with("subject", "Hi there")
                .with("message", "1234567890");

            // Act
            let result = ContactSubmission::parse(&data);

            // Assert
            assert_eq!(result.is_ok(), ok, "name length: {length}");
        }
    }
}
