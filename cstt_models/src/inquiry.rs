use cstt_forms::{
    FieldError, FieldErrors, FieldKind, FieldSpec, FormData, FormSchema, LengthRule, SelectChoice,
};
use serde::{Deserialize, Serialize};

/// Schema of the service inquiry form.
pub const SERVICE_INQUIRY_FORM: FormSchema = FormSchema {
    fields: &[
        FieldSpec {
            name: "company",
            kind: FieldKind::Text {
                required: "Please enter your company name",
                length: LengthRule {
                    min: 2,
                    max: 150,
                    message: "Company name must be between 2 and 150 characters",
                },
            },
        },
        FieldSpec {
            name: "name",
            kind: FieldKind::Text {
                required: "Please enter the contact person name",
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
            name: "phone",
            kind: FieldKind::OptionalText {
                length: LengthRule {
                    min: 10,
                    max: 20,
                    message: "Phone number must be between 10 and 20 characters",
                },
            },
        },
        FieldSpec {
            name: "service_type",
            kind: FieldKind::Select {
                required: "Please select a service type",
                choices: ServiceType::CHOICES,
            },
        },
        FieldSpec {
            name: "project_details",
            kind: FieldKind::Text {
                required: "Please provide project details",
                length: LengthRule {
                    min: 20,
                    max: 3000,
                    message: "Project details must be between 20 and 3000 characters",
                },
            },
        },
    ],
};

/// The fixed catalog of services an inquiry can be about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    StructuralTesting,
    NdtInspection,
    GeotechnicalTesting,
    CustomSolution,
    EquipmentRental,
    TrainingCertification,
    Consultation,
}

impl ServiceType {
    /// Select options in display order.
    pub const CHOICES: &'static [SelectChoice] = &[
        SelectChoice {
            value: "structural_testing",
            label: "Structural Load & Response Testing",
        },
        SelectChoice {
            value: "ndt_inspection",
            label: "Non-Destructive Testing & Inspection",
        },
        SelectChoice {
            value: "geotechnical_testing",
            label: "Geotechnical & Foundation Testing",
        },
        SelectChoice {
            value: "custom_solution",
            label: "Custom Testing Solution",
        },
        SelectChoice {
            value: "equipment_rental",
            label: "Equipment Rental",
        },
        SelectChoice {
            value: "training_certification",
            label: "Training & Certification",
        },
        SelectChoice {
            value: "consultation",
            label: "Engineering Consultation",
        },
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "structural_testing" => Some(Self::StructuralTesting),
            "ndt_inspection" => Some(Self::NdtInspection),
            "geotechnical_testing" => Some(Self::GeotechnicalTesting),
            "custom_solution" => Some(Self::CustomSolution),
            "equipment_rental" => Some(Self::EquipmentRental),
            "training_certification" => Some(Self::TrainingCertification),
            "consultation" => Some(Self::Consultation),
            _ => None,
        }
    }

    /// Stable identifier, as submitted by the select field and as logged.
    pub fn key(self) -> &'static str {
        match self {
            Self::StructuralTesting => "structural_testing",
            Self::NdtInspection => "ndt_inspection",
            Self::GeotechnicalTesting => "geotechnical_testing",
            Self::CustomSolution => "custom_solution",
            Self::EquipmentRental => "equipment_rental",
            Self::TrainingCertification => "training_certification",
            Self::Consultation => "consultation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::StructuralTesting => "Structural Load & Response Testing",
            Self::NdtInspection => "Non-Destructive Testing & Inspection",
            Self::GeotechnicalTesting => "Geotechnical & Foundation Testing",
            Self::CustomSolution => "Custom Testing Solution",
            Self::EquipmentRental => "Equipment Rental",
            Self::TrainingCertification => "Training & Certification",
            Self::Consultation => "Engineering Consultation",
        }
    }
}

/// One request for a service quote, kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInquirySubmission {
    pub company: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_type: ServiceType,
    pub project_details: String,
}

impl ServiceInquirySubmission {
    /// Validate `data` against [`SERVICE_INQUIRY_FORM`] and construct the
    /// record. Either every field satisfies its constraints or the submission
    /// is rejected in entirety.
    pub fn parse(data: &FormData) -> Result<Self, FieldErrors> {
        SERVICE_INQUIRY_FORM.validate(data)?;
        let service_type = data
            .value("service_type")
            .and_then(ServiceType::from_key)
            .ok_or_else(|| FieldErrors::of("service_type", FieldError::InvalidEnumChoice))?;
        Ok(Self {
            company: crate::required(data, "company"),
            name: crate::required(data, "name"),
            email: crate::required(data, "email"),
            phone: data.value("phone").map(str::to_owned),
            service_type,
            project_details: crate::required(data, "project_details"),
        })
    }
}
