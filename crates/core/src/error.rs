//! Error types for the pathway core.

/// Errors raised when patient input fails required-field validation at
/// creation time.
///
/// No partial patient is ever created: validation runs before a record is
/// constructed, so a rejected `add` leaves the repository untouched.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("patient name is required")]
    MissingName,
    #[error("diagnosis date is required")]
    MissingDiagnosisDate,
    #[error("home location cannot be empty")]
    InvalidHomeLocation,
}

impl From<pathway_types::TextError> for ValidationError {
    fn from(_: pathway_types::TextError) -> Self {
        ValidationError::MissingName
    }
}

/// Error returned when a boundary string does not name a known enum variant.
///
/// Raised while parsing user-supplied filter and form values (urgency,
/// severity, view mode, sort key) into their closed enum types.
#[derive(Debug, thiserror::Error)]
#[error("unrecognised {noun} '{value}'")]
pub struct UnknownVariantError {
    noun: &'static str,
    value: String,
}

impl UnknownVariantError {
    pub(crate) fn new(noun: &'static str, value: &str) -> Self {
        Self {
            noun,
            value: value.to_owned(),
        }
    }
}

pub type TriageResult<T> = std::result::Result<T, ValidationError>;
