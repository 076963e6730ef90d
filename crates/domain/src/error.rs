//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`MaisonError`]
//! via `From`, so that request boundaries only have one taxonomy to map.

/// Base error shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum MaisonError {
    /// The caller sent a malformed identifier or payload.
    #[error("invalid input")]
    InvalidInput(#[from] InvalidInputError),

    /// The input was well-formed but one or more fields are invalid.
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    /// No record matches a well-formed key.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<ValidationError> for MaisonError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(ValidationErrors::from(err))
    }
}

/// Malformed identifiers or payload shapes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    /// A path or query identifier is not a well-formed integer.
    #[error("Invalid {entity} ID")]
    MalformedId { entity: &'static str, value: String },

    /// A request body could not be decoded.
    #[error("Invalid request body: {0}")]
    MalformedPayload(String),
}

/// Returned when a lookup by key finds nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A single field-level rule violation.
///
/// The display texts are the user-facing messages shown next to form fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Le nom doit contenir au moins {min} caractères")]
    NameTooShort { min: usize },

    #[error("Email invalide")]
    InvalidEmail,

    #[error("Veuillez sélectionner un service")]
    MissingService,

    #[error("Le message doit contenir au moins {min} caractères")]
    MessageTooShort { min: usize },

    #[error("Le nom ne peut pas être vide")]
    EmptyName,

    #[error("La ville ne peut pas être vide")]
    EmptyCity,
}

impl ValidationError {
    /// Name of the record field this violation applies to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameTooShort { .. } | Self::EmptyName => "nom",
            Self::InvalidEmail => "email",
            Self::MissingService => "service",
            Self::MessageTooShort { .. } => "message",
            Self::EmptyCity => "ville",
        }
    }
}

/// All violations found while validating one record, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} invalid field(s)", .0.len())]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation.
    pub fn push(&mut self, err: ValidationError) {
        self.0.push(err);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// First violation recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.0.iter().find(|err| err.field() == field)
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one violation was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(err: ValidationError) -> Self {
        Self(vec![err])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
