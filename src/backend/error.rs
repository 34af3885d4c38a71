use thiserror::Error;

use super::profile::ProfileField;
use super::services::Notification;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Enter a valid email address, e.g. name@example.com")]
    InvalidEmail,
    #[error("Enter a valid phone number (digits, spaces, dashes, optional leading +)")]
    InvalidPhone,
}

/// Field errors collected while validating a profile draft.
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<(ProfileField, ValidationError)>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: ProfileField, error: ValidationError) {
        self.errors.push((field, error));
    }

    pub fn get(&self, field: ProfileField) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| e)
    }

    pub fn clear(&mut self, field: ProfileField) {
        self.errors.retain(|(f, _)| *f != field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipboardError {
    #[error("Clipboard access was denied")]
    Denied,
    #[error("Clipboard is not available in this context")]
    Unavailable,
    #[error("Clipboard write failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShareError {
    #[error("No trip with id {0}")]
    UnknownTrip(u32),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

impl ShareError {
    /// Error toast shown in place of the share confirmation.
    pub fn notification(&self) -> Notification {
        Notification::error("Share failed", self.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SaveError {
    #[error("Profile editor is not open")]
    NotEditing,
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}
