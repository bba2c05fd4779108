//! Validation failures surfaced to the user as blocking alerts

use thiserror::Error;

/// Reasons a file selection or submit attempt is refused before any network call.
///
/// The `Display` text is exactly what the alert dialog shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload an image file (JPG or PNG).")]
    NotAnImage { content_type: String },

    #[error("File size must be under 5MB.")]
    TooLarge { size: u64 },

    #[error("Could not read {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Please upload your driver's license image.")]
    MissingImage,

    #[error("Please fill out the {label} field.")]
    MissingField { label: String },

    #[error("A submission is already in progress.")]
    SubmissionInProgress,
}
