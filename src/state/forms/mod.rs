//! Form domain layer
//!
//! Type-safe state for the lesson registration form: text fields, the
//! license image and its preview, and the submission status machine.

mod error;
mod field;
mod image;
mod preview;
mod registration;

pub use error::ValidationError;
pub use field::FormField;
pub use image::{check_image, format_size, MAX_IMAGE_BYTES};
pub use preview::{PreviewHandle, PreviewRegistry};
pub use registration::{
    FieldId, Registration, RegistrationForm, SubmissionStatus, BACK_BUTTON, BUTTONS_ROW_INDEX,
    IMAGE_FIELD_INDEX, SUBMIT_BUTTON,
};

#[cfg(test)]
pub(crate) use image::{tests::write_fixture, SelectedImage};
#[cfg(test)]
pub(crate) use registration::{ERROR_MESSAGE, SUCCESS_MESSAGE};
