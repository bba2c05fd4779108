//! Registration API module for the multipart upload

mod client;
mod traits;

pub use client::{LessonApiClient, DEFAULT_ENDPOINT};
pub use traits::RegistrationApi;

#[cfg(test)]
pub use traits::MockRegistrationApi;
