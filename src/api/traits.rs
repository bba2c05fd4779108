//! Trait abstraction for the registration client to enable mocking in tests

use crate::state::Registration;
use anyhow::Result;
use async_trait::async_trait;

/// Submits a validated registration to the backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Issue a single multipart POST.
    ///
    /// `Ok` means the request completed and the response was accepted;
    /// any `Err` drives the form into its error state.
    async fn submit(&self, registration: &Registration) -> Result<()>;
}
