//! Trait abstraction for the Contact API to enable mocking in tests

use super::client::ContactError;
use crate::state::FormData;
use async_trait::async_trait;

/// The remote Contact API contract: one operation, accept or reject a
/// submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactApi: Send + Sync {
    /// Send a draft submission to the Contact API
    async fn submit(&self, form: &FormData) -> Result<(), ContactError>;
}
