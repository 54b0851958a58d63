//! Destination for confirmed records.

use async_trait::async_trait;

use crate::types::FinalResult;

/// Persists a batch of confirmed records.
///
/// The whole batch succeeds or fails together; failures are logged by the
/// implementation and reported only as `false`.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn append_results(&self, results: &[FinalResult]) -> bool;
}
