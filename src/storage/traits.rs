//! The load boundary consumed by the query layer

use super::error::StorageResult;
use crate::model::Job;

/// Provider of a full snapshot of job records
///
/// Implementations are opaque to the query layer. Both operations may fail
/// with an I/O-flavoured [`StorageError`](super::StorageError); callers
/// surface the failure and abort rather than retry.
pub trait JobSource: Send + Sync {
    /// Load every job record, in source order
    fn load_jobs(&self) -> StorageResult<Vec<Job>>;

    /// Repopulate the backing store before loading
    fn refresh(&self) -> StorageResult<()>;

    /// Short human-readable description for logs
    fn describe(&self) -> String;
}
