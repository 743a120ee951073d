//! Job store layer
//!
//! Provides the load boundary for the query layer: a [`JobSource`] yields a
//! full snapshot of job records and can optionally be refreshed first.

pub mod backends;
pub mod error;
pub mod traits;


pub use backends::{FileJobStore, MemoryJobStore};
pub use error::{StorageError, StorageResult};
pub use traits::JobSource;

use tracing::{debug, info};

use crate::error::Result;
use crate::model::JobSnapshot;

/// Optionally refresh `source`, then load it into an immutable snapshot
///
/// Either step failing aborts with a load error; nothing is retried.
pub fn load_snapshot(source: &dyn JobSource, refresh: bool) -> Result<JobSnapshot> {
    if refresh {
        info!("Refreshing job store {}", source.describe());
        source.refresh()?;
    }

    let jobs = source.load_jobs()?;
    debug!("Snapshot of {} jobs from {}", jobs.len(), source.describe());
    Ok(JobSnapshot::new(jobs))
}
