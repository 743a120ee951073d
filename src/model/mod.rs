//! Data model: job postings and the loaded snapshot

mod job;
mod snapshot;

pub use job::Job;
pub use snapshot::JobSnapshot;
