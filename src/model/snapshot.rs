//! In-memory snapshot of the loaded job collection

use chrono::{DateTime, Utc};
use std::ops::Deref;
use std::sync::Arc;

use super::Job;

/// Immutable copy of all job postings loaded at the start of a run
///
/// Order is insertion order as produced by the load step. Cloning is cheap;
/// clones share the same backing slice.
#[derive(Debug, Clone)]
pub struct JobSnapshot {
    jobs: Arc<[Job]>,
    loaded_at: DateTime<Utc>,
}

impl JobSnapshot {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs: jobs.into(),
            loaded_at: Utc::now(),
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl Deref for JobSnapshot {
    type Target = [Job];

    fn deref(&self) -> &Self::Target {
        &self.jobs
    }
}

impl From<Vec<Job>> for JobSnapshot {
    fn from(jobs: Vec<Job>) -> Self {
        Self::new(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_preserves_order_and_shares_storage() {
        let snapshot = JobSnapshot::new(vec![
            Job::new("A", "Acme", "Austin", "TX"),
            Job::new("B", "Globex", "Boise", "ID"),
        ]);
        let clone = snapshot.clone();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].title, "A");
        assert_eq!(clone.jobs()[1].title, "B");
        assert!(std::ptr::eq(snapshot.jobs(), clone.jobs()));
        assert!(snapshot.loaded_at() <= Utc::now());
    }
}
