//! In-memory job store for testing and embedding

use std::sync::RwLock;

use crate::model::Job;
use crate::storage::{
    error::{StorageError, StorageResult},
    traits::JobSource,
};

/// In-memory job store
///
/// `refresh` promotes the staged records, if any, to the live set.
#[derive(Debug, Default)]
pub struct MemoryJobStore {
    jobs: RwLock<Vec<Job>>,
    staged: RwLock<Option<Vec<Job>>>,
    failure: Option<String>,
}

impl MemoryJobStore {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs: RwLock::new(jobs),
            staged: RwLock::new(None),
            failure: None,
        }
    }

    /// Stage records to become visible on the next refresh
    pub fn with_staged(self, jobs: Vec<Job>) -> Self {
        Self {
            staged: RwLock::new(Some(jobs)),
            ..self
        }
    }

    /// A store whose every operation fails with an I/O error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    fn check_failure(&self) -> StorageResult<()> {
        match &self.failure {
            Some(message) => Err(StorageError::Io {
                path: None,
                source: std::io::Error::other(message.clone()),
            }),
            None => Ok(()),
        }
    }
}

impl JobSource for MemoryJobStore {
    fn load_jobs(&self) -> StorageResult<Vec<Job>> {
        self.check_failure()?;
        let jobs = self
            .jobs
            .read()
            .map_err(|_| StorageError::refresh("memory store lock poisoned"))?;
        Ok(jobs.clone())
    }

    fn refresh(&self) -> StorageResult<()> {
        self.check_failure()?;
        let staged = self
            .staged
            .write()
            .map_err(|_| StorageError::refresh("memory store lock poisoned"))?
            .take();

        if let Some(fresh) = staged {
            let mut jobs = self
                .jobs
                .write()
                .map_err(|_| StorageError::refresh("memory store lock poisoned"))?;
            *jobs = fresh;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
