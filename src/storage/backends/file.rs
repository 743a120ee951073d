//! JSON file job store

use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::model::Job;
use crate::storage::{
    error::{StorageError, StorageResult},
    traits::JobSource,
};

/// Job store backed by a JSON file on disk
///
/// The file holds either a bare array of job records or a search-API
/// response object with a `results` array.
#[derive(Debug, Clone)]
pub struct FileJobStore {
    path: PathBuf,
    refresh_source: Option<PathBuf>,
}

impl FileJobStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            refresh_source: None,
        }
    }

    /// Set the file that `refresh` copies fresh records from
    pub fn with_refresh_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.refresh_source = Some(source.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_jobs(path: &Path) -> StorageResult<Vec<Job>> {
        let content = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
        decode_jobs(&content).map_err(|e| match e {
            StorageError::Decode { message, .. } => StorageError::Decode {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    fn write_atomically(&self, content: &str) -> StorageResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| StorageError::io(&dir, e))?;

        let mut temp = NamedTempFile::new_in(&dir).map_err(|e| StorageError::io(&dir, e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| StorageError::io(temp.path(), e))?;
        temp.persist(&self.path)
            .map_err(|e| StorageError::io(&self.path, e.error))?;
        Ok(())
    }
}

impl JobSource for FileJobStore {
    fn load_jobs(&self) -> StorageResult<Vec<Job>> {
        let jobs = Self::read_jobs(&self.path)?;
        debug!("Loaded {} jobs from {}", jobs.len(), self.path.display());
        Ok(jobs)
    }

    fn refresh(&self) -> StorageResult<()> {
        let Some(source) = &self.refresh_source else {
            info!("No refresh source configured, keeping {}", self.path.display());
            return Ok(());
        };

        let content = fs::read_to_string(source).map_err(|e| StorageError::io(source, e))?;
        let jobs = decode_jobs(&content).map_err(|e| {
            StorageError::refresh(format!("{} is not a valid job file: {}", source.display(), e))
        })?;

        self.write_atomically(&content)
            .map_err(|e| StorageError::refresh(format!("writing {}: {}", self.path.display(), e)))?;
        info!(
            "Refreshed {} with {} jobs from {}",
            self.path.display(),
            jobs.len(),
            source.display()
        );
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Decode a job file payload
pub fn decode_jobs(content: &str) -> StorageResult<Vec<Job>> {
    let payload: Value = serde_json::from_str(content)?;
    let records = match payload {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => map.remove("results").ok_or_else(|| {
            StorageError::decode(None, "expected a `results` array in the response object")
        })?,
        other => {
            return Err(StorageError::decode(
                None,
                format!("expected an array of jobs, found {}", json_kind(&other)),
            ))
        }
    };

    Ok(serde_json::from_value(records)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const BARE: &str = r#"[
        {"jobtitle": "Junior Dev", "company": "Acme", "city": "Austin", "state": "TX",
         "snippet": "Learn Rust", "date": "Tue, 3 Jun 2008 11:05:30 GMT"},
        {"title": "Senior Dev", "company": "Globex", "city": "Boise", "state": "ID"}
    ]"#;

    #[test]
    fn test_decode_bare_array() {
        let jobs = decode_jobs(BARE).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Junior Dev");
        assert_eq!(jobs[1].company, "Globex");
    }

    #[test]
    fn test_decode_response_object() {
        let content = format!(r#"{{"totalResults": 2, "results": {}}}"#, BARE);
        let jobs = decode_jobs(&content).unwrap();
        assert_eq!(jobs.len(), 2);
    }

    #[test]
    fn test_decode_rejects_unexpected_shapes() {
        assert!(matches!(
            decode_jobs(r#"{"jobs": []}"#),
            Err(StorageError::Decode { .. })
        ));
        assert!(matches!(
            decode_jobs("42"),
            Err(StorageError::Decode { .. })
        ));
        assert!(matches!(
            decode_jobs(r#"[{"title": "No company"}]"#),
            Err(StorageError::Decode { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = FileJobStore::new(temp.path().join("missing.json"));
        let err = store.load_jobs().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_decode_error_carries_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("jobs.json");
        fs::write(&path, "not json").unwrap();

        match FileJobStore::new(&path).load_jobs().unwrap_err() {
            StorageError::Decode { path: Some(p), .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_refresh_replaces_store_contents() {
        let temp = TempDir::new().unwrap();
        let upstream = temp.path().join("upstream.json");
        let store_path = temp.path().join("data").join("jobs.json");
        fs::write(&upstream, BARE).unwrap();

        let store = FileJobStore::new(&store_path).with_refresh_source(&upstream);
        store.refresh().unwrap();

        let jobs = store.load_jobs().unwrap();
        assert_eq!(jobs.len(), 2);
    }

    #[test]
    fn test_refresh_rejects_invalid_upstream_and_keeps_store() {
        let temp = TempDir::new().unwrap();
        let upstream = temp.path().join("upstream.json");
        let store_path = temp.path().join("jobs.json");
        fs::write(&upstream, "{}").unwrap();
        fs::write(&store_path, BARE).unwrap();

        let store = FileJobStore::new(&store_path).with_refresh_source(&upstream);
        assert!(matches!(store.refresh(), Err(StorageError::Refresh(_))));
        assert_eq!(store.load_jobs().unwrap().len(), 2);
    }

    #[test]
    fn test_refresh_without_source_is_noop() {
        let temp = TempDir::new().unwrap();
        let store = FileJobStore::new(temp.path().join("jobs.json"));
        store.refresh().unwrap();
        assert!(store.load_jobs().unwrap_err().is_not_found());
    }
}
