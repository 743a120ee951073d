//! Common test utilities and helpers

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A job file in a throwaway home directory
pub struct TestContext {
    pub temp_dir: TempDir,
    pub data_file: PathBuf,
}

impl TestContext {
    pub fn with_jobs(content: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let data_file = temp_dir.path().join("jobs.json");
        fs::write(&data_file, content).unwrap();
        Self {
            temp_dir,
            data_file,
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The binary, isolated from the user's config and environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("jobscope").unwrap();
        cmd.env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env("XDG_DATA_HOME", self.path().join("data"))
            .env_remove("JOBSCOPE_DATA_FILE")
            .env_remove("JOBSCOPE_PAGE_SIZE")
            .env_remove("JOBSCOPE_REFRESH_SOURCE")
            .arg("--data")
            .arg(&self.data_file);
        cmd
    }
}

pub const SAMPLE_JOBS: &str = r#"{
  "totalResults": 6,
  "results": [
    {"jobtitle": "Senior Rust Engineer", "company": "Acme", "city": "Portland", "state": "OR",
     "snippet": "Build fast, safe services.", "date": "Tue, 3 Jun 2008 11:05:30 GMT"},
    {"jobtitle": "Junior Developer", "company": "Globex Corporation", "city": "Portland", "state": "OR",
     "snippet": "Learn fast! Ship code.", "date": "Wed, 4 Jun 2008 08:00:00 GMT"},
    {"jobtitle": "Jr. Data Analyst", "company": "Initech", "city": "New York", "state": "NY",
     "snippet": "SQL and fast reports", "date": "not a date"},
    {"jobtitle": "Staff Engineer", "company": "Acme", "city": "Austin", "state": "TX",
     "snippet": "Lead services", "date": "Thu, 5 Jun 2008 17:45:00 GMT"},
    {"jobtitle": "Junior QA Tester", "company": "Netflix", "city": "New York", "state": "NY",
     "snippet": "Test things", "date": "Fri, 6 Jun 2008 09:00:00 GMT"},
    {"jobtitle": "Product Manager", "company": "Nike", "city": "Portland", "state": "OR",
     "snippet": "Ship products", "date": "Sat, 7 Jun 2008 10:30:00 GMT"}
  ]
}"#;
