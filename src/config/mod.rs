//! Configuration for Jobscope
//!
//! Settings come from a TOML file and can be overridden by environment
//! variables. Every field has a default, so running without a config file
//! is supported.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::{DateConverter, DateFormat};
use crate::error::{common, ErrorCode, JobscopeError, Result};

pub const ENV_DATA_FILE: &str = "JOBSCOPE_DATA_FILE";
pub const ENV_PAGE_SIZE: &str = "JOBSCOPE_PAGE_SIZE";
pub const ENV_REFRESH_SOURCE: &str = "JOBSCOPE_REFRESH_SOURCE";

const DEFAULT_PAGE_SIZE: usize = 20;
const DEFAULT_OUTPUT_PATTERN: &str = "%m-%d-%Y";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "jobscope", "jobscope")
}

/// Default location of the config file, if a home directory is known
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

fn default_data_file() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join("jobs.json"))
        .unwrap_or_else(|| PathBuf::from("jobs.json"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobscopeConfig {
    /// JSON file holding the job snapshot
    pub data_file: PathBuf,
    /// File that `--refresh` copies fresh records from
    pub refresh_source: Option<PathBuf>,
    pub date_input_format: DateFormat,
    pub date_output_format: DateFormat,
    pub page_size: usize,
}

impl Default for JobscopeConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            refresh_source: None,
            date_input_format: DateFormat::Rfc1123,
            date_output_format: DateFormat::Pattern(DEFAULT_OUTPUT_PATTERN.to_string()),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl JobscopeConfig {
    /// Load configuration using the process environment
    ///
    /// An explicit path must exist. Without one, the default config path is
    /// used when present and defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with_env(explicit, default_config_path().as_deref(), |key| {
            std::env::var(key).ok()
        })
    }

    /// Load configuration with an injectable default path and env lookup
    pub fn load_with_env<F>(explicit: Option<&Path>, fallback: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match (explicit, fallback) {
            (Some(path), _) => {
                if !path.exists() {
                    return Err(common::config_not_found(path));
                }
                Self::from_file(path)?
            }
            (None, Some(path)) if path.exists() => Self::from_file(path)?,
            _ => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.apply_env_overrides(env)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            JobscopeError::config(format!("Failed to read {}", path.display())).with_source(e)
        })?;
        debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            JobscopeError::config_with_code(
                ErrorCode::CONFIG_PARSE_ERROR,
                format!("Invalid configuration: {}", e.message()),
                None,
            )
            .with_source(e)
        })
    }

    fn apply_env_overrides<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = env(ENV_DATA_FILE) {
            self.data_file = PathBuf::from(path);
        }
        if let Some(path) = env(ENV_REFRESH_SOURCE) {
            self.refresh_source = Some(PathBuf::from(path));
        }
        if let Some(size) = env(ENV_PAGE_SIZE) {
            self.page_size = size.trim().parse().map_err(|_| {
                common::config_invalid_value(
                    "page_size",
                    format!("{} must be a positive integer, got '{}'", ENV_PAGE_SIZE, size),
                )
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(common::config_invalid_value(
                "page_size",
                "page size must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Converter for the configured input and output date formats
    pub fn date_converter(&self) -> DateConverter {
        DateConverter::new(
            self.date_input_format.clone(),
            self.date_output_format.clone(),
        )
    }
}
