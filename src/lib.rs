//! # Jobscope
//!
//! Query and report over an in-memory snapshot of job postings.
//!
//! ## Usage
//!
//! ```bash
//! jobscope [--data jobs.json] [--refresh] <juniors|captions|location|search|companies|stats|words|dates|notify>
//! ```
//!
//! ## Modules
//!
//! - `core` - Pure queries over a job snapshot (filters, search, word counts, dates, menus)
//! - `model` - The job record and the loaded snapshot
//! - `storage` - The load boundary: job sources backed by a JSON file or memory
//! - `config` - TOML configuration with environment overrides
//! - `error` - Unified error type with error codes
//! - `pantry` - The ingredient list and its shouting helpers
//! - `cli` - Argument parsing and command handlers
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod pantry;
pub mod storage;

pub use error::{JobscopeError, Result};
pub use model::{Job, JobSnapshot};
