//! Core query logic with pure functions
//!
//! This module contains the functions that derive views over a loaded job
//! snapshot. Following the "functional core, imperative shell" pattern, all
//! functions here:
//! - Take borrowed inputs and return owned or borrowed outputs
//! - Have no side effects beyond trace logging
//! - Don't perform file system or network operations
//! - Are easily testable without mocks

pub mod dates;
pub mod matching;
pub mod pagination;
pub mod query;

pub use dates::{reformat_date, DateConverter, DateFormat};
pub use matching::{email_matching_job, notify_if_matching, MatchOutcome, Notifier, PredicateExt};
pub use pagination::{page, paginate, stepped_menu};
pub use query::*;
