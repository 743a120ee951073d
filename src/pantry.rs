//! The ingredient list and its shouting helpers

use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

use crate::error::{common, Result};

/// Baking ingredients, in recipe order
pub const INGREDIENTS: [&str; 6] = ["flour", "salt", "baking powder", "butter", "eggs", "milk"];

/// Visit every ingredient in order
pub fn for_each_ingredient<F>(visit: F)
where
    F: FnMut(&str),
{
    INGREDIENTS.iter().copied().for_each(visit);
}

/// Source of identifiers attached to precondition failures
pub trait IssueTracker {
    fn create_issue(&self) -> String;
}

/// Monotonic issue ids: `#1`, `#2`, …
#[derive(Debug)]
pub struct SequentialIssues {
    next: AtomicU64,
}

impl SequentialIssues {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIssues {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueTracker for SequentialIssues {
    fn create_issue(&self) -> String {
        format!("#{}", self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// An externally supplied request id, reused for every issue
#[derive(Debug, Clone)]
pub struct FixedIssue(pub String);

impl IssueTracker for FixedIssue {
    fn create_issue(&self) -> String {
        self.0.clone()
    }
}

/// Uppercase `word` and add an exclamation mark
///
/// An absent word fails immediately with a precondition error that carries
/// a fresh issue id from `issues`.
pub fn yell_out(word: Option<&str>, issues: &dyn IssueTracker) -> Result<String> {
    let word = require(word, issues)?;
    Ok(format!("{}!", word.to_uppercase()))
}

/// Like [`yell_out`] with two exclamation marks
pub fn double_yell(word: Option<&str>, issues: &dyn IssueTracker) -> Result<String> {
    let word = require(word, issues)?;
    Ok(format!("{}!!", word.to_uppercase()))
}

fn require<'a>(word: Option<&'a str>, issues: &dyn IssueTracker) -> Result<&'a str> {
    word.ok_or_else(|| {
        info!("Making new issue request...");
        common::missing_value("word", issues.create_issue())
    })
}
