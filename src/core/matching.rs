//! Predicate composition and match-then-act helpers
//!
//! Deciding whether a job qualifies and acting on it are kept apart: the
//! caller supplies the test and the effect as two independent capabilities.

use tracing::{info, warn};

use super::query::is_junior_job;
use crate::error::Result;
use crate::model::Job;

/// Combinators for job predicates
pub trait PredicateExt: Fn(&Job) -> bool + Sized {
    fn and<P>(self, other: P) -> impl Fn(&Job) -> bool
    where
        P: Fn(&Job) -> bool,
    {
        move |job: &Job| self(job) && other(job)
    }

    fn or<P>(self, other: P) -> impl Fn(&Job) -> bool
    where
        P: Fn(&Job) -> bool,
    {
        move |job: &Job| self(job) || other(job)
    }

    fn negate(self) -> impl Fn(&Job) -> bool {
        move |job: &Job| !self(job)
    }
}

impl<F> PredicateExt for F where F: Fn(&Job) -> bool {}

pub fn in_state(state: impl Into<String>) -> impl Fn(&Job) -> bool {
    let state = state.into();
    move |job: &Job| job.state == state
}

pub fn in_city(city: impl Into<String>) -> impl Fn(&Job) -> bool {
    let city = city.into();
    move |job: &Job| job.city == city
}

pub fn junior() -> impl Fn(&Job) -> bool {
    is_junior_job
}

/// Result of a match-then-act evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Sent,
    NotMatched,
}

/// Run `action` on `job` only when `predicate` accepts it
pub fn notify_if_matching<P, A>(job: &Job, predicate: P, action: A) -> Result<MatchOutcome>
where
    P: Fn(&Job) -> bool,
    A: FnOnce(&Job) -> Result<()>,
{
    if predicate(job) {
        action(job)?;
        Ok(MatchOutcome::Sent)
    } else {
        Ok(MatchOutcome::NotMatched)
    }
}

/// Side of the boundary that delivers notifications about jobs
pub trait Notifier {
    fn send(&self, job: &Job) -> Result<()>;

    fn report_miss(&self, _job: &Job) {}
}

/// Notifier that only writes to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&self, job: &Job) -> Result<()> {
        info!("Sending an email about {}", job);
        Ok(())
    }

    fn report_miss(&self, job: &Job) {
        warn!("Not matched the criteria: {}", job.title);
    }
}

/// Notify about `job` through `notifier` when it satisfies `checker`
pub fn email_matching_job<P>(job: &Job, checker: P, notifier: &dyn Notifier) -> Result<MatchOutcome>
where
    P: Fn(&Job) -> bool,
{
    let outcome = notify_if_matching(job, checker, |j| notifier.send(j))?;
    if outcome == MatchOutcome::NotMatched {
        notifier.report_miss(job);
    }
    Ok(outcome)
}
