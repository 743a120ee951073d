//! Job listing and lookup commands

use anyhow::Result;
use std::io::Write;

use crate::core::matching::{in_state, junior, LogNotifier, PredicateExt};
use crate::core::{
    email_matching_job, filter_junior_jobs, find_by_location, find_by_location_par,
    first_junior_captions, first_matching, search_by_title_substring, MatchOutcome,
};
use crate::model::Job;

pub fn run_juniors_command(jobs: &[Job], limit: Option<usize>, out: &mut dyn Write) -> Result<()> {
    for job in filter_junior_jobs(jobs, limit) {
        writeln!(out, "{}", job)?;
    }
    Ok(())
}

pub fn run_captions_command(jobs: &[Job], count: usize, out: &mut dyn Write) -> Result<()> {
    for caption in first_junior_captions(jobs, count) {
        writeln!(out, "{}", caption)?;
    }
    Ok(())
}

pub fn run_location_command(
    jobs: &[Job],
    state: &str,
    city: &str,
    parallel: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let found = if parallel {
        find_by_location_par(jobs, state, city)
    } else {
        find_by_location(jobs, state, city)
    };

    for job in found {
        writeln!(out, "{}", job)?;
    }
    Ok(())
}

pub fn run_search_command(jobs: &[Job], term: &str, out: &mut dyn Write) -> Result<()> {
    let title = search_by_title_substring(jobs, term)
        .map(|job| job.title.as_str())
        .unwrap_or("No jobs found.");
    writeln!(out, "{}", title)?;
    Ok(())
}

pub fn run_notify_command(
    jobs: &[Job],
    state: &str,
    require_junior: bool,
    first_match: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let checker: Box<dyn Fn(&Job) -> bool> = if require_junior {
        Box::new(in_state(state.to_string()).and(junior()))
    } else {
        Box::new(in_state(state.to_string()))
    };

    let candidate = if first_match {
        first_matching(jobs, &checker)
    } else {
        jobs.first()
    };

    let Some(job) = candidate else {
        writeln!(out, "No jobs found.")?;
        return Ok(());
    };

    match email_matching_job(job, checker, &LogNotifier)? {
        MatchOutcome::Sent => writeln!(out, "Sending an email about {}", job)?,
        MatchOutcome::NotMatched => writeln!(out, "Not matched the criteria.")?,
    }
    Ok(())
}
