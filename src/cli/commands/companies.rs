//! Company and snippet reports

use anyhow::{bail, Result};
use std::io::Write;

use crate::core::pagination::page_count;
use crate::core::{
    average_company_name_length, companies_with_prefix, distinct_companies_sorted,
    longest_company_name, page, stepped_menu, top_words, word_frequency,
};
use crate::model::Job;

/// How the company menu is laid out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyView {
    Page { number: usize, size: usize },
    Prefix { prefix: String, number: usize, size: usize },
    Stepped { step: usize },
}

pub fn run_companies_command(jobs: &[Job], view: CompanyView, out: &mut dyn Write) -> Result<()> {
    let companies = distinct_companies_sorted(jobs);

    let (entries, total, paging) = match view {
        CompanyView::Page { number, size } => {
            (page(&companies, size, number), companies.len(), Some((number, size)))
        }
        CompanyView::Prefix {
            prefix,
            number,
            size,
        } => {
            let matching = companies_with_prefix(&companies, &prefix);
            let total = matching.len();
            (page(&matching, size, number), total, Some((number, size)))
        }
        CompanyView::Stepped { step } => {
            if step == 0 {
                bail!("step must be greater than zero");
            }
            (stepped_menu(&companies, step), companies.len(), None)
        }
    };

    for entry in &entries {
        writeln!(out, "{}", entry)?;
    }

    match paging {
        Some((number, size)) => writeln!(
            out,
            "Page {} of {}, total distinct companies: {}",
            number,
            page_count(total, size),
            total
        )?,
        None => writeln!(out, "Total distinct companies: {}", total)?,
    }
    Ok(())
}

pub fn run_stats_command(jobs: &[Job], out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Total jobs: {}", jobs.len())?;
    writeln!(
        out,
        "Longest company name: {}",
        longest_company_name(jobs).unwrap_or("")
    )?;
    match average_company_name_length(jobs) {
        Some(avg) => writeln!(out, "Average company name length: {:.2}", avg)?,
        None => writeln!(out, "Average company name length: undefined")?,
    }
    Ok(())
}

pub fn run_words_command(jobs: &[Job], top: usize, out: &mut dyn Write) -> Result<()> {
    let frequency = word_frequency(jobs);
    for (word, count) in top_words(&frequency, top) {
        writeln!(out, "{:>6} {}", count, word)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Job> {
        ["Nordstrom", "Acme", "Netflix", "Globex", "Acme", "Nike"]
            .iter()
            .map(|company| Job::new("Dev", *company, "Austin", "TX").with_snippet("Ship it, ship"))
            .collect()
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_companies_page() {
        let jobs = fixture();
        let output = render(|out| {
            run_companies_command(&jobs, CompanyView::Page { number: 2, size: 2 }, out)
        });
        assert_eq!(
            output,
            "1. Netflix\n2. Nike\nPage 2 of 3, total distinct companies: 5\n"
        );
    }

    #[test]
    fn test_companies_prefix() {
        let jobs = fixture();
        let output = render(|out| {
            run_companies_command(
                &jobs,
                CompanyView::Prefix {
                    prefix: "N".to_string(),
                    number: 1,
                    size: 20,
                },
                out,
            )
        });
        assert_eq!(
            output,
            "1. Netflix\n2. Nike\n3. Nordstrom\nPage 1 of 1, total distinct companies: 3\n"
        );
    }

    #[test]
    fn test_companies_stepped() {
        let jobs = fixture();
        let output =
            render(|out| run_companies_command(&jobs, CompanyView::Stepped { step: 2 }, out));
        assert_eq!(output, "1. Acme\n3. Netflix\nTotal distinct companies: 5\n");
    }

    #[test]
    fn test_stats_on_empty_collection() {
        let output = render(|out| run_stats_command(&[], out));
        assert_eq!(
            output,
            "Total jobs: 0\nLongest company name: \nAverage company name length: undefined\n"
        );
    }

    #[test]
    fn test_words_command() {
        let jobs = fixture();
        let output = render(|out| run_words_command(&jobs, 1, out));
        assert_eq!(output, "    12 ship\n");
    }
}
