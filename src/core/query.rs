//! Pure queries over a job snapshot
//!
//! Every function here reads a borrowed slice of jobs and returns a derived
//! value. Nothing is written back and nothing is printed.

use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use tracing::trace;

use crate::model::Job;

/// Title markers that identify a junior position
pub const JUNIOR_MARKERS: [&str; 2] = ["Junior", "Jr"];

/// Runs of characters outside `[A-Za-z0-9_]` separate words
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("Invalid word separator pattern"));

/// Case-sensitive substring test against the junior markers
pub fn is_junior_job(job: &Job) -> bool {
    JUNIOR_MARKERS
        .iter()
        .any(|marker| job.title.contains(marker))
}

/// Junior jobs in original order, optionally capped at `limit`
pub fn filter_junior_jobs(jobs: &[Job], limit: Option<usize>) -> Vec<&Job> {
    let juniors = jobs.iter().filter(|job| is_junior_job(job));
    match limit {
        Some(n) => juniors.take(n).collect(),
        None => juniors.collect(),
    }
}

/// First `n` junior jobs
pub fn first_junior_jobs(jobs: &[Job], n: usize) -> Vec<&Job> {
    filter_junior_jobs(jobs, Some(n))
}

/// Captions of the first `n` junior jobs; stops scanning once `n` are found
pub fn first_junior_captions(jobs: &[Job], n: usize) -> Vec<&str> {
    jobs.iter()
        .filter(|job| is_junior_job(job))
        .map(|job| job.caption.as_str())
        .take(n)
        .collect()
}

/// Jobs located exactly in `state` and `city`, in insertion order
pub fn find_by_location<'a>(jobs: &'a [Job], state: &str, city: &str) -> Vec<&'a Job> {
    jobs.iter()
        .filter(|job| job.state == state)
        .filter(|job| job.city == city)
        .collect()
}

/// Parallel variant of [`find_by_location`]
///
/// Produces the same set of jobs. Output order is not guaranteed.
pub fn find_by_location_par<'a>(jobs: &'a [Job], state: &str, city: &str) -> Vec<&'a Job> {
    jobs.par_iter()
        .filter(|job| job.state == state && job.city == city)
        .collect()
}

/// First job whose title contains `term`
pub fn search_by_title_substring<'a>(jobs: &'a [Job], term: &str) -> Option<&'a Job> {
    jobs.iter().find(|job| job.title.contains(term))
}

/// First job matching an arbitrary predicate
pub fn first_matching<P>(jobs: &[Job], predicate: P) -> Option<&Job>
where
    P: Fn(&Job) -> bool,
{
    jobs.iter().find(|job| predicate(job))
}

/// Distinct company names, case-sensitive lexicographic order
pub fn distinct_companies_sorted(jobs: &[Job]) -> Vec<&str> {
    jobs.iter()
        .map(|job| job.company.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Company name with the most characters; ties go to the first seen
pub fn longest_company_name(jobs: &[Job]) -> Option<&str> {
    jobs.iter()
        .map(|job| job.company.as_str())
        .fold(None, |longest: Option<&str>, name| match longest {
            Some(current) if current.chars().count() >= name.chars().count() => Some(current),
            _ => Some(name),
        })
}

/// Mean character length of company names, `None` for an empty collection
pub fn average_company_name_length(jobs: &[Job]) -> Option<f64> {
    if jobs.is_empty() {
        return None;
    }

    let total: usize = jobs.iter().map(|job| job.company.chars().count()).sum();
    Some(total as f64 / jobs.len() as f64)
}

/// Lowercased word counts across every snippet
pub fn word_frequency(jobs: &[Job]) -> HashMap<String, u64> {
    jobs.iter()
        .flat_map(|job| NON_WORD.split(&job.snippet))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .fold(HashMap::new(), |mut counts, word| {
            *counts.entry(word).or_insert(0) += 1;
            counts
        })
}

/// Most frequent words, ties broken alphabetically
pub fn top_words(frequency: &HashMap<String, u64>, n: usize) -> Vec<(&str, u64)> {
    let mut words: Vec<(&str, u64)> = frequency
        .iter()
        .map(|(word, count)| (word.as_str(), *count))
        .collect();
    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    words.truncate(n);
    words
}

/// Names starting with `prefix`, logging every name inspected
pub fn companies_with_prefix<'a, S>(companies: &'a [S], prefix: &str) -> Vec<&'a str>
where
    S: AsRef<str>,
{
    companies
        .iter()
        .map(AsRef::as_ref)
        .inspect(|company| trace!("=========> {}.", company))
        .filter(|company| company.starts_with(prefix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, company: &str, city: &str, state: &str) -> Job {
        Job::new(title, company, city, state)
    }

    fn fixture() -> Vec<Job> {
        vec![
            job("Senior Engineer", "Acme", "Portland", "OR"),
            job("Junior Developer", "Globex", "Portland", "OR"),
            job("Jr. Analyst", "Initech", "Austin", "TX"),
            job("junior tester", "Acme", "Austin", "TX"),
            job("Junior Designer", "Hooli", "Portland", "ME"),
            job("Staff Engineer", "Globex", "Portland", "OR"),
            job("Developer Jr", "Umbrella Corporation", "New York", "NY"),
        ]
    }

    #[test]
    fn test_junior_filter_is_case_sensitive_and_ordered() {
        let jobs = fixture();
        let titles: Vec<&str> = filter_junior_jobs(&jobs, None)
            .into_iter()
            .map(|j| j.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Junior Developer",
                "Jr. Analyst",
                "Junior Designer",
                "Developer Jr"
            ]
        );
    }

    #[test]
    fn test_junior_filter_with_limit() {
        let jobs = fixture();
        assert_eq!(filter_junior_jobs(&jobs, Some(2)).len(), 2);
        assert_eq!(first_junior_jobs(&jobs, 10).len(), 4);
        assert!(filter_junior_jobs(&[], None).is_empty());
    }

    #[test]
    fn test_first_junior_captions_matches_unbounded_prefix() {
        let jobs = fixture();
        let captions = first_junior_captions(&jobs, 3);
        let expected: Vec<&str> = filter_junior_jobs(&jobs, None)
            .into_iter()
            .take(3)
            .map(|j| j.caption.as_str())
            .collect();
        assert_eq!(captions.len(), 3);
        assert_eq!(captions, expected);
        assert_eq!(
            captions[0],
            "Globex is looking for a Junior Developer in Portland"
        );
    }

    #[test]
    fn test_find_by_location_exact_match() {
        let jobs = fixture();
        let found = find_by_location(&jobs, "OR", "Portland");
        let titles: Vec<&str> = found.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Senior Engineer", "Junior Developer", "Staff Engineer"]
        );
        assert!(find_by_location(&jobs, "or", "Portland").is_empty());
    }

    #[test]
    fn test_parallel_location_filter_same_set() {
        let jobs: Vec<Job> = fixture().into_iter().cycle().take(700).collect();
        let mut sequential = find_by_location(&jobs, "OR", "Portland");
        let mut parallel = find_by_location_par(&jobs, "OR", "Portland");
        sequential.sort_by(|a, b| a.title.cmp(&b.title));
        parallel.sort_by(|a, b| a.title.cmp(&b.title));
        assert_eq!(sequential, parallel);
        assert_eq!(parallel.len(), 300);
    }

    #[test]
    fn test_search_returns_first_match_or_none() {
        let jobs = fixture();
        let hit = search_by_title_substring(&jobs, "Engineer").unwrap();
        assert_eq!(hit.title, "Senior Engineer");
        assert!(search_by_title_substring(&jobs, "Nope").is_none());
        assert!(search_by_title_substring(&[], "Engineer").is_none());
    }

    #[test]
    fn test_first_matching_with_composed_predicate() {
        let jobs = fixture();
        let found = first_matching(&jobs, |j| j.state == "TX" && is_junior_job(j)).unwrap();
        assert_eq!(found.title, "Jr. Analyst");
        assert!(first_matching(&jobs, |j| j.state == "CA").is_none());
    }

    #[test]
    fn test_distinct_companies_sorted() {
        let jobs = vec![
            job("a", "Acme", "x", "y"),
            job("b", "Globex", "x", "y"),
            job("c", "Acme", "x", "y"),
        ];
        assert_eq!(distinct_companies_sorted(&jobs), vec!["Acme", "Globex"]);
    }

    #[test]
    fn test_distinct_companies_case_sensitive_order() {
        let jobs = vec![job("a", "acme", "x", "y"), job("b", "Zeta", "x", "y")];
        assert_eq!(distinct_companies_sorted(&jobs), vec!["Zeta", "acme"]);
    }

    #[test]
    fn test_longest_company_name_first_wins_ties() {
        let jobs = vec![
            job("a", "Abc", "x", "y"),
            job("b", "Wxyz", "x", "y"),
            job("c", "Defg", "x", "y"),
        ];
        assert_eq!(longest_company_name(&jobs), Some("Wxyz"));
        assert_eq!(longest_company_name(&[]), None);
    }

    #[test]
    fn test_longest_company_name_counts_characters() {
        let jobs = vec![job("a", "Zürich AG", "x", "y"), job("b", "Zurich AGx", "x", "y")];
        assert_eq!(longest_company_name(&jobs), Some("Zurich AGx"));
    }

    #[test]
    fn test_average_company_name_length() {
        let jobs = vec![job("a", "Acme", "x", "y"), job("b", "Globex", "x", "y")];
        assert_eq!(average_company_name_length(&jobs), Some(5.0));
        assert_eq!(average_company_name_length(&[]), None);
    }

    #[test]
    fn test_word_frequency_folds_case_and_strips_punctuation() {
        let jobs = vec![
            job("a", "b", "c", "d").with_snippet("Go go!"),
            job("a", "b", "c", "d").with_snippet("go home"),
        ];
        let counts = word_frequency(&jobs);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["go"], 3);
        assert_eq!(counts["home"], 1);
    }

    #[test]
    fn test_word_frequency_ignores_leading_separators() {
        let jobs = vec![job("a", "b", "c", "d").with_snippet("  ...<b>Rust</b> & rust_lang")];
        let counts = word_frequency(&jobs);
        assert_eq!(counts["rust"], 1);
        assert_eq!(counts["b"], 2);
        assert_eq!(counts["rust_lang"], 1);
        assert!(!counts.contains_key(""));
    }

    #[test]
    fn test_top_words_ordering() {
        let jobs = vec![job("a", "b", "c", "d").with_snippet("beta alpha beta gamma alpha delta")];
        let counts = word_frequency(&jobs);
        assert_eq!(
            top_words(&counts, 3),
            vec![("alpha", 2), ("beta", 2), ("delta", 1)]
        );
    }

    #[test]
    fn test_companies_with_prefix() {
        let companies = vec!["Netflix".to_string(), "Acme".to_string(), "Nokia".to_string()];
        assert_eq!(
            companies_with_prefix(&companies, "N"),
            vec!["Netflix", "Nokia"]
        );
    }
}
