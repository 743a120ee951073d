//! The job posting record

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single job posting
///
/// Jobs are immutable once loaded. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "JobRecord")]
pub struct Job {
    pub title: String,
    pub company: String,
    pub city: String,
    pub state: String,
    pub snippet: String,
    pub caption: String,
    /// Raw timestamp as delivered by the source, e.g. RFC 1123
    pub date: String,
}

impl Job {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let company = company.into();
        let city = city.into();
        let caption = default_caption(&company, &title, &city);
        Self {
            title,
            company,
            city,
            state: state.into(),
            snippet: String::new(),
            caption,
            date: String::new(),
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn date_time_string(&self) -> &str {
        &self.date
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Job {{ title: {}, company: {}, location: {}, {} }}",
            self.title, self.company, self.city, self.state
        )
    }
}

fn default_caption(company: &str, title: &str, city: &str) -> String {
    format!("{} is looking for a {} in {}", company, title, city)
}

/// Wire shape of a job record
///
/// Search-API payloads name the title `jobtitle`; hand-written fixtures
/// tend to use `title`. Both are accepted. Title, company, city and state
/// are required; a record missing any of them fails to decode.
#[derive(Debug, Deserialize)]
struct JobRecord {
    #[serde(alias = "jobtitle")]
    title: String,
    company: String,
    city: String,
    state: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    caption: Option<String>,
    #[serde(default)]
    date: String,
}

impl From<JobRecord> for Job {
    fn from(record: JobRecord) -> Self {
        let caption = record
            .caption
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| default_caption(&record.company, &record.title, &record.city));

        Self {
            title: record.title,
            company: record.company,
            city: record.city,
            state: record.state,
            snippet: record.snippet,
            caption,
            date: record.date,
        }
    }
}
