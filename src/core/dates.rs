//! Date string reformatting
//!
//! Job sources deliver timestamps as text in a source-specific format. A
//! [`DateConverter`] is built once from an input and an output format and
//! then applied per item. A string that does not match the input format is
//! a recoverable per-item error; the caller decides whether to skip it or
//! abort.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

use crate::error::{ErrorCode, JobscopeError, Result};

const RFC1123_OUTPUT: &str = "%a, %-d %b %Y %H:%M:%S GMT";

/// A textual date format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DateFormat {
    /// `Tue, 3 Jun 2008 11:05:30 GMT`
    Rfc1123,
    /// `2008-06-03T11:05:30+00:00`
    Rfc3339,
    /// A strftime-style pattern such as `%m-%d-%Y`
    Pattern(String),
}

impl DateFormat {
    /// Build a pattern format, rejecting unknown specifiers
    pub fn pattern(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(JobscopeError::parse_with_code(
                ErrorCode::PARSE_UNKNOWN_FORMAT,
                format!("invalid date pattern '{}'", pattern),
            ));
        }
        Ok(Self::Pattern(pattern))
    }

    /// Parse `input` into a local date-time, dropping any zone offset
    ///
    /// Date-only patterns resolve to midnight.
    pub fn parse(&self, input: &str) -> Result<NaiveDateTime> {
        let parsed = match self {
            Self::Rfc1123 => DateTime::parse_from_rfc2822(input).map(|dt| dt.naive_local()),
            Self::Rfc3339 => DateTime::parse_from_rfc3339(input).map(|dt| dt.naive_local()),
            Self::Pattern(pattern) => NaiveDateTime::parse_from_str(input, pattern).or_else(|_| {
                NaiveDate::parse_from_str(input, pattern).map(|d| d.and_time(NaiveTime::MIN))
            }),
        };

        parsed.map_err(|e| JobscopeError::parse(input, self.to_string()).with_source(e))
    }

    /// Render `value` in this format
    pub fn format(&self, value: &NaiveDateTime) -> Result<String> {
        let pattern = match self {
            Self::Rfc1123 => RFC1123_OUTPUT,
            Self::Rfc3339 => return Ok(value.and_utc().to_rfc3339()),
            Self::Pattern(pattern) => pattern.as_str(),
        };

        let mut out = String::new();
        write!(out, "{}", value.format(pattern)).map_err(|_| {
            JobscopeError::parse_with_code(
                ErrorCode::PARSE_UNKNOWN_FORMAT,
                format!("pattern '{}' cannot render a local date-time", pattern),
            )
        })?;
        Ok(out)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rfc1123 => f.write_str("rfc1123"),
            Self::Rfc3339 => f.write_str("rfc3339"),
            Self::Pattern(pattern) => f.write_str(pattern),
        }
    }
}

impl FromStr for DateFormat {
    type Err = JobscopeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rfc1123" | "rfc2822" => Ok(Self::Rfc1123),
            "rfc3339" | "iso8601" => Ok(Self::Rfc3339),
            _ => Self::pattern(s),
        }
    }
}

impl TryFrom<String> for DateFormat {
    type Error = JobscopeError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        format.to_string()
    }
}

/// Reusable input-to-output date string conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateConverter {
    input: DateFormat,
    output: DateFormat,
}

impl DateConverter {
    pub fn new(input: DateFormat, output: DateFormat) -> Self {
        Self { input, output }
    }

    pub fn input(&self) -> &DateFormat {
        &self.input
    }

    pub fn output(&self) -> &DateFormat {
        &self.output
    }

    pub fn convert(&self, date: &str) -> Result<String> {
        let parsed = self.input.parse(date)?;
        self.output.format(&parsed)
    }

    /// Convert each string, yielding one result per item in order
    pub fn convert_all<'a, I>(&'a self, dates: I) -> impl Iterator<Item = Result<String>> + 'a
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: 'a,
    {
        dates.into_iter().map(move |date| self.convert(date))
    }
}

/// One-shot conversion of `date` from `input` format to `output` format
pub fn reformat_date(date: &str, input: &DateFormat, output: &DateFormat) -> Result<String> {
    let parsed = input.parse(date)?;
    output.format(&parsed)
}
