//! Date reformatting command

use anyhow::{Context, Result};
use std::io::Write;
use tracing::warn;

use crate::core::DateConverter;
use crate::model::Job;

/// Print the first `limit` reformatted posting dates
///
/// Malformed dates are skipped with a warning unless `strict` is set, in
/// which case the first one aborts the command.
pub fn run_dates_command(
    jobs: &[Job],
    converter: &DateConverter,
    limit: usize,
    strict: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let mut shown = 0;

    for date in jobs.iter().map(Job::date_time_string) {
        if shown == limit {
            break;
        }

        match converter.convert(date) {
            Ok(formatted) => {
                writeln!(out, "{}", formatted)?;
                shown += 1;
            }
            Err(e) if strict => {
                return Err(e).with_context(|| format!("reformatting '{}'", date));
            }
            Err(e) => warn!("Skipping malformed date: {}", e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DateFormat;
    use crate::error::JobscopeError;

    fn fixture() -> Vec<Job> {
        [
            "Tue, 3 Jun 2008 11:05:30 GMT",
            "not a date",
            "Wed, 4 Jun 2008 08:00:00 GMT",
            "Thu, 5 Jun 2008 08:00:00 GMT",
        ]
        .iter()
        .map(|date| Job::new("Dev", "Acme", "Austin", "TX").with_date(*date))
        .collect()
    }

    fn converter() -> DateConverter {
        DateConverter::new(DateFormat::Rfc1123, "%m-%d-%Y".parse().unwrap())
    }

    #[test]
    fn test_skips_malformed_dates_and_respects_limit() {
        let mut buf = Vec::new();
        run_dates_command(&fixture(), &converter(), 2, false, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "06-03-2008\n06-04-2008\n");
    }

    #[test]
    fn test_strict_mode_aborts_on_malformed_date() {
        let mut buf = Vec::new();
        let err = run_dates_command(&fixture(), &converter(), 5, true, &mut buf).unwrap_err();
        assert!(err.downcast_ref::<JobscopeError>().is_some());
        assert_eq!(String::from_utf8(buf).unwrap(), "06-03-2008\n");
    }
}
