//! Command routing and execution
//!
//! Loads configuration and the job snapshot when a command needs them, then
//! hands the snapshot to the command handler.

use anyhow::{bail, Result};
use std::io::Write;
use tracing::{debug, info};

use crate::cli::args::{Cli, Commands};
use crate::cli::commands::*;
use crate::config::JobscopeConfig;
use crate::core::{DateConverter, DateFormat};
use crate::model::JobSnapshot;
use crate::pantry::SequentialIssues;
use crate::storage::{load_snapshot, FileJobStore};

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    if !command.needs_jobs() {
        return execute_pantry_command(command, out);
    }

    let mut config = JobscopeConfig::load(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data_file = data;
    }
    debug!("Using data file {}", config.data_file.display());

    let mut store = FileJobStore::new(&config.data_file);
    if let Some(source) = &config.refresh_source {
        store = store.with_refresh_source(source);
    }

    let snapshot = load_snapshot(&store, cli.refresh)?;
    info!("Total jobs: {}", snapshot.len());

    execute_job_command(command, &config, &snapshot, out)
}

fn execute_job_command(
    command: Commands,
    config: &JobscopeConfig,
    snapshot: &JobSnapshot,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Commands::Juniors { limit } => run_juniors_command(snapshot, limit, out),
        Commands::Captions { count } => run_captions_command(snapshot, count, out),
        Commands::Location {
            state,
            city,
            parallel,
        } => run_location_command(snapshot, &state, &city, parallel, out),
        Commands::Search { term } => run_search_command(snapshot, &term, out),
        Commands::Companies {
            page,
            page_size,
            prefix,
            step,
        } => {
            let size = page_size.unwrap_or(config.page_size);
            if size == 0 {
                bail!("page size must be greater than zero");
            }
            let view = match (step, prefix) {
                (Some(step), _) => CompanyView::Stepped { step },
                (None, Some(prefix)) => CompanyView::Prefix {
                    prefix,
                    number: page,
                    size,
                },
                (None, None) => CompanyView::Page { number: page, size },
            };
            run_companies_command(snapshot, view, out)
        }
        Commands::Stats => run_stats_command(snapshot, out),
        Commands::Words { top } => run_words_command(snapshot, top, out),
        Commands::Dates {
            limit,
            input,
            output,
            strict,
        } => {
            let converter = DateConverter::new(
                resolve_format(input, &config.date_input_format)?,
                resolve_format(output, &config.date_output_format)?,
            );
            run_dates_command(snapshot, &converter, limit, strict, out)
        }
        Commands::Notify {
            state,
            junior,
            first_match,
        } => run_notify_command(snapshot, &state, junior, first_match, out),
        other @ (Commands::Ingredients { .. } | Commands::Yell { .. }) => {
            execute_pantry_command(other, out)
        }
    }
}

fn execute_pantry_command(command: Commands, out: &mut dyn Write) -> Result<()> {
    let issues = SequentialIssues::new();
    match command {
        Commands::Ingredients { yell } => run_ingredients_command(yell, &issues, out),
        Commands::Yell { word, double } => run_yell_command(word.as_deref(), double, &issues, out),
        other => bail!("command {:?} requires the job snapshot", other),
    }
}

fn resolve_format(requested: Option<String>, configured: &DateFormat) -> Result<DateFormat> {
    match requested {
        Some(format) => Ok(format.parse()?),
        None => Ok(configured.clone()),
    }
}
