//! CLI argument structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query and report over a snapshot of job postings
#[derive(Parser, Debug)]
#[command(name = "jobscope")]
#[command(about = "jobscope - Query and report over a snapshot of job postings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Job snapshot file (overrides the configured data file)
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Refresh the job store before loading it
    #[arg(long, global = true)]
    pub refresh: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List junior positions (title contains "Junior" or "Jr")
    Juniors {
        /// Stop after this many jobs
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show captions of the first junior positions
    Captions {
        /// Number of captions to show
        #[arg(short = 'n', long, default_value = "3")]
        count: usize,
    },

    /// List jobs in a state and city
    Location {
        /// State code, e.g. OR
        #[arg(long)]
        state: String,

        /// City name, e.g. Portland
        #[arg(long)]
        city: String,

        /// Filter in parallel (output order not guaranteed)
        #[arg(long)]
        parallel: bool,
    },

    /// Find the first job whose title contains a term
    Search {
        /// Case-sensitive search term
        term: String,
    },

    /// List distinct companies as a numbered menu
    Companies {
        /// Page to show (1-based)
        #[arg(long, default_value = "1")]
        page: usize,

        /// Entries per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,

        /// Only companies whose name starts with this prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Show every Nth company instead of a page
        #[arg(long, conflicts_with = "prefix")]
        step: Option<usize>,
    },

    /// Company name statistics
    Stats,

    /// Word frequencies across job snippets
    Words {
        /// Number of most frequent words to show
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Reformat job posting dates (default command)
    Dates {
        /// Number of dates to show
        #[arg(short = 'n', long, default_value = "5")]
        limit: usize,

        /// Input format: rfc1123, rfc3339 or a strftime pattern
        #[arg(long = "in", value_name = "FORMAT")]
        input: Option<String>,

        /// Output format: rfc1123, rfc3339 or a strftime pattern
        #[arg(long = "out", value_name = "FORMAT")]
        output: Option<String>,

        /// Abort on the first malformed date instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Send a notification when a job matches a state
    Notify {
        /// Required state code
        #[arg(long)]
        state: String,

        /// Also require a junior title
        #[arg(long)]
        junior: bool,

        /// Pick the first matching job instead of the first job overall
        #[arg(long)]
        first_match: bool,
    },

    /// Print the baking ingredient list
    Ingredients {
        /// Shout every ingredient
        #[arg(long)]
        yell: bool,
    },

    /// Shout a word
    Yell {
        /// Word to shout
        word: Option<String>,

        /// Use two exclamation marks
        #[arg(long)]
        double: bool,
    },
}

impl Commands {
    /// Whether the command reads the job snapshot
    pub fn needs_jobs(&self) -> bool {
        !matches!(self, Self::Ingredients { .. } | Self::Yell { .. })
    }
}

impl Default for Commands {
    fn default() -> Self {
        Self::Dates {
            limit: 5,
            input: None,
            output: None,
            strict: false,
        }
    }
}
