//! Command implementation modules
//!
//! Each handler renders its report to the supplied writer so it can be
//! exercised without a terminal.

pub mod companies;
pub mod dates;
pub mod jobs;
pub mod pantry;

pub use companies::{run_companies_command, run_stats_command, run_words_command, CompanyView};
pub use dates::run_dates_command;
pub use jobs::{
    run_captions_command, run_juniors_command, run_location_command, run_notify_command,
    run_search_command,
};
pub use pantry::{run_ingredients_command, run_yell_command};
