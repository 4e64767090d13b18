//! Command-line arguments.
use clap::{ArgAction, Parser};
use todo_core::DEFAULT_BASE_URL;

pub const DEFAULT_DISPLAY_LIMIT: usize = 10;
pub const DEFAULT_STALE_SECS: u64 = 24 * 60 * 60;

#[derive(Parser, Debug)]
#[command(author, version, about = "Show the first todos from the todos service", long_about = None, name = "todo-view")]
pub struct CliArgs {
    /// Base URL of the todos service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Number of todos to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_DISPLAY_LIMIT)]
    pub limit: usize,

    /// Seconds before fetched todos are considered stale
    #[arg(long, default_value_t = DEFAULT_STALE_SECS)]
    pub stale_secs: u64,

    /// Re-render every SECS seconds, refetching only stale data
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub watch: Option<u64>,

    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
