use std::time::Duration;

use crate::cli::CliArgs;

/// Runtime settings of the viewer, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub base_url: String,
    pub display_limit: usize,
    pub stale_time: Duration,
    pub watch_interval: Option<Duration>,
}

impl From<&CliArgs> for ViewConfig {
    fn from(args: &CliArgs) -> Self {
        Self {
            base_url: args.base_url.clone(),
            display_limit: args.limit,
            stale_time: Duration::from_secs(args.stale_secs),
            watch_interval: args.watch.map(Duration::from_secs),
        }
    }
}
