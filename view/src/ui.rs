//! Terminal widgets.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Creates a ticking spinner showing `message`. Call `finish_and_clear` once
/// the awaited work is done.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
