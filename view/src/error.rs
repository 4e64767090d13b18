use std::error::Error as StdError;
use std::io;

use thiserror::Error;
use todo_core::ApiError;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to write output")]
    Io(#[from] io::Error),
}

/// One line with the error and each of its sources, outermost first.
pub fn report(err: &dyn StdError) -> String {
    let mut line = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        line.push_str(": ");
        line.push_str(&cause.to_string());
        source = cause.source();
    }
    line
}
