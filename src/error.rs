use thiserror::Error;

use std::io;

/// Errors from setting up a run or recording its result. The control loop
/// itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Setup(#[from] tokenbots_support::Error),

    #[error("writing result: {0}")]
    Io(#[from] io::Error),
}
