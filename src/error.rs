use std::path::PathBuf;

use thiserror::Error;

use crate::state::InvalidState;
use crate::variant::Variant;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("{variant} state space is deeper than the limit of {limit} levels")]
    DepthLimitExceeded { variant: Variant, limit: u32 },

    #[error(transparent)]
    InvalidState(#[from] InvalidState),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
