// Error Types
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrimeError {
    /// The input path could not be opened or mapped for reading.
    #[error("cannot read input file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, PrimeError>;
