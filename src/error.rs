use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("corpus has no pages")]
    EmptyCorpus,

    #[error("damping factor must lie in (0, 1), got {0}")]
    InvalidDamping(f64),

    #[error("sample count must be positive, got {0}")]
    InvalidSampleCount(usize),

    #[error("convergence threshold must be positive, got {0}")]
    InvalidThreshold(f64),

    #[error("page not in corpus: {0}")]
    UnknownPage(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("cannot walk corpus directory: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_damping(damping: f64) -> Result<f64> {
    if damping > 0.0 && damping < 1.0 {
        Ok(damping)
    } else {
        Err(Error::InvalidDamping(damping))
    }
}
