use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors (CLI layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{path}: {source}")]
    FileError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    ServiceError(#[from] termcal_service::ServiceError),
}

impl AppError {
    pub(crate) fn file(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::FileError { path, source }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
