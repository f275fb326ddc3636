//! Image service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImagesServiceError {
    #[error("uploaded file is empty")]
    EmptyFile,

    #[error("unsupported file type")]
    UnsupportedFileType,

    #[error("image not found")]
    NotFound,

    #[error("related product not found")]
    InvalidReference,

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("filesystem error")]
    Io(#[from] std::io::Error),
}

impl From<Error> for ImagesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(_) | None => Self::Sql(error),
        }
    }
}
