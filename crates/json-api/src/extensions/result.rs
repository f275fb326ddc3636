//! Error-to-response helpers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Collapses any failure into a logged 500 so handler bodies stay linear.
pub(crate) trait ResultExt<T> {
    fn or_500(self, what: &str) -> Result<T, StatusError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn or_500(self, what: &str) -> Result<T, StatusError> {
        self.map_err(|source| {
            error!("{what}: {source}");

            StatusError::internal_server_error()
        })
    }
}
