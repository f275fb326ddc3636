//! Auth Errors

use paperbloom_app::domain::users::AuthServiceError;
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid username or password")
        }
        AuthServiceError::Token(source) => {
            error!("failed to issue token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Hash(source) => {
            error!("failed to verify password hash: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Sql(source) => {
            error!("failed to look up user: {source}");

            StatusError::internal_server_error()
        }
    }
}
