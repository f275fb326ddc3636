//! Auth service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// Unknown username and wrong password collapse into one variant so
    /// responses cannot be used to probe for valid usernames.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("token error")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("password hash error")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("storage error")]
    Sql(#[from] Error),
}
