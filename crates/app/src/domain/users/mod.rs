//! Users and admin authentication.

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::AuthServiceError;
pub use service::*;
