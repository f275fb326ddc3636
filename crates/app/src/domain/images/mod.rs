//! Product Images

pub mod errors;
pub mod models;
mod repository;
pub mod service;
pub mod storage;

pub use errors::ImagesServiceError;
pub use service::*;
