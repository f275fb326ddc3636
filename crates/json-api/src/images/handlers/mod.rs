//! Image Handlers

pub(crate) mod delete;
pub(crate) mod upload;
