//! Image Models

use uuid::Uuid;

/// Record returned after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub uuid: Uuid,
    pub image_url: String,
    pub position: i32,
}
