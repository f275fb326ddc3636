//! Image Errors

use paperbloom_app::domain::images::ImagesServiceError;
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: ImagesServiceError) -> StatusError {
    match error {
        ImagesServiceError::EmptyFile => StatusError::bad_request().brief("Uploaded file is empty"),
        ImagesServiceError::UnsupportedFileType => {
            StatusError::bad_request().brief("Unsupported file type")
        }
        ImagesServiceError::NotFound | ImagesServiceError::InvalidReference => {
            StatusError::not_found().brief("Product or image not found")
        }
        ImagesServiceError::Sql(source) => {
            error!("images storage error: {source}");

            StatusError::internal_server_error()
        }
        ImagesServiceError::Io(source) => {
            error!("images filesystem error: {source}");

            StatusError::internal_server_error()
        }
    }
}
