//! Upload Image Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, images::errors::into_status_error, state::State};

/// Image Uploaded Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImageUploadedResponse {
    /// Stored image UUID
    pub id: Uuid,

    /// URL the image is served from
    pub image_url: String,

    /// Position in the product's gallery
    pub position: i32,
}

/// Upload Image Handler
///
/// Accepts a multipart form with a single `file` part. The stored
/// filename is a fresh UUID; only the extension of the original name is
/// kept.
#[endpoint(
    tags("images"),
    summary = "Upload Product Image",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Image stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing, empty, or unsupported file"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not authenticated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ImageUploadedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_claims_or_401()?;

    let file = req
        .file("file")
        .await
        .ok_or_else(|| StatusError::bad_request().brief("Missing `file` part"))?;

    let original_filename = file
        .name()
        .ok_or_else(|| StatusError::bad_request().brief("Missing filename"))?
        .to_string();

    let bytes = tokio::fs::read(file.path())
        .await
        .or_500("failed to read uploaded file")?;

    let uploaded = state
        .app
        .images
        .upload_image(uuid.into_inner(), &original_filename, bytes)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(ImageUploadedResponse {
        id: uploaded.uuid,
        image_url: uploaded.image_url,
        position: uploaded.position,
    }))
}
