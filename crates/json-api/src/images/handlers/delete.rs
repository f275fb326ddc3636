//! Delete Image Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, images::errors::into_status_error, state::State};

/// Delete Image Handler
///
/// Removes an image row and its stored file.
#[endpoint(
    tags("images"),
    summary = "Delete Product Image",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Image deleted"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not authenticated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product or image not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    image_uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_claims_or_401()?;

    state
        .app
        .images
        .delete_image(uuid.into_inner(), image_uuid.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use paperbloom_app::domain::images::{ImagesServiceError, MockImagesService};
    use salvo::test::TestClient;
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::test_helpers::images_service;

    use super::*;

    fn make_service(images: MockImagesService) -> Service {
        images_service(
            images,
            Router::with_path("products")
                .push(Router::with_path("{uuid}/images/{image_uuid}").delete(handler)),
        )
    }

    #[tokio::test]
    async fn test_delete_image_returns_204() -> TestResult {
        let product = Uuid::now_v7();
        let image = Uuid::now_v7();

        let mut images = MockImagesService::new();

        images
            .expect_delete_image()
            .once()
            .withf(move |requested_product, requested_image| {
                *requested_product == product && *requested_image == image
            })
            .return_once(|_, _| Ok(()));
        images.expect_upload_image().never();

        let res = TestClient::delete(format!(
            "http://example.com/products/{product}/images/{image}"
        ))
        .send(&make_service(images))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_unknown_image_returns_404() -> TestResult {
        let mut images = MockImagesService::new();

        images
            .expect_delete_image()
            .once()
            .return_once(|_, _| Err(ImagesServiceError::NotFound));
        images.expect_upload_image().never();

        let res = TestClient::delete(format!(
            "http://example.com/products/{}/images/{}",
            Uuid::now_v7(),
            Uuid::now_v7()
        ))
        .send(&make_service(images))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
