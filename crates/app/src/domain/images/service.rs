//! Images service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::domain::images::{
    errors::ImagesServiceError, models::UploadedImage, repository::PgImagesRepository,
    storage::FsImageStore,
};

/// Extensions accepted for product image uploads.
const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Clone)]
pub struct PgImagesService {
    pool: PgPool,
    repository: PgImagesRepository,
    store: FsImageStore,
}

impl PgImagesService {
    #[must_use]
    pub fn new(pool: PgPool, store: FsImageStore) -> Self {
        Self {
            pool,
            repository: PgImagesRepository::new(),
            store,
        }
    }
}

#[async_trait]
impl ImagesService for PgImagesService {
    async fn upload_image(
        &self,
        product: Uuid,
        original_filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, ImagesServiceError> {
        if bytes.is_empty() {
            return Err(ImagesServiceError::EmptyFile);
        }

        let extension = allowed_extension(original_filename)?;

        if !self.repository.product_exists(&self.pool, product).await? {
            return Err(ImagesServiceError::NotFound);
        }

        let uuid = Uuid::now_v7();
        let filename = format!("{uuid}.{extension}");
        let image_url = format!("/images/{filename}");

        self.store.save(&filename, &bytes).await?;

        let position = match self
            .repository
            .insert_image(&self.pool, uuid, product, &image_url)
            .await
        {
            Ok(position) => position,
            Err(e) => {
                // The row is authoritative, so drop the orphaned file.
                if let Err(cleanup) = self.store.remove(&filename).await {
                    warn!(%filename, error = %cleanup, "failed to remove orphaned upload");
                }

                return Err(e.into());
            }
        };

        Ok(UploadedImage {
            uuid,
            image_url,
            position,
        })
    }

    async fn delete_image(&self, product: Uuid, image: Uuid) -> Result<(), ImagesServiceError> {
        let image_url = self
            .repository
            .find_image_url(&self.pool, product, image)
            .await?
            .ok_or(ImagesServiceError::NotFound)?;

        let rows_affected = self
            .repository
            .delete_image(&self.pool, product, image)
            .await?;

        if rows_affected == 0 {
            return Err(ImagesServiceError::NotFound);
        }

        if let Some(filename) = image_url.rsplit('/').next() {
            self.store.remove(filename).await?;
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ImagesService: Send + Sync {
    /// Stores an uploaded file and records it against the product. The
    /// stored filename is a fresh UUID; the original name only supplies
    /// the extension.
    async fn upload_image(
        &self,
        product: Uuid,
        original_filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, ImagesServiceError>;

    /// Removes an image row and its file.
    async fn delete_image(&self, product: Uuid, image: Uuid) -> Result<(), ImagesServiceError>;
}

fn allowed_extension(original_filename: &str) -> Result<String, ImagesServiceError> {
    let extension = original_filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .ok_or(ImagesServiceError::UnsupportedFileType)?;

    if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(ImagesServiceError::UnsupportedFileType)
    }
}
