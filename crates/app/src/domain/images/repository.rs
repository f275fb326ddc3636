//! Images Repository

use sqlx::{Error, PgPool, Row, query, query_scalar};
use uuid::Uuid;

const INSERT_IMAGE_SQL: &str = include_str!("sql/insert_image.sql");
const FIND_IMAGE_SQL: &str = include_str!("sql/find_image.sql");
const DELETE_IMAGE_SQL: &str = include_str!("sql/delete_image.sql");
const PRODUCT_EXISTS_SQL: &str = include_str!("sql/product_exists.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgImagesRepository;

impl PgImagesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn product_exists(&self, pool: &PgPool, product: Uuid) -> Result<bool, Error> {
        query_scalar(PRODUCT_EXISTS_SQL)
            .bind(product)
            .fetch_one(pool)
            .await
    }

    /// Inserts an image row at the next free position and returns that position.
    pub(crate) async fn insert_image(
        &self,
        pool: &PgPool,
        image: Uuid,
        product: Uuid,
        image_url: &str,
    ) -> Result<i32, Error> {
        let row = query(INSERT_IMAGE_SQL)
            .bind(image)
            .bind(product)
            .bind(image_url)
            .fetch_one(pool)
            .await?;

        row.try_get("position")
    }

    pub(crate) async fn find_image_url(
        &self,
        pool: &PgPool,
        product: Uuid,
        image: Uuid,
    ) -> Result<Option<String>, Error> {
        let row = query(FIND_IMAGE_SQL)
            .bind(product)
            .bind(image)
            .fetch_optional(pool)
            .await?;

        row.map(|row| row.try_get("image_url")).transpose()
    }

    pub(crate) async fn delete_image(
        &self,
        pool: &PgPool,
        product: Uuid,
        image: Uuid,
    ) -> Result<u64, Error> {
        Ok(query(DELETE_IMAGE_SQL)
            .bind(product)
            .bind(image)
            .execute(pool)
            .await?
            .rows_affected())
    }
}
