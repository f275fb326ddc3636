//! Products service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::products::{
    errors::ProductsServiceError,
    models::{ProductInput, ProductRecord},
    repository::PgProductsRepository,
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    pool: PgPool,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.repository.list_products(&self.pool).await?)
    }

    async fn get_product(&self, product: Uuid) -> Result<ProductRecord, ProductsServiceError> {
        self.repository
            .get_product(&self.pool, product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        input: ProductInput,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let uuid = Uuid::now_v7();
        let mut tx = self.pool.begin().await?;

        self.repository.create_product(&mut tx, uuid, &input).await?;

        tx.commit().await?;

        self.get_product(uuid).await
    }

    async fn update_product(
        &self,
        product: Uuid,
        input: ProductInput,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.pool.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &input)
            .await?;

        if updated == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        self.get_product(product).await
    }

    async fn delete_product(&self, product: Uuid) -> Result<(), ProductsServiceError> {
        let rows_affected = self.repository.delete_product(&self.pool, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products with their option collections and images.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: Uuid) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product and returns it as stored.
    async fn create_product(
        &self,
        input: ProductInput,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces a product's fields and option collections.
    async fn update_product(
        &self,
        product: Uuid,
        input: ProductInput,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product with the given UUID.
    async fn delete_product(&self, product: Uuid) -> Result<(), ProductsServiceError>;
}
