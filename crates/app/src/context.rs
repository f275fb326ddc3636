//! App Context

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;

use crate::{
    auth::JwtConfig,
    database,
    domain::{
        images::{ImagesService, PgImagesService, storage::FsImageStore},
        products::{PgProductsService, ProductsService},
        users::{AuthService, PgAuthService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run migrations")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Options beyond the database URL needed to stand the services up.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub jwt: JwtConfig,
    pub uploads_dir: PathBuf,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub images: Arc<dyn ImagesService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    #[must_use]
    pub fn new(
        products: Arc<dyn ProductsService>,
        images: Arc<dyn ImagesService>,
        auth: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            products,
            images,
            auth,
        }
    }

    /// Build application context from a database URL, running pending
    /// migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or migrating fails.
    pub async fn from_database_url(url: &str, options: AppOptions) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool).await?;

        let store = FsImageStore::new(options.uploads_dir);

        Ok(Self {
            products: Arc::new(PgProductsService::new(pool.clone())),
            images: Arc::new(PgImagesService::new(pool.clone(), store)),
            auth: Arc::new(PgAuthService::new(pool, options.jwt)),
        })
    }
}
