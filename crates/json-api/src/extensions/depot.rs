//! Depot helper extensions.

use std::any::Any;

use paperbloom_app::auth::Claims;
use salvo::prelude::{Depot, StatusError};

const ADMIN_CLAIMS_KEY: &str = "admin_claims";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Stores the verified admin claims for downstream handlers.
    fn insert_admin_claims(&mut self, claims: Claims);

    /// Retrieves the admin claims injected by the auth middleware.
    fn admin_claims_or_401(&self) -> Result<&Claims, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_admin_claims(&mut self, claims: Claims) {
        self.insert(ADMIN_CLAIMS_KEY, claims);
    }

    fn admin_claims_or_401(&self) -> Result<&Claims, StatusError> {
        self.get::<Claims>(ADMIN_CLAIMS_KEY)
            .map_err(|_ignored| StatusError::unauthorized().brief("Not authenticated"))
    }
}
