//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    auth::{Claims, JwtConfig, issue, verify},
    domain::users::{
        errors::AuthServiceError,
        models::{IssuedLogin, Role},
        repository::PgUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    pool: PgPool,
    repository: PgUsersRepository,
    jwt: JwtConfig,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool, jwt: JwtConfig) -> Self {
        Self {
            pool,
            repository: PgUsersRepository::new(),
            jwt,
        }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn login(&self, username: &str, password: &str) -> Result<IssuedLogin, AuthServiceError> {
        let Some(user) = self
            .repository
            .find_user_by_username(&self.pool, username)
            .await?
        else {
            return Err(AuthServiceError::InvalidCredentials);
        };

        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = issue(&self.jwt, &user.username, user.role)?;

        info!(username = %user.username, "login succeeded");

        Ok(IssuedLogin {
            token,
            username: user.username,
            role: user.role,
        })
    }

    fn verify_bearer(&self, token: &str) -> Result<Claims, AuthServiceError> {
        Ok(verify(&self.jwt, token)?)
    }

    async fn create_user(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<Uuid, AuthServiceError> {
        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

        Ok(self
            .repository
            .insert_user(&self.pool, username, &password_hash, role)
            .await?)
    }

    async fn count_users(&self) -> Result<i64, AuthServiceError> {
        Ok(self.repository.count_users(&self.pool).await?)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Checks credentials and issues a signed token. An unknown username
    /// and a wrong password are indistinguishable to the caller.
    async fn login(&self, username: &str, password: &str)
    -> Result<IssuedLogin, AuthServiceError>;

    /// Verifies a bearer token and returns its claims.
    fn verify_bearer(&self, token: &str) -> Result<Claims, AuthServiceError>;

    /// Creates a user with a freshly hashed password.
    async fn create_user(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<Uuid, AuthServiceError>;

    /// Total number of users; used to decide whether to seed an admin.
    async fn count_users(&self) -> Result<i64, AuthServiceError>;
}
