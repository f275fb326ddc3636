//! Auth Config

use clap::Args;
use paperbloom_app::auth::JwtConfig;

/// Admin authentication settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Secret used to sign admin tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Issuer claim written into tokens
    #[arg(long, env = "JWT_ISSUER", default_value = "paperbloom")]
    pub jwt_issuer: String,

    /// Audience claim written into tokens
    #[arg(long, env = "JWT_AUDIENCE", default_value = "paperbloom-storefront")]
    pub jwt_audience: String,

    /// Token lifetime in seconds
    #[arg(long, env = "JWT_TTL_SECONDS", default_value_t = 3600)]
    pub jwt_ttl_seconds: i64,

    /// Username seeded for the first admin account
    #[arg(long, env = "ADMIN_USERNAME", default_value = "admin")]
    pub admin_username: String,

    /// Password seeded for the first admin account
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: String,
}

impl AuthConfig {
    #[must_use]
    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.jwt_secret.clone(),
            issuer: self.jwt_issuer.clone(),
            audience: self.jwt_audience.clone(),
            ttl_seconds: self.jwt_ttl_seconds,
        }
    }
}
