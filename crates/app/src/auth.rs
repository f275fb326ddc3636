//! JWT issuing and verification.

use jiff::Timestamp;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode,
};
use serde::{Deserialize, Serialize};

use crate::domain::users::models::Role;

/// Signing configuration shared by the login endpoint and the admin
/// middleware.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_seconds: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

pub fn issue(
    config: &JwtConfig,
    username: &str,
    role: Role,
) -> Result<String, jsonwebtoken::errors::Error> {
    let issued_at = Timestamp::now().as_second();

    let claims = Claims {
        sub: username.to_string(),
        role,
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
        iat: issued_at,
        exp: issued_at.saturating_add(config.ttl_seconds),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

pub fn verify(config: &JwtConfig, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.issuer]);
    validation.set_audience(&[&config.audience]);

    let data: TokenData<Claims> = decode(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(data.claims)
}
