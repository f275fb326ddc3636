//! User Models

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role")]
pub struct UnknownRole;

/// Closed set of roles. Authorization decisions match on this enum, never
/// on raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
        }
    }

    #[must_use]
    pub fn can_manage_products(self) -> bool {
        match self {
            Self::Admin => true,
        }
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Admin" => Ok(Self::Admin),
            _ => Err(UnknownRole),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserRecord {
    pub uuid: Uuid,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedLogin {
    pub token: String,
    pub username: String,
    pub role: Role,
}
