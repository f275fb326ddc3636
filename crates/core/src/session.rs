//! Session
//!
//! Client-held proof of authenticated admin access. An explicitly
//! constructed object handed to whatever needs it, created at app start
//! and torn down on logout; token presence alone is trusted client-side,
//! the backend re-validates on every authorized call.

use serde::{Deserialize, Serialize};

/// Roles the backend can grant. Closed set; authorization decisions match
/// on it exhaustively instead of comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Full catalog management access.
    Admin,
}

impl Role {
    /// Whether this role may create, update, or delete products.
    #[must_use]
    pub fn can_manage_products(self) -> bool {
        match self {
            Self::Admin => true,
        }
    }
}

/// Admin session state: an opaque bearer token plus the identity it was
/// issued for.
#[derive(Debug, Clone, Default)]
pub struct AdminSession {
    token: Option<String>,
    username: Option<String>,
    role: Option<Role>,
}

impl AdminSession {
    /// Creates a fresh, unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the outcome of a successful login.
    pub fn apply_login(&mut self, token: String, username: String, role: Role) {
        self.token = Some(token);
        self.username = Some(username);
        self.role = Some(role);
    }

    /// Clears token, username, and role unconditionally.
    pub fn logout(&mut self) {
        self.token = None;
        self.username = None;
        self.role = None;
    }

    /// True iff a token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The raw bearer token, if authenticated.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The logged-in username, if authenticated.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The granted role, if authenticated.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }
}
