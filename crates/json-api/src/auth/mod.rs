//! Admin authentication: login handler and bearer middleware.

pub(crate) mod errors;
pub(crate) mod handlers;
pub(crate) mod middleware;
