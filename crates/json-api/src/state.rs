//! Shared handler state.

use std::sync::Arc;

use paperbloom_app::context::AppContext;

/// Injected into the depot at router setup; handlers reach the domain
/// services through it.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    /// Wraps the app context for depot injection.
    #[must_use]
    pub(crate) fn shared(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
