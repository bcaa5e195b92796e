//! Live subscription handles.

use tokio::task::JoinHandle;

/// Handle to a standing recipe subscription.
///
/// Returned by
/// [`RecipesService::listen_to_user_recipes`](crate::RecipesService::listen_to_user_recipes).
/// The subscription delivers callbacks until [`unsubscribe`] is
/// invoked; **dropping the handle does not cancel it**. The stream
/// outlives a handle stored in a forgotten temporary, exactly like the
/// original callback-registration API this layer mirrors.
///
/// [`unsubscribe`]: Self::unsubscribe
#[derive(Debug)]
pub struct RecipeSubscription {
    forwarder: JoinHandle<()>,
}

impl RecipeSubscription {
    pub(crate) fn new(forwarder: JoinHandle<()>) -> Self {
        Self { forwarder }
    }

    /// Tears the subscription down.
    ///
    /// After this returns, no further callback invocations occur and
    /// the underlying store watch is unregistered.
    pub fn unsubscribe(self) {
        self.forwarder.abort();
    }

    /// Returns `true` while the subscription is still delivering.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.forwarder.is_finished()
    }
}
