use std::sync::Arc;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Display surfaces subscribe with this to be told about every cart change.
pub trait CartObserver: Send + Sync {
    fn on_cart_changed(&self, cart: &Arc<Cart>);
}

impl<F> CartObserver for F
where
    F: Fn(&Arc<Cart>) + Send + Sync,
{
    fn on_cart_changed(&self, cart: &Arc<Cart>) {
        self(cart)
    }
}

/// Receives writes that were given up on after all retries.
/// The in-memory cart is never rolled back because of them.
pub trait PersistenceFailureReporter: Send + Sync {
    fn report(&self, error: &RepositoryError, cart: &Cart);
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
