use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::{mpsc, oneshot};

use crate::domain::cart::model::Cart;
use crate::domain::cart::observer::{CartObserver, PersistenceFailureReporter, SubscriptionId};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::service::CartService;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

use super::policy::PersistencePolicy;
use super::writer::{CartWriter, WriteCommand};

pub struct CartStoreDependencies {
    pub repository: Arc<dyn CartRepository>,
    pub reporter: Arc<dyn PersistenceFailureReporter>,
    pub logger: Arc<dyn Logger>,
    pub policy: PersistencePolicy,
}

/// Single source of truth for the shopper's cart.
///
/// Mutations are computed and published under one lock, so readers only ever
/// see complete snapshots and persistence receives them in mutation order.
/// Writes happen on a background task; a failed write never changes the
/// in-memory cart.
pub struct CartStore {
    state: Mutex<Arc<Cart>>,
    observers: Mutex<Vec<(SubscriptionId, Arc<dyn CartObserver>)>>,
    next_subscription: AtomicU64,
    writes: mpsc::UnboundedSender<WriteCommand>,
    logger: Arc<dyn Logger>,
}

impl CartStore {
    /// Restores the persisted cart and starts the background writer.
    /// An unreadable store starts the session with an empty cart.
    pub async fn open(deps: CartStoreDependencies) -> Self {
        let cart = match deps.repository.load().await {
            Ok(cart) => {
                deps.logger
                    .info(&format!("Cart restored with {} entries", cart.badge_count()));
                cart
            }
            Err(error) => {
                deps.logger.warn(&format!(
                    "Cart could not be restored ({}), starting empty",
                    error
                ));
                Cart::new()
            }
        };
        Self::with_cart(cart, deps)
    }

    /// Starts from `cart` without reading storage. Must be called from within
    /// a tokio runtime.
    pub fn with_cart(cart: Cart, deps: CartStoreDependencies) -> Self {
        let writes = CartWriter {
            repository: deps.repository,
            reporter: deps.reporter,
            logger: deps.logger.clone(),
            policy: deps.policy,
        }
        .spawn();

        Self {
            state: Mutex::new(Arc::new(cart)),
            observers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
            writes,
            logger: deps.logger,
        }
    }

    /// Waits until every write queued before this call has been attempted.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.writes.send(WriteCommand::Flush(done)).is_err() {
            return;
        }
        let _ = wait.await;
    }

    fn apply<F>(&self, operation: &str, change: F) -> Arc<Cart>
    where
        F: FnOnce(&Cart) -> Option<Cart>,
    {
        let snapshot = {
            let mut current = lock(&self.state);
            let Some(next) = change(&**current) else {
                self.logger
                    .debug(&format!("Cart {} left the cart unchanged", operation));
                return Arc::clone(&current);
            };
            let next = Arc::new(next);
            *current = Arc::clone(&next);
            if self.writes.send(WriteCommand::Save(Arc::clone(&next))).is_err() {
                self.logger
                    .warn("Cart writer is not running, snapshot kept in memory only");
            }
            next
        };

        self.logger.info(&format!(
            "Cart {}: {} entries, {} units",
            operation,
            snapshot.badge_count(),
            snapshot.unit_count()
        ));
        self.notify(&snapshot);
        snapshot
    }

    fn notify(&self, snapshot: &Arc<Cart>) {
        let observers: Vec<Arc<dyn CartObserver>> = lock(&self.observers)
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer.on_cart_changed(snapshot);
        }
    }
}

impl CartService for CartStore {
    fn add(&self, product: &Product) -> Arc<Cart> {
        self.apply(&format!("add {}", product.id), |cart| {
            cart.checked_added(product)
        })
    }

    fn increase_quantity(&self, product_id: &ProductId) -> Arc<Cart> {
        self.apply(&format!("increase {}", product_id), |cart| {
            cart.with_increased(product_id)
        })
    }

    fn decrease_quantity(&self, product_id: &ProductId) -> Arc<Cart> {
        self.apply(&format!("decrease {}", product_id), |cart| {
            cart.with_decreased(product_id)
        })
    }

    fn remove(&self, product_id: &ProductId) -> Arc<Cart> {
        self.apply(&format!("remove {}", product_id), |cart| {
            cart.without(product_id)
        })
    }

    fn clear(&self) -> Arc<Cart> {
        self.apply("clear", Cart::cleared)
    }

    fn snapshot(&self) -> Arc<Cart> {
        Arc::clone(&lock(&self.state))
    }

    fn subscribe(&self, observer: Arc<dyn CartObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        lock(&self.observers).push((id, observer));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = lock(&self.observers);
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() < before
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
