use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use business::domain::cart::model::Cart;
use business::domain::cart::observer::CartObserver;

/// Cart icon counter on the catalog screen. Shows distinct products, not units.
pub struct CartBadge {
    count: AtomicUsize,
}

impl CartBadge {
    pub fn new(cart: &Cart) -> Self {
        Self {
            count: AtomicUsize::new(cart.badge_count()),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    pub fn render(&self) -> String {
        format!("[Cart: {}]", self.count())
    }
}

impl CartObserver for CartBadge {
    fn on_cart_changed(&self, cart: &Arc<Cart>) {
        self.count.store(cart.badge_count(), Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::Product;
    use business::domain::product::value_objects::{ProductId, UnitPrice};

    fn product(id: &str) -> Product {
        Product::from_repository(
            ProductId::new(id).unwrap(),
            id.to_string(),
            UnitPrice::from(1),
            String::new(),
            vec![],
            String::new(),
        )
    }

    #[test]
    fn should_count_distinct_products_not_units() {
        let a = product("A");
        let badge = CartBadge::new(&Cart::new());

        badge.on_cart_changed(&Arc::new(
            Cart::new().with_added(&a).with_added(&a).with_added(&product("B")),
        ));

        assert_eq!(badge.count(), 2);
        assert_eq!(badge.render(), "[Cart: 2]");
    }
}
