use std::collections::HashSet;

use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::errors::CartError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

/// One product-quantity pairing. `quantity` is never 0.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    /// Unit price times quantity.
    pub fn line_total(&self) -> BigDecimal {
        self.product.price.amount().clone() * BigDecimal::from(self.quantity)
    }
}

/// Immutable cart snapshot.
///
/// Entries are unique by product id and kept in first-added order. Every
/// `with_*` method leaves `self` untouched and returns the next snapshot;
/// the ones returning `Option` yield `None` when the operation does not
/// apply (unknown product id, quantity already at its limit), so callers can
/// tell a no-op from a change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from stored entries, enforcing the cart invariants.
    pub fn from_entries(entries: Vec<CartEntry>) -> Result<Self, CartError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.quantity == 0 {
                return Err(CartError::ZeroQuantity(entry.product.id.clone()));
            }
            if !seen.insert(&entry.product.id) {
                return Err(CartError::DuplicatedProduct(entry.product.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn entry(&self, product_id: &ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.product.id == product_id)
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.entry(product_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct products. This is what the cart badge shows.
    pub fn badge_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of units across all entries.
    pub fn unit_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Sum of every line total. Zero for an empty cart.
    pub fn total(&self) -> BigDecimal {
        self.entries
            .iter()
            .fold(BigDecimal::zero(), |acc, e| acc + e.line_total())
    }

    /// Adds one unit of `product`, merging into an existing entry. An entry
    /// already at `u32::MAX` is kept as it is.
    pub fn with_added(&self, product: &Product) -> Cart {
        self.checked_added(product).unwrap_or_else(|| self.clone())
    }

    /// Like `with_added`, but `None` when the entry cannot grow any further.
    pub fn checked_added(&self, product: &Product) -> Option<Cart> {
        match self.position(&product.id) {
            Some(_) => self.with_increased(&product.id),
            None => {
                let mut next = self.clone();
                next.entries.push(CartEntry {
                    product: product.clone(),
                    quantity: 1,
                });
                Some(next)
            }
        }
    }

    /// `None` when the product is absent or its quantity is at `u32::MAX`.
    pub fn with_increased(&self, product_id: &ProductId) -> Option<Cart> {
        let index = self.position(product_id)?;
        let quantity = self.entries[index].quantity.checked_add(1)?;
        let mut next = self.clone();
        next.entries[index].quantity = quantity;
        Some(next)
    }

    /// Removes one unit; an entry that would reach zero is dropped.
    pub fn with_decreased(&self, product_id: &ProductId) -> Option<Cart> {
        let index = self.position(product_id)?;
        let mut next = self.clone();
        if next.entries[index].quantity <= 1 {
            next.entries.remove(index);
        } else {
            next.entries[index].quantity -= 1;
        }
        Some(next)
    }

    pub fn without(&self, product_id: &ProductId) -> Option<Cart> {
        let index = self.position(product_id)?;
        let mut next = self.clone();
        next.entries.remove(index);
        Some(next)
    }

    pub fn cleared(&self) -> Option<Cart> {
        if self.is_empty() {
            return None;
        }
        Some(Cart::new())
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.entries.iter().position(|e| &e.product.id == product_id)
    }
}
