/// Cart data structures for the storefront
use serde::{Deserialize, Serialize};

/// A single line in the shopping cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub name: String,
    pub price: f64,
}

impl CartItem {
    pub fn new(name: impl Into<String>, price: f64) -> CartItem {
        CartItem {
            name: name.into(),
            price,
        }
    }
}

/// Ordered sequence of cart items. Insertion order is significant and
/// duplicates are allowed; there is no identity key, so removal is by
/// position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    pub fn push(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Remove the item at `index`. Out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.items.remove(index);
            true
        } else {
            false
        }
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
