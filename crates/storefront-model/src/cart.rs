#![forbid(unsafe_code)]

//! Shopping cart line items.
//!
//! A [`Cart`] holds at most one [`LineItem`] per [`LineKey`] (product, size,
//! color), in the order lines were first added. Totals are derived on every
//! read and never cached.
//!
//! Two matching disciplines are offered:
//!
//! - by product id ([`Cart::update_quantity`], [`Cart::remove_item`]), which
//!   touches every line of that product regardless of size and color;
//! - by composite key ([`Cart::set_line_quantity`], [`Cart::remove_line`],
//!   [`Cart::increment_line`], [`Cart::decrement_line`]), which touches
//!   exactly one line.
//!
//! # Invariants
//!
//! 1. No two lines share a key.
//! 2. Every stored quantity is at least 1; setting zero removes the line.

use crate::catalog::{Product, ProductId};
use crate::money::Money;

/// Identity of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineKey {
    /// Product the line refers to.
    pub product_id: ProductId,
    /// Chosen size.
    pub size: String,
    /// Chosen color.
    pub color: String,
}

impl LineKey {
    /// Build a key.
    pub fn new(product_id: ProductId, size: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            product_id,
            size: size.into(),
            color: color.into(),
        }
    }
}

/// One cart entry.
///
/// Name, price and image are copied from the product when the line is
/// created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Line identity.
    pub key: LineKey,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub price: Money,
    /// Image reference at add time.
    pub image: String,
    /// Units, always positive.
    pub quantity: u32,
}

impl LineItem {
    /// `price × quantity`.
    pub fn subtotal(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// What a cart mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was created with quantity 1.
    Added,
    /// An existing line's quantity grew to `quantity`.
    Incremented {
        /// Quantity after the increment.
        quantity: u32,
    },
    /// `count` lines had their quantity overwritten.
    QuantitySet {
        /// Lines affected.
        count: usize,
    },
    /// `count` lines were removed.
    Removed {
        /// Lines removed.
        count: usize,
    },
    /// Nothing matched.
    Unchanged,
}

/// Ordered collection of line items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product` in `size` and `color`.
    ///
    /// Increments the matching line, or appends a new line with quantity 1.
    pub fn add(&mut self, product: &Product, size: &str, color: &str) -> CartChange {
        if let Some(item) = self.items.iter_mut().find(|item| {
            item.key.product_id == product.id && item.key.size == size && item.key.color == color
        }) {
            item.quantity = item.quantity.saturating_add(1);
            storefront_core::debug!(
                product_id = product.id.0,
                size,
                color,
                quantity = item.quantity,
                "cart line incremented"
            );
            return CartChange::Incremented {
                quantity: item.quantity,
            };
        }

        self.items.push(LineItem {
            key: LineKey::new(product.id, size, color),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        });
        storefront_core::debug!(product_id = product.id.0, size, color, "cart line added");
        CartChange::Added
    }

    /// Set the quantity of every line of product `id`; zero removes them.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) -> CartChange {
        self.set_where(|key| key.product_id == id, quantity)
    }

    /// Remove every line of product `id`.
    pub fn remove_item(&mut self, id: ProductId) -> CartChange {
        self.remove_where(|key| key.product_id == id)
    }

    /// Set the quantity of exactly the line `key`; zero removes it.
    pub fn set_line_quantity(&mut self, key: &LineKey, quantity: u32) -> CartChange {
        self.set_where(|k| k == key, quantity)
    }

    /// Remove exactly the line `key`.
    pub fn remove_line(&mut self, key: &LineKey) -> CartChange {
        self.remove_where(|k| k == key)
    }

    /// Add one unit to the line `key`.
    pub fn increment_line(&mut self, key: &LineKey) -> CartChange {
        match self.get(key).map(|item| item.quantity) {
            Some(quantity) => {
                let quantity = quantity.saturating_add(1);
                self.set_line_quantity(key, quantity);
                CartChange::Incremented { quantity }
            }
            None => CartChange::Unchanged,
        }
    }

    /// Take one unit from the line `key`, removing it at zero.
    pub fn decrement_line(&mut self, key: &LineKey) -> CartChange {
        match self.get(key).map(|item| item.quantity) {
            Some(quantity) => self.set_line_quantity(key, quantity.saturating_sub(1)),
            None => CartChange::Unchanged,
        }
    }

    fn set_where(&mut self, matches: impl Fn(&LineKey) -> bool, quantity: u32) -> CartChange {
        if quantity == 0 {
            return self.remove_where(matches);
        }
        let mut count = 0;
        for item in self.items.iter_mut().filter(|item| matches(&item.key)) {
            item.quantity = quantity;
            count += 1;
        }
        if count == 0 {
            return CartChange::Unchanged;
        }
        storefront_core::debug!(count, quantity, "cart quantity set");
        CartChange::QuantitySet { count }
    }

    fn remove_where(&mut self, matches: impl Fn(&LineKey) -> bool) -> CartChange {
        let before = self.items.len();
        self.items.retain(|item| !matches(&item.key));
        let count = before - self.items.len();
        if count == 0 {
            return CartChange::Unchanged;
        }
        storefront_core::debug!(count, remaining = self.items.len(), "cart lines removed");
        CartChange::Removed { count }
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The line with `key`.
    pub fn get(&self, key: &LineKey) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.key == key)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Sum of `price × quantity`.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}
