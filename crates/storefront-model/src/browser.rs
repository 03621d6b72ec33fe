#![forbid(unsafe_code)]

//! Product browsing state.
//!
//! [`ProductBrowser`] owns the catalog, the index of the product in view, the
//! color and size picked for it, and the set of favorited products.
//!
//! # Invariants
//!
//! 1. `0 <= index < catalog.len()`; navigation wraps in both directions.
//! 2. Every index change resets the selection to the new product's first
//!    color and its size at position 2 (the last size for shorter lists).
//! 3. Color and size setters store whatever they are given.

use std::collections::BTreeSet;

use storefront_core::gesture::SwipeDirection;

use crate::cart::LineKey;
use crate::catalog::{Catalog, Product, ProductId};

/// Navigation, selection and favorites over a [`Catalog`].
#[derive(Debug, Clone)]
pub struct ProductBrowser {
    catalog: Catalog,
    index: usize,
    selected_color: String,
    selected_size: String,
    favorites: BTreeSet<ProductId>,
}

impl ProductBrowser {
    /// Start on the first product.
    pub fn new(catalog: Catalog) -> Self {
        let mut browser = Self {
            catalog,
            index: 0,
            selected_color: String::new(),
            selected_size: String::new(),
            favorites: BTreeSet::new(),
        };
        browser.reset_selection();
        browser
    }

    /// Start on product `index`, wrapped into range.
    #[must_use]
    pub fn starting_at(mut self, index: usize) -> Self {
        self.go_to(index);
        self
    }

    /// The catalog being browsed.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Index of the product in view.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of products.
    pub fn product_count(&self) -> usize {
        self.catalog.len()
    }

    /// The product in view.
    pub fn current_product(&self) -> &Product {
        // `index` is always in range of a non-empty catalog.
        &self.catalog.products()[self.index]
    }

    /// Advance one product, wrapping to the first after the last.
    pub fn next(&mut self) {
        self.set_index((self.index + 1) % self.catalog.len());
    }

    /// Go back one product, wrapping to the last before the first.
    pub fn previous(&mut self) {
        let count = self.catalog.len();
        self.set_index((self.index + count - 1) % count);
    }

    /// Jump to product `index`, wrapped into range.
    pub fn go_to(&mut self, index: usize) {
        self.set_index(index % self.catalog.len());
    }

    /// Apply a recognized swipe: leftward shows the next product.
    pub fn swipe(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Left => self.next(),
            SwipeDirection::Right => self.previous(),
        }
    }

    fn set_index(&mut self, index: usize) {
        self.index = index;
        self.reset_selection();
        storefront_core::debug!(
            index,
            product_id = self.current_product().id.0,
            "product in view changed"
        );
    }

    fn reset_selection(&mut self) {
        let product = self.current_product();
        let color = product.default_color().to_owned();
        let size = product.default_size().to_owned();
        self.selected_color = color;
        self.selected_size = size;
    }

    /// Selected color.
    pub fn selected_color(&self) -> &str {
        &self.selected_color
    }

    /// Selected size.
    pub fn selected_size(&self) -> &str {
        &self.selected_size
    }

    /// Select a color. Not validated against the product's options.
    pub fn select_color(&mut self, color: impl Into<String>) {
        self.selected_color = color.into();
    }

    /// Select a size. Not validated against the product's options.
    pub fn select_size(&mut self, size: impl Into<String>) {
        self.selected_size = size.into();
    }

    /// Select the color after the current one, wrapping.
    pub fn cycle_color(&mut self) {
        if let Some(next) = next_option(&self.current_product().colors, &self.selected_color) {
            self.selected_color = next;
        }
    }

    /// Select the size after the current one, wrapping.
    pub fn cycle_size(&mut self) {
        if let Some(next) = next_option(&self.current_product().sizes, &self.selected_size) {
            self.selected_size = next;
        }
    }

    /// Cart key for the product in view with the current selection.
    pub fn selection_key(&self) -> LineKey {
        LineKey::new(
            self.current_product().id,
            self.selected_size.clone(),
            self.selected_color.clone(),
        )
    }

    /// Flip favorite membership of `id`. Returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, id: ProductId) -> bool {
        let now_favorite = if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        };
        storefront_core::debug!(product_id = id.0, now_favorite, "favorite toggled");
        now_favorite
    }

    /// Flip favorite membership of the product in view.
    pub fn toggle_current_favorite(&mut self) -> bool {
        self.toggle_favorite(self.current_product().id)
    }

    /// Whether `id` is a favorite.
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(&id)
    }

    /// Favorited product ids.
    pub fn favorites(&self) -> &BTreeSet<ProductId> {
        &self.favorites
    }
}

/// The option after `current`, wrapping. An unknown `current` yields the first.
fn next_option(options: &[String], current: &str) -> Option<String> {
    let next = match options.iter().position(|o| o == current) {
        Some(i) => (i + 1) % options.len(),
        None => 0,
    };
    options.get(next).cloned()
}
