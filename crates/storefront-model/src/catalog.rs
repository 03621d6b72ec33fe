#![forbid(unsafe_code)]

//! Products and the validated catalog that holds them.
//!
//! # Invariants
//!
//! 1. A [`Catalog`] is never empty.
//! 2. Product ids are unique within a catalog.
//! 3. Every product lists at least one color and one size.

use std::collections::HashSet;
use std::fmt;

use crate::error::CatalogError;
use crate::money::Money;

/// Unique product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog entry. Read-only once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image reference.
    pub image: String,
    /// Marketing copy.
    pub description: String,
    /// Available colors, in display order.
    pub colors: Vec<String>,
    /// Available sizes, in display order.
    pub sizes: Vec<String>,
}

impl Product {
    /// Create a product with no image, description, colors or sizes.
    pub fn new(id: u32, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
            image: String::new(),
            description: String::new(),
            colors: Vec::new(),
            sizes: Vec::new(),
        }
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the color options.
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the size options.
    #[must_use]
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// The color selected when this product comes into view.
    pub fn default_color(&self) -> &str {
        self.colors.first().map_or("", String::as_str)
    }

    /// The size selected when this product comes into view.
    ///
    /// Position 2 of the size list, or the last size for shorter lists.
    pub fn default_size(&self) -> &str {
        self.sizes
            .get(2)
            .or_else(|| self.sizes.last())
            .map_or("", String::as_str)
    }
}

/// A validated, ordered, non-empty list of products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validate `products` and build a catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the list is empty, an id repeats, or a
    /// product has no colors or no sizes.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.colors.is_empty() {
                return Err(CatalogError::NoColors(product.id));
            }
            if product.sizes.is_empty() {
                return Err(CatalogError::NoSizes(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Product at `index`.
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Product with the given id.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products, always at least one.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always `false`; catalogs are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Products as a slice.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
