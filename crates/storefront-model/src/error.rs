#![forbid(unsafe_code)]

//! Catalog validation errors.

use std::fmt;

use crate::catalog::ProductId;

/// Why a product list was rejected as a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no products.
    Empty,
    /// Two products share an id.
    DuplicateId(ProductId),
    /// A product lists no colors.
    NoColors(ProductId),
    /// A product lists no sizes.
    NoSizes(ProductId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "catalog has no products"),
            Self::DuplicateId(id) => write!(f, "duplicate product id {id}"),
            Self::NoColors(id) => write!(f, "product {id} has no colors"),
            Self::NoSizes(id) => write!(f, "product {id} has no sizes"),
        }
    }
}

impl std::error::Error for CatalogError {}
