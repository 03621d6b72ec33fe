#![forbid(unsafe_code)]

//! Storefront domain state.
//!
//! Pure, terminal-free state machines for the storefront: a validated
//! [`Catalog`], the [`ProductBrowser`] that navigates it, and the [`Cart`]
//! that accumulates line items. Every operation is total; the only failure
//! surface is building a catalog.
//!
//! # Example
//!
//! ```
//! use storefront_model::{Cart, Catalog, Money, Product, ProductBrowser, ProductId};
//!
//! let catalog = Catalog::new(vec![
//!     Product::new(1, "Blazer", Money::from_major(6250))
//!         .with_colors(["Negro", "Beige"])
//!         .with_sizes(["XS", "S", "M", "L", "XL"]),
//!     Product::new(2, "Falda", Money::from_major(3250))
//!         .with_colors(["Gris"])
//!         .with_sizes(["S", "M"]),
//! ])?;
//!
//! let mut browser = ProductBrowser::new(catalog);
//! let mut cart = Cart::new();
//! cart.add(browser.current_product(), browser.selected_size(), browser.selected_color());
//! browser.next();
//! assert_eq!(browser.selected_size(), "M");
//! assert_eq!(cart.total_price().to_string(), "L 6250.00");
//!
//! cart.update_quantity(ProductId(1), 0);
//! assert!(cart.is_empty());
//! # Ok::<(), storefront_model::CatalogError>(())
//! ```

pub mod browser;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;

pub use browser::ProductBrowser;
pub use cart::{Cart, CartChange, LineItem, LineKey};
pub use catalog::{Catalog, Product, ProductId};
pub use error::CatalogError;
pub use money::Money;
