#![forbid(unsafe_code)]

//! Terminal storefront: a product browser with swipe navigation, favorites
//! and a draggable shopping cart.
//!
//! The binary wires [`app::StorefrontApp`] into a
//! [`storefront_runtime::Program`]; tests drive the same model through
//! [`storefront_runtime::ProgramSimulator`].

pub mod app;
pub mod catalog_data;
pub mod cli;

pub use app::{Msg, StorefrontApp};
