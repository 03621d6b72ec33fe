//! Property-based invariant tests for the product browser.
//!
//! 1. `next` then `previous` (and the reverse) returns to the same index.
//! 2. `n` calls to `next` on an `n`-product catalog return to the start.
//! 3. After any index change, color = colors[0] and size = sizes[2].
//! 4. The index always stays in range.
//! 5. Toggling a favorite twice restores the original set.

use proptest::prelude::*;
use storefront_model::{Catalog, Money, Product, ProductBrowser, ProductId};

fn catalog(count: usize) -> Catalog {
    let products = (1..=count as u32)
        .map(|id| {
            Product::new(id, format!("P{id}"), Money::from_major(100))
                .with_colors([format!("c{id}-0"), format!("c{id}-1")])
                .with_sizes(["XS", "S", "M", "L", "XL"])
        })
        .collect();
    Catalog::new(products).expect("valid catalog")
}

#[derive(Debug, Clone, Copy)]
enum Nav {
    Next,
    Previous,
}

fn nav_strategy() -> impl Strategy<Value = Nav> {
    prop_oneof![Just(Nav::Next), Just(Nav::Previous)]
}

proptest! {
    #[test]
    fn next_previous_round_trip(count in 1usize..12, start in 0usize..24) {
        let mut browser = ProductBrowser::new(catalog(count)).starting_at(start);
        let original = browser.index();
        browser.next();
        browser.previous();
        prop_assert_eq!(browser.index(), original);
        browser.previous();
        browser.next();
        prop_assert_eq!(browser.index(), original);
    }

    #[test]
    fn full_cycle_returns_to_start(count in 1usize..12, start in 0usize..12) {
        let mut browser = ProductBrowser::new(catalog(count)).starting_at(start);
        let original = browser.index();
        for _ in 0..count {
            browser.next();
        }
        prop_assert_eq!(browser.index(), original);
    }

    #[test]
    fn selection_resets_on_every_move(
        count in 1usize..8,
        moves in prop::collection::vec(nav_strategy(), 1..40),
    ) {
        let mut browser = ProductBrowser::new(catalog(count));
        for nav in moves {
            browser.select_color("otro");
            browser.select_size("XXL");
            match nav {
                Nav::Next => browser.next(),
                Nav::Previous => browser.previous(),
            }
            prop_assert!(browser.index() < count);
            let product = browser.current_product();
            prop_assert_eq!(browser.selected_color(), product.colors[0].as_str());
            prop_assert_eq!(browser.selected_size(), product.sizes[2].as_str());
        }
    }

    #[test]
    fn favorite_toggle_is_an_involution(
        count in 1usize..8,
        initial in prop::collection::vec(1u32..8, 0..6),
        id in 1u32..8,
    ) {
        let mut browser = ProductBrowser::new(catalog(count));
        for fav in initial {
            if !browser.is_favorite(ProductId(fav)) {
                browser.toggle_favorite(ProductId(fav));
            }
        }
        let before = browser.favorites().clone();
        browser.toggle_favorite(ProductId(id));
        prop_assert_ne!(browser.favorites(), &before);
        browser.toggle_favorite(ProductId(id));
        prop_assert_eq!(browser.favorites(), &before);
    }
}

#[test]
fn two_product_example() {
    let mut browser = ProductBrowser::new(catalog(2));
    assert_eq!(browser.index(), 0);
    browser.next();
    assert_eq!(browser.index(), 1);
    browser.next();
    assert_eq!(browser.index(), 0);
}
