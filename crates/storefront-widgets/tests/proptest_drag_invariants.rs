//! Property-based invariant tests for cart dragging.
//!
//! 1. Any pointer sequence keeps the collapsed cart inside
//!    `[0, vw - ww] x [0, vh - wh]` (or at 0 when the viewport is smaller).
//! 2. Pointer-up always returns the phase to idle.
//! 3. An expanded cart never moves.
//! 4. Rendering never registers hits outside the frame.

use proptest::prelude::*;
use storefront_core::geometry::Size;
use storefront_model::{Cart, Catalog, Money, Product};
use storefront_render::frame::Frame;
use storefront_widgets::cart_widget::COLLAPSED_SIZE;
use storefront_widgets::{CartWidget, CartWidgetState, DragPhase, HitTarget, Widget};

#[derive(Debug, Clone, Copy)]
enum Pointer {
    Down(u16, u16),
    Move(u16, u16),
    Up,
    Toggle,
}

fn pointer_strategy() -> impl Strategy<Value = Pointer> {
    prop_oneof![
        3 => (0u16..300, 0u16..120).prop_map(|(x, y)| Pointer::Down(x, y)),
        6 => (0u16..300, 0u16..120).prop_map(|(x, y)| Pointer::Move(x, y)),
        3 => Just(Pointer::Up),
        1 => Just(Pointer::Toggle),
    ]
}

fn max_position(viewport: Size) -> (u16, u16) {
    (
        viewport.width.saturating_sub(COLLAPSED_SIZE.width),
        viewport.height.saturating_sub(COLLAPSED_SIZE.height),
    )
}

fn cart_with(lines: usize) -> Cart {
    let product = Product::new(1, "Falda", Money::from_major(3250))
        .with_colors(["Negro"])
        .with_sizes(["XS", "S", "M", "L", "XL"]);
    let catalog = Catalog::new(vec![product]).expect("catalog");
    let mut cart = Cart::new();
    let sizes = ["XS", "S", "M", "L", "XL"];
    for size in sizes.iter().cycle().take(lines.min(sizes.len())) {
        cart.add(&catalog.products()[0], size, "Negro");
    }
    cart
}

proptest! {
    #[test]
    fn position_stays_in_viewport(
        width in 1u16..200,
        height in 1u16..80,
        events in prop::collection::vec(pointer_strategy(), 0..60),
    ) {
        let viewport = Size::new(width, height);
        let (max_x, max_y) = max_position(viewport);
        let mut state = CartWidgetState::new(viewport);
        for event in events {
            match event {
                Pointer::Down(x, y) => {
                    state.pointer_down(x, y);
                }
                Pointer::Move(x, y) => {
                    state.pointer_move(x, y);
                }
                Pointer::Up => {
                    state.pointer_up();
                    prop_assert_eq!(state.phase(), DragPhase::Idle);
                }
                Pointer::Toggle => state.toggle(),
            }
            let position = state.position();
            prop_assert!(position.x <= max_x, "x {} > {}", position.x, max_x);
            prop_assert!(position.y <= max_y, "y {} > {}", position.y, max_y);
        }
    }

    #[test]
    fn expanded_cart_never_moves(
        events in prop::collection::vec(pointer_strategy(), 0..40),
    ) {
        let mut state = CartWidgetState::new(Size::new(120, 40));
        state.open();
        let start = state.position();
        for event in events {
            match event {
                Pointer::Down(x, y) => prop_assert!(!state.pointer_down(x, y)),
                Pointer::Move(x, y) => prop_assert!(!state.pointer_move(x, y)),
                Pointer::Up | Pointer::Toggle => {
                    state.pointer_up();
                }
            }
            prop_assert_eq!(state.position(), start);
        }
    }

    #[test]
    fn render_stays_in_frame(
        width in 1u16..100,
        height in 1u16..40,
        lines in 0usize..6,
        expanded in any::<bool>(),
    ) {
        let cart = cart_with(lines);
        let mut state = CartWidgetState::new(Size::new(width, height));
        if expanded {
            state.open();
        }
        let mut frame = Frame::new(width, height);
        CartWidget::new(&cart, &state).render(frame.bounds(), &mut frame);
        if cart.is_empty() {
            for y in 0..height {
                for x in 0..width {
                    prop_assert_eq!(HitTarget::at(&frame, x, y), None);
                }
            }
        }
        prop_assert_eq!(HitTarget::at(&frame, width, height), None);
    }
}
