//! End-to-end tests: drive `StorefrontApp` through the simulator with
//! synthetic key and mouse input and check model state and rendered frames.

use storefront_app::catalog_data::default_catalog;
use storefront_app::{Msg, StorefrontApp};
use storefront_core::event::{Event, KeyCode, KeyEvent, PointerPhase};
use storefront_core::geometry::Point;
use storefront_model::ProductId;
use storefront_runtime::{CmdRecord, ProgramSimulator};
use storefront_widgets::HitTarget;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 30;

fn simulator_with(app: StorefrontApp) -> ProgramSimulator<StorefrontApp> {
    let mut sim = ProgramSimulator::new(app);
    sim.init();
    sim.inject_event(Event::Resize {
        width: WIDTH,
        height: HEIGHT,
    });
    sim.capture_frame(WIDTH, HEIGHT);
    sim
}

fn simulator() -> ProgramSimulator<StorefrontApp> {
    simulator_with(StorefrontApp::new(default_catalog().expect("catalog")))
}

fn find(sim: &ProgramSimulator<StorefrontApp>, target: HitTarget) -> Option<(u16, u16)> {
    let frame = sim.last_frame()?;
    (0..frame.height())
        .flat_map(|y| (0..frame.width()).map(move |x| (x, y)))
        .find(|&(x, y)| HitTarget::at(frame, x, y) == Some(target))
}

fn pointer(sim: &mut ProgramSimulator<StorefrontApp>, phase: PointerPhase, x: u16, y: u16) {
    sim.inject_event(Event::left(phase, x, y));
}

fn click(sim: &mut ProgramSimulator<StorefrontApp>, target: HitTarget) {
    let (x, y) = find(sim, target).unwrap_or_else(|| panic!("{target:?} not on screen"));
    pointer(sim, PointerPhase::Down, x, y);
    pointer(sim, PointerPhase::Up, x, y);
    sim.capture_frame(WIDTH, HEIGHT);
}

fn press(sim: &mut ProgramSimulator<StorefrontApp>, code: KeyCode) {
    sim.inject_event(Event::Key(KeyEvent::new(code)));
    sim.capture_frame(WIDTH, HEIGHT);
}

fn screen(sim: &ProgramSimulator<StorefrontApp>) -> String {
    sim.last_frame().map(|f| f.buffer.to_text()).unwrap_or_default()
}

/// A row where column `x` lies on the bare product image.
fn image_row(sim: &ProgramSimulator<StorefrontApp>, x: u16) -> u16 {
    let frame = sim.last_frame().expect("frame");
    (0..frame.height())
        .find(|&y| HitTarget::at(frame, x, y) == Some(HitTarget::Image))
        .expect("image row")
}

fn swipe(sim: &mut ProgramSimulator<StorefrontApp>, from: u16, to: u16) {
    let y = image_row(sim, from);
    pointer(sim, PointerPhase::Down, from, y);
    pointer(sim, PointerPhase::Drag, (from + to) / 2, y);
    pointer(sim, PointerPhase::Drag, to, y);
    pointer(sim, PointerPhase::Up, to, y);
    sim.capture_frame(WIDTH, HEIGHT);
}

#[test]
fn first_frame_shows_the_first_product() {
    let sim = simulator();
    let text = screen(&sim);
    assert!(text.contains("Camiseta Premium Algodón"));
    assert!(text.contains("L 2250.00"));
    assert!(text.contains("Añadir al Carrito"));
    assert!(!text.contains('≡'), "empty cart must not render");
    assert_eq!(sim.model().viewport().width, WIDTH);
}

#[test]
fn arrow_buttons_wrap_around() {
    let mut sim = simulator();
    click(&mut sim, HitTarget::Previous);
    assert_eq!(sim.model().browser().index(), 4);
    assert!(screen(&sim).contains("Chaqueta Denim Vintage"));
    click(&mut sim, HitTarget::Next);
    click(&mut sim, HitTarget::Next);
    assert_eq!(sim.model().browser().index(), 1);
    assert!(screen(&sim).contains("Blazer"));
}

#[test]
fn option_buttons_select_and_navigation_resets() {
    let mut sim = simulator();
    click(&mut sim, HitTarget::Color(1));
    click(&mut sim, HitTarget::Size(0));
    assert_eq!(sim.model().browser().selected_color(), "Blanco");
    assert_eq!(sim.model().browser().selected_size(), "XS");

    press(&mut sim, KeyCode::Right);
    assert_eq!(sim.model().browser().selected_color(), "Negro");
    assert_eq!(sim.model().browser().selected_size(), "M");
}

#[test]
fn heart_toggles_favorite() {
    let mut sim = simulator();
    click(&mut sim, HitTarget::Favorite);
    assert!(sim.model().browser().is_favorite(ProductId(1)));
    assert!(screen(&sim).contains('♥'));
    click(&mut sim, HitTarget::Favorite);
    assert!(sim.model().browser().favorites().is_empty());
}

#[test]
fn swipe_left_past_threshold_shows_next_product() {
    let mut sim = simulator();
    swipe(&mut sim, 60, 40);
    assert_eq!(sim.model().browser().index(), 1);
    swipe(&mut sim, 40, 60);
    assert_eq!(sim.model().browser().index(), 0);
    assert!(!sim.model().is_swiping());
}

#[test]
fn swipe_threshold_is_exclusive() {
    let app = StorefrontApp::new(default_catalog().expect("catalog")).with_swipe_threshold(50);
    let mut sim = simulator_with(app);
    swipe(&mut sim, 70, 21);
    assert_eq!(sim.model().browser().index(), 0, "49 cells is not a swipe");
    swipe(&mut sim, 70, 19);
    assert_eq!(sim.model().browser().index(), 1, "51 cells is a swipe");
}

#[test]
fn click_on_image_is_not_a_swipe() {
    let mut sim = simulator();
    let y = image_row(&sim, 50);
    pointer(&mut sim, PointerPhase::Down, 50, y);
    pointer(&mut sim, PointerPhase::Up, 50, y);
    assert_eq!(sim.model().browser().index(), 0);
}

#[test]
fn adding_shows_the_cart_handle() {
    let mut sim = simulator();
    click(&mut sim, HitTarget::AddToCart);
    click(&mut sim, HitTarget::AddToCart);
    let cart = sim.model().cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total_items(), 2);
    assert!(screen(&sim).contains("≡ 2 ud."));
    assert!(find(&sim, HitTarget::CartHandle).is_some());
}

#[test]
fn cart_drag_is_clamped_to_the_viewport() {
    let mut sim = simulator();
    click(&mut sim, HitTarget::AddToCart);
    let (x, y) = find(&sim, HitTarget::CartHandle).expect("handle");
    assert_eq!((x, y), (2, 4));

    pointer(&mut sim, PointerPhase::Down, x + 1, y + 1);
    assert!(sim.model().cart_widget().is_dragging());
    pointer(&mut sim, PointerPhase::Drag, 30, 12);
    assert_eq!(sim.model().cart_widget().position(), Point::new(29, 11));
    pointer(&mut sim, PointerPhase::Drag, WIDTH - 1, HEIGHT - 1);
    pointer(&mut sim, PointerPhase::Up, WIDTH - 1, HEIGHT - 1);

    let state = sim.model().cart_widget();
    assert_eq!(state.position(), Point::new(WIDTH - 10, HEIGHT - 3));
    assert!(!state.is_dragging());
    assert!(!state.is_expanded(), "a drag is not a click");

    pointer(&mut sim, PointerPhase::Down, 0, 0);
    pointer(&mut sim, PointerPhase::Drag, 0, 0);
    assert_eq!(sim.model().cart_widget().position(), Point::new(WIDTH - 10, HEIGHT - 3));
}

#[test]
fn drag_never_moves_the_product() {
    let mut sim = simulator();
    click(&mut sim, HitTarget::AddToCart);
    pointer(&mut sim, PointerPhase::Down, 3, 5);
    pointer(&mut sim, PointerPhase::Drag, 60, 5);
    pointer(&mut sim, PointerPhase::Up, 60, 5);
    assert_eq!(sim.model().browser().index(), 0);
    assert!(!sim.model().is_swiping());
}

#[test]
fn press_after_lost_release_does_not_open_the_cart() {
    let mut sim = simulator();
    click(&mut sim, HitTarget::AddToCart);
    pointer(&mut sim, PointerPhase::Down, 3, 5);
    assert!(sim.model().cart_widget().is_dragging());

    // The release happened outside the terminal; the next press is elsewhere.
    let y = image_row(&sim, 40);
    pointer(&mut sim, PointerPhase::Down, 40, y);

    let state = sim.model().cart_widget();
    assert!(!state.is_dragging());
    assert!(!state.is_expanded());
    assert_eq!(state.position(), Point::new(2, 4));
    assert!(sim.model().is_swiping());
}

#[test]
fn expanded_cart_controls() {
    let mut sim = simulator();
    click(&mut sim, HitTarget::AddToCart);
    click(&mut sim, HitTarget::CartHandle);
    assert!(sim.model().cart_widget().is_expanded());
    let text = screen(&sim);
    assert!(text.contains("Carrito (1)"));
    assert!(text.contains("Talla: M · Negro"));
    assert!(text.contains("Proceder al Pago"));

    // Expanded carts cannot be dragged.
    let (x, y) = find(&sim, HitTarget::CartCard).expect("card");
    pointer(&mut sim, PointerPhase::Down, x, y);
    pointer(&mut sim, PointerPhase::Drag, x + 5, y + 5);
    pointer(&mut sim, PointerPhase::Up, x + 5, y + 5);
    assert_eq!(sim.model().cart_widget().position(), Point::new(2, 4));

    click(&mut sim, HitTarget::LineIncrement(0));
    assert_eq!(sim.model().cart().total_items(), 2);
    assert!(screen(&sim).contains("L 4500.00"));

    click(&mut sim, HitTarget::LineDecrement(0));
    assert_eq!(sim.model().cart().total_items(), 1);

    click(&mut sim, HitTarget::Checkout);
    assert_eq!(sim.model().cart().total_items(), 1);
    assert!(sim.logs().iter().any(|log| log.contains("payment is not available")));

    click(&mut sim, HitTarget::LineRemove(0));
    assert!(sim.model().cart().is_empty());
    assert!(!screen(&sim).contains("Carrito ("));
}

#[test]
fn close_button_and_escape_collapse_the_cart() {
    let mut sim = simulator();
    click(&mut sim, HitTarget::AddToCart);
    press(&mut sim, KeyCode::Char('o'));
    assert!(sim.model().cart_widget().is_expanded());
    click(&mut sim, HitTarget::CartClose);
    assert!(!sim.model().cart_widget().is_expanded());

    press(&mut sim, KeyCode::Char('o'));
    press(&mut sim, KeyCode::Escape);
    assert!(!sim.model().cart_widget().is_expanded());
    assert!(screen(&sim).contains("≡ 1 ud."));
}

#[test]
fn distinct_selections_make_distinct_lines() {
    let mut sim = simulator();
    press(&mut sim, KeyCode::Char('a'));
    press(&mut sim, KeyCode::Char('s'));
    press(&mut sim, KeyCode::Char('a'));
    press(&mut sim, KeyCode::Char('c'));
    press(&mut sim, KeyCode::Char('a'));
    let cart = sim.model().cart();
    assert_eq!(cart.len(), 3);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price().to_string(), "L 6750.00");
}

#[test]
fn update_quantity_and_remove_item_match_by_product() {
    let mut sim = simulator();
    sim.send(Msg::AddToCart);
    sim.send(Msg::SelectSize("L".into()));
    sim.send(Msg::AddToCart);
    sim.send(Msg::Next);
    sim.send(Msg::AddToCart);
    assert_eq!(sim.model().cart().len(), 3);

    sim.send(Msg::UpdateQuantity {
        product_id: ProductId(1),
        quantity: 4,
    });
    assert_eq!(sim.model().cart().total_items(), 9);

    sim.send(Msg::RemoveItem(ProductId(1)));
    let cart = sim.model().cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total_price().to_string(), "L 6250.00");
}

#[test]
fn example_scenario() {
    let mut sim = simulator();
    sim.send(Msg::Next);
    sim.send(Msg::Previous);
    assert_eq!(sim.model().browser().index(), 0);

    sim.send(Msg::AddToCart);
    assert_eq!(sim.model().cart().total_price().to_string(), "L 2250.00");
    sim.send(Msg::AddToCart);
    assert_eq!(sim.model().cart().len(), 1);
    assert_eq!(sim.model().cart().total_price().to_string(), "L 4500.00");

    sim.send(Msg::UpdateQuantity {
        product_id: ProductId(1),
        quantity: 0,
    });
    assert!(sim.model().cart().is_empty());
    sim.capture_frame(WIDTH, HEIGHT);
    assert!(find(&sim, HitTarget::CartHandle).is_none());
}

#[test]
fn start_index_wraps() {
    let app = StorefrontApp::new(default_catalog().expect("catalog")).starting_at(7);
    let sim = simulator_with(app);
    assert_eq!(sim.model().browser().index(), 2);
    assert!(screen(&sim).contains("Vestido Elegante"));
}

#[test]
fn quit_key_stops_the_program() {
    let mut sim = simulator();
    press(&mut sim, KeyCode::Char('q'));
    assert!(!sim.is_running());
    assert_eq!(sim.command_log().last(), Some(&CmdRecord::Quit));

    sim.inject_event(Event::Key(KeyEvent::new(KeyCode::Right)));
    assert_eq!(sim.model().browser().index(), 0);
}
