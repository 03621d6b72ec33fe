#![forbid(unsafe_code)]

//! The storefront application model.
//!
//! [`StorefrontApp`] owns the product browser, the cart and the cart widget's
//! position state. Keys and mouse presses become [`Msg`] values; every state
//! change happens inside [`Model::update`].
//!
//! Pointer routing: a press is resolved against the hit grid of the last
//! rendered frame. A press on the cart handle starts a cart drag, a press on
//! the product image starts a swipe, and presses on buttons fire immediately.
//! Drag and release events go to the cart only while it is being dragged,
//! otherwise to the swipe recognizer if a swipe is in progress.

use std::cell::RefCell;

use storefront_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent, PointerPhase};
use storefront_core::geometry::Size;
use storefront_core::gesture::{SwipeConfig, SwipeRecognizer};
use storefront_model::{Cart, CartChange, Catalog, LineKey, ProductBrowser, ProductId};
use storefront_render::frame::{Frame, HitGrid};
use storefront_runtime::{Cmd, Model};
use storefront_widgets::{
    CartPointerOutcome, CartWidget, CartWidgetState, HitTarget, ProductView, Widget,
};
use tracing::{debug, info};

use crate::cli::DEFAULT_SWIPE_THRESHOLD;

/// Messages driving [`StorefrontApp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Show the next product.
    Next,
    /// Show the previous product.
    Previous,
    /// Select a color for the product in view.
    SelectColor(String),
    /// Select a size for the product in view.
    SelectSize(String),
    /// Move to the next color option.
    CycleColor,
    /// Move to the next size option.
    CycleSize,
    /// Add or remove a product from favorites.
    ToggleFavorite(ProductId),
    /// Add the product in view with the current selection.
    AddToCart,
    /// Set the quantity of every line of a product; zero removes them.
    UpdateQuantity {
        /// Product whose lines change.
        product_id: ProductId,
        /// New quantity.
        quantity: u32,
    },
    /// Remove every line of a product.
    RemoveItem(ProductId),
    /// `+` on one cart line.
    IncrementLine(LineKey),
    /// `−` on one cart line.
    DecrementLine(LineKey),
    /// Remove one cart line.
    RemoveLine(LineKey),
    /// Expand the cart.
    OpenCart,
    /// Collapse the cart.
    CloseCart,
    /// Expand or collapse the cart.
    ToggleCart,
    /// Checkout button pressed.
    Checkout,
    /// Terminal resized.
    Resize {
        /// New width in cells.
        width: u16,
        /// New height in cells.
        height: u16,
    },
    /// Raw input still to be interpreted.
    Input(Event),
    /// Leave the program.
    Quit,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        if let Event::Resize { width, height } = event {
            return Self::Resize { width, height };
        }
        Self::Input(event)
    }
}

/// Top-level storefront state.
pub struct StorefrontApp {
    browser: ProductBrowser,
    cart: Cart,
    cart_widget: CartWidgetState,
    swipe: SwipeRecognizer,
    viewport: Size,
    /// Hit grid of the last rendered frame, used to resolve presses.
    hits: RefCell<Option<HitGrid>>,
}

impl StorefrontApp {
    /// Create the app over `catalog`, starting on the first product.
    pub fn new(catalog: Catalog) -> Self {
        let viewport = Size::new(80, 24);
        Self {
            browser: ProductBrowser::new(catalog),
            cart: Cart::new(),
            cart_widget: CartWidgetState::new(viewport),
            swipe: SwipeRecognizer::new(
                SwipeConfig::default().with_threshold(DEFAULT_SWIPE_THRESHOLD),
            ),
            viewport,
            hits: RefCell::new(None),
        }
    }

    /// Set the swipe threshold in cells.
    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: u16) -> Self {
        self.swipe = SwipeRecognizer::new(SwipeConfig::default().with_threshold(threshold));
        self
    }

    /// Start on product `index` (wrapping).
    #[must_use]
    pub fn starting_at(mut self, index: usize) -> Self {
        self.browser = self.browser.starting_at(index);
        self
    }

    /// The product browser.
    pub fn browser(&self) -> &ProductBrowser {
        &self.browser
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The cart widget's position and drag state.
    pub fn cart_widget(&self) -> &CartWidgetState {
        &self.cart_widget
    }

    /// Last known terminal size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Whether a swipe gesture is in progress.
    pub fn is_swiping(&self) -> bool {
        self.swipe.is_tracking()
    }

    fn key_msg(&self, key: KeyEvent) -> Option<Msg> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.ctrl() {
            return key.is_char('c').then_some(Msg::Quit);
        }
        Some(match key.code {
            KeyCode::Char('q') => Msg::Quit,
            KeyCode::Left | KeyCode::Char('h') => Msg::Previous,
            KeyCode::Right | KeyCode::Char('l') => Msg::Next,
            KeyCode::Char('c') => Msg::CycleColor,
            KeyCode::Char('s') => Msg::CycleSize,
            KeyCode::Char('f') => Msg::ToggleFavorite(self.browser.current_product().id),
            KeyCode::Char('a') | KeyCode::Enter => Msg::AddToCart,
            KeyCode::Char('o') => Msg::ToggleCart,
            KeyCode::Escape => Msg::CloseCart,
            _ => return None,
        })
    }

    fn hit(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.hits
            .borrow()
            .as_ref()
            .and_then(|grid| HitTarget::in_grid(grid, x, y))
    }

    fn line_key(&self, index: usize) -> Option<LineKey> {
        self.cart.items().get(index).map(|item| item.key.clone())
    }

    /// Turn a press on `target` into a message, or start a gesture.
    fn press(&mut self, target: HitTarget, x: u16, y: u16) -> Option<Msg> {
        let product = self.browser.current_product();
        match target {
            HitTarget::Previous => Some(Msg::Previous),
            HitTarget::Next => Some(Msg::Next),
            HitTarget::Color(i) => product.colors.get(i).cloned().map(Msg::SelectColor),
            HitTarget::Size(i) => product.sizes.get(i).cloned().map(Msg::SelectSize),
            HitTarget::Favorite => Some(Msg::ToggleFavorite(product.id)),
            HitTarget::AddToCart => Some(Msg::AddToCart),
            HitTarget::Image => {
                self.swipe.touch_start(i32::from(x));
                None
            }
            HitTarget::CartHandle => {
                self.cart_widget.pointer_down(x, y);
                None
            }
            HitTarget::CartClose => Some(Msg::CloseCart),
            HitTarget::CartCard => None,
            HitTarget::LineDecrement(i) => self.line_key(i).map(Msg::DecrementLine),
            HitTarget::LineIncrement(i) => self.line_key(i).map(Msg::IncrementLine),
            HitTarget::LineRemove(i) => self.line_key(i).map(Msg::RemoveLine),
            HitTarget::Checkout => Some(Msg::Checkout),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Cmd<Msg> {
        let Some(phase) = mouse.primary_phase() else {
            return Cmd::none();
        };
        let (x, y) = mouse.position();
        match phase {
            PointerPhase::Down => {
                // A press without a release in between starts over.
                self.swipe.cancel();
                self.cart_widget.cancel_drag();
                match self.hit(x, y).and_then(|target| self.press(target, x, y)) {
                    Some(msg) => self.update(msg),
                    None => Cmd::none(),
                }
            }
            PointerPhase::Drag => {
                if self.cart_widget.is_dragging() {
                    self.cart_widget.pointer_move(x, y);
                } else if self.swipe.is_tracking() {
                    self.swipe.touch_move(i32::from(x));
                }
                Cmd::none()
            }
            PointerPhase::Up => {
                if self.cart_widget.is_dragging() {
                    let outcome = self.cart_widget.pointer_up();
                    if outcome == CartPointerOutcome::Dropped {
                        let position = self.cart_widget.position();
                        debug!(x = position.x, y = position.y, "cart moved");
                    }
                } else if self.swipe.is_tracking() {
                    self.swipe.touch_move(i32::from(x));
                    if let Some(direction) = self.swipe.touch_end() {
                        debug!(?direction, "swipe recognized");
                        self.browser.swipe(direction);
                    }
                }
                Cmd::none()
            }
        }
    }

    fn log_change(&self, action: &str, change: CartChange) {
        info!(
            action,
            ?change,
            lines = self.cart.len(),
            total_items = self.cart.total_items(),
            total_price = %self.cart.total_price(),
            "cart updated"
        );
    }
}

impl Model for StorefrontApp {
    type Message = Msg;

    fn init(&mut self) -> Cmd<Self::Message> {
        info!(
            products = self.browser.product_count(),
            start = self.browser.index(),
            "storefront started"
        );
        Cmd::none()
    }

    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message> {
        match msg {
            Msg::Next => self.browser.next(),
            Msg::Previous => self.browser.previous(),
            Msg::SelectColor(color) => self.browser.select_color(color),
            Msg::SelectSize(size) => self.browser.select_size(size),
            Msg::CycleColor => self.browser.cycle_color(),
            Msg::CycleSize => self.browser.cycle_size(),
            Msg::ToggleFavorite(id) => {
                self.browser.toggle_favorite(id);
            }
            Msg::AddToCart => {
                let change = self.cart.add(
                    self.browser.current_product(),
                    self.browser.selected_size(),
                    self.browser.selected_color(),
                );
                self.log_change("add", change);
            }
            Msg::UpdateQuantity {
                product_id,
                quantity,
            } => {
                let change = self.cart.update_quantity(product_id, quantity);
                self.log_change("update_quantity", change);
            }
            Msg::RemoveItem(id) => {
                let change = self.cart.remove_item(id);
                self.log_change("remove_item", change);
            }
            Msg::IncrementLine(key) => {
                let change = self.cart.increment_line(&key);
                self.log_change("increment", change);
            }
            Msg::DecrementLine(key) => {
                let change = self.cart.decrement_line(&key);
                self.log_change("decrement", change);
            }
            Msg::RemoveLine(key) => {
                let change = self.cart.remove_line(&key);
                self.log_change("remove_line", change);
            }
            Msg::OpenCart => self.cart_widget.open(),
            Msg::CloseCart => self.cart_widget.close(),
            Msg::ToggleCart => self.cart_widget.toggle(),
            Msg::Checkout => {
                return Cmd::log(format!(
                    "checkout requested for {} items ({}); payment is not available",
                    self.cart.total_items(),
                    self.cart.total_price()
                ));
            }
            Msg::Resize { width, height } => {
                self.viewport = Size::new(width, height);
                self.cart_widget.set_viewport(self.viewport);
            }
            Msg::Input(Event::Key(key)) => {
                if let Some(msg) = self.key_msg(key) {
                    return self.update(msg);
                }
            }
            Msg::Input(Event::Mouse(mouse)) => return self.handle_mouse(mouse),
            Msg::Input(_) => {}
            Msg::Quit => return Cmd::quit(),
        }
        Cmd::none()
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.bounds();
        ProductView::new(&self.browser).render(area, frame);
        CartWidget::new(&self.cart, &self.cart_widget).render(area, frame);
        *self.hits.borrow_mut() = Some(frame.hit_grid.clone());
    }
}
