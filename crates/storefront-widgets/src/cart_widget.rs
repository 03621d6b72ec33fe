#![forbid(unsafe_code)]

//! Floating, draggable cart.
//!
//! [`CartWidgetState`] tracks where the cart sits on screen, whether it is
//! expanded, and the drag phase. [`CartWidget`] draws it from a [`Cart`] and
//! that state.
//!
//! # Drag protocol
//!
//! ```text
//!            pointer_down (collapsed, on handle)
//!   Idle ───────────────────────────────────────▶ Dragging { offset, moved }
//!    ▲                                                │  pointer_move:
//!    │            pointer_up (always)                 │  position = clamp(pointer − offset)
//!    └────────────────────────────────────────────────┘
//! ```
//!
//! A press and release with no pointer movement in between is a click and
//! expands the cart. Dragging is never started while expanded.
//!
//! # Invariants
//!
//! 1. `position.x ∈ [0, viewport.width − 10]`, `position.y ∈ [0, viewport.height − 3]`
//!    (pinned to 0 when the viewport is smaller than the handle).
//! 2. Any `pointer_up` returns the phase to `Idle`.

use storefront_core::geometry::{Point, Rect, Size, clamp_span};
use storefront_model::Cart;
use storefront_render::cell::Cell;
use storefront_render::frame::Frame;

use crate::block::Block;
use crate::hit::HitTarget;
use crate::{Widget, draw_text, draw_text_centered, draw_text_right, text_width, theme, truncate};

/// Size of the collapsed handle.
pub const COLLAPSED_SIZE: Size = Size::new(10, 3);
/// Where the cart starts.
pub const INITIAL_POSITION: Point = Point::new(2, 4);
/// Preferred width of the expanded card.
pub const EXPANDED_WIDTH: u16 = 40;

/// Rows of the expanded card not spent on line items: two borders, the
/// separator, the total and the checkout button.
const EXPANDED_CHROME_ROWS: u16 = 5;
/// Rows per cart line.
const LINE_ROWS: u16 = 2;

/// Drag phase of the cart handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// Not being dragged.
    #[default]
    Idle,
    /// Pointer is held on the handle.
    Dragging {
        /// `pointer − position` captured at press time.
        offset: (i32, i32),
        /// Pointer position at press time.
        origin: Point,
        /// Whether the pointer has moved since the press.
        moved: bool,
    },
}

/// What a pointer release did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartPointerOutcome {
    /// No drag was in progress.
    Ignored,
    /// Released without moving: the cart expanded.
    Clicked,
    /// Released after moving: the cart stays where it was dropped.
    Dropped,
}

/// Position, expansion and drag phase of the floating cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartWidgetState {
    position: Point,
    expanded: bool,
    phase: DragPhase,
    viewport: Size,
}

impl Default for CartWidgetState {
    fn default() -> Self {
        Self::new(Size::new(80, 24))
    }
}

impl CartWidgetState {
    /// Collapsed, idle, at the initial position within `viewport`.
    pub fn new(viewport: Size) -> Self {
        let mut state = Self {
            position: INITIAL_POSITION,
            expanded: false,
            phase: DragPhase::Idle,
            viewport,
        };
        state.reclamp();
        state
    }

    /// Top-left corner of the cart.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether the card is expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Current drag phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Viewport the position is clamped to.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Track a new viewport size, pulling the cart back on screen.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.reclamp();
    }

    fn reclamp(&mut self) {
        self.position = Point::new(
            clamp_span(i32::from(self.position.x), COLLAPSED_SIZE.width, self.viewport.width),
            clamp_span(i32::from(self.position.y), COLLAPSED_SIZE.height, self.viewport.height),
        );
    }

    /// Area covered by the collapsed handle.
    pub fn collapsed_rect(&self) -> Rect {
        Rect::at(self.position, COLLAPSED_SIZE)
    }

    /// Area covered by the expanded card when it lists `lines` cart lines.
    ///
    /// The card is anchored at the cart position and shifted left or up just
    /// enough to fit the viewport.
    pub fn expanded_rect(&self, lines: usize) -> Rect {
        let wanted = EXPANDED_CHROME_ROWS
            .saturating_add(LINE_ROWS.saturating_mul(u16::try_from(lines).unwrap_or(u16::MAX)));
        let width = EXPANDED_WIDTH.min(self.viewport.width);
        let height = wanted.min(self.viewport.height);
        Rect::new(
            self.position.x.min(self.viewport.width - width),
            self.position.y.min(self.viewport.height - height),
            width,
            height,
        )
    }

    /// Start a drag if the cart is collapsed and `(x, y)` is on the handle.
    ///
    /// Returns whether a drag started.
    pub fn pointer_down(&mut self, x: u16, y: u16) -> bool {
        if self.expanded || !self.collapsed_rect().contains(x, y) {
            return false;
        }
        let pointer = Point::new(x, y);
        self.phase = DragPhase::Dragging {
            offset: pointer.offset_from(self.position),
            origin: pointer,
            moved: false,
        };
        storefront_core::debug!(x, y, "cart drag started");
        true
    }

    /// Follow the pointer while dragging. Returns whether the position changed.
    pub fn pointer_move(&mut self, x: u16, y: u16) -> bool {
        let DragPhase::Dragging {
            offset,
            origin,
            moved,
        } = &mut self.phase
        else {
            return false;
        };
        if Point::new(x, y) != *origin {
            *moved = true;
        }
        let next = Point::new(
            clamp_span(i32::from(x) - offset.0, COLLAPSED_SIZE.width, self.viewport.width),
            clamp_span(i32::from(y) - offset.1, COLLAPSED_SIZE.height, self.viewport.height),
        );
        let changed = next != self.position;
        self.position = next;
        storefront_core::trace!(x = next.x, y = next.y, "cart dragged");
        changed
    }

    /// Release the pointer. Always ends the drag.
    pub fn pointer_up(&mut self) -> CartPointerOutcome {
        let phase = std::mem::take(&mut self.phase);
        match phase {
            DragPhase::Idle => CartPointerOutcome::Ignored,
            DragPhase::Dragging { moved: false, .. } => {
                self.expanded = true;
                storefront_core::debug!("cart handle clicked; expanding");
                CartPointerOutcome::Clicked
            }
            DragPhase::Dragging { moved: true, .. } => {
                storefront_core::debug!(
                    x = self.position.x,
                    y = self.position.y,
                    "cart dropped"
                );
                CartPointerOutcome::Dropped
            }
        }
    }

    /// Abandon a drag whose release never arrived. The card stays as it was.
    pub fn cancel_drag(&mut self) {
        if std::mem::take(&mut self.phase) != DragPhase::Idle {
            storefront_core::debug!("cart drag abandoned");
        }
    }

    /// Expand the card, abandoning any drag.
    pub fn open(&mut self) {
        self.phase = DragPhase::Idle;
        self.expanded = true;
    }

    /// Collapse the card.
    pub fn close(&mut self) {
        self.expanded = false;
    }

    /// Flip between expanded and collapsed.
    pub fn toggle(&mut self) {
        if self.expanded {
            self.close();
        } else {
            self.open();
        }
    }
}

/// Draws the cart over the page. Renders nothing when the cart is empty.
#[derive(Debug, Clone, Copy)]
pub struct CartWidget<'a> {
    cart: &'a Cart,
    state: &'a CartWidgetState,
}

impl<'a> CartWidget<'a> {
    /// Create a cart widget.
    pub fn new(cart: &'a Cart, state: &'a CartWidgetState) -> Self {
        Self { cart, state }
    }

    fn render_collapsed(&self, area: Rect, frame: &mut Frame) {
        let rect = self.state.collapsed_rect().intersection(&area);
        if rect.is_empty() {
            return;
        }
        Block::new()
            .style(theme::BUTTON_SELECTED)
            .border_style(theme::BUTTON_SELECTED)
            .render(rect, frame);
        let label = truncate(&format!("≡ {} ud.", self.cart.total_items()), rect.width.saturating_sub(2));
        draw_text_centered(
            &mut frame.buffer,
            Block::new().inner(rect),
            &label,
            theme::BUTTON_SELECTED,
        );
        HitTarget::CartHandle.register(frame, rect);
    }

    fn render_expanded(&self, area: Rect, frame: &mut Frame) {
        let items = self.cart.items();
        let card = self.state.expanded_rect(items.len()).intersection(&area);
        if card.width < 12 || card.height < EXPANDED_CHROME_ROWS {
            return;
        }

        let title = format!(" Carrito ({}) ", self.cart.total_items());
        Block::new()
            .title(&title)
            .style(theme::PANEL)
            .border_style(theme::BORDER)
            .render(card, frame);
        HitTarget::CartCard.register(frame, card);

        let close = Rect::new(card.right() - 5, card.y, 3, 1);
        draw_text(&mut frame.buffer, close.x, close.y, "[x]", theme::ACCENT, close.right());
        HitTarget::CartClose.register(frame, close);

        let inner = Block::new().inner(card);
        let (body, footer) = inner.split_bottom(3);
        let visible = usize::from(body.height / LINE_ROWS).min(items.len());

        for (i, item) in items.iter().take(visible).enumerate() {
            let y = body.y + i as u16 * LINE_ROWS;
            let row = Rect::new(body.x, y, body.width, 1);
            let price = item.price.to_string();
            let name_width = body.width.saturating_sub(text_width(&price) + 1);
            draw_text(
                &mut frame.buffer,
                row.x,
                y,
                &truncate(&item.name, name_width),
                theme::HEADING,
                row.right(),
            );
            draw_text_right(&mut frame.buffer, row, &price, theme::ACCENT);

            let y = y + 1;
            let quantity = item.quantity.to_string();
            let controls_width = 3 + 1 + text_width(&quantity) + 1 + 3 + 1 + 3;
            let controls_x = body.right().saturating_sub(controls_width).max(body.x);
            let detail = format!("Talla: {} · {}", item.key.size, item.key.color);
            draw_text(
                &mut frame.buffer,
                body.x,
                y,
                &truncate(&detail, controls_x.saturating_sub(body.x + 1)),
                theme::MUTED,
                controls_x,
            );

            let mut x = controls_x;
            let minus = Rect::new(x, y, 3, 1);
            x = draw_text(&mut frame.buffer, x, y, "[-]", theme::BUTTON, body.right()) + 1;
            x = draw_text(&mut frame.buffer, x, y, &quantity, theme::HEADING, body.right()) + 1;
            let plus = Rect::new(x, y, 3, 1);
            x = draw_text(&mut frame.buffer, x, y, "[+]", theme::BUTTON, body.right()) + 1;
            let remove = Rect::new(x, y, 3, 1);
            draw_text(&mut frame.buffer, x, y, "[x]", theme::HEART_ON, body.right());

            HitTarget::LineDecrement(i).register(frame, minus.intersection(&body));
            HitTarget::LineIncrement(i).register(frame, plus.intersection(&body));
            HitTarget::LineRemove(i).register(frame, remove.intersection(&body));
        }

        let separator_y = footer.y;
        for x in footer.x..footer.right() {
            let mut cell = Cell::from_char('─');
            theme::BORDER.apply(&mut cell);
            frame.buffer.set(x, separator_y, cell);
        }
        let hidden = items.len() - visible;
        if hidden > 0 {
            let more = format!(" +{hidden} más ");
            draw_text_centered(
                &mut frame.buffer,
                Rect::new(footer.x, separator_y, footer.width, 1),
                &more,
                theme::MUTED,
            );
        }

        let total_row = Rect::new(footer.x, footer.y + 1, footer.width, 1);
        draw_text(&mut frame.buffer, total_row.x, total_row.y, "Total:", theme::HEADING, total_row.right());
        draw_text_right(
            &mut frame.buffer,
            total_row,
            &self.cart.total_price().to_string(),
            theme::ACCENT,
        );

        let checkout = Rect::new(footer.x, footer.y + 2, footer.width, 1);
        let mut fill = Cell::from_char(' ');
        theme::BUTTON_PRIMARY.apply(&mut fill);
        frame.buffer.fill(checkout, fill);
        draw_text_centered(&mut frame.buffer, checkout, "Proceder al Pago", theme::BUTTON_PRIMARY);
        HitTarget::Checkout.register(frame, checkout);
    }
}

impl Widget for CartWidget<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if self.cart.total_items() == 0 {
            return;
        }
        if self.state.is_expanded() {
            self.render_expanded(area, frame);
        } else {
            self.render_collapsed(area, frame);
        }
    }
}
