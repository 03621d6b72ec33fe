#![forbid(unsafe_code)]

//! Clickable targets on the storefront page.
//!
//! Each target is registered in the frame's hit grid as a [`HitId`] naming
//! the kind of control plus [`HitData`] carrying its index (option position
//! or cart line), and decoded again when a mouse press lands on it.

use storefront_core::geometry::Rect;
use storefront_render::frame::{Frame, HitData, HitGrid, HitId, HitRegion};

/// Something the pointer can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitTarget {
    /// Previous-product arrow.
    Previous,
    /// Next-product arrow.
    Next,
    /// Color option `n` of the product in view.
    Color(usize),
    /// Size option `n` of the product in view.
    Size(usize),
    /// Favorite heart.
    Favorite,
    /// Add-to-cart button.
    AddToCart,
    /// Product image; presses here start a swipe.
    Image,
    /// Collapsed cart handle; presses here start a drag or a click.
    CartHandle,
    /// Expanded cart close button.
    CartClose,
    /// Expanded cart background; absorbs presses.
    CartCard,
    /// `−` button of cart line `n`.
    LineDecrement(usize),
    /// `+` button of cart line `n`.
    LineIncrement(usize),
    /// Remove button of cart line `n`.
    LineRemove(usize),
    /// Checkout button (inert).
    Checkout,
}

impl HitTarget {
    fn encode(self) -> (HitId, HitData) {
        let (id, data) = match self {
            Self::Previous => (1, 0),
            Self::Next => (2, 0),
            Self::Color(i) => (3, i),
            Self::Size(i) => (4, i),
            Self::Favorite => (5, 0),
            Self::AddToCart => (6, 0),
            Self::Image => (7, 0),
            Self::CartHandle => (8, 0),
            Self::CartClose => (9, 0),
            Self::CartCard => (10, 0),
            Self::LineDecrement(i) => (11, i),
            Self::LineIncrement(i) => (12, i),
            Self::LineRemove(i) => (13, i),
            Self::Checkout => (14, 0),
        };
        (HitId::new(id), data as HitData)
    }

    /// Decode a hit-grid entry registered by [`HitTarget::register`].
    pub fn decode(id: HitId, data: HitData) -> Option<Self> {
        let index = usize::try_from(data).ok()?;
        Some(match id.id() {
            1 => Self::Previous,
            2 => Self::Next,
            3 => Self::Color(index),
            4 => Self::Size(index),
            5 => Self::Favorite,
            6 => Self::AddToCart,
            7 => Self::Image,
            8 => Self::CartHandle,
            9 => Self::CartClose,
            10 => Self::CartCard,
            11 => Self::LineDecrement(index),
            12 => Self::LineIncrement(index),
            13 => Self::LineRemove(index),
            14 => Self::Checkout,
            _ => return None,
        })
    }

    fn region(self) -> HitRegion {
        match self {
            Self::Image | Self::CartCard => HitRegion::Content,
            Self::CartHandle => HitRegion::Handle,
            _ => HitRegion::Button,
        }
    }

    /// Register this target over `rect`.
    pub fn register(self, frame: &mut Frame, rect: Rect) {
        let (id, data) = self.encode();
        frame.register_hit(rect, id, self.region(), data);
    }

    /// The target under `(x, y)` in `frame`, if any.
    pub fn at(frame: &Frame, x: u16, y: u16) -> Option<Self> {
        Self::in_grid(&frame.hit_grid, x, y)
    }

    /// The target under `(x, y)` in a hit grid kept from an earlier frame.
    pub fn in_grid(grid: &HitGrid, x: u16, y: u16) -> Option<Self> {
        let (id, _, data) = grid.hit_test(x, y)?;
        Self::decode(id, data)
    }
}
