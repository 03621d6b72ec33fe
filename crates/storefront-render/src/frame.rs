#![forbid(unsafe_code)]

//! Frame = Buffer + hit grid for a render pass.
//!
//! The `Frame` is the render target that `Model::view()` writes to. Widgets
//! draw into [`Frame::buffer`] and register their clickable areas in the
//! [`HitGrid`], which the model later uses to route mouse presses.
//!
//! # Usage
//!
//! ```
//! use storefront_core::geometry::Rect;
//! use storefront_render::frame::{Frame, HitId, HitRegion};
//!
//! let mut frame = Frame::new(20, 5);
//! frame.register_hit(Rect::new(2, 1, 6, 1), HitId::new(7), HitRegion::Button, 0);
//! assert_eq!(frame.hit_test(3, 1), Some((HitId::new(7), HitRegion::Button, 0)));
//! assert_eq!(frame.hit_test(0, 0), None);
//! ```

use crate::buffer::Buffer;
use storefront_core::geometry::Rect;

/// Which widget owns a hit cell. Widgets pick their own numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitId(pub u32);

impl HitId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Widget-defined payload, such as the index of the option under the cursor.
pub type HitData = u64;

/// What kind of interaction a cell offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    #[default]
    None,
    /// Passive area that still reacts to pointer gestures.
    Content,
    /// Something that can be dragged.
    Handle,
    /// Press to activate.
    Button,
}

/// One cell of the hit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitCell {
    pub widget_id: Option<HitId>,
    pub region: HitRegion,
    pub data: HitData,
}

/// Per-cell record of who registered what during a render pass.
///
/// Registration overwrites, so whatever is drawn last (and sits on top)
/// also receives the click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<HitCell>,
}

impl HitGrid {
    /// A grid with nothing registered.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![HitCell::default(); usize::from(width) * usize::from(height)],
        }
    }

    /// Claim every cell of `rect` that lies on the grid.
    pub fn register(&mut self, rect: Rect, widget_id: HitId, region: HitRegion, data: HitData) {
        let area = rect.intersection(&Rect::from_size(self.width, self.height));
        if area.is_empty() {
            return;
        }
        let stride = usize::from(self.width);
        let (left, right) = (usize::from(area.x), usize::from(area.right()));
        let owner = HitCell {
            widget_id: Some(widget_id),
            region,
            data,
        };
        for row in self.cells.chunks_mut(stride).skip(usize::from(area.y)).take(usize::from(area.height)) {
            row[left..right].fill(owner);
        }
    }

    /// The registration covering `(x, y)`, if any.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let cell = &self.cells[usize::from(y) * usize::from(self.width) + usize::from(x)];
        cell.widget_id.map(|id| (id, cell.region, cell.data))
    }
}

/// Render target for one pass of `Model::view()`.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The cell grid being drawn.
    pub buffer: Buffer,
    /// Clickable regions registered during this pass.
    pub hit_grid: HitGrid,
}

impl Frame {
    /// Blank cells, empty hit grid.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: HitGrid::new(width, height),
        }
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.buffer.width()
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// `(0, 0, width, height)`.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        self.buffer.bounds()
    }

    /// Make `rect` clickable as `id`.
    pub fn register_hit(&mut self, rect: Rect, id: HitId, region: HitRegion, data: HitData) {
        self.hit_grid.register(rect, id, region, data);
    }

    /// Who owns `(x, y)` this pass.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        self.hit_grid.hit_test(x, y)
    }
}
