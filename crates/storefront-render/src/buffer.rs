#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! The `Buffer` is a 2D grid of [`Cell`]s representing the terminal display.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. Writes outside the grid are ignored

use crate::cell::Cell;
use crate::style::Style;
use storefront_core::geometry::Rect;

/// A 2D grid of terminal cells, stored row-major.
///
/// # Example
///
/// ```
/// use storefront_render::buffer::Buffer;
/// use storefront_render::cell::Cell;
///
/// let mut buffer = Buffer::new(80, 24);
/// buffer.set(0, 0, Cell::from_char('H'));
/// buffer.set(1, 0, Cell::from_char('i'));
/// assert_eq!(buffer.row_text(0).trim_end(), "Hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a new buffer filled with empty cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Bounding rectangle of the buffer.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to the cell at (x, y).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Overwrite the cell at (x, y). Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Fill a rectangle (clipped to the buffer) with `cell`.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let clipped = rect.intersection(&self.bounds());
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Merge `style` onto every cell of a rectangle, keeping content.
    pub fn set_style(&mut self, rect: Rect, style: Style) {
        if style.is_empty() {
            return;
        }
        let clipped = rect.intersection(&self.bounds());
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    style.apply(cell);
                }
            }
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cells of row `y`. Empty for rows outside the buffer.
    pub fn row_cells(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Plain text of row `y`, empty cells rendered as spaces.
    ///
    /// Continuation cells are skipped so wide characters appear once.
    pub fn row_text(&self, y: u16) -> String {
        self.row_cells(y)
            .iter()
            .filter(|cell| !cell.is_continuation())
            .map(|cell| cell.as_char().unwrap_or(' '))
            .collect()
    }

    /// Plain text of the whole buffer, one line per row.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
