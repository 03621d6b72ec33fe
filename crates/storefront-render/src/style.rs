#![forbid(unsafe_code)]

//! Style: optional colors and attributes merged onto cells.

use crate::cell::{Cell, CellAttrs, Rgb};

/// A partial style. Unset fields leave the target cell untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<Rgb>,
    /// Background color.
    pub bg: Option<Rgb>,
    /// Attributes to add.
    pub attrs: CellAttrs,
}

impl Style {
    /// Create an empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: CellAttrs::empty(),
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add bold.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.attrs = self.attrs.union(CellAttrs::BOLD);
        self
    }

    /// Add dim.
    #[must_use]
    pub const fn dim(mut self) -> Self {
        self.attrs = self.attrs.union(CellAttrs::DIM);
        self
    }

    /// Add reverse video.
    #[must_use]
    pub const fn reverse(mut self) -> Self {
        self.attrs = self.attrs.union(CellAttrs::REVERSE);
        self
    }

    /// Whether applying this style would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// Merge this style onto a cell, keeping its content.
    pub fn apply(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = Some(fg);
        }
        if let Some(bg) = self.bg {
            cell.bg = Some(bg);
        }
        cell.attrs |= self.attrs;
    }
}
