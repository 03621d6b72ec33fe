#![forbid(unsafe_code)]

//! Cell types.
//!
//! A [`Cell`] is one terminal position: a character plus colors and
//! attributes. Wide characters occupy a leading cell holding the character
//! and one continuation cell per extra column.

use bitflags::bitflags;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
}

bitflags! {
    /// Text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellAttrs: u8 {
        /// Bold weight.
        const BOLD      = 0b0000_0001;
        /// Dim/faint.
        const DIM       = 0b0000_0010;
        /// Italic.
        const ITALIC    = 0b0000_0100;
        /// Underline.
        const UNDERLINE = 0b0000_1000;
        /// Swap foreground and background.
        const REVERSE   = 0b0001_0000;
    }
}

/// Contents of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellContent {
    /// Nothing drawn; rendered as a space.
    #[default]
    Empty,
    /// A single character.
    Char(char),
    /// Trailing column of a wide character drawn in the cell to the left.
    Continuation,
}

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// What is drawn here.
    pub content: CellContent,
    /// Foreground color; `None` keeps the terminal default.
    pub fg: Option<Rgb>,
    /// Background color; `None` keeps the terminal default.
    pub bg: Option<Rgb>,
    /// Text attributes.
    pub attrs: CellAttrs,
}

impl Cell {
    /// A cell holding `c` with default colors.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self {
            content: CellContent::Char(c),
            fg: None,
            bg: None,
            attrs: CellAttrs::empty(),
        }
    }

    /// A continuation cell for the right half of a wide character.
    #[inline]
    pub const fn continuation() -> Self {
        Self {
            content: CellContent::Continuation,
            fg: None,
            bg: None,
            attrs: CellAttrs::empty(),
        }
    }

    /// The character drawn here, if any.
    #[inline]
    pub const fn as_char(&self) -> Option<char> {
        match self.content {
            CellContent::Char(c) => Some(c),
            _ => None,
        }
    }

    /// Whether this is the trailing half of a wide character.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        matches!(self.content, CellContent::Continuation)
    }
}
