#![forbid(unsafe_code)]

//! Presenter: state-tracked terminal emission.
//!
//! The Presenter turns buffer diffs into terminal output through Crossterm
//! commands, tracking the current style and cursor so it only emits what
//! changed.
//!
//! # Design Principles
//!
//! - **State tracking**: remember the current style and cursor position
//! - **Run grouping**: one cursor move per [`ChangeRun`](crate::diff::ChangeRun)
//! - **Single write**: buffer all output and flush once per frame
//!
//! # Usage
//!
//! ```
//! use storefront_render::buffer::Buffer;
//! use storefront_render::cell::Cell;
//! use storefront_render::diff::BufferDiff;
//! use storefront_render::presenter::Presenter;
//!
//! let mut presenter = Presenter::new(Vec::new());
//! let current = Buffer::new(4, 1);
//! let mut next = Buffer::new(4, 1);
//! next.set(0, 0, Cell::from_char('A'));
//!
//! let diff = BufferDiff::compute(&current, &next);
//! presenter.present(&next, &diff).unwrap();
//! let out = presenter.into_inner().unwrap();
//! assert!(String::from_utf8_lossy(&out).contains('A'));
//! ```

use std::io::{self, BufWriter, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::buffer::Buffer;
use crate::cell::{Cell, CellAttrs, Rgb};
use crate::diff::BufferDiff;

/// Size of the internal write buffer (64KB).
const BUFFER_CAPACITY: usize = 64 * 1024;

/// Cached style state for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellStyle {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    attrs: CellAttrs,
}

impl CellStyle {
    fn from_cell(cell: &Cell) -> Self {
        Self {
            fg: cell.fg,
            bg: cell.bg,
            attrs: cell.attrs,
        }
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// State-tracked presenter writing Crossterm commands to `W`.
pub struct Presenter<W: Write> {
    writer: BufWriter<W>,
    /// Current style state (None = unknown/reset).
    current_style: Option<CellStyle>,
    /// Current cursor position. None = unknown.
    cursor: Option<(u16, u16)>,
}

impl<W: Write> Presenter<W> {
    /// Create a new presenter around `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
            current_style: None,
            cursor: None,
        }
    }

    /// Present a frame using the given buffer and diff.
    pub fn present(&mut self, buffer: &Buffer, diff: &BufferDiff) -> io::Result<()> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "present",
            width = buffer.width(),
            height = buffer.height(),
            changes = diff.len()
        )
        .entered();

        for run in diff.runs() {
            self.move_cursor_to(run.x0, run.y)?;
            for x in run.x0..=run.x1 {
                if let Some(cell) = buffer.get(x, run.y) {
                    self.emit_cell(cell)?;
                }
            }
        }

        queue!(self.writer, SetAttribute(Attribute::Reset))?;
        self.current_style = None;

        #[cfg(feature = "tracing")]
        tracing::trace!("frame presented");
        self.writer.flush()
    }

    /// Clear the screen and draw every cell of `buffer`.
    pub fn full_redraw(&mut self, buffer: &Buffer) -> io::Result<()> {
        self.clear_screen()?;
        self.present(buffer, &BufferDiff::full(buffer))
    }

    fn emit_cell(&mut self, cell: &Cell) -> io::Result<()> {
        // The terminal already advanced past the wide character's second column.
        if cell.is_continuation() {
            if let Some((x, y)) = self.cursor {
                self.cursor = Some((x + 1, y));
            }
            return Ok(());
        }

        self.emit_style_changes(cell)?;
        let ch = cell.as_char().unwrap_or(' ');
        queue!(self.writer, Print(ch))?;

        if let Some((x, y)) = self.cursor {
            self.cursor = Some((x + 1, y));
        }
        Ok(())
    }

    fn emit_style_changes(&mut self, cell: &Cell) -> io::Result<()> {
        let new_style = CellStyle::from_cell(cell);
        if self.current_style == Some(new_style) {
            return Ok(());
        }

        // Reset then apply: simpler than incremental attribute toggling.
        queue!(self.writer, SetAttribute(Attribute::Reset))?;
        if let Some(fg) = new_style.fg {
            queue!(self.writer, SetForegroundColor(color(fg)))?;
        }
        if let Some(bg) = new_style.bg {
            queue!(self.writer, SetBackgroundColor(color(bg)))?;
        }
        for (flag, attr) in [
            (CellAttrs::BOLD, Attribute::Bold),
            (CellAttrs::DIM, Attribute::Dim),
            (CellAttrs::ITALIC, Attribute::Italic),
            (CellAttrs::UNDERLINE, Attribute::Underlined),
            (CellAttrs::REVERSE, Attribute::Reverse),
        ] {
            if new_style.attrs.contains(flag) {
                queue!(self.writer, SetAttribute(attr))?;
            }
        }

        self.current_style = Some(new_style);
        Ok(())
    }

    fn move_cursor_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        if self.cursor == Some((x, y)) {
            return Ok(());
        }
        queue!(self.writer, MoveTo(x, y))?;
        self.cursor = Some((x, y));
        Ok(())
    }

    /// Clear the entire screen.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.writer, SetAttribute(Attribute::Reset), Clear(ClearType::All), MoveTo(0, 0))?;
        self.current_style = None;
        self.cursor = Some((0, 0));
        Ok(())
    }

    /// Forget cached terminal state, forcing full style and cursor output.
    pub fn reset(&mut self) {
        self.current_style = None;
        self.cursor = None;
    }

    /// Flush buffered output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Flush and return the inner writer.
    pub fn into_inner(self) -> Result<W, io::Error> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}
