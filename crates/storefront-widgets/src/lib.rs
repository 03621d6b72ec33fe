#![forbid(unsafe_code)]

//! Widgets for the storefront page.
//!
//! Widgets draw into a [`Frame`] and register their clickable areas in its
//! hit grid as [`HitTarget`]s, so the application can route mouse presses
//! without knowing the layout.

pub mod block;
pub mod cart_widget;
pub mod hit;
pub mod product_view;
pub mod theme;

pub use cart_widget::{CartPointerOutcome, CartWidget, CartWidgetState, DragPhase};
pub use hit::HitTarget;
pub use product_view::ProductView;

use storefront_core::geometry::Rect;
use storefront_render::buffer::Buffer;
use storefront_render::cell::Cell;
use storefront_render::frame::Frame;
use storefront_render::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a [`Frame`] within a given area and may
/// register hit regions for mouse routing.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// Display width of `text` in cells.
pub fn text_width(text: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(text)).unwrap_or(u16::MAX)
}

/// Draw a text span into a buffer at the given position.
///
/// Returns the x position after the last drawn character.
/// Stops at `max_x` (exclusive); a wide grapheme that would straddle it is
/// not drawn.
pub fn draw_text(buf: &mut Buffer, mut x: u16, y: u16, content: &str, style: Style, max_x: u16) -> u16 {
    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme) as u16;
        if w == 0 {
            continue;
        }
        if x.saturating_add(w) > max_x {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            let mut cell = Cell::from_char(c);
            style.apply(&mut cell);
            buf.set(x, y, cell);
            for extra in 1..w {
                let mut cont = Cell::continuation();
                style.apply(&mut cont);
                buf.set(x + extra, y, cont);
            }
        }
        x = x.saturating_add(w);
    }
    x
}

/// Draw `content` centered within `area`'s first row.
pub fn draw_text_centered(buf: &mut Buffer, area: Rect, content: &str, style: Style) {
    let width = text_width(content).min(area.width);
    let x = area.x + (area.width - width) / 2;
    draw_text(buf, x, area.y, content, style, area.right());
}

/// Draw `content` right-aligned within `area`'s first row.
pub fn draw_text_right(buf: &mut Buffer, area: Rect, content: &str, style: Style) {
    let width = text_width(content).min(area.width);
    draw_text(buf, area.right() - width, area.y, content, style, area.right());
}

/// Shorten `text` to at most `max` cells, ending in `…` when cut.
pub fn truncate(text: &str, max: u16) -> String {
    if text_width(text) <= max {
        return text.to_owned();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0u16;
    for grapheme in text.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme) as u16;
        if used + w > max - 1 {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap to lines of at most `width` cells.
///
/// Words wider than a line are truncated.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }
    let mut line = String::new();
    let mut line_width = 0u16;
    for word in text.split_whitespace() {
        let word = truncate(word, width);
        let w = text_width(&word);
        if line_width > 0 && line_width + 1 + w > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(&word);
        line_width += w;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
