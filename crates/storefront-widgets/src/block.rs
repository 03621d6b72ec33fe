#![forbid(unsafe_code)]

use crate::{Widget, draw_text, text_width};
use storefront_core::geometry::Rect;
use storefront_render::cell::Cell;
use storefront_render::frame::Frame;
use storefront_render::style::Style;

const TOP_LEFT: char = '╭';
const TOP_RIGHT: char = '╮';
const BOTTOM_LEFT: char = '╰';
const BOTTOM_RIGHT: char = '╯';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// A rounded, bordered box with an optional title on the top edge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block<'a> {
    title: Option<&'a str>,
    border_style: Style,
    style: Style,
}

impl<'a> Block<'a> {
    /// Create a new block with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title drawn on the top border.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the style applied to border characters.
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Set the style of the whole block area.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The area inside the borders.
    pub fn inner(&self, area: Rect) -> Rect {
        area.inner(1)
    }

    fn border_cell(&self, c: char) -> Cell {
        let mut cell = Cell::from_char(c);
        self.style.apply(&mut cell);
        self.border_style.apply(&mut cell);
        cell
    }
}

impl Widget for Block<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let area = area.intersection(&frame.bounds());
        if area.width < 2 || area.height < 2 {
            return;
        }
        let buf = &mut frame.buffer;

        let mut blank = Cell::from_char(' ');
        self.style.apply(&mut blank);
        buf.fill(area, blank);

        let right = area.right() - 1;
        let bottom = area.bottom() - 1;
        for x in area.x..area.right() {
            buf.set(x, area.y, self.border_cell(HORIZONTAL));
            buf.set(x, bottom, self.border_cell(HORIZONTAL));
        }
        for y in area.y..area.bottom() {
            buf.set(area.x, y, self.border_cell(VERTICAL));
            buf.set(right, y, self.border_cell(VERTICAL));
        }
        buf.set(area.x, area.y, self.border_cell(TOP_LEFT));
        buf.set(right, area.y, self.border_cell(TOP_RIGHT));
        buf.set(area.x, bottom, self.border_cell(BOTTOM_LEFT));
        buf.set(right, bottom, self.border_cell(BOTTOM_RIGHT));

        if let Some(title) = self.title
            && area.width > 4
            && text_width(title) > 0
        {
            let mut style = self.style;
            style.attrs |= self.border_style.attrs;
            draw_text(buf, area.x + 2, area.y, title, style, right - 1);
        }
    }
}
