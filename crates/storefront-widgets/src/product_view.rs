#![forbid(unsafe_code)]

//! The product page: header dots, image area with arrows and favorite
//! heart, and the details panel with color/size pickers and the add button.

use storefront_core::geometry::Rect;
use storefront_model::ProductBrowser;
use storefront_render::cell::Cell;
use storefront_render::frame::Frame;
use storefront_render::style::Style;

use crate::block::Block;
use crate::hit::HitTarget;
use crate::{Widget, draw_text, draw_text_centered, draw_text_right, text_width, theme, truncate, wrap_text};

/// Description lines shown at most.
const MAX_DESCRIPTION_LINES: usize = 3;
/// Details panel rows excluding the description.
const DETAILS_FIXED_ROWS: u16 = 12;
/// Image rows kept even on short terminals.
const MIN_IMAGE_ROWS: u16 = 5;

/// Renders the product in view of a [`ProductBrowser`].
#[derive(Debug, Clone, Copy)]
pub struct ProductView<'a> {
    browser: &'a ProductBrowser,
}

impl<'a> ProductView<'a> {
    /// Create a view over `browser`.
    pub fn new(browser: &'a ProductBrowser) -> Self {
        Self { browser }
    }

    fn render_header(&self, area: Rect, frame: &mut Frame) {
        let count = self.browser.product_count();
        let mut dots = String::with_capacity(count * 4);
        for i in 0..count {
            if i > 0 {
                dots.push(' ');
            }
            dots.push(if i == self.browser.index() { '●' } else { '○' });
        }
        let row = Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), 1);
        draw_text(&mut frame.buffer, row.x, row.y, "Minimalist Premium", theme::MUTED, row.right());
        draw_text_right(&mut frame.buffer, row, &dots, Style::new().fg(theme::GRAY_500));

        // Recolor the active dot.
        let start = row.right().saturating_sub(text_width(&dots));
        let active = start + 2 * self.browser.index() as u16;
        if let Some(cell) = frame.buffer.get_mut(active, row.y)
            && active < row.right()
        {
            theme::ACCENT.apply(cell);
        }
    }

    fn render_image(&self, area: Rect, frame: &mut Frame) {
        if area.height < 3 || area.width < 12 {
            return;
        }
        let product = self.browser.current_product();
        Block::new()
            .style(Style::new().bg(theme::ROSE_50))
            .border_style(theme::BORDER)
            .render(area, frame);
        HitTarget::Image.register(frame, area);

        let inner = Block::new().inner(area);
        let middle = inner.y + inner.height / 2;
        let label_width = inner.width.saturating_sub(10);
        let lines = [
            (truncate(&product.name, label_width), theme::HEADING),
            (truncate(&product.image, label_width), theme::MUTED),
        ];
        let first = middle.saturating_sub(1).max(inner.y);
        for (i, (text, style)) in lines.iter().enumerate() {
            let y = first + i as u16;
            if y < inner.bottom() {
                draw_text_centered(&mut frame.buffer, Rect::new(inner.x, y, inner.width, 1), text, *style);
            }
        }
        if inner.height > 4 {
            draw_text_centered(
                &mut frame.buffer,
                Rect::new(inner.x, inner.bottom() - 1, inner.width, 1),
                "◂ desliza ▸",
                theme::MUTED,
            );
        }

        let prev = Rect::new(inner.x + 1, middle, 3, 1);
        draw_text(&mut frame.buffer, prev.x, prev.y, " ‹ ", theme::BUTTON, prev.right());
        HitTarget::Previous.register(frame, prev);

        let next = Rect::new(inner.right().saturating_sub(4), middle, 3, 1);
        draw_text(&mut frame.buffer, next.x, next.y, " › ", theme::BUTTON, next.right());
        HitTarget::Next.register(frame, next);

        let favorite = self.browser.is_favorite(product.id);
        let heart = Rect::new(inner.right().saturating_sub(4), inner.y, 3, 1);
        let (glyph, style) = if favorite {
            (" ♥ ", theme::HEART_ON)
        } else {
            (" ♡ ", theme::HEART_OFF)
        };
        draw_text(&mut frame.buffer, heart.x, heart.y, glyph, style, heart.right());
        frame.buffer.set_style(heart, Style::new().bg(theme::WHITE));
        HitTarget::Favorite.register(frame, heart);
    }

    fn render_details(&self, area: Rect, frame: &mut Frame, description: &[String]) {
        let product = self.browser.current_product();
        let mut blank = Cell::from_char(' ');
        theme::PANEL.apply(&mut blank);
        frame.buffer.fill(area, blank);

        let inner = Rect::new(
            area.x + 2,
            area.y + 1,
            area.width.saturating_sub(4),
            area.height.saturating_sub(2),
        );
        let row = |offset: u16| Rect::new(inner.x, inner.y + offset, inner.width, 1);
        let mut y = 0u16;

        let price = product.price.to_string();
        draw_text(
            &mut frame.buffer,
            inner.x,
            inner.y,
            &truncate(&product.name, inner.width.saturating_sub(text_width(&price) + 1)),
            theme::HEADING,
            inner.right(),
        );
        draw_text_right(&mut frame.buffer, row(y), &price, theme::ACCENT);
        y += 1;

        let end = draw_text(&mut frame.buffer, inner.x, inner.y + y, "★★★★★", theme::STARS, inner.right());
        draw_text(&mut frame.buffer, end + 1, inner.y + y, "(4.9)", theme::MUTED, inner.right());
        draw_text_right(&mut frame.buffer, row(y), "Premium", theme::BADGE);
        y += 2;

        for line in description {
            draw_text(&mut frame.buffer, inner.x, inner.y + y, line, Style::new().fg(theme::GRAY_600), inner.right());
            y += 1;
        }
        y += 1;

        draw_text(&mut frame.buffer, inner.x, inner.y + y, "Color", theme::HEADING, inner.right());
        y += 1;
        self.render_options(
            frame,
            row(y),
            &product.colors,
            self.browser.selected_color(),
            HitTarget::Color,
        );
        y += 1;

        draw_text(&mut frame.buffer, inner.x, inner.y + y, "Talla", theme::HEADING, inner.right());
        y += 1;
        self.render_options(
            frame,
            row(y),
            &product.sizes,
            self.browser.selected_size(),
            HitTarget::Size,
        );
        y += 2;

        let button = row(y).intersection(&area);
        if !button.is_empty() {
            let mut fill = Cell::from_char(' ');
            theme::BUTTON_PRIMARY.apply(&mut fill);
            frame.buffer.fill(button, fill);
            draw_text_centered(&mut frame.buffer, button, "Añadir al Carrito", theme::BUTTON_PRIMARY);
            HitTarget::AddToCart.register(frame, button);
        }
    }

    fn render_options(
        &self,
        frame: &mut Frame,
        row: Rect,
        options: &[String],
        selected: &str,
        target: fn(usize) -> HitTarget,
    ) {
        let mut x = row.x;
        for (i, option) in options.iter().enumerate() {
            let label = format!(" {option} ");
            let style = if option == selected {
                theme::BUTTON_SELECTED
            } else {
                theme::BUTTON
            };
            let end = draw_text(&mut frame.buffer, x, row.y, &label, style, row.right());
            if end > x {
                target(i).register(frame, Rect::new(x, row.y, end - x, 1));
            }
            x = end.saturating_add(1);
            if x >= row.right() {
                break;
            }
        }
    }
}

impl Widget for ProductView<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let area = area.intersection(&frame.bounds());
        if area.is_empty() {
            return;
        }
        frame.buffer.fill(area, {
            let mut cell = Cell::from_char(' ');
            theme::PAGE.apply(&mut cell);
            cell
        });

        let (header, body) = area.split_top(1);
        self.render_header(header, frame);

        let mut description = wrap_text(
            &self.browser.current_product().description,
            area.width.saturating_sub(4),
        );
        description.truncate(MAX_DESCRIPTION_LINES);
        let room = body.height.saturating_sub(MIN_IMAGE_ROWS + DETAILS_FIXED_ROWS) as usize;
        description.truncate(room);

        let details_rows = DETAILS_FIXED_ROWS + description.len() as u16;
        let (image, details) = body.split_bottom(details_rows);
        self.render_image(image, frame);
        self.render_details(details, frame, &description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_model::{Catalog, Money, Product};

    fn browser() -> ProductBrowser {
        let catalog = Catalog::new(vec![
            Product::new(1, "Camiseta Premium Algodón", Money::from_major(2250))
                .with_image("/products/camiseta_basica.jpg")
                .with_description("Confeccionada en algodón 100% orgánico.")
                .with_colors(["Negro", "Blanco", "Gris"])
                .with_sizes(["XS", "S", "M", "L", "XL"]),
            Product::new(2, "Blazer", Money::from_major(6250))
                .with_colors(["Beige"])
                .with_sizes(["M"]),
        ])
        .expect("valid catalog");
        ProductBrowser::new(catalog)
    }

    fn render(browser: &ProductBrowser, w: u16, h: u16) -> Frame {
        let mut frame = Frame::new(w, h);
        ProductView::new(browser).render(frame.bounds(), &mut frame);
        frame
    }

    fn find(frame: &Frame, target: HitTarget) -> Option<(u16, u16)> {
        (0..frame.height())
            .flat_map(|y| (0..frame.width()).map(move |x| (x, y)))
            .find(|&(x, y)| HitTarget::at(frame, x, y) == Some(target))
    }

    #[test]
    fn shows_product_details() {
        let b = browser();
        let text = render(&b, 80, 30).buffer.to_text();
        assert!(text.contains("Camiseta Premium Algodón"));
        assert!(text.contains("L 2250.00"));
        assert!(text.contains("Confeccionada en algodón"));
        assert!(text.contains(" Negro "));
        assert!(text.contains(" XL "));
        assert!(text.contains("Añadir al Carrito"));
        assert!(text.contains("● ○"));
    }

    #[test]
    fn registers_every_control() {
        let b = browser();
        let frame = render(&b, 80, 30);
        for target in [
            HitTarget::Previous,
            HitTarget::Next,
            HitTarget::Favorite,
            HitTarget::AddToCart,
            HitTarget::Image,
            HitTarget::Color(0),
            HitTarget::Color(2),
            HitTarget::Size(0),
            HitTarget::Size(4),
        ] {
            assert!(find(&frame, target).is_some(), "missing {target:?}");
        }
        assert!(find(&frame, HitTarget::Color(3)).is_none());
    }

    #[test]
    fn selected_option_is_highlighted() {
        let b = browser();
        let frame = render(&b, 80, 30);
        let (x, y) = find(&frame, HitTarget::Size(2)).expect("size M");
        assert_eq!(
            frame.buffer.get(x, y).and_then(|c| c.bg),
            theme::BUTTON_SELECTED.bg
        );
        let (x, y) = find(&frame, HitTarget::Size(0)).expect("size XS");
        assert_eq!(frame.buffer.get(x, y).and_then(|c| c.bg), theme::BUTTON.bg);
    }

    #[test]
    fn favorite_heart_reflects_state() {
        let mut b = browser();
        assert!(render(&b, 80, 30).buffer.to_text().contains('♡'));
        b.toggle_current_favorite();
        assert!(render(&b, 80, 30).buffer.to_text().contains('♥'));
    }

    #[test]
    fn small_terminal_does_not_panic() {
        let b = browser();
        for (w, h) in [(1, 1), (10, 4), (20, 12), (40, 18)] {
            let _ = render(&b, w, h);
        }
    }
}
