#![forbid(unsafe_code)]

//! Rose/pink color theme.

use storefront_render::cell::Rgb;
use storefront_render::style::Style;

pub const ROSE_50: Rgb = Rgb::new(255, 241, 242);
pub const ROSE_200: Rgb = Rgb::new(254, 205, 211);
pub const ROSE_400: Rgb = Rgb::new(251, 113, 133);
pub const ROSE_500: Rgb = Rgb::new(244, 63, 94);
pub const ROSE_700: Rgb = Rgb::new(190, 18, 60);
pub const PINK_500: Rgb = Rgb::new(236, 72, 153);
pub const RED_500: Rgb = Rgb::new(239, 68, 68);
pub const GRAY_500: Rgb = Rgb::new(107, 114, 128);
pub const GRAY_600: Rgb = Rgb::new(75, 85, 99);
pub const GRAY_800: Rgb = Rgb::new(31, 41, 55);
pub const WHITE: Rgb = Rgb::WHITE;

/// Page background and body text.
pub const PAGE: Style = Style::new().fg(GRAY_800).bg(ROSE_50);
/// Details panel.
pub const PANEL: Style = Style::new().fg(GRAY_800).bg(WHITE);
/// Secondary text.
pub const MUTED: Style = Style::new().fg(GRAY_500);
/// Headings.
pub const HEADING: Style = Style::new().fg(GRAY_800).bold();
/// Prices and highlights.
pub const ACCENT: Style = Style::new().fg(ROSE_500).bold();
/// Unselected option button.
pub const BUTTON: Style = Style::new().fg(GRAY_800).bg(ROSE_200);
/// Selected option button and the cart handle.
pub const BUTTON_SELECTED: Style = Style::new().fg(WHITE).bg(ROSE_500).bold();
/// Primary call-to-action buttons.
pub const BUTTON_PRIMARY: Style = Style::new().fg(WHITE).bg(PINK_500).bold();
/// Borders.
pub const BORDER: Style = Style::new().fg(ROSE_400);
/// Favorite heart when set.
pub const HEART_ON: Style = Style::new().fg(RED_500).bold();
/// Favorite heart when unset.
pub const HEART_OFF: Style = Style::new().fg(GRAY_600);
/// Star rating.
pub const STARS: Style = Style::new().fg(ROSE_400);
/// Badge outline text.
pub const BADGE: Style = Style::new().fg(ROSE_700);
