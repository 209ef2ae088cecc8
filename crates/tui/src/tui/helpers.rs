use std::cmp::min;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::{PaletteKey, Theme};

/// Theme-dependent base colors. The accent itself comes from the active
/// palette key, not from here.
#[derive(Debug, Clone, Copy)]
pub struct UiPalette {
    pub bg_base: Color,
    pub bg_panel: Color,
    pub bg_accent: Color,
    pub fg_text: Color,
    pub fg_dim: Color,
}

impl UiPalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg_base: Color::Rgb(14, 17, 23),
                bg_panel: Color::Rgb(22, 26, 34),
                bg_accent: Color::Rgb(32, 37, 47),
                fg_text: Color::Rgb(230, 233, 239),
                fg_dim: Color::Rgb(110, 118, 132),
            },
            Theme::Light => Self {
                bg_base: Color::Rgb(243, 244, 248),
                bg_panel: Color::Rgb(252, 252, 254),
                bg_accent: Color::Rgb(228, 231, 238),
                fg_text: Color::Rgb(28, 32, 40),
                fg_dim: Color::Rgb(130, 138, 152),
            },
        }
    }
}

pub fn palette_color(key: PaletteKey) -> Color {
    let (r, g, b) = key.rgb();
    Color::Rgb(r, g, b)
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = min(width, area.width);
    let h = min(height, area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

pub fn inset_rect(area: Rect, padding: u16) -> Rect {
    if area.width == 0 || area.height == 0 {
        return area;
    }
    let px = padding.min(area.width / 2);
    let py = padding.min(area.height / 2);
    Rect {
        x: area.x + px,
        y: area.y + py,
        width: area.width.saturating_sub(px * 2),
        height: area.height.saturating_sub(py * 2),
    }
}

pub fn accent_title(text: &str, accent: Color) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_owned(),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    )])
}

pub fn build_help_lines() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Tab / ← / →", "Switch between goals and tasks"),
        ("j / k or ↓ / ↑", "Move selection"),
        ("Enter / Space", "Edit goal title, or toggle task"),
        ("a", "Add a goal or task to the focused panel"),
        ("e", "Edit selected goal's title"),
        ("u", "Edit selected goal's current count"),
        ("t", "Edit selected goal's target"),
        ("1 – 5", "Log mood (amazing … stressed)"),
        ("d", "Toggle light/dark theme"),
        ("v", "Cycle the accent color"),
        ("r / w / p", "Quick actions: reading, workout, Spanish"),
        ("m", "Message your coach"),
        ("h", "Toggle this help overlay"),
        ("Esc", "Cancel/close overlays"),
        ("q", "Quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_keeps_within_bounds() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let rect = centered_rect(40, 10, area);
        assert!(rect.x >= area.x);
        assert!(rect.y >= area.y);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);
    }

    #[test]
    fn palette_color_matches_the_key_rgb() {
        assert_eq!(
            palette_color(PaletteKey::Blue),
            Color::Rgb(0x3b, 0x82, 0xf6)
        );
    }
}
