//! Overlay layer: tooltips drawn on top of the page at their placements.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::theme::Theme;
use crate::core::tooltip::{Edge, Placement};

/// One placed tooltip.  `area` is the page viewport the placement is
/// relative to.
pub struct TooltipOverlay<'a> {
    pub placement: Placement,
    pub lines: &'a [String],
    pub theme: Theme,
}

/// Screen rect for a placement inside `area`, clipped to it.
pub fn screen_rect(placement: &Placement, area: Rect) -> Rect {
    let x = area.x as i32 + placement.left.round() as i32;
    let y = area.y as i32 + placement.top.round() as i32;
    let w = placement.size.width.round() as i32;
    let h = placement.size.height.round() as i32;

    let left = x.max(area.x as i32);
    let top = y.max(area.y as i32);
    let right = (x + w).min(area.right() as i32);
    let bottom = (y + h).min(area.bottom() as i32);
    if right <= left || bottom <= top {
        return Rect::new(area.x, area.y, 0, 0);
    }
    Rect::new(left as u16, top as u16, (right - left) as u16, (bottom - top) as u16)
}

impl Widget for TooltipOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = screen_rect(&self.placement, area);
        if rect.is_empty() {
            return;
        }
        let style = self.theme.tooltip_style();
        Clear.render(rect, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .style(style)
            .border_style(style);
        let inner = block.inner(rect);
        block.render(rect, buf);

        let body: Vec<Line> = self
            .lines
            .iter()
            .map(|l| Line::raw(format!(" {l}")))
            .collect();
        Paragraph::new(body).style(style).render(inner, buf);

        // The pointer triangle sits on the edge facing the anchor.
        if rect.width < 3 {
            return;
        }
        let arrow = self.placement.arrow;
        let glyph = if arrow.rotated { "▲" } else { "▼" };
        let top = area.y as i32 + self.placement.top.round() as i32;
        let row = match arrow.edge {
            Edge::Top => top,
            Edge::Bottom => top + self.placement.size.height.round() as i32 - 1,
        };
        let col = area.x as i32 + (self.placement.left + arrow.offset_x).round() as i32;
        let col = col.clamp(rect.x as i32 + 1, rect.right() as i32 - 2);
        if row >= rect.y as i32 && row < rect.bottom() as i32 {
            buf.set_string(col as u16, row as u16, glyph, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::{Rect as DocRect, Size};
    use crate::core::theme_mode::ThemeMode;
    use crate::core::tooltip::compute_placement;

    fn placement(anchor: DocRect) -> Placement {
        compute_placement(anchor, Size::new(12.0, 3.0), Size::new(40.0, 20.0), 1.0)
    }

    #[test]
    fn rect_is_offset_by_the_page_area() {
        let p = placement(DocRect::new(10.0, 10.0, 6.0, 1.0));
        let area = Rect::new(0, 4, 40, 20);
        let r = screen_rect(&p, area);
        assert_eq!(r.y, 4 + 6);
        assert_eq!(r.height, 3);
        assert_eq!(r.width, 12);
    }

    #[test]
    fn arrow_points_down_at_an_anchor_below() {
        let p = placement(DocRect::new(10.0, 10.0, 6.0, 1.0));
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        let lines = vec!["hello".to_string()];
        TooltipOverlay {
            placement: p,
            lines: &lines,
            theme: Theme::new(ThemeMode::Dark),
        }
        .render(area, &mut buf);

        // Tooltip spans rows 6..9; the arrow is on its bottom border.
        let bottom: String = (0..40u16).map(|x| buf[(x, 8u16)].symbol().to_string()).collect();
        assert!(bottom.contains('▼'));
        let body: String = (0..40u16).map(|x| buf[(x, 7u16)].symbol().to_string()).collect();
        assert!(body.contains("hello"));
    }

    #[test]
    fn arrow_points_up_when_placed_below() {
        let p = placement(DocRect::new(10.0, 1.0, 6.0, 1.0));
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        TooltipOverlay {
            placement: p,
            lines: &[],
            theme: Theme::new(ThemeMode::Light),
        }
        .render(area, &mut buf);
        let top: String = (0..40u16).map(|x| buf[(x, 3u16)].symbol().to_string()).collect();
        assert!(top.contains('▲'));
    }

    #[test]
    fn fully_clipped_tooltip_is_empty() {
        let mut p = placement(DocRect::new(10.0, 10.0, 6.0, 1.0));
        p.top = -10.0;
        assert!(screen_rect(&p, Rect::new(0, 0, 40, 20)).is_empty());
    }
}
