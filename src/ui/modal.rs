//! Project details modal.
//!
//! Renders the selected project centred on the terminal with navigation
//! arrows, a close button, and a position indicator (e.g. "2 / 3").

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::theme::Theme;
use crate::content::Project;

pub struct ProjectModal<'a> {
    pub projects: &'a [Project],
    pub current: usize,
    pub theme: Theme,
}

/// Clickable regions returned after rendering, for mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalHitZones {
    /// The whole modal; clicks outside it close the modal.
    pub area: Rect,
    pub close_rect: Rect,
    pub prev_rect: Rect,
    pub next_rect: Rect,
}

impl ProjectModal<'_> {
    /// Centred, 70% of the terminal with sane minimums.
    fn overlay_area(terminal: Rect) -> Rect {
        let margin_x = (terminal.width as f32 * 0.15).round() as u16;
        let margin_y = (terminal.height as f32 * 0.15).round() as u16;
        let width = terminal.width.saturating_sub(margin_x * 2).max(24).min(terminal.width);
        let height = terminal.height.saturating_sub(margin_y * 2).max(8).min(terminal.height);
        Rect::new(
            terminal.x + (terminal.width - width) / 2,
            terminal.y + (terminal.height - height) / 2,
            width,
            height,
        )
    }

    /// Render and return hit zones for mouse interaction.
    pub fn render_and_hit(self, terminal_area: Rect, buf: &mut Buffer) -> ModalHitZones {
        let area = Self::overlay_area(terminal_area);
        Clear.render(area, buf);

        let total = self.projects.len();
        let project = self.projects.get(self.current);
        let title = match project {
            Some(p) => format!(" {} · {}/{} ", p.title, self.current + 1, total),
            None => " No projects ".to_string(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.heading_style())
            .style(self.theme.background())
            .title(Span::styled(
                title,
                self.theme.hero_style().add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        // Close button [X] on the top-right corner of the border.
        let close_rect = Rect::new(area.x + area.width.saturating_sub(5), area.y, 3, 1);
        buf.set_string(close_rect.x, close_rect.y, "[X]", self.theme.accent_style());

        // Navigation arrows on the left/right edges (vertically centred).
        let arrow_y = area.y + area.height / 2;
        let prev_rect = Rect::new(area.x, arrow_y, 2, 1);
        let next_rect = Rect::new(area.x + area.width.saturating_sub(2), arrow_y, 2, 1);
        if total > 1 {
            buf.set_string(prev_rect.x, prev_rect.y, "◀", self.theme.chip_style());
            buf.set_string(next_rect.x + 1, next_rect.y, "▶", self.theme.chip_style());
        }

        if let Some(p) = project {
            let body_area = Rect::new(
                inner.x.saturating_add(2),
                inner.y,
                inner.width.saturating_sub(4),
                inner.height.saturating_sub(1), // leave 1 row for footer
            );
            let text = vec![
                Line::raw(""),
                Line::styled(p.summary, self.theme.hero_style()),
                Line::raw(""),
                Line::styled(p.details, self.theme.text_style()),
                Line::raw(""),
                Line::from(vec![
                    Span::styled("Stack  ", self.theme.muted_style()),
                    Span::styled(p.stack.join(" · "), self.theme.accent_style()),
                ]),
            ];
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .render(body_area, buf);
        }

        // Footer hint.
        let footer_y = inner.y + inner.height.saturating_sub(1);
        Paragraph::new(Line::styled(" ←/→ browse   Esc close ", self.theme.muted_style()))
            .render(Rect::new(inner.x, footer_y, inner.width, 1), buf);

        ModalHitZones {
            area,
            close_rect,
            prev_rect,
            next_rect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;
    use crate::core::theme_mode::ThemeMode;
    use crate::ui::layout::point_in_rect;

    #[test]
    fn hit_zones_lie_on_the_modal_border() {
        let terminal = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(terminal);
        let zones = ProjectModal {
            projects: PROJECTS,
            current: 1,
            theme: Theme::new(ThemeMode::Dark),
        }
        .render_and_hit(terminal, &mut buf);

        assert_eq!(zones.close_rect.y, zones.area.y);
        assert!(point_in_rect(zones.area, zones.close_rect.x, zones.close_rect.y));
        assert_eq!(zones.prev_rect.x, zones.area.x);
        assert_eq!(zones.next_rect.right(), zones.area.right());
        assert_eq!(buf[(zones.close_rect.x, zones.close_rect.y)].symbol(), "[");
    }

    #[test]
    fn tiny_terminal_still_fits() {
        let terminal = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(terminal);
        let zones = ProjectModal {
            projects: PROJECTS,
            current: 0,
            theme: Theme::new(ThemeMode::Light),
        }
        .render_and_hit(terminal, &mut buf);
        assert_eq!(zones.area, terminal);
    }
}
