//! Popup overlay widgets for the section menu and the settings menu.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::layout::centered_fixed;
use super::theme::Theme;
use crate::app::settings::SETTINGS_ITEMS;
use crate::app::state::AppState;
use crate::content::SectionDescriptor;

fn popup_block(title: &'static str, theme: Theme) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(theme.title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style())
        .style(theme.background())
}

// ───────────────────────────────────────── section menu ──────

/// Rect of the section menu popup, shared with mouse hit-testing.
pub fn section_menu_area(sections: &[SectionDescriptor], area: Rect) -> Rect {
    centered_fixed(32, sections.len() as u16 + 5, area)
}

/// Row of entry `index` inside the section menu popup.
pub fn section_menu_row(popup: Rect, index: usize) -> u16 {
    popup.y + 2 + index as u16
}

/// Full-screen style menu listing every section.
pub struct SectionMenuPopup<'a> {
    pub sections: &'a [SectionDescriptor],
    pub selected: usize,
    pub active: usize,
    pub theme: Theme,
}

impl Widget for SectionMenuPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = section_menu_area(self.sections, area);
        Clear.render(popup, buf);

        let block = popup_block("Sections", self.theme);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![Line::raw("")];
        for (i, section) in self.sections.iter().enumerate() {
            let prefix = if i == self.selected { " ▸ " } else { "   " };
            let style = if i == self.selected {
                self.theme.selected_style()
            } else if i == self.active {
                self.theme.nav_link_active_style()
            } else {
                self.theme.text_style()
            };
            lines.push(Line::from(Span::styled(
                format!("{prefix}{} {}", section.icon, section.display_name),
                style,
            )));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled("  Enter: go  Esc: close", self.theme.muted_style()));

        Paragraph::new(lines).render(inner, buf);
    }
}

// ───────────────────────────────────────── settings popup ────

/// Settings menu popup overlay.
pub struct SettingsPopup<'a> {
    pub state: &'a AppState,
    pub theme: Theme,
}

impl Widget for SettingsPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (SETTINGS_ITEMS.len() as u16) + 6;
        let popup = centered_fixed(46, height, area);
        Clear.render(popup, buf);

        let block = popup_block("Settings", self.theme);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        for (i, item) in SETTINGS_ITEMS.iter().enumerate() {
            let selected = i == self.state.settings_selected;
            let (prefix, style) = if selected {
                (" ▸ ", self.theme.selected_style())
            } else {
                ("   ", self.theme.text_style())
            };

            // Fixed-width columns: label left-aligned, value right-aligned.
            let label_col = format!("{prefix}{:<22}", item.label());
            let value_width = (inner.width as usize).saturating_sub(label_col.chars().count() + 1).max(1);
            let value_col = format!("{:>value_width$}", item.display(self.state));
            lines.push(Line::from(vec![
                Span::styled(label_col, style),
                Span::styled(value_col, self.theme.accent_style()),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "  Enter/Space: change  Esc: close",
            self.theme.muted_style(),
        ));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SECTIONS;
    use crate::core::theme_mode::ThemeMode;

    #[test]
    fn menu_rows_line_up_with_rendered_entries() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        SectionMenuPopup {
            sections: SECTIONS,
            selected: 2,
            active: 0,
            theme: Theme::new(ThemeMode::Dark),
        }
        .render(area, &mut buf);

        let popup = section_menu_area(SECTIONS, area);
        let row = section_menu_row(popup, 2);
        let text: String = (popup.x..popup.right())
            .map(|x| buf[(x, row)].symbol().to_string())
            .collect();
        assert!(text.contains("▸ ⚙ Skills"), "row was {text:?}");
    }
}
