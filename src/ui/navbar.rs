//! Top navigation bar and the scroll progress bar underneath it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::theme::Theme;
use crate::content::{self, SectionDescriptor};
use crate::core::scroll::{NavState, NavbarMode};

const LINK_GAP: u16 = 2;

fn link_label(section: &SectionDescriptor, mode: NavbarMode) -> String {
    match mode {
        NavbarMode::Full => format!("{} {}", section.icon, section.display_name),
        _ => section.icon.to_string(),
    }
}

/// Screen rects of the section links, in section order.  Links that don't
/// fit are left out (always a tail of the list).
pub fn link_rects(area: Rect, sections: &[SectionDescriptor], mode: NavbarMode) -> Vec<Rect> {
    let widths: Vec<u16> = sections
        .iter()
        .map(|s| link_label(s, mode).chars().count() as u16)
        .collect();

    let (row, mut x, right) = match mode {
        NavbarMode::Hidden => return Vec::new(),
        NavbarMode::Full => (area.y + 1, area.x + 2, area.right().saturating_sub(2)),
        // Compact links hug the right edge.
        NavbarMode::Compact => {
            let total: u16 = widths.iter().sum::<u16>() + LINK_GAP * widths.len() as u16;
            (area.y, area.right().saturating_sub(total), area.right())
        }
    };
    if area.height == 0 {
        return Vec::new();
    }

    let mut rects = Vec::new();
    for w in widths {
        if x + w > right {
            break;
        }
        rects.push(Rect::new(x, row, w, 1));
        x += w + LINK_GAP;
    }
    rects
}

pub struct Navbar<'a> {
    pub sections: &'a [SectionDescriptor],
    pub nav: &'a NavState,
    pub theme: Theme,
}

impl Widget for Navbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode = self.nav.navbar;
        if mode == NavbarMode::Hidden || area.height == 0 {
            return;
        }
        buf.set_style(area, self.theme.background());

        if mode == NavbarMode::Full {
            Block::default()
                .title(Span::styled(format!(" {} ", content::OWNER), self.theme.title_style()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(self.theme.border_style())
                .render(area, buf);
        } else {
            let mut spans = vec![Span::styled(format!(" {}", content::OWNER), self.theme.title_style())];
            if let Some(crumb) = &self.nav.breadcrumb {
                spans.push(Span::styled(" › ", self.theme.muted_style()));
                spans.push(Span::styled(crumb.clone(), self.theme.text_style()));
            }
            Paragraph::new(Line::from(spans)).render(area, buf);
        }

        let rects = link_rects(area, self.sections, mode);
        for (i, (section, rect)) in self.sections.iter().zip(rects).enumerate() {
            let style = if i == self.nav.active_section {
                self.theme.nav_link_active_style()
            } else {
                self.theme.nav_link_style()
            };
            buf.set_string(rect.x, rect.y, link_label(section, mode), style);
        }
    }
}

/// One-row bar filled to the scroll progress ratio.
pub struct ProgressBar {
    pub ratio: f64,
    pub theme: Theme,
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, self.theme.background());
        let filled = (self.ratio.clamp(0.0, 1.0) * area.width as f64).round() as usize;
        buf.set_string(area.x, area.y, "━".repeat(filled), self.theme.progress_style());
    }
}
