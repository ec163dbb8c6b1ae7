//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer takes the page state and turns it into cells on the terminal.
//! No file I/O happens here.

pub mod layout;
pub mod modal;
pub mod navbar;
pub mod page;
pub mod popup;
pub mod smooth_scroll;
pub mod text;
pub mod theme;
pub mod tooltip;

use ratatui::{
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::state::{ActiveView, AppState};
use crate::content;
use layout::AppLayout;
use theme::Theme;

/// Draw one frame.  Expects `app::sync::refresh` to have run for this frame.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let theme = Theme::new(state.theme);
    let area = frame.area();
    let layout = AppLayout::from_area(area, state.nav.navbar);

    frame.render_widget(Block::default().style(theme.background()), area);
    frame.render_widget(
        navbar::Navbar {
            sections: state.sections,
            nav: &state.nav,
            theme,
        },
        layout.navbar_area,
    );
    frame.render_widget(
        navbar::ProgressBar {
            ratio: state.nav.snapshot.progress_ratio,
            theme,
        },
        layout.progress_area,
    );

    // ── page ───────────────────────────────────────────────────
    let page = layout.page_area;
    let top = state.rendered_offset().min(state.doc.lines.len());
    let bottom = (top + page.height as usize).min(state.doc.lines.len());
    let visible = state.doc.lines[top..bottom].to_vec();
    frame.render_widget(Paragraph::new(visible).style(theme.background()), page);

    // ── overlay layer ──────────────────────────────────────────
    for (_, placement, lines) in state.deck.overlay() {
        frame.render_widget(
            tooltip::TooltipOverlay {
                placement,
                lines: &lines,
                theme,
            },
            page,
        );
    }

    // ── status bar ─────────────────────────────────────────────
    let hint = state.config.status_bar_hint();
    let status_text = match state.active_view {
        ActiveView::Page => state.status_message.as_deref().unwrap_or(&hint),
        _ => "",
    };
    frame.render_widget(
        Paragraph::new(status_text).style(theme.status_bar_style()),
        layout.status_area,
    );

    // ── popups ─────────────────────────────────────────────────
    match state.active_view {
        ActiveView::Page => {}
        ActiveView::SectionMenu => frame.render_widget(
            popup::SectionMenuPopup {
                sections: state.sections,
                selected: state.menu_selected,
                active: state.nav.active_section,
                theme,
            },
            area,
        ),
        ActiveView::SettingsMenu => frame.render_widget(popup::SettingsPopup { state: &*state, theme }, area),
        ActiveView::ProjectModal => {
            let zones = modal::ProjectModal {
                projects: content::PROJECTS,
                current: state.modal_project,
                theme,
            }
            .render_and_hit(area, frame.buffer_mut());
            state.modal_hits = Some(zones);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

    use super::*;
    use crate::app::sync;
    use crate::config::AppConfig;
    use crate::core::theme_mode::ThemeMode;

    fn draw(state: &mut AppState) -> Buffer {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        state.terminal_area = Rect::new(0, 0, 80, 24);
        sync::refresh(state, Instant::now());
        terminal.draw(|frame| render(frame, state)).expect("draw");
        terminal.backend().buffer().clone()
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    fn state() -> AppState {
        AppState::new(
            AppConfig::default(),
            std::env::temp_dir().join("folio-render-test.toml"),
            ThemeMode::Dark,
            Instant::now(),
        )
    }

    #[test]
    fn first_frame_shows_navbar_hero_and_hint() {
        let mut s = state();
        let buf = draw(&mut s);

        assert!(row(&buf, 0).contains(content::OWNER));
        assert!(row(&buf, 1).contains("Home"));
        let page: String = (4..20).map(|y| row(&buf, y)).collect();
        assert!(page.contains("Hi, I'm"));
        assert!(row(&buf, 23).contains("scroll"));
    }

    #[test]
    fn modal_render_records_hit_zones() {
        let mut s = state();
        s.active_view = ActiveView::ProjectModal;
        let buf = draw(&mut s);
        let zones = s.modal_hits.expect("hit zones");
        assert_eq!(buf[(zones.close_rect.x, zones.close_rect.y)].symbol(), "[");
        let title = row(&buf, zones.area.y);
        assert!(title.contains(content::PROJECTS[0].title));
    }

    #[test]
    fn shown_tooltip_is_drawn_over_the_page() {
        let mut s = state();
        s.pending_tooltip = Some(0);
        let buf = draw(&mut s);
        let screen: String = (0..24).map(|y| row(&buf, y)).collect();
        assert!(screen.contains("Semantic markup"));
    }
}
