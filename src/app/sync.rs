//! Glue between the headless controllers and the rendered page.
//!
//! `refresh` runs before every draw: it rebuilds the page document, feeds the
//! fresh geometry to the tooltip deck, the reveal tracker and the timeline,
//! and services any pending tooltip recomputation.  `scroll_to` / `scroll_by`
//! move the page and run the scroll tracker; `tick` advances every timer.

use std::time::Instant;

use super::state::AppState;
use crate::core::geometry::{Rect, Size};
use crate::core::scroll::ScrollInput;
use crate::ui::{layout::AppLayout, page};

/// Rebuild the page for this frame and bring geometry-dependent state up to date.
pub fn refresh(state: &mut AppState, now: Instant) {
    let layout = AppLayout::from_area(state.terminal_area, state.nav.navbar);
    if layout.page_area != state.page_area {
        state.page_area = layout.page_area;
        state.tooltips.request_reposition();
    }
    let width = state.page_area.width;

    state.doc = page::build(state, width, now);
    state.offset = state.offset.min(state.max_offset());
    let rendered = state.rendered_offset() as f64;
    let viewport_height = state.page_area.height as f64;

    // Fade-ins; a newly revealed section changes styling, so rebuild.
    let revealed = state
        .reveal
        .observe(&state.doc.extents(), rendered, viewport_height);
    if !revealed.is_empty() {
        for &index in &revealed {
            let id = state.sections[index].id;
            tracing::debug!(section = id, "section revealed");
            if id == "testimonials" {
                state.chat.start(now);
            }
        }
        state.doc = page::build(state, width, now);
    }

    if let Some(timeline) = &state.doc.timeline {
        state
            .timeline
            .set_extent(timeline.track_width as f64, timeline.visible_width as f64);
    }

    // Skill card anchors in page-viewport coordinates.
    state
        .deck
        .set_viewport(Size::new(width as f64, viewport_height));
    let anchors = state
        .doc
        .skill_cards
        .iter()
        .map(|c| {
            Some(Rect::new(
                c.col as f64,
                c.line as f64 - rendered,
                c.width as f64,
                1.0,
            ))
        })
        .collect();
    state.deck.set_anchors(anchors);

    if let Some(card) = state.pending_tooltip.take() {
        if !state.tooltips.show(&mut state.deck, card) {
            tracing::debug!(card, "tooltip anchor not visible; not shown");
        }
    }
    state.tooltips.on_frame(&mut state.deck);
}

/// Move the logical offset, optionally gliding there.
pub fn scroll_to(state: &mut AppState, target: usize, smooth: bool, now: Instant) {
    let target = target.min(state.max_offset());
    if smooth {
        state.smooth.jump(state.offset, target);
    } else {
        state.smooth.settle();
    }
    if target == state.offset {
        return;
    }
    state.offset = target;
    track_scroll(state, now);
}

pub fn scroll_by(state: &mut AppState, delta: isize, now: Instant) {
    let target = state.offset.saturating_add_signed(delta);
    scroll_to(state, target, false, now);
}

/// Jump to a section by index, gliding.
pub fn go_to_section(state: &mut AppState, index: usize, now: Instant) {
    let Some(section) = state.sections.get(index) else {
        return;
    };
    match state.doc.section_top(section.id, state.sections) {
        Some(top) => scroll_to(state, top, true, now),
        None => tracing::warn!(section = section.id, "section has no position yet"),
    }
}

/// Run the scroll tracker for the current offset.
fn track_scroll(state: &mut AppState, now: Instant) {
    let doc = &state.doc;
    let sections = state.sections;
    let input = ScrollInput {
        offset: state.offset as f64,
        viewport_height: state.page_area.height as f64,
        document_height: doc.height() as f64,
        sections,
        resolve_top: |id: &str| doc.section_top(id, sections).map(|top| top as f64),
    };
    let previous = state.nav.active_section;
    state.nav = state.tracker.update(input, now);
    if state.nav.active_section != previous {
        tracing::debug!(
            section = state.sections[state.nav.active_section].id,
            "active section changed"
        );
    }
    state.tooltips.request_reposition();
}

/// Advance every time-driven component.  Called on each event-loop tick.
pub fn tick(state: &mut AppState, now: Instant) {
    if let Some(mode) = state.tracker.poll(now) {
        state.nav.navbar = mode;
        state.tooltips.request_reposition();
    }
    if state.tooltips.hide_pending() && state.tooltips.poll(&mut state.deck, now) {
        tracing::trace!("tooltip hidden after pointer left");
    }
    if state.carousel.tick(now) {
        tracing::trace!(slide = state.carousel.current(), "carousel autoplay");
    }
    if !state.typewriter.is_done() {
        state.typewriter.tick(now);
    }
    state.chat.tick(now);
    state.experience.tick();

    if state.smooth.is_animating() {
        state.smooth.tick();
        state.tooltips.request_reposition();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::scroll::NavbarMode;
    use crate::core::theme_mode::ThemeMode;
    use crate::core::tooltip::TooltipState;
    use ratatui::layout::Rect as ScreenRect;

    fn state() -> AppState {
        let now = Instant::now();
        let mut s = AppState::new(
            AppConfig::default(),
            std::env::temp_dir().join("folio-sync-test.toml"),
            ThemeMode::Dark,
            now,
        );
        s.terminal_area = ScreenRect::new(0, 0, 80, 24);
        refresh(&mut s, now);
        s
    }

    #[test]
    fn scrolling_into_a_section_activates_it() {
        let mut s = state();
        let now = Instant::now();
        let top = s.doc.section_top("projects", s.sections).expect("projects");
        scroll_to(&mut s, top, false, now);
        refresh(&mut s, now);

        assert_eq!(s.active_section().id, "projects");
        assert_eq!(s.nav.breadcrumb.as_deref(), Some("◆ Projects"));
        assert_ne!(s.nav.navbar, NavbarMode::Full);
    }

    #[test]
    fn offset_is_clamped_to_the_document() {
        let mut s = state();
        let now = Instant::now();
        scroll_to(&mut s, usize::MAX / 2, false, now);
        assert_eq!(s.offset, s.max_offset());
        scroll_by(&mut s, -10_000, now);
        assert_eq!(s.offset, 0);
        assert_eq!(s.nav.navbar, NavbarMode::Full);
    }

    #[test]
    fn reaching_testimonials_starts_the_chat() {
        let mut s = state();
        let now = Instant::now();
        assert!(!s.chat.is_typing());
        let top = s.doc.section_top("testimonials", s.sections).expect("testimonials");
        scroll_to(&mut s, top, false, now);
        refresh(&mut s, now);
        assert!(s.chat.is_typing());
    }

    #[test]
    fn tooltip_hides_once_its_card_scrolls_away() {
        let mut s = state();
        let now = Instant::now();
        let skills = s.doc.section_top("skills", s.sections).expect("skills");
        scroll_to(&mut s, skills, false, now);
        refresh(&mut s, now);

        s.pending_tooltip = Some(0);
        refresh(&mut s, now);
        assert_eq!(s.tooltips.state(), TooltipState::Shown(0));

        let far = s.doc.section_top("contact", s.sections).expect("contact");
        scroll_to(&mut s, far, false, now);
        refresh(&mut s, now);
        assert_eq!(s.tooltips.state(), TooltipState::Hidden);
    }
}
