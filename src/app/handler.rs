//! Input handling: maps key/mouse events to state mutations.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::settings::SETTINGS_ITEMS;
use super::state::{ActiveView, AppState};
use super::sync;
use crate::config::Action;
use crate::content;
use crate::core::timeline::Release;
use crate::core::tooltip::ClickTarget;
use crate::ui::layout::{point_in_rect, AppLayout};
use crate::ui::page::MARGIN;
use crate::ui::{navbar, popup};

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: isize = 3;
/// Columns the timeline moves per wheel notch or arrow key.
const TIMELINE_STEP: f64 = 6.0;
/// How close (in cells) a click must land to a milestone dot.
const MILESTONE_HIT: f64 = 2.0;

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }
    state.status_message = None;

    match state.active_view {
        ActiveView::Page => handle_page_key(state, key, now),
        ActiveView::SectionMenu => handle_menu_key(state, key, now),
        ActiveView::ProjectModal => handle_modal_key(state, key),
        ActiveView::SettingsMenu => handle_settings_key(state, key),
    }
}

// ── Page (configurable bindings) ────────────────────────────────

fn handle_page_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    // Navigation keys that always work on the page.
    match key.code {
        KeyCode::Home => {
            sync::scroll_to(state, 0, true, now);
            return;
        }
        KeyCode::End => {
            let max = state.max_offset();
            sync::scroll_to(state, max, true, now);
            return;
        }
        KeyCode::Esc => {
            state.tooltips.hide(&mut state.deck);
            state.focused_card = None;
            return;
        }
        _ => {}
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    let page_rows = state.page_area.height.saturating_sub(2).max(1) as usize;
    let in_section = state.active_section().id;

    match action {
        Action::Quit => state.should_quit = true,
        Action::OpenSettings => {
            state.active_view = ActiveView::SettingsMenu;
            state.settings_selected = 0;
        }
        Action::ToggleMenu => {
            state.active_view = ActiveView::SectionMenu;
            state.menu_selected = state.nav.active_section;
        }
        Action::ToggleTheme => state.toggle_theme(),
        Action::ScrollUp => sync::scroll_by(state, -1, now),
        Action::ScrollDown => sync::scroll_by(state, 1, now),
        Action::PageUp => {
            let target = state.offset.saturating_sub(page_rows);
            sync::scroll_to(state, target, true, now);
        }
        Action::PageDown => {
            let target = state.offset + page_rows;
            sync::scroll_to(state, target, true, now);
        }
        Action::PrevSection => {
            let active = state.nav.active_section;
            let top = state
                .doc
                .section_top(state.sections[active].id, state.sections)
                .unwrap_or(0);
            // Mid-section goes back to this section's top first.
            let target = if state.offset > top { active } else { active.saturating_sub(1) };
            sync::go_to_section(state, target, now);
        }
        Action::NextSection => {
            let next = state.nav.active_section + 1;
            if next < state.sections.len() {
                sync::go_to_section(state, next, now);
            }
        }
        Action::NextCard => {
            if in_section == "experience" {
                state.focused_experience = (state.focused_experience + 1) % content::EXPERIENCE.len();
            } else {
                focus_next_skill(state, now);
            }
        }
        Action::CarouselPrev | Action::CarouselNext => {
            let forward = action == Action::CarouselNext;
            if in_section == "timeline" {
                step_milestone(state, forward);
            } else if forward {
                state.carousel.next();
            } else {
                state.carousel.prev();
            }
        }
        Action::OpenDetails => match in_section {
            "experience" => {
                let id = content::EXPERIENCE[state.focused_experience].id;
                state.experience.toggle(id);
            }
            "skills" => {
                if let Some(card) = state.focused_card {
                    if state.tooltips.active() == Some(card) {
                        state.tooltips.hide(&mut state.deck);
                    } else {
                        state.pending_tooltip = Some(card);
                    }
                }
            }
            _ => {
                let current = state.carousel.current();
                open_modal(state, current);
            }
        },
    }
}

/// Tab through the skill cards, bringing the card on screen and showing its
/// tooltip on the next frame.
fn focus_next_skill(state: &mut AppState, now: Instant) {
    let total = state.deck.len();
    if total == 0 {
        return;
    }
    let next = state.focused_card.map_or(0, |c| (c + 1) % total);
    state.focused_card = Some(next);

    if let Some(chip) = state.doc.skill_cards.get(next).copied() {
        let rendered = state.rendered_offset();
        let rows = state.page_area.height as usize;
        // Keep room above the card for the tooltip.
        let room = rows / 3;
        if chip.line < rendered + room || chip.line >= rendered + rows {
            sync::scroll_to(state, chip.line.saturating_sub(room.max(1) + 3), false, now);
        }
    }
    state.pending_tooltip = Some(next);
}

fn step_milestone(state: &mut AppState, forward: bool) {
    let total = content::MILESTONES.len();
    if total == 0 {
        return;
    }
    let next = match (state.selected_milestone, forward) {
        (None, _) => 0,
        (Some(i), true) => (i + 1).min(total - 1),
        (Some(i), false) => i.saturating_sub(1),
    };
    state.selected_milestone = Some(next);

    // Scroll the track so the milestone is visible.
    if let Some(geometry) = &state.doc.timeline {
        let x = geometry.milestone_x[next] as f64;
        let scroll = state.timeline.scroll();
        let visible = geometry.visible_width as f64;
        if x < scroll + TIMELINE_STEP {
            state.timeline.scroll_by(x - scroll - TIMELINE_STEP);
        } else if x > scroll + visible - TIMELINE_STEP {
            state.timeline.scroll_by(x - (scroll + visible - TIMELINE_STEP));
        }
    }
}

fn open_modal(state: &mut AppState, project: usize) {
    state.modal_project = project;
    state.active_view = ActiveView::ProjectModal;
    state.tooltips.hide(&mut state.deck);
    tracing::debug!(project = content::PROJECTS[project].title, "project modal opened");
}

fn close_modal(state: &mut AppState) {
    state.active_view = ActiveView::Page;
    state.modal_hits = None;
}

fn modal_step(state: &mut AppState, forward: bool) {
    let total = content::PROJECTS.len();
    state.modal_project = if forward {
        (state.modal_project + 1) % total
    } else {
        (state.modal_project + total - 1) % total
    };
    // The carousel follows the modal.
    state.carousel.go_to(state.modal_project);
}

// ── Section menu ────────────────────────────────────────────────

fn handle_menu_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    let total = state.sections.len();
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('m') => {
            state.active_view = ActiveView::Page;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.menu_selected = state.menu_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.menu_selected + 1 < total {
                state.menu_selected += 1;
            }
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index < total {
                state.active_view = ActiveView::Page;
                sync::go_to_section(state, index, now);
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.active_view = ActiveView::Page;
            let index = state.menu_selected;
            sync::go_to_section(state, index, now);
        }
        _ => {}
    }
}

// ── Project modal ───────────────────────────────────────────────

fn handle_modal_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('x') | KeyCode::Enter => {
            close_modal(state);
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
            modal_step(state, false);
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
            modal_step(state, true);
        }
        _ => {}
    }
}

// ── Settings (hardcoded navigation) ─────────────────────────────

fn handle_settings_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            state.active_view = ActiveView::Page;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.settings_selected = state.settings_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.settings_selected < SETTINGS_ITEMS.len() - 1 {
                state.settings_selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
            if let Some(item) = SETTINGS_ITEMS.get(state.settings_selected) {
                item.activate(state);
            }
        }
        _ => {}
    }
}

// ── Mouse ───────────────────────────────────────────────────────

/// A point inside the page viewport, in the coordinates the page and the
/// tooltip deck use.
#[derive(Debug, Clone, Copy)]
struct PagePoint {
    /// Viewport-relative column / row.
    x: f64,
    y: f64,
    col: u16,
    /// Document line under the pointer.
    line: usize,
}

fn page_point(state: &AppState, mouse: &MouseEvent) -> Option<PagePoint> {
    let area = state.page_area;
    if !point_in_rect(area, mouse.column, mouse.row) {
        return None;
    }
    let col = mouse.column - area.x;
    let row = mouse.row - area.y;
    Some(PagePoint {
        x: col as f64,
        y: row as f64,
        col,
        line: state.rendered_offset() + row as usize,
    })
}

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent, now: Instant) {
    match state.active_view {
        ActiveView::Page => handle_page_mouse(state, mouse, now),
        ActiveView::ProjectModal => handle_modal_mouse(state, mouse),
        ActiveView::SectionMenu => handle_menu_mouse(state, mouse, now),
        ActiveView::SettingsMenu => {}
    }
}

fn handle_page_mouse(state: &mut AppState, mouse: MouseEvent, now: Instant) {
    let point = page_point(state, &mouse);

    match mouse.kind {
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
            let down = mouse.kind == MouseEventKind::ScrollDown;
            if point.is_some_and(|p| on_timeline(state, p.line)) {
                state
                    .timeline
                    .scroll_by(if down { TIMELINE_STEP } else { -TIMELINE_STEP });
            } else {
                sync::scroll_by(state, if down { WHEEL_ROWS } else { -WHEEL_ROWS }, now);
            }
        }
        MouseEventKind::Moved => hover(state, point, now),
        MouseEventKind::Down(MouseButton::Left) => {
            let layout = AppLayout::from_area(state.terminal_area, state.nav.navbar);
            if point_in_rect(layout.navbar_area, mouse.column, mouse.row) {
                let links = navbar::link_rects(layout.navbar_area, state.sections, state.nav.navbar);
                if let Some(index) = links
                    .iter()
                    .position(|r| point_in_rect(*r, mouse.column, mouse.row))
                {
                    state.tooltips.click_outside(&mut state.deck, ClickTarget::Elsewhere);
                    sync::go_to_section(state, index, now);
                }
                return;
            }
            match point {
                Some(p) => page_click(state, p),
                None => state.tooltips.click_outside(&mut state.deck, ClickTarget::Elsewhere),
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(p) = point {
                state.timeline.motion(p.col.saturating_sub(MARGIN) as f64);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let x = point.map_or(0.0, |p| p.x);
            if state.swipe_in_progress {
                state.swipe_in_progress = false;
                if state.carousel.swipe_end(x) {
                    tracing::debug!(slide = state.carousel.current(), "carousel swiped");
                }
            }
            let track_x = point.map_or(0.0, |p| p.col.saturating_sub(MARGIN) as f64);
            if let Release::Click(at) = state.timeline.release(track_x) {
                select_milestone_at(state, at);
            }
        }
        _ => {}
    }
}

/// Pointer enter / leave bookkeeping for skill cards, their tooltips and the
/// projects carousel.
fn hover(state: &mut AppState, point: Option<PagePoint>, now: Instant) {
    let target = point.and_then(|p| {
        state
            .deck
            .tooltip_at(p.x, p.y)
            .or_else(|| state.deck.card_at(p.x, p.y))
    });
    if target != state.hovered_card {
        if state.hovered_card.is_some() {
            state.tooltips.pointer_leave(now);
        }
        if let Some(card) = target {
            state.tooltips.pointer_enter(&mut state.deck, card);
        }
        state.hovered_card = target;
    }

    let projects = content::section_index(state.sections, "projects");
    let over_projects = point.is_some_and(|p| projects.is_some() && state.doc.section_at(p.line) == projects);
    if over_projects != state.pointer_over_projects {
        state.pointer_over_projects = over_projects;
        if over_projects {
            state.carousel.pointer_enter();
        } else {
            state.carousel.pointer_leave(now);
        }
    }
}

fn page_click(state: &mut AppState, p: PagePoint) {
    // Tooltips first: a click anywhere but the active card or its tooltip
    // dismisses it.
    let target = match (state.deck.card_at(p.x, p.y), state.deck.tooltip_at(p.x, p.y)) {
        (_, Some(card)) => ClickTarget::Tooltip(card),
        (Some(card), None) => ClickTarget::Card(card),
        (None, None) => ClickTarget::Elsewhere,
    };
    state.tooltips.click_outside(&mut state.deck, target);
    if let ClickTarget::Card(card) = target {
        state.focused_card = Some(card);
        state.tooltips.toggle(&mut state.deck, card);
        return;
    }
    if matches!(target, ClickTarget::Tooltip(_)) {
        return;
    }

    // Carousel controls.
    let carousel = &state.doc.carousel;
    if carousel.prev.is_some_and(|r| r.contains(p.line, p.col)) {
        state.carousel.prev();
        return;
    }
    if carousel.next.is_some_and(|r| r.contains(p.line, p.col)) {
        state.carousel.next();
        return;
    }
    if let Some(i) = carousel.indicators.iter().position(|r| r.contains(p.line, p.col)) {
        state.carousel.go_to(i);
        return;
    }

    // Experience headers.
    if let Some(i) = state
        .doc
        .experience_headers
        .iter()
        .position(|&(line, _)| line == p.line)
    {
        let id = state.doc.experience_headers[i].1;
        state.focused_experience = i;
        state.experience.toggle(id);
        return;
    }

    if on_timeline(state, p.line) {
        state.timeline.press(p.col.saturating_sub(MARGIN) as f64);
        return;
    }

    let projects = content::section_index(state.sections, "projects");
    if projects.is_some() && state.doc.section_at(p.line) == projects {
        state.carousel.swipe_start(p.x);
        state.swipe_in_progress = true;
    }
}

/// Track or year-label row of the timeline.
fn on_timeline(state: &AppState, line: usize) -> bool {
    state
        .doc
        .timeline
        .as_ref()
        .is_some_and(|t| line == t.line || line == t.line + 1)
}

fn select_milestone_at(state: &mut AppState, track_x: f64) {
    let Some(geometry) = &state.doc.timeline else {
        return;
    };
    let hit = geometry
        .milestone_x
        .iter()
        .position(|&x| (x as f64 - track_x).abs() <= MILESTONE_HIT);
    if let Some(i) = hit {
        state.selected_milestone = Some(i);
        tracing::debug!(year = content::MILESTONES[i].year, "milestone selected");
    }
}

fn handle_modal_mouse(state: &mut AppState, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let Some(zones) = state.modal_hits else {
            return;
        };
        if point_in_rect(zones.close_rect, mouse.column, mouse.row)
            || !point_in_rect(zones.area, mouse.column, mouse.row)
        {
            close_modal(state);
        } else if point_in_rect(zones.prev_rect, mouse.column, mouse.row) {
            modal_step(state, false);
        } else if point_in_rect(zones.next_rect, mouse.column, mouse.row) {
            modal_step(state, true);
        }
    }
}

fn handle_menu_mouse(state: &mut AppState, mouse: MouseEvent, now: Instant) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let popup: Rect = popup::section_menu_area(state.sections, state.terminal_area);
        if !point_in_rect(popup, mouse.column, mouse.row) {
            state.active_view = ActiveView::Page;
            return;
        }
        let hit = (0..state.sections.len()).find(|&i| popup::section_menu_row(popup, i) == mouse.row);
        if let Some(index) = hit {
            state.active_view = ActiveView::Page;
            sync::go_to_section(state, index, now);
        }
    }
}

/// The terminal lost focus: treat it as the pointer leaving everything.
pub fn handle_focus_lost(state: &mut AppState, now: Instant) {
    hover(state, None, now);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::theme_mode::ThemeMode;
    use crate::core::geometry::Rect as DocRect;
    use crate::core::tooltip::{TooltipState, TooltipSurface};

    fn state(name: &str) -> AppState {
        let now = Instant::now();
        let path = std::env::temp_dir()
            .join(format!("folio-handler-{}-{name}", std::process::id()))
            .join("config.toml");
        let mut s = AppState::new(AppConfig::default(), path, ThemeMode::Dark, now);
        s.terminal_area = Rect::new(0, 0, 80, 30);
        sync::refresh(&mut s, now);
        s
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Screen position of a document cell, if on screen.
    fn screen(s: &AppState, line: usize, col: u16) -> (u16, u16) {
        let row = line - s.rendered_offset();
        (s.page_area.x + col, s.page_area.y + row as u16)
    }

    #[test]
    fn tab_focuses_skills_and_shows_tooltip() {
        let mut s = state("tab");
        let now = Instant::now();
        handle_key(&mut s, key(KeyCode::Tab), now);
        sync::refresh(&mut s, now);

        assert_eq!(s.focused_card, Some(0));
        assert_eq!(s.tooltips.state(), TooltipState::Shown(0));

        handle_key(&mut s, key(KeyCode::Tab), now);
        sync::refresh(&mut s, now);
        assert_eq!(s.tooltips.state(), TooltipState::Shown(1));

        handle_key(&mut s, key(KeyCode::Esc), now);
        assert_eq!(s.tooltips.state(), TooltipState::Hidden);
    }

    #[test]
    fn clicking_a_card_toggles_and_clicking_elsewhere_hides() {
        let mut s = state("click");
        let now = Instant::now();
        let chip = s.doc.skill_cards[0];
        let (col, row) = screen(&s, chip.line, chip.col);

        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), col, row), now);
        assert_eq!(s.tooltips.state(), TooltipState::Shown(0));

        let (col, row) = screen(&s, 0, 2);
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), col, row), now);
        assert_eq!(s.tooltips.state(), TooltipState::Hidden);
    }

    #[test]
    fn hover_leave_hides_after_the_delay() {
        let mut s = state("hover");
        let now = Instant::now();
        let chip = s.doc.skill_cards[1];
        let (col, row) = screen(&s, chip.line, chip.col);

        handle_mouse(&mut s, mouse(MouseEventKind::Moved, col, row), now);
        assert_eq!(s.tooltips.state(), TooltipState::Shown(1));

        let (col, row) = screen(&s, 0, 2);
        handle_mouse(&mut s, mouse(MouseEventKind::Moved, col, row), now);
        assert!(s.tooltips.hide_pending());
        sync::tick(&mut s, now + std::time::Duration::from_millis(50));
        assert_eq!(s.tooltips.state(), TooltipState::Shown(1));
        sync::tick(&mut s, now + std::time::Duration::from_millis(200));
        assert_eq!(s.tooltips.state(), TooltipState::Hidden);
    }

    #[test]
    fn hovering_a_tooltip_over_another_card_keeps_it() {
        let mut s = state("overlap");
        let now = Instant::now();
        let chip = s.doc.skill_cards[0];
        let (col, row) = screen(&s, chip.line, chip.col);
        handle_mouse(&mut s, mouse(MouseEventKind::Moved, col, row), now);
        assert_eq!(s.tooltips.state(), TooltipState::Shown(0));

        // Put card 1 underneath the shown tooltip.
        let (_, p, _) = s.deck.overlay().next().expect("shown");
        let (x, y) = (p.left + 1.0, p.top + 1.0);
        let mut anchors: Vec<_> = (0..s.deck.len()).map(|c| s.deck.anchor_rect(c)).collect();
        anchors[1] = Some(DocRect::new(x, y, 4.0, 1.0));
        s.deck.set_anchors(anchors);
        assert_eq!(s.deck.card_at(x, y), Some(1));

        let point = PagePoint {
            x,
            y,
            col: x as u16,
            line: s.rendered_offset() + y as usize,
        };
        hover(&mut s, Some(point), now);
        assert_eq!(s.tooltips.state(), TooltipState::Shown(0));
        assert_eq!(s.hovered_card, Some(0));
        assert!(!s.tooltips.hide_pending());
    }

    #[test]
    fn section_menu_jumps_to_the_chosen_section() {
        let mut s = state("menu");
        let now = Instant::now();
        handle_key(&mut s, key(KeyCode::Char('m')), now);
        assert_eq!(s.active_view, ActiveView::SectionMenu);

        handle_key(&mut s, key(KeyCode::Char('5')), now);
        assert_eq!(s.active_view, ActiveView::Page);
        let top = s.doc.section_top("experience", s.sections).expect("experience");
        assert_eq!(s.offset, top.min(s.max_offset()));
    }

    #[test]
    fn enter_opens_project_modal_and_arrows_follow_the_carousel() {
        let mut s = state("modal");
        let now = Instant::now();
        s.carousel.go_to(1);
        handle_key(&mut s, key(KeyCode::Enter), now);
        assert_eq!(s.active_view, ActiveView::ProjectModal);
        assert_eq!(s.modal_project, 1);

        handle_key(&mut s, key(KeyCode::Right), now);
        assert_eq!(s.modal_project, 2);
        assert_eq!(s.carousel.current(), 2);
        handle_key(&mut s, key(KeyCode::Right), now);
        assert_eq!(s.modal_project, 0);

        handle_key(&mut s, key(KeyCode::Esc), now);
        assert_eq!(s.active_view, ActiveView::Page);
    }

    #[test]
    fn clicking_an_experience_header_expands_it() {
        let mut s = state("exp");
        let now = Instant::now();
        let (line, id) = s.doc.experience_headers[1];
        let top = s.doc.section_top("experience", s.sections).expect("experience");
        sync::scroll_to(&mut s, top, false, now);
        sync::refresh(&mut s, now);

        let (col, row) = screen(&s, line, 4);
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), col, row), now);
        assert!(s.experience.is_expanded(id));
        assert_eq!(s.focused_experience, 1);
    }

    #[test]
    fn short_press_on_the_timeline_selects_a_milestone() {
        let mut s = state("timeline");
        let now = Instant::now();
        let top = s.doc.section_top("timeline", s.sections).expect("timeline");
        sync::scroll_to(&mut s, top, false, now);
        sync::refresh(&mut s, now);

        let geometry = s.doc.timeline.clone().expect("timeline geometry");
        let x = MARGIN + geometry.milestone_x[1] as u16;
        let (col, row) = screen(&s, geometry.line, x);
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), col, row), now);
        handle_mouse(&mut s, mouse(MouseEventKind::Up(MouseButton::Left), col, row), now);
        assert_eq!(s.selected_milestone, Some(1));
    }
}
