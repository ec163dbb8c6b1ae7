//! Layout helpers: split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::core::scroll::NavbarMode;

/// Screen layout: navbar, progress bar, page viewport and status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub navbar_area: Rect,
    pub progress_area: Rect,
    pub page_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect, navbar: NavbarMode) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(navbar_height(navbar)),
                Constraint::Length(1), // scroll progress
                Constraint::Min(1),    // page (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            navbar_area: chunks[0],
            progress_area: chunks[1],
            page_area: chunks[2],
            status_area: chunks[3],
        }
    }
}

pub fn navbar_height(mode: NavbarMode) -> u16 {
    match mode {
        NavbarMode::Full => 3,
        NavbarMode::Compact => 1,
        NavbarMode::Hidden => 0,
    }
}

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

pub fn point_in_rect(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
