//! Scroll state tracker: derives the navigation chrome from scroll position.
//!
//! Everything except the previous offset (for direction) and the navbar
//! reveal timer is recomputed from scratch on each call, so the host can feed
//! it any offset at any time.

use std::time::{Duration, Instant};

use super::timer::Debounce;
use crate::content::SectionDescriptor;

/// Tunables.  Defaults suit pixel units; `AppConfig` supplies row values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Navbar stays `Full` up to this offset.
    pub compact_after: f64,
    /// Minimum downward step that hides the navbar.
    pub hide_delta: f64,
    /// Sections activate this far before their top reaches the viewport top.
    pub pre_trigger: f64,
    /// Quiet period after which a hidden navbar comes back.
    pub reveal_after: Duration,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            compact_after: 100.0,
            hide_delta: 5.0,
            pre_trigger: 150.0,
            reveal_after: Duration::from_millis(150),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarMode {
    Full,
    Compact,
    Hidden,
}

/// Per-event scroll measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    pub offset: f64,
    pub direction: ScrollDirection,
    /// Fraction of the scrollable distance covered, in `[0, 1]`.
    pub progress_ratio: f64,
}

/// Everything the chrome needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    pub snapshot: ScrollSnapshot,
    pub navbar: NavbarMode,
    /// Index into the section list.
    pub active_section: usize,
    /// `"{icon} {name}"`, absent on the first section.
    pub breadcrumb: Option<String>,
}

/// Raw measurements for one scroll event.
pub struct ScrollInput<'a, F> {
    pub offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
    pub sections: &'a [SectionDescriptor],
    /// Resolves a section id to its document top; `None` skips the section.
    pub resolve_top: F,
}

#[derive(Debug)]
pub struct ScrollTracker {
    config: ScrollConfig,
    previous_offset: f64,
    navbar: NavbarMode,
    reveal: Debounce,
}

impl ScrollTracker {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            previous_offset: 0.0,
            navbar: NavbarMode::Full,
            reveal: Debounce::new(config.reveal_after),
        }
    }

    pub fn set_config(&mut self, config: ScrollConfig) {
        self.reveal.set_delay(config.reveal_after);
        self.config = config;
    }

    #[cfg(test)]
    pub fn navbar(&self) -> NavbarMode {
        self.navbar
    }

    /// Process one scroll event.
    pub fn update<F>(&mut self, input: ScrollInput<'_, F>, now: Instant) -> NavState
    where
        F: Fn(&str) -> Option<f64>,
    {
        let offset = input.offset;
        let direction = if offset > self.previous_offset {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };

        self.navbar = if offset <= self.config.compact_after {
            NavbarMode::Full
        } else if direction == ScrollDirection::Down
            && offset > self.previous_offset + self.config.hide_delta
        {
            NavbarMode::Hidden
        } else {
            NavbarMode::Compact
        };
        self.reveal.arm(now);

        let snapshot = ScrollSnapshot {
            offset,
            direction,
            progress_ratio: progress_ratio(offset, input.viewport_height, input.document_height),
        };
        self.previous_offset = offset;

        let active_section = active_section(
            input.sections,
            offset,
            self.config.pre_trigger,
            &input.resolve_top,
        );

        NavState {
            snapshot,
            navbar: self.navbar,
            active_section,
            breadcrumb: breadcrumb(input.sections, active_section),
        }
    }

    /// Bring a hidden navbar back once scrolling has been idle long enough.
    /// Returns the new mode when it changed.
    pub fn poll(&mut self, now: Instant) -> Option<NavbarMode> {
        if !self.reveal.poll(now) || self.navbar != NavbarMode::Hidden {
            return None;
        }
        self.navbar = NavbarMode::Compact;
        Some(self.navbar)
    }
}

pub fn progress_ratio(offset: f64, viewport_height: f64, document_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

/// Last section whose (pre-triggered) top has been scrolled past; the first
/// section when none has.
pub fn active_section<F>(
    sections: &[SectionDescriptor],
    offset: f64,
    pre_trigger: f64,
    resolve_top: F,
) -> usize
where
    F: Fn(&str) -> Option<f64>,
{
    sections
        .iter()
        .enumerate()
        .rev()
        .find(|(_, s)| resolve_top(s.id).is_some_and(|top| top - pre_trigger <= offset))
        .map_or(0, |(i, _)| i)
}

pub fn breadcrumb(sections: &[SectionDescriptor], active: usize) -> Option<String> {
    if active == 0 {
        return None;
    }
    sections
        .get(active)
        .map(|s| format!("{} {}", s.icon, s.display_name))
}
