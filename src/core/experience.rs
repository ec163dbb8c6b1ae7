//! Expandable experience cards.
//!
//! Instant and animated expansion share one code path: `Instant` simply
//! reveals the whole body on the first step.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpandStyle {
    #[default]
    Instant,
    /// Grow or shrink the body one line per tick.
    Animated,
}

impl ExpandStyle {
    pub const ALL: &[ExpandStyle] = &[ExpandStyle::Instant, ExpandStyle::Animated];

    pub fn label(self) -> &'static str {
        match self {
            ExpandStyle::Instant => "instant",
            ExpandStyle::Animated => "animated",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.label() == s)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct CardState {
    expanded: bool,
    /// Body lines currently visible.
    shown: usize,
    body_lines: usize,
}

#[derive(Debug)]
pub struct ExperienceCards {
    style: ExpandStyle,
    cards: HashMap<&'static str, CardState>,
}

impl ExperienceCards {
    /// `cards` pairs each card id with its body line count.
    pub fn new(style: ExpandStyle, cards: &[(&'static str, usize)]) -> Self {
        Self {
            style,
            cards: cards
                .iter()
                .map(|&(id, body_lines)| {
                    (
                        id,
                        CardState {
                            body_lines,
                            ..CardState::default()
                        },
                    )
                })
                .collect(),
        }
    }

    #[cfg(test)]
    pub fn style(&self) -> ExpandStyle {
        self.style
    }

    pub fn set_style(&mut self, style: ExpandStyle) {
        self.style = style;
    }

    /// Flip a card.  Unknown ids are reported and ignored.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(card) = self.cards.get_mut(id) else {
            tracing::warn!(id, "experience card not found; toggle ignored");
            return false;
        };
        card.expanded = !card.expanded;
        if self.style == ExpandStyle::Instant {
            card.shown = if card.expanded { card.body_lines } else { 0 };
        }
        true
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.cards.get(id).is_some_and(|c| c.expanded)
    }

    /// Body lines to render right now.
    pub fn visible_lines(&self, id: &str) -> usize {
        self.cards.get(id).map_or(0, |c| c.shown)
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.cards.values().any(|c| {
            let target = if c.expanded { c.body_lines } else { 0 };
            c.shown != target
        })
    }

    /// One animation step.  Returns whether anything moved.
    pub fn tick(&mut self) -> bool {
        let mut moved = false;
        for card in self.cards.values_mut() {
            let target = if card.expanded { card.body_lines } else { 0 };
            if card.shown < target {
                card.shown += 1;
                moved = true;
            } else if card.shown > target {
                card.shown -= 1;
                moved = true;
            }
        }
        moved
    }
}

/// "2 yrs 3 mos" between two month starts; `end` defaults to `today`.
pub fn tenure(start: NaiveDate, end: Option<NaiveDate>, today: NaiveDate) -> String {
    let end = end.unwrap_or(today);
    let months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32 + 1;
    let months = months.max(1);
    let (y, m) = (months / 12, months % 12);
    let plural = |n: i32, one: &str, many: &str| {
        if n == 1 {
            format!("{n} {one}")
        } else {
            format!("{n} {many}")
        }
    };
    match (y, m) {
        (0, m) => plural(m, "mo", "mos"),
        (y, 0) => plural(y, "yr", "yrs"),
        (y, m) => format!("{} {}", plural(y, "yr", "yrs"), plural(m, "mo", "mos")),
    }
}
