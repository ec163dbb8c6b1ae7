//! The skill cards and their tooltips as seen by the tooltip positioner.
//!
//! Each tooltip lives inline under its card (hidden) until the positioner
//! moves it to the overlay layer.  Anchor rectangles are refreshed from the
//! page layout every frame, in page-viewport coordinates.

use crate::core::geometry::{Rect, Size};
use crate::core::tooltip::{Placement, TooltipSurface};
use crate::ui::text::wrap;

/// Where a tooltip node currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mount {
    /// Inside its card, out of sight.
    Inline(usize),
    /// Taken out of the flow, not attached anywhere yet.
    Detached,
    /// Drawn on top of everything at its placement.
    Overlay,
}

/// Widest tooltip body, in cells.
const MAX_TEXT_WIDTH: usize = 34;

#[derive(Debug)]
pub struct SkillDeck {
    texts: Vec<&'static str>,
    viewport: Size,
    anchors: Vec<Option<Rect>>,
    mounts: Vec<Mount>,
    placements: Vec<Option<Placement>>,
}

impl SkillDeck {
    pub fn new(texts: Vec<&'static str>) -> Self {
        let n = texts.len();
        Self {
            texts,
            viewport: Size::default(),
            anchors: vec![None; n],
            mounts: (0..n).map(Mount::Inline).collect(),
            placements: vec![None; n],
        }
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Replace anchor rectangles (index = card).
    pub fn set_anchors(&mut self, anchors: Vec<Option<Rect>>) {
        self.anchors = anchors;
        self.anchors.resize(self.texts.len(), None);
    }

    #[cfg(test)]
    pub fn mount(&self, card: usize) -> Option<Mount> {
        self.mounts.get(card).copied()
    }

    /// Card under a viewport point.
    pub fn card_at(&self, x: f64, y: f64) -> Option<usize> {
        self.anchors
            .iter()
            .position(|a| a.is_some_and(|r| r.contains(x, y)))
    }

    /// Overlay tooltip under a viewport point.
    pub fn tooltip_at(&self, x: f64, y: f64) -> Option<usize> {
        self.overlay().find_map(|(card, p, _)| p.rect().contains(x, y).then_some(card))
    }

    /// Tooltips currently on the overlay with their placement and lines.
    pub fn overlay(&self) -> impl Iterator<Item = (usize, Placement, Vec<String>)> + '_ {
        self.mounts.iter().enumerate().filter_map(move |(card, mount)| {
            let placement = self.placements[card]?;
            (*mount == Mount::Overlay).then(|| (card, placement, self.lines(card)))
        })
    }

    fn text_width(&self) -> usize {
        let room = (self.viewport.width as usize).saturating_sub(6);
        MAX_TEXT_WIDTH.min(room).max(8)
    }

    fn lines(&self, card: usize) -> Vec<String> {
        wrap(self.texts[card], self.text_width())
    }
}

impl TooltipSurface for SkillDeck {
    type Card = usize;
    type Parent = Mount;

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn anchor_rect(&self, card: usize) -> Option<Rect> {
        self.anchors.get(card).copied().flatten()
    }

    fn detach(&mut self, card: usize) -> Mount {
        std::mem::replace(&mut self.mounts[card], Mount::Detached)
    }

    fn attach_overlay(&mut self, card: usize) {
        self.mounts[card] = Mount::Overlay;
    }

    fn restore(&mut self, card: usize, parent: &Mount) {
        self.mounts[card] = *parent;
    }

    fn measure(&mut self, card: usize) -> Size {
        let lines = self.lines(card);
        let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        // Border plus one cell of padding on each side.
        Size::new((widest + 4) as f64, (lines.len() + 2) as f64)
    }

    fn place(&mut self, card: usize, placement: Placement) {
        self.placements[card] = Some(placement);
    }

    fn clear_placement(&mut self, card: usize) {
        self.placements[card] = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tooltip::{Side, TooltipConfig, TooltipPositioner};

    fn deck() -> SkillDeck {
        let mut deck = SkillDeck::new(vec!["short", "a somewhat longer tooltip text"]);
        deck.set_viewport(Size::new(80.0, 24.0));
        deck.set_anchors(vec![
            Some(Rect::new(2.0, 2.0, 8.0, 1.0)),
            Some(Rect::new(20.0, 12.0, 12.0, 1.0)),
        ]);
        deck
    }

    fn positioner() -> TooltipPositioner<SkillDeck> {
        TooltipPositioner::new(TooltipConfig {
            gap: 1.0,
            ..TooltipConfig::default()
        })
    }

    #[test]
    fn tooltip_moves_to_overlay_and_back() {
        let mut deck = deck();
        let mut tips = positioner();

        assert!(tips.show(&mut deck, 0));
        assert_eq!(deck.mount(0), Some(Mount::Overlay));
        let (card, placement, lines) = deck.overlay().next().expect("one tooltip");
        assert_eq!(card, 0);
        assert_eq!(lines, vec!["short".to_string()]);
        // Card on row 2 has no room above for a 3-row tooltip.
        assert_eq!(placement.side, Side::Below);
        assert_eq!(placement.top, 4.0);

        tips.hide(&mut deck);
        assert_eq!(deck.mount(0), Some(Mount::Inline(0)));
        assert_eq!(deck.overlay().count(), 0);
    }

    #[test]
    fn only_one_tooltip_on_the_overlay() {
        let mut deck = deck();
        let mut tips = positioner();
        tips.show(&mut deck, 0);
        tips.show(&mut deck, 1);
        let shown: Vec<usize> = deck.overlay().map(|(c, _, _)| c).collect();
        assert_eq!(shown, vec![1]);
        assert_eq!(deck.mount(0), Some(Mount::Inline(0)));
    }

    #[test]
    fn hit_testing() {
        let mut deck = deck();
        assert_eq!(deck.card_at(3.0, 2.0), Some(0));
        assert_eq!(deck.card_at(3.0, 3.0), None);

        let mut tips = positioner();
        tips.show(&mut deck, 1);
        let (_, p, _) = deck.overlay().next().expect("shown");
        assert_eq!(deck.tooltip_at(p.left + 1.0, p.top + 1.0), Some(1));
    }
}
