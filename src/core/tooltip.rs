//! Anchored tooltip positioner.
//!
//! At most one tooltip is visible.  Showing one moves it out of its flow
//! parent into the overlay layer (so ancestors can't clip it) and places it
//! above or below its anchor card, clamped horizontally into the viewport.
//! Hiding puts it back where it came from.
//!
//! The host implements [`TooltipSurface`]; the positioner only talks to it
//! through attach / detach / measure / place.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::{Duration, Instant};

use super::geometry::{Rect, Size};
use super::timer::{Debounce, FrameGate};

// ───────────────────────────────────────── surface ───────────

/// What the positioner needs from the UI layer.
pub trait TooltipSurface {
    /// Identifies a card (and the tooltip that belongs to it).
    type Card: Copy + Eq + Hash + Debug;
    /// Opaque handle to the tooltip's original place in the layout.
    type Parent;

    fn viewport(&self) -> Size;
    /// Anchor bounds in viewport coordinates; `None` if the card is gone.
    fn anchor_rect(&self, card: Self::Card) -> Option<Rect>;
    /// Take the tooltip out of its flow parent, returning that parent.
    fn detach(&mut self, card: Self::Card) -> Self::Parent;
    fn attach_overlay(&mut self, card: Self::Card);
    fn restore(&mut self, card: Self::Card, parent: &Self::Parent);
    /// Rendered tooltip size; only meaningful once attached to the overlay.
    fn measure(&mut self, card: Self::Card) -> Size;
    fn place(&mut self, card: Self::Card, placement: Placement);
    fn clear_placement(&mut self, card: Self::Card);
}

// ───────────────────────────────────────── placement ─────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Where the little pointer triangle goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub edge: Edge,
    /// Rotated 180° so it points up at the anchor.
    pub rotated: bool,
    /// Horizontal arrow position relative to the tooltip's left edge.
    pub offset_x: f64,
}

/// Fixed viewport coordinates for a shown tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub side: Side,
    pub top: f64,
    pub left: f64,
    pub size: Size,
    pub arrow: Arrow,
}

impl Placement {
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.size.width, self.size.height)
    }
}

/// Choose a side and coordinates for a tooltip of `tooltip` size next to
/// `anchor`, keeping `gap` between them and from the viewport edges.
pub fn compute_placement(anchor: Rect, tooltip: Size, viewport: Size, gap: f64) -> Placement {
    let space_above = anchor.top;
    let space_below = viewport.height - anchor.bottom();

    let side = if space_above >= tooltip.height + gap || space_above > space_below {
        Side::Above
    } else {
        Side::Below
    };

    let top = match side {
        Side::Above => anchor.top - gap - tooltip.height,
        Side::Below => anchor.bottom() + gap,
    };
    // Keep it on screen; taller than the viewport allows means centred.
    let min_top = gap;
    let max_top = viewport.height - gap - tooltip.height;
    let top = if min_top > max_top {
        (viewport.height - tooltip.height) / 2.0
    } else {
        top.clamp(min_top, max_top)
    };

    let half = tooltip.width / 2.0;
    let min_center = gap + half;
    let max_center = viewport.width - gap - half;
    let center = if min_center > max_center {
        viewport.width / 2.0
    } else {
        anchor.center_x().clamp(min_center, max_center)
    };
    let left = center - half;

    let arrow = match side {
        Side::Above => Arrow {
            edge: Edge::Bottom,
            rotated: false,
            offset_x: (anchor.center_x() - left).clamp(0.0, tooltip.width.max(0.0)),
        },
        Side::Below => Arrow {
            edge: Edge::Top,
            rotated: true,
            offset_x: (anchor.center_x() - left).clamp(0.0, tooltip.width.max(0.0)),
        },
    };

    Placement {
        side,
        top,
        left,
        size: tooltip,
        arrow,
    }
}

/// Whether `anchor` intersects the viewport shrunk by `margin` on each side.
pub fn is_in_viewport(anchor: Rect, viewport: Size, margin: f64) -> bool {
    anchor.bottom() > margin
        && anchor.top < viewport.height - margin
        && anchor.right() > margin
        && anchor.left < viewport.width - margin
}

// ───────────────────────────────────────── positioner ────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipConfig {
    pub gap: f64,
    /// Quiet period before a pointer-leave hides the tooltip.
    pub hide_delay: Duration,
    pub visibility_margin: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            gap: 8.0,
            hide_delay: Duration::from_millis(120),
            visibility_margin: 0.0,
        }
    }
}

/// Where a click landed, from the host's hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget<C> {
    Card(C),
    Tooltip(C),
    Elsewhere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipState<C> {
    Hidden,
    Shown(C),
}

pub struct TooltipPositioner<S: TooltipSurface> {
    config: TooltipConfig,
    state: TooltipState<S::Card>,
    /// Original flow parent per tooltip, remembered on first show.
    parents: HashMap<S::Card, S::Parent>,
    hide_timer: Debounce,
    frame: FrameGate,
}

impl<S: TooltipSurface> TooltipPositioner<S> {
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            state: TooltipState::Hidden,
            parents: HashMap::new(),
            hide_timer: Debounce::new(config.hide_delay),
            frame: FrameGate::default(),
        }
    }

    pub fn set_config(&mut self, config: TooltipConfig) {
        self.hide_timer.set_delay(config.hide_delay);
        self.config = config;
    }

    #[cfg(test)]
    pub fn state(&self) -> TooltipState<S::Card> {
        self.state
    }

    pub fn active(&self) -> Option<S::Card> {
        match self.state {
            TooltipState::Shown(card) => Some(card),
            TooltipState::Hidden => None,
        }
    }

    /// Show the tooltip of `card`.  Returns whether it is shown afterwards;
    /// cards outside the viewport never get one.
    pub fn show(&mut self, surface: &mut S, card: S::Card) -> bool {
        if self.active() == Some(card) {
            return true;
        }
        let Some(anchor) = surface.anchor_rect(card) else {
            return false;
        };
        if !is_in_viewport(anchor, surface.viewport(), self.config.visibility_margin) {
            tracing::debug!(?card, "tooltip refused: anchor outside viewport");
            return false;
        }

        self.hide(surface);

        if !self.parents.contains_key(&card) {
            let parent = surface.detach(card);
            self.parents.insert(card, parent);
        } else {
            // Already remembered; the node still has to leave the flow.
            let _ = surface.detach(card);
        }
        surface.attach_overlay(card);

        let size = surface.measure(card);
        let placement = compute_placement(anchor, size, surface.viewport(), self.config.gap);
        surface.place(card, placement);

        self.state = TooltipState::Shown(card);
        tracing::debug!(?card, side = ?placement.side, "tooltip shown");
        true
    }

    /// Hide the active tooltip, if any, and put it back in the flow.
    pub fn hide(&mut self, surface: &mut S) {
        self.hide_timer.cancel();
        let TooltipState::Shown(card) = self.state else {
            return;
        };
        if let Some(parent) = self.parents.get(&card) {
            surface.restore(card, parent);
        }
        surface.clear_placement(card);
        self.state = TooltipState::Hidden;
        tracing::debug!(?card, "tooltip hidden");
    }

    /// Click on a card: hide if it is the one shown, otherwise show it.
    pub fn toggle(&mut self, surface: &mut S, card: S::Card) -> bool {
        if self.active() == Some(card) {
            self.hide(surface);
            false
        } else {
            self.show(surface, card)
        }
    }

    pub fn pointer_enter(&mut self, surface: &mut S, card: S::Card) -> bool {
        self.hide_timer.cancel();
        self.show(surface, card)
    }

    /// Arm (or re-arm) the delayed hide.
    pub fn pointer_leave(&mut self, now: Instant) {
        if self.active().is_some() {
            self.hide_timer.arm(now);
        }
    }

    pub fn hide_pending(&self) -> bool {
        self.hide_timer.is_pending()
    }

    /// Fire the delayed hide when due.  Returns whether it hid something.
    pub fn poll(&mut self, surface: &mut S, now: Instant) -> bool {
        if self.hide_timer.poll(now) && self.active().is_some() {
            self.hide(surface);
            return true;
        }
        false
    }

    /// Any click that is not on the active card or its tooltip hides it.
    pub fn click_outside(&mut self, surface: &mut S, target: ClickTarget<S::Card>) {
        let Some(active) = self.active() else {
            return;
        };
        match target {
            ClickTarget::Card(c) | ClickTarget::Tooltip(c) if c == active => {}
            _ => self.hide(surface),
        }
    }

    /// Schedule a recomputation for the next frame (scroll / resize).
    pub fn request_reposition(&mut self) -> bool {
        self.active().is_some() && self.frame.request()
    }

    /// Service a pending recomputation.  Hides the tooltip when its anchor
    /// has left the viewport.
    pub fn on_frame(&mut self, surface: &mut S) {
        if !self.frame.take() {
            return;
        }
        let Some(card) = self.active() else {
            return;
        };
        let viewport = surface.viewport();
        match surface.anchor_rect(card) {
            Some(anchor) if is_in_viewport(anchor, viewport, self.config.visibility_margin) => {
                let size = surface.measure(card);
                let placement = compute_placement(anchor, size, viewport, self.config.gap);
                surface.place(card, placement);
            }
            _ => self.hide(surface),
        }
    }
}
