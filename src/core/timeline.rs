//! Draggable horizontal timeline.
//!
//! A press followed by motion beyond `drag_threshold` scrolls the track;
//! a press released before that is a click on whatever lies under it.

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    Pressed { x: f64, start_scroll: f64 },
    Dragging { x: f64, start_scroll: f64 },
}

/// Result of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// No press was in progress.
    None,
    /// Short press: treat as a click at this track position.
    Click(f64),
    /// The gesture moved the track.
    Dragged,
}

#[derive(Debug)]
pub struct TimelineDrag {
    scroll: f64,
    max_scroll: f64,
    threshold: f64,
    gesture: Gesture,
}

impl TimelineDrag {
    pub fn new(threshold: f64) -> Self {
        Self {
            scroll: 0.0,
            max_scroll: 0.0,
            threshold,
            gesture: Gesture::Idle,
        }
    }

    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    /// Track width minus visible width; re-clamps the current scroll.
    pub fn set_extent(&mut self, track_width: f64, visible_width: f64) {
        self.max_scroll = (track_width - visible_width).max(0.0);
        self.scroll = self.scroll.clamp(0.0, self.max_scroll);
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll = (self.scroll + delta).clamp(0.0, self.max_scroll);
    }

    pub fn press(&mut self, x: f64) {
        self.gesture = Gesture::Pressed {
            x,
            start_scroll: self.scroll,
        };
    }

    /// Pointer moved to `x`.  Returns whether the track scrolled.
    pub fn motion(&mut self, x: f64) -> bool {
        match self.gesture {
            Gesture::Idle => false,
            Gesture::Pressed { x: x0, start_scroll } => {
                if (x - x0).abs() <= self.threshold {
                    return false;
                }
                self.gesture = Gesture::Dragging {
                    x: x0,
                    start_scroll,
                };
                self.apply_drag(x0, start_scroll, x)
            }
            Gesture::Dragging { x: x0, start_scroll } => self.apply_drag(x0, start_scroll, x),
        }
    }

    fn apply_drag(&mut self, x0: f64, start_scroll: f64, x: f64) -> bool {
        let before = self.scroll;
        // Dragging right pulls earlier milestones into view.
        self.scroll = (start_scroll - (x - x0)).clamp(0.0, self.max_scroll);
        self.scroll != before
    }

    pub fn release(&mut self, x: f64) -> Release {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Idle => Release::None,
            Gesture::Pressed { .. } => Release::Click(x + self.scroll),
            Gesture::Dragging { .. } => Release::Dragged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> TimelineDrag {
        let mut t = TimelineDrag::new(3.0);
        t.set_extent(200.0, 80.0);
        t
    }

    #[test]
    fn small_motion_is_a_click() {
        let mut t = track();
        t.press(10.0);
        assert!(!t.motion(12.0));
        assert_eq!(t.release(12.0), Release::Click(12.0));
        assert_eq!(t.scroll(), 0.0);
    }

    #[test]
    fn drag_scrolls_and_clamps() {
        let mut t = track();
        t.press(60.0);
        assert!(t.motion(20.0));
        assert!(t.is_dragging());
        assert_eq!(t.scroll(), 40.0);
        t.motion(-500.0);
        assert_eq!(t.scroll(), 120.0);
        assert_eq!(t.release(-500.0), Release::Dragged);

        t.press(0.0);
        t.motion(500.0);
        assert_eq!(t.scroll(), 0.0);
    }

    #[test]
    fn click_position_accounts_for_scroll() {
        let mut t = track();
        t.scroll_by(30.0);
        t.press(5.0);
        assert_eq!(t.release(5.0), Release::Click(35.0));
        assert_eq!(t.release(5.0), Release::None);
    }

    #[test]
    fn shrinking_track_reclamps() {
        let mut t = track();
        t.scroll_by(100.0);
        t.set_extent(100.0, 80.0);
        assert_eq!(t.scroll(), 20.0);
    }
}
