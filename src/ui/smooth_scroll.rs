//! Row-level smooth scroll with exponential ease-out.
//!
//! A jump of the logical offset injects an equal and opposite row
//! displacement so the view starts where it was; each tick the displacement
//! decays toward zero and the page glides to its target.

/// Row-offset smooth scroll animator.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    /// Rows between what is drawn and the logical offset.  Negative = the
    /// view is still above its target.
    row_offset: f64,
    /// Damping: `offset *= (1 - speed)` each tick.
    speed: f64,
}

impl SmoothScroll {
    pub fn new(speed: f64) -> Self {
        Self {
            row_offset: 0.0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// The logical offset moved from `from` to `to`; animate the difference.
    pub fn jump(&mut self, from: usize, to: usize) {
        self.row_offset += from as f64 - to as f64;
    }

    /// Stop animating; used for small steps like wheel scrolling.
    pub fn settle(&mut self) {
        self.row_offset = 0.0;
    }

    /// Decay the offset toward zero.  Call once per frame.
    pub fn tick(&mut self) {
        self.row_offset *= 1.0 - self.speed;
        if self.row_offset.abs() < 0.4 {
            self.row_offset = 0.0;
        }
    }

    /// Offset actually drawn for a logical `target`, within `[0, max]`.
    pub fn rendered(&self, target: usize, max: usize) -> usize {
        (target as f64 + self.row_offset).round().clamp(0.0, max as f64) as usize
    }

    /// True while there is visible motion left.
    pub fn is_animating(&self) -> bool {
        self.row_offset != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glides_to_target() {
        let mut s = SmoothScroll::new(0.5);
        s.jump(0, 40);
        assert_eq!(s.rendered(40, 100), 0);
        s.tick();
        assert_eq!(s.rendered(40, 100), 20);
        for _ in 0..20 {
            s.tick();
        }
        assert!(!s.is_animating());
        assert_eq!(s.rendered(40, 100), 40);
    }

    #[test]
    fn rendered_offset_is_clamped() {
        let mut s = SmoothScroll::new(0.3);
        s.jump(100, 0);
        assert_eq!(s.rendered(0, 50), 50);
        s.settle();
        assert_eq!(s.rendered(0, 50), 0);
    }
}
