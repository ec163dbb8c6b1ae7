//! One-shot "fade in when scrolled into view" tracking.

/// Per-section reveal flags.  A section flips to revealed the first time
/// enough of it intersects the viewport and stays revealed.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    /// Fraction of a section's height that must be visible, in `(0, 1]`.
    threshold: f64,
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(sections: usize, threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.01, 1.0),
            revealed: vec![false; sections],
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Observe the current viewport.  `extents` are `(top, height)` per
    /// section in document coordinates.  Returns indices revealed by this call.
    pub fn observe(&mut self, extents: &[(f64, f64)], offset: f64, viewport_height: f64) -> Vec<usize> {
        let view_top = offset;
        let view_bottom = offset + viewport_height;
        let mut newly = Vec::new();

        for (i, &(top, height)) in extents.iter().enumerate() {
            if i >= self.revealed.len() || self.revealed[i] || height <= 0.0 {
                continue;
            }
            let visible = (top + height).min(view_bottom) - top.max(view_top);
            if visible > 0.0 && visible / height >= self.threshold {
                self.revealed[i] = true;
                newly.push(i);
            }
        }
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_past_threshold() {
        let mut r = RevealTracker::new(3, 0.1);
        let extents = [(0.0, 40.0), (40.0, 100.0), (140.0, 100.0)];

        assert_eq!(r.observe(&extents, 0.0, 45.0), vec![0]);
        // 9 rows of section 1 visible: below threshold.
        assert_eq!(r.observe(&extents, 4.0, 45.0), Vec::<usize>::new());
        assert_eq!(r.observe(&extents, 5.0, 45.0), vec![1]);
        assert!(r.is_revealed(0) && r.is_revealed(1) && !r.is_revealed(2));
    }

    #[test]
    fn revealed_sections_stay_revealed() {
        let mut r = RevealTracker::new(2, 0.1);
        let extents = [(0.0, 10.0), (10.0, 10.0)];
        assert_eq!(r.observe(&extents, 10.0, 10.0), vec![1]);
        assert_eq!(r.observe(&extents, 0.0, 5.0), vec![0]);

        // Scrolled far past both: nothing new, nothing lost.
        assert!(r.observe(&extents, 100.0, 10.0).is_empty());
        assert!(r.observe(&extents, 0.0, 20.0).is_empty());
        assert!(r.is_revealed(0) && r.is_revealed(1));
        assert!(!r.is_revealed(7));
    }
}
