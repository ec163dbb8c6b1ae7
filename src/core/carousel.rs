//! Project carousel: wrap-around index, autoplay that pauses on hover, and
//! swipe detection.

use std::time::{Duration, Instant};

use super::timer::Interval;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub autoplay: Duration,
    /// Minimum horizontal travel for a drag to count as a swipe.
    pub swipe_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: Duration::from_millis(5000),
            swipe_threshold: 50.0,
        }
    }
}

#[derive(Debug)]
pub struct Carousel {
    current: usize,
    total: usize,
    config: CarouselConfig,
    autoplay: Interval,
    swipe_start: Option<f64>,
}

impl Carousel {
    pub fn new(total: usize, config: CarouselConfig, now: Instant) -> Self {
        Self {
            current: 0,
            total: total.max(1),
            config,
            autoplay: Interval::started(config.autoplay, now),
            swipe_start: None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.total;
    }

    pub fn prev(&mut self) {
        self.current = (self.current + self.total - 1) % self.total;
    }

    /// Jump via an indicator.  Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.total {
            self.current = index;
        }
    }

    /// Indicator row: `true` at the current slide.
    pub fn indicators(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.total).map(move |i| i == self.current)
    }

    // ── autoplay ────────────────────────────────────────────────

    pub fn pointer_enter(&mut self) {
        self.autoplay.pause();
    }

    pub fn pointer_leave(&mut self, now: Instant) {
        if !self.autoplay.is_running() {
            self.autoplay.resume(now);
        }
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Advance when the autoplay period elapsed.  Returns whether it moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.autoplay.poll(now) {
            self.next();
            return true;
        }
        false
    }

    // ── swipe ───────────────────────────────────────────────────

    pub fn swipe_start(&mut self, x: f64) {
        self.swipe_start = Some(x);
    }

    /// Finish a gesture.  Dragging right goes back, left goes forward.
    pub fn swipe_end(&mut self, x: f64) -> bool {
        let Some(start) = self.swipe_start.take() else {
            return false;
        };
        let diff = x - start;
        if diff.abs() <= self.config.swipe_threshold {
            return false;
        }
        if diff > 0.0 {
            self.prev();
        } else {
            self.next();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(total: usize) -> (Carousel, Instant) {
        let now = Instant::now();
        (Carousel::new(total, CarouselConfig::default(), now), now)
    }

    #[test]
    fn prev_wraps_to_last() {
        let (mut c, _) = carousel(3);
        c.prev();
        assert_eq!(c.current(), 2);
        c.next();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let (mut c, _) = carousel(3);
        c.go_to(2);
        c.go_to(9);
        assert_eq!(c.current(), 2);
        assert_eq!(c.indicators().collect::<Vec<_>>(), vec![false, false, true]);
    }

    #[test]
    fn autoplay_pauses_while_hovered() {
        let (mut c, t0) = carousel(3);
        let s = Duration::from_secs;
        assert!(c.tick(t0 + s(5)));
        assert_eq!(c.current(), 1);

        c.pointer_enter();
        assert!(!c.tick(t0 + s(60)));

        c.pointer_leave(t0 + s(60));
        assert!(!c.tick(t0 + s(64)));
        assert!(c.tick(t0 + s(65)));
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn swipe_needs_threshold() {
        let (mut c, _) = carousel(3);
        c.swipe_start(100.0);
        assert!(!c.swipe_end(140.0));
        assert_eq!(c.current(), 0);

        c.swipe_start(100.0);
        assert!(c.swipe_end(200.0));
        assert_eq!(c.current(), 2);

        c.swipe_start(200.0);
        assert!(c.swipe_end(100.0));
        assert_eq!(c.current(), 0);

        assert!(!c.swipe_end(0.0));
    }
}
