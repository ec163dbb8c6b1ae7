//! Deadline-based timers polled from the tick loop.
//!
//! There are no callbacks: owners arm a deadline and ask `poll(now)` on each
//! tick whether it has elapsed.  Cancelling is just clearing the deadline, so
//! re-arming a [`Debounce`] is last-writer-wins.

use std::time::{Duration, Instant};

// ───────────────────────────────────────── debounce ──────────

/// Fires once after `delay` of quiet since the last `arm`.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// (Re)start the quiet period from `now`.  Any earlier deadline is dropped.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Applies from the next `arm`; a pending deadline keeps its time.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once per armed period, when it has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

// ───────────────────────────────────────── interval ──────────

/// Repeating timer that can be paused and resumed with a fresh period.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next: Option<Instant>,
}

impl Interval {
    /// A running interval whose first fire is one `period` after `now`.
    pub fn started(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next: Some(now + period),
        }
    }

    pub fn pause(&mut self) {
        self.next = None;
    }

    /// Resume with a full period, like clearing and re-creating the timer.
    pub fn resume(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` when a period elapsed.  Missed periods collapse into
    /// one fire so a stalled loop doesn't replay a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(next) = self.next else {
            return false;
        };
        if now < next {
            return false;
        }
        self.next = Some(now + self.period);
        true
    }
}

// ───────────────────────────────────────── frame gate ────────

/// One-pending-callback guard: many requests per frame collapse into one
/// recomputation serviced by the next frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` if this request scheduled work (nothing was pending).
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called by the frame; returns whether work was pending and resets it.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn debounce_fires_once_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debounce::new(ms(120));
        d.arm(t0);
        assert!(!d.poll(t0 + ms(119)));
        assert!(d.poll(t0 + ms(120)));
        assert!(!d.poll(t0 + ms(500)));
    }

    #[test]
    fn rearming_restarts_the_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debounce::new(ms(120));
        d.arm(t0);
        d.arm(t0 + ms(100));
        assert!(!d.poll(t0 + ms(150)));
        assert!(d.poll(t0 + ms(220)));
    }

    #[test]
    fn cancelled_debounce_never_fires() {
        let t0 = Instant::now();
        let mut d = Debounce::new(ms(10));
        d.arm(t0);
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.poll(t0 + ms(100)));
    }

    #[test]
    fn interval_pauses_and_resumes_with_fresh_period() {
        let t0 = Instant::now();
        let mut iv = Interval::started(ms(5000), t0);
        assert!(!iv.poll(t0 + ms(4999)));
        assert!(iv.poll(t0 + ms(5000)));

        iv.pause();
        assert!(!iv.poll(t0 + ms(20_000)));

        iv.resume(t0 + ms(20_000));
        assert!(!iv.poll(t0 + ms(24_000)));
        assert!(iv.poll(t0 + ms(25_000)));
    }

    #[test]
    fn frame_gate_collapses_requests() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(gate.take());
        assert!(!gate.take());
        assert!(gate.request());
    }
}
