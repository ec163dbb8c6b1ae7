//! Simulated chat: testimonials arrive one at a time, each preceded by a
//! "typing…" indicator.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct ChatConfig {
    /// How long the typing indicator shows before a message lands.
    pub typing: Duration,
    /// Pause between a message landing and the next indicator.
    pub between: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(1200),
            between: Duration::from_millis(800),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Idle,
    Waiting(Instant),
    Typing(Instant),
    Finished,
}

#[derive(Debug)]
pub struct ChatSimulation {
    total: usize,
    delivered: usize,
    stage: Stage,
    config: ChatConfig,
}

impl ChatSimulation {
    pub fn new(total: usize, config: ChatConfig) -> Self {
        Self {
            total,
            delivered: 0,
            stage: if total == 0 { Stage::Finished } else { Stage::Idle },
            config,
        }
    }

    /// Messages visible so far.
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    pub fn is_typing(&self) -> bool {
        matches!(self.stage, Stage::Typing(_))
    }

    pub fn is_finished(&self) -> bool {
        self.stage == Stage::Finished
    }

    /// Begin the conversation (the section became visible).  Idempotent.
    pub fn start(&mut self, now: Instant) {
        if self.stage == Stage::Idle {
            self.stage = Stage::Typing(now + self.config.typing);
        }
    }

    /// Advance due transitions.  Returns whether anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        loop {
            match self.stage {
                Stage::Waiting(at) if now >= at => {
                    self.stage = Stage::Typing(at + self.config.typing);
                    changed = true;
                }
                Stage::Typing(at) if now >= at => {
                    self.delivered += 1;
                    self.stage = if self.delivered >= self.total {
                        Stage::Finished
                    } else {
                        Stage::Waiting(at + self.config.between)
                    };
                    changed = true;
                }
                _ => return changed,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn nothing_happens_until_started() {
        let t0 = Instant::now();
        let mut chat = ChatSimulation::new(2, ChatConfig::default());
        assert!(!chat.tick(t0 + ms(10_000)));
        assert_eq!(chat.delivered(), 0);
    }

    #[test]
    fn delivers_messages_in_sequence() {
        let t0 = Instant::now();
        let mut chat = ChatSimulation::new(2, ChatConfig::default());
        chat.start(t0);
        assert!(chat.is_typing());

        chat.tick(t0 + ms(1199));
        assert_eq!(chat.delivered(), 0);
        chat.tick(t0 + ms(1200));
        assert_eq!(chat.delivered(), 1);
        assert!(!chat.is_typing());

        chat.tick(t0 + ms(2000));
        assert!(chat.is_typing());
        chat.tick(t0 + ms(3200));
        assert_eq!(chat.delivered(), 2);
        assert!(chat.is_finished());
    }

    #[test]
    fn catches_up_after_a_stall() {
        let t0 = Instant::now();
        let mut chat = ChatSimulation::new(3, ChatConfig::default());
        chat.start(t0);
        chat.start(t0 + ms(500));
        assert!(chat.tick(t0 + ms(60_000)));
        assert_eq!(chat.delivered(), 3);
        assert!(chat.is_finished());
    }
}
