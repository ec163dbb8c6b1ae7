//! Typewriter text effect.
//!
//! Types each string one character per `type_speed`, pauses, backspaces it
//! and moves on.  Without `looping` the last string stays typed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct TypewriterConfig {
    pub type_speed: Duration,
    pub back_speed: Duration,
    /// Pause with a fully typed string before erasing it.
    pub hold: Duration,
    pub looping: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(50),
            back_speed: Duration::from_millis(30),
            hold: Duration::from_millis(1500),
            looping: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Erasing,
    Done,
}

#[derive(Debug)]
pub struct Typewriter {
    strings: Vec<String>,
    config: TypewriterConfig,
    index: usize,
    /// Characters of `strings[index]` currently shown.
    shown: usize,
    phase: Phase,
    next_step: Instant,
    started: Instant,
}

impl Typewriter {
    pub fn new(strings: &[&str], config: TypewriterConfig, now: Instant) -> Self {
        let phase = if strings.is_empty() {
            Phase::Done
        } else {
            Phase::Typing
        };
        Self {
            strings: strings.iter().map(|s| s.to_string()).collect(),
            config,
            index: 0,
            shown: 0,
            phase,
            next_step: now + config.type_speed,
            started: now,
        }
    }

    pub fn text(&self) -> &str {
        let Some(s) = self.strings.get(self.index) else {
            return "";
        };
        match s.char_indices().nth(self.shown) {
            Some((byte, _)) => &s[..byte],
            None => s,
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Blinking cursor: on for the first half of every second.
    pub fn cursor_visible(&self, now: Instant) -> bool {
        now.duration_since(self.started).as_millis() % 1000 < 500
    }

    /// Advance by however many steps are due.  Returns whether text changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while self.phase != Phase::Done && now >= self.next_step {
            changed |= self.step();
        }
        changed
    }

    fn step(&mut self) -> bool {
        let len = self.strings[self.index].chars().count();
        let last = self.index + 1 == self.strings.len();
        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    if last && !self.config.looping {
                        self.phase = Phase::Done;
                    } else {
                        self.phase = Phase::Holding;
                        self.next_step += self.config.hold;
                        return true;
                    }
                }
                self.next_step += self.config.type_speed;
                true
            }
            Phase::Holding => {
                self.phase = Phase::Erasing;
                self.next_step += self.config.back_speed;
                false
            }
            Phase::Erasing => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.strings.len();
                    self.phase = Phase::Typing;
                    self.next_step += self.config.type_speed;
                } else {
                    self.next_step += self.config.back_speed;
                }
                true
            }
            Phase::Done => false,
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
    fn types_one_char_per_step_and_stops() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new(&["Dev"], TypewriterConfig::default(), t0);
        assert_eq!(tw.text(), "");
        assert!(tw.tick(t0 + ms(50)));
        assert_eq!(tw.text(), "D");
        tw.tick(t0 + ms(149));
        assert_eq!(tw.text(), "De");
        tw.tick(t0 + ms(10_000));
        assert_eq!(tw.text(), "Dev");
        assert!(tw.is_done());
        assert!(!tw.tick(t0 + ms(20_000)));
    }

    #[test]
    fn handles_multibyte_text() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new(&["olá"], TypewriterConfig::default(), t0);
        tw.tick(t0 + ms(150));
        assert_eq!(tw.text(), "olá");
    }

    #[test]
    fn moves_to_next_string_after_erasing() {
        let t0 = Instant::now();
        let config = TypewriterConfig {
            type_speed: ms(10),
            back_speed: ms(10),
            hold: ms(100),
            looping: false,
        };
        let mut tw = Typewriter::new(&["ab", "cd"], config, t0);
        tw.tick(t0 + ms(20));
        assert_eq!(tw.text(), "ab");
        // hold (100) → erasing starts, two backspaces.
        tw.tick(t0 + ms(145));
        assert_eq!(tw.text(), "");
        tw.tick(t0 + ms(1000));
        assert_eq!(tw.text(), "cd");
        assert!(tw.is_done());
    }

    #[test]
    fn empty_input_is_done_immediately() {
        let t0 = Instant::now();
        let tw = Typewriter::new(&[], TypewriterConfig::default(), t0);
        assert!(tw.is_done());
        assert_eq!(tw.text(), "");
    }
}
