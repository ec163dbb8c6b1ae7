//! Core behaviour: scroll tracking, tooltip placement and the small page
//! controllers.
//!
//! Nothing in this module depends on any TUI or rendering crate.  Time is
//! passed in as `Instant`s so every controller is deterministic under test.

pub mod carousel;
pub mod chat;
pub mod experience;
pub mod geometry;
pub mod reveal;
pub mod scroll;
pub mod theme_mode;
pub mod timeline;
pub mod timer;
pub mod tooltip;
pub mod typewriter;
