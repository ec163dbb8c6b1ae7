//! Application orchestration: state management, event loop glue, and input handling.

pub mod deck;
pub mod event;
pub mod handler;
pub mod settings;
pub mod state;
pub mod sync;
