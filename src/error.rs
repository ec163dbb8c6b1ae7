//! Typed failures.  Everything else propagates as `anyhow::Error`.

use thiserror::Error;

/// A config value that could not be understood.  Reported and replaced by
/// the default; never fatal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`{key}`: expected a number, got `{value}`")]
    NotANumber { key: String, value: String },

    #[error("`{key}`: `{value}` is not one of {expected}")]
    UnknownVariant {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("`{key}`: no valid key binding in `{value}`")]
    InvalidBinding { key: String, value: String },
}

/// The static page content is inconsistent.  Fatal at startup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("the page has no sections")]
    NoSections,

    #[error("section id `{0}` is declared twice")]
    DuplicateSection(&'static str),

    #[error("the project carousel is empty")]
    NoProjects,
}
