//! Initialization error model.

use thiserror::Error;

/// Result type returned by every singleton accessor.
pub type InitResult<T> = Result<T, InitError>;

/// Failure of a one-time construction routine.
///
/// The gate caches this value, so every waiter and every later caller gets an
/// equal copy of it. That is why it is `Clone` and carries only strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InitError {
    /// The construction routine returned an error.
    #[error("construction failed: {0}")]
    Construction(String),

    /// The construction routine panicked.
    #[error("construction panicked: {0}")]
    Panicked(String),
}

impl InitError {
    pub fn construction(msg: impl Into<String>) -> Self {
        Self::Construction(msg.into())
    }

    pub fn panicked(msg: impl Into<String>) -> Self {
        Self::Panicked(msg.into())
    }
}
