//! Error types for the interactive session.

use cinema_core::DimensionsError;
use std::io;
use thiserror::Error;

/// Fatal session failure. Only the terminal itself can fail this way.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A rejected line of user input. Always answered with a re-prompt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Token is not a non-negative whole number that fits in a `u32`.
    #[error("'{0}' is not a valid number")]
    NotANumber(String),

    /// Not one of the menu keys.
    #[error("'{0}' is not a menu option")]
    UnknownChoice(String),

    /// Zero rows or seats, or an overflowing hall.
    #[error(transparent)]
    Dimensions(#[from] DimensionsError),

    /// Hall larger than the configured limit.
    #[error("hall of {capacity} seats exceeds the limit of {max}")]
    TooLarge {
        /// Requested capacity
        capacity: u32,
        /// Configured maximum
        max: u32,
    },
}
