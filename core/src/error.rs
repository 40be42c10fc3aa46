//! Error types for hall construction and seat purchases.

use crate::types::{HallDimensions, SeatCoordinate};
use thiserror::Error;

/// Result type alias for seat operations.
pub type Result<T> = std::result::Result<T, SeatError>;

/// Why a seat operation was rejected.
///
/// Both variants are recoverable: the hall is left untouched, so the caller
/// can simply ask for another coordinate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeatError {
    /// Row or seat number lies outside the hall.
    #[error("{coordinate} is outside the {dimensions} hall")]
    InvalidCoordinate {
        /// Coordinate that was requested
        coordinate: SeatCoordinate,
        /// Dimensions of the hall it was checked against
        dimensions: HallDimensions,
    },

    /// The seat has already been purchased.
    #[error("{coordinate} has already been purchased")]
    AlreadySold {
        /// Coordinate of the sold seat
        coordinate: SeatCoordinate,
    },
}

/// Rejected seat layout.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The seat list does not cover the grid exactly once.
    #[error("{dimensions} hall needs {expected} seats, got {actual}")]
    SeatCountMismatch {
        /// Dimensions the layout claims
        dimensions: HallDimensions,
        /// Seats those dimensions hold
        expected: u32,
        /// Seats actually listed
        actual: usize,
    },
}

/// Rejected hall dimensions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DimensionsError {
    /// A hall needs at least one row and one seat per row.
    #[error("hall must have at least one row and one seat per row (got {rows}x{seats_per_row})")]
    Empty {
        /// Requested row count
        rows: u32,
        /// Requested seats per row
        seats_per_row: u32,
    },

    /// Total capacity does not fit in a `u32`.
    #[error("hall of {rows}x{seats_per_row} seats is too large")]
    CapacityOverflow {
        /// Requested row count
        rows: u32,
        /// Requested seats per row
        seats_per_row: u32,
    },
}
