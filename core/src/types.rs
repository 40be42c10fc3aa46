//! Value objects for the cinema hall.
//!
//! Dimensions, seat coordinates, seat states and whole-dollar money. Every
//! coordinate in this crate is 1-indexed, matching what a patron types at the
//! box office.

use crate::error::DimensionsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

// ============================================================================
// Hall Dimensions
// ============================================================================

/// Immutable size of a hall: number of rows and seats in each row.
///
/// Construction through [`HallDimensions::new`] guarantees both counts are
/// non-zero and that the total capacity fits in a `u32`. Deserialization goes
/// through the same check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct HallDimensions {
    rows: u32,
    seats_per_row: u32,
}

impl HallDimensions {
    /// Creates validated hall dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionsError::Empty`] if either count is zero and
    /// [`DimensionsError::CapacityOverflow`] if `rows * seats_per_row`
    /// does not fit in a `u32`.
    pub const fn new(rows: u32, seats_per_row: u32) -> Result<Self, DimensionsError> {
        if rows == 0 || seats_per_row == 0 {
            return Err(DimensionsError::Empty {
                rows,
                seats_per_row,
            });
        }
        if rows.checked_mul(seats_per_row).is_none() {
            return Err(DimensionsError::CapacityOverflow {
                rows,
                seats_per_row,
            });
        }
        Ok(Self {
            rows,
            seats_per_row,
        })
    }

    /// Number of rows (R)
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of seats in each row (C)
    #[must_use]
    pub const fn seats_per_row(&self) -> u32 {
        self.seats_per_row
    }

    /// Total seat count, R×C.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        // Cannot overflow: checked in `new`.
        self.rows * self.seats_per_row
    }

    /// Last row of the front half, ⌊R/2⌋. Zero for a single-row hall.
    #[must_use]
    pub const fn front_half_rows(&self) -> u32 {
        self.rows / 2
    }

    /// Whether `coordinate` lies inside `[1, R] × [1, C]`.
    #[must_use]
    pub const fn contains(&self, coordinate: SeatCoordinate) -> bool {
        coordinate.row >= 1
            && coordinate.row <= self.rows
            && coordinate.column >= 1
            && coordinate.column <= self.seats_per_row
    }

    /// Row-major grid index for an in-range coordinate.
    pub(crate) const fn index_of(&self, coordinate: SeatCoordinate) -> Option<usize> {
        if !self.contains(coordinate) {
            return None;
        }
        let row = (coordinate.row - 1) as usize;
        let column = (coordinate.column - 1) as usize;
        Some(row * self.seats_per_row as usize + column)
    }
}

/// Unchecked wire form of [`HallDimensions`].
#[derive(Deserialize)]
struct RawDimensions {
    rows: u32,
    seats_per_row: u32,
}

impl TryFrom<RawDimensions> for HallDimensions {
    type Error = DimensionsError;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        Self::new(raw.rows, raw.seats_per_row)
    }
}

impl fmt::Display for HallDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.seats_per_row)
    }
}

// ============================================================================
// Seat Coordinate
// ============================================================================

/// A seat position, 1-indexed by row and by seat within the row.
///
/// A coordinate is not tied to a hall; whether it is valid is decided by
/// [`HallDimensions::contains`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatCoordinate {
    /// Row number, starting at 1 for the row nearest the screen
    pub row: u32,
    /// Seat number within the row, starting at 1
    pub column: u32,
}

impl SeatCoordinate {
    /// Creates a new `SeatCoordinate`
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for SeatCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, seat {}", self.row, self.column)
    }
}

// ============================================================================
// Seat State
// ============================================================================

/// Sale state of a single seat. Transitions only `Available → Sold`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatState {
    /// Free to purchase
    #[default]
    Available,
    /// Purchased (permanent)
    Sold,
}

impl SeatState {
    /// Symbol drawn for an available seat
    pub const AVAILABLE_SYMBOL: char = 'S';
    /// Symbol drawn for a sold seat
    pub const SOLD_SYMBOL: char = 'B';

    /// Single-character marker used when rendering the hall.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Available => Self::AVAILABLE_SYMBOL,
            Self::Sold => Self::SOLD_SYMBOL,
        }
    }

    /// Returns `true` if the seat has been purchased
    #[must_use]
    pub const fn is_sold(self) -> bool {
        matches!(self, Self::Sold)
    }
}

impl fmt::Display for SeatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================================================
// Money Value Object (whole dollars)
// ============================================================================

/// An amount in whole dollars. Ticket prices and incomes never carry cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Zero dollars
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from dollars
    #[must_use]
    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars)
    }

    /// Returns the amount in dollars
    #[must_use]
    pub const fn dollars(&self) -> u64 {
        self.0
    }

    /// Adds two amounts with overflow checking
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Adds two amounts, capping at the largest representable value
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}
