//! Printable snapshot of the seat grid.

use crate::error::LayoutError;
use crate::types::{HallDimensions, SeatState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Owned copy of the seat grid at one point in time.
///
/// `Display` renders the box office chart: a header of seat numbers preceded
/// by a blank cell, then one line per row with the row number and each seat's
/// symbol, all cells separated by single spaces. No trailing newline.
///
/// ```text
///   1 2 3 4
/// 1 S S B S
/// 2 S S S S
/// ```
///
/// A deserialized layout must list exactly one seat per grid position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct SeatLayout {
    dimensions: HallDimensions,
    seats: Vec<SeatState>,
}

impl SeatLayout {
    pub(crate) const fn new(dimensions: HallDimensions, seats: Vec<SeatState>) -> Self {
        Self { dimensions, seats }
    }

    /// Dimensions of the hall this layout was taken from
    #[must_use]
    pub const fn dimensions(&self) -> HallDimensions {
        self.dimensions
    }

    /// Rows in order, front row first.
    pub fn rows(&self) -> impl Iterator<Item = &[SeatState]> {
        self.seats.chunks(self.dimensions.seats_per_row() as usize)
    }

    /// Number of seats shown as sold
    #[must_use]
    pub fn sold_count(&self) -> usize {
        self.seats.iter().filter(|seat| seat.is_sold()).count()
    }
}

#[derive(Deserialize)]
struct RawLayout {
    dimensions: HallDimensions,
    seats: Vec<SeatState>,
}

impl TryFrom<RawLayout> for SeatLayout {
    type Error = LayoutError;

    fn try_from(raw: RawLayout) -> Result<Self, Self::Error> {
        let expected = raw.dimensions.capacity();
        if raw.seats.len() != expected as usize {
            return Err(LayoutError::SeatCountMismatch {
                dimensions: raw.dimensions,
                expected,
                actual: raw.seats.len(),
            });
        }
        Ok(Self::new(raw.dimensions, raw.seats))
    }
}

impl fmt::Display for SeatLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(" ")?;
        for column in 1..=self.dimensions.seats_per_row() {
            write!(f, " {column}")?;
        }

        for (index, row) in self.rows().enumerate() {
            write!(f, "\n{}", index + 1)?;
            for seat in row {
                write!(f, " {seat}")?;
            }
        }
        Ok(())
    }
}
