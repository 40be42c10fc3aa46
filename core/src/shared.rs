//! Thread-safe handle to a hall.
//!
//! The interactive box office is single-threaded and owns its
//! [`CinemaHall`] directly. `SharedHall` is for embedding the hall where
//! several threads sell tickets at once: one mutex covers the seat grid and
//! both sales counters, so the sold-check, the seat update and the counter
//! increments of a purchase happen as one unit.

use crate::error::Result;
use crate::hall::CinemaHall;
use crate::layout::SeatLayout;
use crate::statistics::SalesStatistics;
use crate::types::{HallDimensions, Money, SeatCoordinate};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, lock-guarded [`CinemaHall`].
///
/// # Example
///
/// ```
/// use cinema_core::{HallDimensions, SeatCoordinate, SharedHall};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let hall = SharedHall::new(HallDimensions::new(8, 9)?);
/// let box_office = hall.clone();
///
/// let price = box_office.purchase_seat(SeatCoordinate::new(1, 1))?;
/// assert_eq!(price.dollars(), 10);
/// assert_eq!(hall.statistics().tickets_sold, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct SharedHall {
    inner: Arc<Mutex<CinemaHall>>,
}

impl SharedHall {
    /// Opens a new hall behind a lock.
    #[must_use]
    pub fn new(dimensions: HallDimensions) -> Self {
        Self::from_hall(CinemaHall::new(dimensions))
    }

    /// Wraps an existing hall.
    #[must_use]
    pub fn from_hall(hall: CinemaHall) -> Self {
        Self {
            inner: Arc::new(Mutex::new(hall)),
        }
    }

    /// Sells one seat under the lock.
    ///
    /// # Errors
    ///
    /// Same as [`CinemaHall::purchase_seat`].
    pub fn purchase_seat(&self, coordinate: SeatCoordinate) -> Result<Money> {
        self.lock().purchase_seat(coordinate)
    }

    /// Ticket price for a seat.
    ///
    /// # Errors
    ///
    /// Same as [`CinemaHall::price_of`].
    pub fn price_of(&self, coordinate: SeatCoordinate) -> Result<Money> {
        self.lock().price_of(coordinate)
    }

    /// Snapshot of the seat grid.
    #[must_use]
    pub fn layout(&self) -> SeatLayout {
        self.lock().layout()
    }

    /// Current sales figures.
    #[must_use]
    pub fn statistics(&self) -> SalesStatistics {
        self.lock().statistics()
    }

    // A purchase mutates only after both checks pass and cannot panic midway,
    // so a poisoned guard still holds a consistent hall.
    fn lock(&self) -> MutexGuard<'_, CinemaHall> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
