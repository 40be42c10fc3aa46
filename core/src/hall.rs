//! The cinema hall aggregate.
//!
//! Owns the seat grid, the pricing policy and the running sales counters.
//! [`CinemaHall::purchase_seat`] is the only operation that changes anything,
//! and it validates fully before touching state: a rejected purchase leaves
//! the grid and both counters exactly as they were.

use crate::error::{Result, SeatError};
use crate::layout::SeatLayout;
use crate::pricing::PricingPolicy;
use crate::statistics::SalesStatistics;
use crate::types::{HallDimensions, Money, SeatCoordinate, SeatState};

/// One cinema room: an R×C grid of seats plus its sales ledger.
#[derive(Clone, Debug)]
pub struct CinemaHall {
    dimensions: HallDimensions,
    pricing: PricingPolicy,
    /// Row-major, `dimensions.capacity()` entries
    seats: Vec<SeatState>,
    tickets_sold: u32,
    current_income: Money,
    total_income: Money,
}

impl CinemaHall {
    /// Opens a hall with every seat available, priced by
    /// [`PricingPolicy::STANDARD`].
    #[must_use]
    pub fn new(dimensions: HallDimensions) -> Self {
        Self::with_pricing(dimensions, PricingPolicy::STANDARD)
    }

    /// Opens a hall with every seat available under a specific pricing policy.
    #[must_use]
    pub fn with_pricing(dimensions: HallDimensions, pricing: PricingPolicy) -> Self {
        let total_income = pricing.total_income(dimensions);

        tracing::info!(
            rows = dimensions.rows(),
            seats_per_row = dimensions.seats_per_row(),
            capacity = dimensions.capacity(),
            %total_income,
            "Cinema hall opened"
        );

        Self {
            dimensions,
            pricing,
            seats: vec![SeatState::Available; dimensions.capacity() as usize],
            tickets_sold: 0,
            current_income: Money::ZERO,
            total_income,
        }
    }

    /// Hall size
    #[must_use]
    pub const fn dimensions(&self) -> HallDimensions {
        self.dimensions
    }

    /// Pricing rule in force
    #[must_use]
    pub const fn pricing(&self) -> PricingPolicy {
        self.pricing
    }

    /// Total seat count
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.dimensions.capacity()
    }

    /// Tickets sold so far
    #[must_use]
    pub const fn tickets_sold(&self) -> u32 {
        self.tickets_sold
    }

    /// Income from tickets sold so far
    #[must_use]
    pub const fn current_income(&self) -> Money {
        self.current_income
    }

    /// Income if every seat were sold. Fixed at construction.
    #[must_use]
    pub const fn total_income(&self) -> Money {
        self.total_income
    }

    /// Snapshot of the seat grid for display.
    #[must_use]
    pub fn layout(&self) -> SeatLayout {
        SeatLayout::new(self.dimensions, self.seats.clone())
    }

    /// Current state of one seat.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::InvalidCoordinate`] if the seat is not in this hall.
    pub fn seat_state(&self, coordinate: SeatCoordinate) -> Result<SeatState> {
        let index = self.index_of(coordinate)?;
        Ok(self.seats[index])
    }

    /// Ticket price for a seat, whether or not it is already sold.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::InvalidCoordinate`] if the seat is not in this hall.
    pub fn price_of(&self, coordinate: SeatCoordinate) -> Result<Money> {
        self.index_of(coordinate)?;
        Ok(self.pricing.price_for(self.dimensions, coordinate))
    }

    /// Sells one seat and returns the price paid.
    ///
    /// # Errors
    ///
    /// - [`SeatError::InvalidCoordinate`] if the seat is not in this hall
    /// - [`SeatError::AlreadySold`] if the seat was purchased before
    ///
    /// Neither error changes the hall.
    pub fn purchase_seat(&mut self, coordinate: SeatCoordinate) -> Result<Money> {
        let index = self.index_of(coordinate).inspect_err(|error| {
            tracing::debug!(%error, "Purchase rejected");
        })?;

        if self.seats[index].is_sold() {
            let error = SeatError::AlreadySold { coordinate };
            tracing::debug!(%error, "Purchase rejected");
            return Err(error);
        }

        let price = self.pricing.price_for(self.dimensions, coordinate);

        self.seats[index] = SeatState::Sold;
        self.tickets_sold += 1;
        self.current_income = self.current_income.saturating_add(price);

        tracing::debug!(
            row = coordinate.row,
            seat = coordinate.column,
            %price,
            tickets_sold = self.tickets_sold,
            "Seat sold"
        );

        Ok(price)
    }

    /// Current sales figures.
    #[must_use]
    pub const fn statistics(&self) -> SalesStatistics {
        SalesStatistics {
            tickets_sold: self.tickets_sold,
            capacity: self.dimensions.capacity(),
            current_income: self.current_income,
            total_income: self.total_income,
        }
    }

    fn index_of(&self, coordinate: SeatCoordinate) -> Result<usize> {
        self.dimensions
            .index_of(coordinate)
            .ok_or(SeatError::InvalidCoordinate {
                coordinate,
                dimensions: self.dimensions,
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn hall(rows: u32, seats: u32) -> CinemaHall {
        CinemaHall::new(HallDimensions::new(rows, seats).unwrap())
    }

    #[test]
    fn test_new_hall_is_empty() {
        let hall = hall(3, 4);

        assert_eq!(hall.tickets_sold(), 0);
        assert_eq!(hall.current_income(), Money::ZERO);
        assert_eq!(hall.layout().sold_count(), 0);
        assert_eq!(
            hall.seat_state(SeatCoordinate::new(3, 4)),
            Ok(SeatState::Available)
        );
    }

    #[test]
    fn test_purchase_marks_seat_and_updates_counters() {
        let mut hall = hall(8, 9);
        let seat = SeatCoordinate::new(8, 1);

        assert_eq!(hall.purchase_seat(seat), Ok(Money::from_dollars(8)));
        assert_eq!(hall.seat_state(seat), Ok(SeatState::Sold));
        assert_eq!(hall.tickets_sold(), 1);
        assert_eq!(hall.current_income(), Money::from_dollars(8));
    }

    #[test]
    fn test_price_does_not_depend_on_sale() {
        let mut hall = hall(8, 9);
        let seat = SeatCoordinate::new(2, 2);

        let before = hall.price_of(seat).unwrap();
        hall.purchase_seat(seat).unwrap();
        assert_eq!(hall.price_of(seat), Ok(before));
    }

    #[test]
    fn test_second_purchase_is_rejected_without_side_effects() {
        let mut hall = hall(5, 5);
        let seat = SeatCoordinate::new(1, 1);
        hall.purchase_seat(seat).unwrap();

        assert_eq!(
            hall.purchase_seat(seat),
            Err(SeatError::AlreadySold { coordinate: seat })
        );
        assert_eq!(hall.tickets_sold(), 1);
        assert_eq!(hall.current_income(), Money::from_dollars(10));
    }

    #[test]
    fn test_out_of_range_is_rejected_without_side_effects() {
        let mut hall = hall(5, 5);

        for seat in [
            SeatCoordinate::new(0, 1),
            SeatCoordinate::new(1, 0),
            SeatCoordinate::new(6, 1),
            SeatCoordinate::new(1, 6),
        ] {
            assert!(matches!(
                hall.purchase_seat(seat),
                Err(SeatError::InvalidCoordinate { .. })
            ));
            assert!(hall.price_of(seat).is_err());
        }
        assert_eq!(hall.tickets_sold(), 0);
        assert_eq!(hall.layout().sold_count(), 0);
    }

    #[test]
    fn test_statistics_snapshot() {
        let mut hall = hall(8, 9);
        hall.purchase_seat(SeatCoordinate::new(1, 1)).unwrap();
        hall.purchase_seat(SeatCoordinate::new(8, 9)).unwrap();

        let stats = hall.statistics();
        assert_eq!(stats.tickets_sold, 2);
        assert_eq!(stats.capacity, 72);
        assert_eq!(stats.current_income, Money::from_dollars(18));
        assert_eq!(stats.total_income, Money::from_dollars(648));
    }
}
