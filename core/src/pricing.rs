//! Ticket pricing.
//!
//! Small halls charge one flat price. Larger halls split into a front half
//! (rows `1..=⌊R/2⌋`) and a back half (every later row, including the middle
//! row of an odd-sized hall) with a cheaper back-half price.
//!
//! The same policy value computes both the per-seat price and the hall's total
//! potential income, so the two can never disagree.

use crate::types::{HallDimensions, Money, SeatCoordinate};
use serde::{Deserialize, Serialize};

/// Two-tier pricing rule for a hall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Halls with at most this many seats charge `front_price` everywhere
    pub small_hall_capacity: u32,
    /// Price of every seat in a small hall, and of front-half seats otherwise
    pub front_price: Money,
    /// Price of back-half seats in a large hall
    pub back_price: Money,
}

impl PricingPolicy {
    /// The box office's standard rule: $10 up to 60 seats, otherwise $10 front
    /// and $8 back.
    pub const STANDARD: Self = Self {
        small_hall_capacity: 60,
        front_price: Money::from_dollars(10),
        back_price: Money::from_dollars(8),
    };

    /// Whether `dimensions` qualifies for flat pricing.
    #[must_use]
    pub const fn is_flat_rate(&self, dimensions: HallDimensions) -> bool {
        dimensions.capacity() <= self.small_hall_capacity
    }

    /// Price of any seat in `row`.
    ///
    /// The row is not range-checked; callers validate coordinates first.
    #[must_use]
    pub const fn price_for_row(&self, dimensions: HallDimensions, row: u32) -> Money {
        if self.is_flat_rate(dimensions) || row <= dimensions.front_half_rows() {
            self.front_price
        } else {
            self.back_price
        }
    }

    /// Price of the seat at `coordinate`. Depends only on position.
    #[must_use]
    pub const fn price_for(&self, dimensions: HallDimensions, coordinate: SeatCoordinate) -> Money {
        self.price_for_row(dimensions, coordinate.row)
    }

    /// Income if every seat in the hall were sold.
    ///
    /// Saturates instead of overflowing for extreme custom prices.
    #[must_use]
    pub const fn total_income(&self, dimensions: HallDimensions) -> Money {
        let seats_per_row = dimensions.seats_per_row() as u64;

        if self.is_flat_rate(dimensions) {
            let capacity = dimensions.capacity() as u64;
            return Money::from_dollars(capacity.saturating_mul(self.front_price.dollars()));
        }

        let front_rows = dimensions.front_half_rows() as u64;
        let back_rows = dimensions.rows() as u64 - front_rows;
        let front = front_rows
            .saturating_mul(seats_per_row)
            .saturating_mul(self.front_price.dollars());
        let back = back_rows
            .saturating_mul(seats_per_row)
            .saturating_mul(self.back_price.dollars());

        Money::from_dollars(front.saturating_add(back))
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dims(rows: u32, seats: u32) -> HallDimensions {
        HallDimensions::new(rows, seats).unwrap()
    }

    #[test]
    fn test_flat_rate_up_to_sixty_seats() {
        let policy = PricingPolicy::STANDARD;
        let hall = dims(6, 10);

        assert!(policy.is_flat_rate(hall));
        assert_eq!(policy.price_for_row(hall, 6), Money::from_dollars(10));
        assert_eq!(policy.total_income(hall), Money::from_dollars(600));
    }

    #[test]
    fn test_two_tiers_above_sixty_seats() {
        let policy = PricingPolicy::STANDARD;
        let hall = dims(8, 9);

        assert!(!policy.is_flat_rate(hall));
        assert_eq!(policy.price_for_row(hall, 4), Money::from_dollars(10));
        assert_eq!(policy.price_for_row(hall, 5), Money::from_dollars(8));
        assert_eq!(policy.total_income(hall), Money::from_dollars(648));
    }

    #[test]
    fn test_odd_middle_row_is_back_half() {
        let policy = PricingPolicy::STANDARD;
        let hall = dims(9, 9);

        assert_eq!(policy.price_for_row(hall, 4), Money::from_dollars(10));
        assert_eq!(policy.price_for_row(hall, 5), Money::from_dollars(8));
        // 4 rows at $10, 5 rows at $8
        assert_eq!(policy.total_income(hall), Money::from_dollars(360 + 360));
    }

    #[test]
    fn test_single_row_large_hall_is_all_back_half() {
        let policy = PricingPolicy::STANDARD;
        let hall = dims(1, 61);

        assert_eq!(policy.price_for_row(hall, 1), Money::from_dollars(8));
        assert_eq!(policy.total_income(hall), Money::from_dollars(61 * 8));
    }
}
