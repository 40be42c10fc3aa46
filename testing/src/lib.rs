//! # Cinema Testing
//!
//! Testing utilities and helpers for the cinema hall.
//!
//! This crate provides:
//! - Ready-made halls for the common pricing scenarios
//! - A Given-When-Then builder for purchases ([`HallTest`])
//! - Assertion helpers for layouts and statistics
//! - proptest strategies for dimensions and coordinates
//!
//! ## Example
//!
//! ```
//! use cinema_testing::{assertions, fixtures};
//! use cinema_core::SeatCoordinate;
//!
//! let mut hall = fixtures::small_hall();
//! hall.purchase_seat(SeatCoordinate::new(3, 3)).ok();
//!
//! assertions::assert_ledger_consistent(&hall);
//! ```


pub use hall_test::HallTest;

/// Prebuilt halls
///
/// Each fixture is a fresh hall with every seat available.
pub mod fixtures {
    use cinema_core::{CinemaHall, HallDimensions, SeatCoordinate};

    /// Build a hall, panicking on invalid dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `seats_per_row` is zero or their product
    /// overflows.
    #[must_use]
    #[allow(clippy::panic)] // Test fixture
    pub fn hall(rows: u32, seats_per_row: u32) -> CinemaHall {
        match HallDimensions::new(rows, seats_per_row) {
            Ok(dimensions) => CinemaHall::new(dimensions),
            Err(error) => panic!("invalid fixture dimensions: {error}"),
        }
    }

    /// 5×5 hall, 25 seats: flat $10 pricing, $250 total
    #[must_use]
    pub fn small_hall() -> CinemaHall {
        hall(5, 5)
    }

    /// 8×9 hall, 72 seats: rows 1–4 at $10, rows 5–8 at $8, $648 total
    #[must_use]
    pub fn large_hall() -> CinemaHall {
        hall(8, 9)
    }

    /// Every coordinate of a hall in row-major order.
    pub fn all_seats(hall: &CinemaHall) -> impl Iterator<Item = SeatCoordinate> + use<> {
        let dimensions = hall.dimensions();
        (1..=dimensions.rows()).flat_map(move |row| {
            (1..=dimensions.seats_per_row()).map(move |column| SeatCoordinate::new(row, column))
        })
    }
}

/// Helper assertions for halls
pub mod assertions {
    use cinema_core::{CinemaHall, Money, SalesStatistics, SeatLayout};

    /// Assert that a failed operation left the hall untouched
    ///
    /// # Panics
    ///
    /// Panics if the layout or the statistics differ.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_unchanged(
        before: (&SeatLayout, &SalesStatistics),
        after: (&SeatLayout, &SalesStatistics),
    ) {
        assert_eq!(before.0, after.0, "Seat layout changed after a rejected operation");
        assert_eq!(before.1, after.1, "Statistics changed after a rejected operation");
    }

    /// Assert that the ledger agrees with the seat grid
    ///
    /// Checks that the sold count matches the layout, that current income is
    /// the sum of the prices of the sold seats, and that neither counter
    /// exceeds its ceiling.
    ///
    /// # Panics
    ///
    /// Panics if any of those relations does not hold.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_ledger_consistent(hall: &CinemaHall) {
        let stats = hall.statistics();
        let layout = hall.layout();

        assert_eq!(
            usize::try_from(stats.tickets_sold).ok(),
            Some(layout.sold_count()),
            "tickets_sold disagrees with the layout"
        );
        assert!(
            stats.tickets_sold <= stats.capacity,
            "sold {} of {} seats",
            stats.tickets_sold,
            stats.capacity
        );
        assert!(
            stats.current_income <= stats.total_income,
            "current income {} above total {}",
            stats.current_income,
            stats.total_income
        );

        let earned: Money = super::fixtures::all_seats(hall)
            .filter(|seat| hall.seat_state(*seat).is_ok_and(|state| state.is_sold()))
            .filter_map(|seat| hall.price_of(seat).ok())
            .sum();
        assert_eq!(earned, stats.current_income, "current income is not the sum of sold prices");
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use cinema_core::{HallDimensions, Money, PricingPolicy, SeatCoordinate};
    use proptest::prelude::*;

    /// Largest side generated by [`dimensions`]; keeps grids small enough to
    /// walk exhaustively.
    pub const MAX_SIDE: u32 = 20;

    /// Valid hall dimensions, covering both sides of the 60-seat threshold.
    pub fn dimensions() -> impl Strategy<Value = HallDimensions> {
        (1..=MAX_SIDE, 1..=MAX_SIDE).prop_filter_map("valid dimensions", |(rows, seats)| {
            HallDimensions::new(rows, seats).ok()
        })
    }

    /// A coordinate inside `dimensions`.
    pub fn seat_in(dimensions: HallDimensions) -> impl Strategy<Value = SeatCoordinate> {
        (1..=dimensions.rows(), 1..=dimensions.seats_per_row())
            .prop_map(|(row, column)| SeatCoordinate::new(row, column))
    }

    /// A coordinate outside `dimensions` on at least one axis.
    pub fn seat_outside(dimensions: HallDimensions) -> impl Strategy<Value = SeatCoordinate> {
        let rows = dimensions.rows();
        let seats = dimensions.seats_per_row();
        prop_oneof![
            (Just(0_u32), 0..=seats + 1),
            (rows + 1..=rows + 10, 0..=seats + 1),
            (0..=rows + 1, Just(0_u32)),
            (0..=rows + 1, seats + 1..=seats + 10),
        ]
        .prop_map(|(row, column)| SeatCoordinate::new(row, column))
    }

    /// Dimensions paired with a list of in-hall coordinates (may repeat).
    pub fn dimensions_with_seats(
        max_purchases: usize,
    ) -> impl Strategy<Value = (HallDimensions, Vec<SeatCoordinate>)> {
        dimensions().prop_flat_map(move |dims| {
            (Just(dims), prop::collection::vec(seat_in(dims), 0..=max_purchases))
        })
    }

    /// Arbitrary pricing policies with modest prices.
    pub fn pricing_policy() -> impl Strategy<Value = PricingPolicy> {
        (0..=200_u32, 0..=100_u64, 0..=100_u64).prop_map(|(threshold, front, back)| {
            PricingPolicy {
                small_hall_capacity: threshold,
                front_price: Money::from_dollars(front),
                back_price: Money::from_dollars(back),
            }
        })
    }
}

/// Route `tracing` output from the code under test to the test harness.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinema_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
