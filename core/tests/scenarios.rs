//! Box office scenarios for the two pricing regimes.
//!
//! Run with: `cargo test -p cinema-core --test scenarios`

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use cinema_core::{Money, SeatCoordinate, SeatError, SeatState};
use cinema_testing::{HallTest, assertions, fixtures, init_test_tracing};

/// 8×9 hall: front rows 1–4 at $10, back rows 5–8 at $8.
#[test]
fn test_large_hall_scenario() {
    init_test_tracing();
    let mut hall = fixtures::large_hall();

    assert_eq!(hall.capacity(), 72);
    assert_eq!(hall.total_income(), Money::from_dollars(648));

    let front = SeatCoordinate::new(1, 1);
    let back = SeatCoordinate::new(8, 1);

    assert_eq!(hall.purchase_seat(front), Ok(Money::from_dollars(10)));
    assert_eq!(hall.purchase_seat(back), Ok(Money::from_dollars(8)));

    assert_eq!(
        hall.purchase_seat(front),
        Err(SeatError::AlreadySold { coordinate: front })
    );
    assert_eq!(
        hall.purchase_seat(back),
        Err(SeatError::AlreadySold { coordinate: back })
    );
    assert!(matches!(
        hall.purchase_seat(SeatCoordinate::new(9, 1)),
        Err(SeatError::InvalidCoordinate { .. })
    ));

    let stats = hall.statistics();
    assert_eq!(stats.tickets_sold, 2);
    assert_eq!(stats.current_income, Money::from_dollars(18));
    assertions::assert_ledger_consistent(&hall);
}

/// 5×5 hall: 25 seats, flat $10 everywhere.
#[test]
fn test_small_hall_scenario() {
    let hall = fixtures::small_hall();

    for seat in fixtures::all_seats(&hall) {
        assert_eq!(hall.price_of(seat), Ok(Money::from_dollars(10)));
    }
    assert_eq!(hall.total_income(), Money::from_dollars(250));
}

#[test]
fn test_sixty_one_seats_switches_to_two_tiers() {
    let flat = fixtures::hall(6, 10);
    let tiered = fixtures::hall(61, 1);

    assert_eq!(flat.total_income(), Money::from_dollars(600));
    assert_eq!(flat.price_of(SeatCoordinate::new(6, 1)), Ok(Money::from_dollars(10)));

    // 30 front rows at $10, 31 back rows at $8
    assert_eq!(tiered.total_income(), Money::from_dollars(300 + 248));
    assert_eq!(tiered.price_of(SeatCoordinate::new(30, 1)), Ok(Money::from_dollars(10)));
    assert_eq!(tiered.price_of(SeatCoordinate::new(31, 1)), Ok(Money::from_dollars(8)));
}

#[test]
fn test_selling_out_reports_one_hundred_percent() {
    let mut hall = fixtures::large_hall();
    let seats: Vec<_> = fixtures::all_seats(&hall).collect();

    for seat in seats {
        hall.purchase_seat(seat).unwrap();
    }

    let stats = hall.statistics();
    assert!(stats.is_sold_out());
    assert_eq!(format!("{:.2}", stats.percent_sold()), "100.00");
    assert_eq!(stats.current_income, hall.total_income());
    assert!(hall.layout().rows().flatten().all(|seat| *seat == SeatState::Sold));
}

#[test]
fn test_rejected_purchase_on_back_row() {
    let seat = SeatCoordinate::new(5, 9);

    HallTest::new()
        .given_hall(fixtures::large_hall())
        .given_sold([SeatCoordinate::new(1, 1), seat])
        .when_purchase(seat)
        .then_outcome(move |outcome| {
            assert_eq!(outcome, &Err(SeatError::AlreadySold { coordinate: seat }));
        })
        .then_hall(|hall| {
            assert_eq!(hall.current_income(), Money::from_dollars(18));
        })
        .run();
}

#[test]
fn test_invalid_coordinates_on_both_axes() {
    for seat in [
        SeatCoordinate::new(0, 0),
        SeatCoordinate::new(9, 1),
        SeatCoordinate::new(1, 10),
        SeatCoordinate::new(u32::MAX, u32::MAX),
    ] {
        HallTest::new()
            .given_hall(fixtures::large_hall())
            .when_purchase(seat)
            .then_outcome(|outcome| {
                assert!(matches!(outcome, Err(SeatError::InvalidCoordinate { .. })));
            })
            .then_hall(|hall| assert_eq!(hall.tickets_sold(), 0))
            .run();
    }
}

#[test]
fn test_layout_after_purchases() {
    let mut hall = fixtures::hall(3, 4);
    hall.purchase_seat(SeatCoordinate::new(1, 2)).unwrap();
    hall.purchase_seat(SeatCoordinate::new(3, 4)).unwrap();

    assert_eq!(
        hall.layout().to_string(),
        "  1 2 3 4\n\
         1 S B S S\n\
         2 S S S S\n\
         3 S S S B"
    );
}

#[test]
fn test_error_messages() {
    let hall = fixtures::large_hall();
    let error = hall.price_of(SeatCoordinate::new(9, 1)).unwrap_err();
    assert_eq!(error.to_string(), "row 9, seat 1 is outside the 8x9 hall");

    let sold = SeatError::AlreadySold {
        coordinate: SeatCoordinate::new(2, 3),
    };
    assert_eq!(sold.to_string(), "row 2, seat 3 has already been purchased");
}
