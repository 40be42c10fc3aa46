//! # Cinema Core
//!
//! Seat management for a single cinema hall.
//!
//! A hall is an R×C grid of seats, each either available or sold. Tickets are
//! priced by position: small halls (60 seats or fewer) charge one flat price,
//! larger halls charge more for the front half than for the back half. The
//! hall keeps a running count of tickets sold and income earned, and can
//! report them alongside the income a full house would bring.
//!
//! ## Core Concepts
//!
//! - **[`HallDimensions`]**: validated rows × seats per row
//! - **[`SeatCoordinate`]**: 1-indexed (row, seat) position
//! - **[`PricingPolicy`]**: the two-tier price rule
//! - **[`CinemaHall`]**: the grid plus its sales ledger
//! - **[`SeatLayout`]** / **[`SalesStatistics`]**: read-only snapshots
//! - **[`SharedHall`]**: lock-guarded handle for multi-threaded callers
//!
//! The crate performs no I/O. Callers render layouts and reports through
//! their `Display` implementations.
//!
//! ## Example
//!
//! ```
//! use cinema_core::{CinemaHall, HallDimensions, Money, SeatCoordinate, SeatError};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut hall = CinemaHall::new(HallDimensions::new(8, 9)?);
//! assert_eq!(hall.total_income(), Money::from_dollars(648));
//!
//! let front = SeatCoordinate::new(1, 1);
//! assert_eq!(hall.purchase_seat(front)?, Money::from_dollars(10));
//! assert_eq!(
//!     hall.purchase_seat(front),
//!     Err(SeatError::AlreadySold { coordinate: front })
//! );
//!
//! println!("{}", hall.layout());
//! println!("{}", hall.statistics());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod hall;
pub mod layout;
pub mod pricing;
pub mod shared;
pub mod statistics;
pub mod types;

pub use error::{DimensionsError, LayoutError, SeatError};
pub use hall::CinemaHall;
pub use layout::SeatLayout;
pub use pricing::PricingPolicy;
pub use shared::SharedHall;
pub use statistics::SalesStatistics;
pub use types::{HallDimensions, Money, SeatCoordinate, SeatState};
