//! Sales statistics snapshot.

use crate::types::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-in-time sales report for a hall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesStatistics {
    /// Tickets purchased so far
    pub tickets_sold: u32,
    /// Total seats in the hall
    pub capacity: u32,
    /// Sum of the prices of all purchased tickets
    pub current_income: Money,
    /// Income if every seat were sold
    pub total_income: Money,
}

impl SalesStatistics {
    /// Share of the hall sold, as a percentage in `0.0..=100.0`.
    #[must_use]
    pub fn percent_sold(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        f64::from(self.tickets_sold) / f64::from(self.capacity) * 100.0
    }

    /// Seats still on sale
    #[must_use]
    pub const fn seats_available(&self) -> u32 {
        self.capacity.saturating_sub(self.tickets_sold)
    }

    /// Whether every seat has been sold
    #[must_use]
    pub const fn is_sold_out(&self) -> bool {
        self.tickets_sold >= self.capacity
    }
}

impl fmt::Display for SalesStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of purchased tickets: {}", self.tickets_sold)?;
        writeln!(f, "Percentage: {:.2}%", self.percent_sold())?;
        writeln!(f, "Current income: {}", self.current_income)?;
        write!(f, "Total income: {}", self.total_income)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(tickets_sold: u32, capacity: u32) -> SalesStatistics {
        SalesStatistics {
            tickets_sold,
            capacity,
            current_income: Money::from_dollars(u64::from(tickets_sold) * 10),
            total_income: Money::from_dollars(u64::from(capacity) * 10),
        }
    }

    #[test]
    fn test_percentage_uses_real_division() {
        // Integer division would report 0 here.
        let report = stats(1, 72);
        assert_eq!(format!("{:.2}", report.percent_sold()), "1.39");
    }

    #[test]
    fn test_sold_out_is_exactly_one_hundred() {
        let report = stats(72, 72);
        assert!((report.percent_sold() - 100.0).abs() < f64::EPSILON);
        assert!(report.is_sold_out());
        assert_eq!(report.seats_available(), 0);
    }

    #[test]
    fn test_report_format() {
        let report = stats(2, 25);
        assert_eq!(
            report.to_string(),
            "Number of purchased tickets: 2\n\
             Percentage: 8.00%\n\
             Current income: $20\n\
             Total income: $250"
        );
    }
}
