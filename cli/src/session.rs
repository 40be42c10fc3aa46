//! The interactive box office.
//!
//! Asks for the hall size once, then loops over the main menu until the user
//! exits, picks an unknown option, or input runs out. Bad answers are
//! answered with a message and a fresh prompt; only terminal I/O errors end
//! the session early.

use crate::config::SessionConfig;
use crate::error::{InputError, SessionError};
use crate::menu::{Menu, MenuChoice};
use crate::prompt::TokenReader;
use cinema_core::{CinemaHall, HallDimensions, SalesStatistics, SeatCoordinate, SeatError};
use std::io::{BufRead, Write};

const ROWS_PROMPT: &str = "Enter the number of rows:";
const SEATS_PROMPT: &str = "Enter the number of seats in each row:";
const ROW_PROMPT: &str = "Enter a row number:";
const SEAT_PROMPT: &str = "Enter a seat number in that row:";
const WRONG_INPUT: &str = "Wrong input!";
const ALREADY_PURCHASED: &str = "That ticket has already been purchased!";

/// Whether the session can keep reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    EndOfInput,
}

/// One box office session over a reader and a writer.
#[derive(Debug)]
pub struct Session<R, W> {
    input: TokenReader<R>,
    output: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading answers from `input` and writing the
    /// transcript to `output`.
    pub const fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            config,
        }
    }

    /// Runs the session to completion.
    ///
    /// Returns the final statistics, or `None` if input ended before a hall
    /// was opened.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if reading or writing fails.
    pub fn run(mut self) -> Result<Option<SalesStatistics>, SessionError> {
        let Some(mut hall) = self.open_hall()? else {
            tracing::info!("Input ended before a hall was opened");
            return Ok(None);
        };

        loop {
            writeln!(self.output, "{}", Menu)?;
            self.output.flush()?;

            let Some(token) = self.input.next_token()? else {
                tracing::debug!("Input ended at the main menu");
                break;
            };

            let choice = match token.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(error) => {
                    tracing::debug!(%error, "Leaving on unrecognised menu choice");
                    break;
                }
            };

            let flow = match choice {
                MenuChoice::ShowSeats => self.show_seats(&hall)?,
                MenuChoice::BuyTicket => self.buy_ticket(&mut hall)?,
                MenuChoice::Statistics => self.show_statistics(&hall)?,
                MenuChoice::Exit => break,
            };

            if flow == Flow::EndOfInput {
                break;
            }
        }

        self.output.flush()?;
        Ok(Some(hall.statistics()))
    }

    fn open_hall(&mut self) -> Result<Option<CinemaHall>, SessionError> {
        loop {
            let Some(rows) = self.ask(ROWS_PROMPT)? else {
                return Ok(None);
            };
            let Some(seats) = self.ask(SEATS_PROMPT)? else {
                return Ok(None);
            };
            writeln!(self.output)?;

            match parse_dimensions(&rows, &seats, self.config.max_capacity) {
                Ok(dimensions) => return Ok(Some(CinemaHall::new(dimensions))),
                Err(error) => {
                    tracing::debug!(%error, "Rejected hall size");
                    self.report(WRONG_INPUT)?;
                }
            }
        }
    }

    fn show_seats(&mut self, hall: &CinemaHall) -> Result<Flow, SessionError> {
        writeln!(self.output, "Cinema:")?;
        writeln!(self.output, "{}", hall.layout())?;
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn buy_ticket(&mut self, hall: &mut CinemaHall) -> Result<Flow, SessionError> {
        loop {
            let Some(row) = self.ask(ROW_PROMPT)? else {
                return Ok(Flow::EndOfInput);
            };
            let Some(seat) = self.ask(SEAT_PROMPT)? else {
                return Ok(Flow::EndOfInput);
            };
            writeln!(self.output)?;

            let coordinate = match parse_coordinate(&row, &seat) {
                Ok(coordinate) => coordinate,
                Err(error) => {
                    tracing::debug!(%error, "Rejected seat input");
                    self.report(WRONG_INPUT)?;
                    continue;
                }
            };

            match hall.purchase_seat(coordinate) {
                Ok(price) => {
                    self.report(&format!("Ticket price: {price}"))?;
                    return Ok(Flow::Continue);
                }
                Err(SeatError::InvalidCoordinate { .. }) => self.report(WRONG_INPUT)?,
                Err(SeatError::AlreadySold { .. }) => self.report(ALREADY_PURCHASED)?,
            }
        }
    }

    fn show_statistics(&mut self, hall: &CinemaHall) -> Result<Flow, SessionError> {
        writeln!(self.output, "{}", hall.statistics())?;
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    /// Print a prompt and read the answer.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(self.input.next_token()?)
    }

    /// Print a one-line message followed by a blank line.
    fn report(&mut self, message: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{message}")?;
        writeln!(self.output)?;
        Ok(())
    }
}

fn parse_number(token: &str) -> Result<u32, InputError> {
    token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_owned()))
}

/// Parses the opening answers into hall dimensions no larger than
/// `max_capacity` seats.
///
/// # Errors
///
/// Returns an [`InputError`] if either token is not a number, the hall is
/// empty or overflows, or it exceeds `max_capacity`.
pub fn parse_dimensions(
    rows: &str,
    seats: &str,
    max_capacity: u32,
) -> Result<HallDimensions, InputError> {
    let dimensions = HallDimensions::new(parse_number(rows)?, parse_number(seats)?)?;

    if dimensions.capacity() > max_capacity {
        return Err(InputError::TooLarge {
            capacity: dimensions.capacity(),
            max: max_capacity,
        });
    }
    Ok(dimensions)
}

/// Parses a row and seat answer. Range checks are left to the hall.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] if either token is not a
/// non-negative whole number.
pub fn parse_coordinate(row: &str, seat: &str) -> Result<SeatCoordinate, InputError> {
    Ok(SeatCoordinate::new(parse_number(row)?, parse_number(seat)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinema_core::DimensionsError;

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("8", "9", 100).map(|d| d.capacity()), Ok(72));
        assert_eq!(
            parse_dimensions("x", "9", 100),
            Err(InputError::NotANumber("x".to_owned()))
        );
        assert_eq!(
            parse_dimensions("-3", "9", 100),
            Err(InputError::NotANumber("-3".to_owned()))
        );
        assert_eq!(
            parse_dimensions("0", "9", 100),
            Err(InputError::Dimensions(DimensionsError::Empty {
                rows: 0,
                seats_per_row: 9
            }))
        );
        assert_eq!(
            parse_dimensions("20", "20", 100),
            Err(InputError::TooLarge {
                capacity: 400,
                max: 100
            })
        );
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("1", "2"), Ok(SeatCoordinate::new(1, 2)));
        assert_eq!(parse_coordinate("0", "0"), Ok(SeatCoordinate::new(0, 0)));
        assert!(parse_coordinate("1", "two").is_err());
    }
}
