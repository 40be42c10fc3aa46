//! Main menu.

use crate::error::InputError;
use std::fmt;
use std::str::FromStr;

/// One entry of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Print the seat chart
    ShowSeats,
    /// Buy one ticket
    BuyTicket,
    /// Print sales statistics
    Statistics,
    /// Leave the box office
    Exit,
}

impl MenuChoice {
    /// Entries in display order
    pub const ALL: [Self; 4] = [Self::ShowSeats, Self::BuyTicket, Self::Statistics, Self::Exit];

    /// Number the user types to pick this entry
    #[must_use]
    pub const fn key(self) -> i32 {
        match self {
            Self::ShowSeats => 1,
            Self::BuyTicket => 2,
            Self::Statistics => 3,
            Self::Exit => 0,
        }
    }

    /// Menu text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShowSeats => "Show the seats",
            Self::BuyTicket => "Buy a ticket",
            Self::Statistics => "Statistics",
            Self::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = InputError;

    /// Matches by numeric value, so `01`, `+1` and `1` pick the same entry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .ok()
            .and_then(|key| Self::ALL.into_iter().find(|choice| choice.key() == key))
            .ok_or_else(|| InputError::UnknownChoice(s.to_owned()))
    }
}

/// The full menu, one entry per line, no trailing newline.
#[derive(Clone, Copy, Debug, Default)]
pub struct Menu;

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, choice) in MenuChoice::ALL.into_iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_text() {
        assert_eq!(
            Menu.to_string(),
            "1. Show the seats\n2. Buy a ticket\n3. Statistics\n0. Exit"
        );
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!("1".parse(), Ok(MenuChoice::ShowSeats));
        assert_eq!("2".parse(), Ok(MenuChoice::BuyTicket));
        assert_eq!("3".parse(), Ok(MenuChoice::Statistics));
        assert_eq!("0".parse(), Ok(MenuChoice::Exit));
        assert_eq!(
            "7".parse::<MenuChoice>(),
            Err(InputError::UnknownChoice("7".to_owned()))
        );
        assert!("one".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_choices_match_by_number() {
        assert_eq!("01".parse(), Ok(MenuChoice::ShowSeats));
        assert_eq!("+2".parse(), Ok(MenuChoice::BuyTicket));
        assert_eq!("003".parse(), Ok(MenuChoice::Statistics));
        assert_eq!("-0".parse(), Ok(MenuChoice::Exit));
    }
}
