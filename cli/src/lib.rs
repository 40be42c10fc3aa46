//! # Cinema CLI
//!
//! Interactive box office driving a [`cinema_core::CinemaHall`].
//!
//! The session reads whitespace-separated answers from any [`std::io::BufRead`]
//! and writes its transcript to any [`std::io::Write`], so the same code runs
//! against a terminal or an in-memory script.
//!
//! ## Example
//!
//! ```
//! use cinema_cli::{Session, SessionConfig};
//! use std::io::Cursor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let script = Cursor::new("8 9\n2\n1 1\n0\n");
//! let mut transcript = Vec::new();
//!
//! let stats = Session::new(script, &mut transcript, SessionConfig::default()).run()?;
//!
//! assert_eq!(stats.map(|s| s.tickets_sold), Some(1));
//! assert!(String::from_utf8(transcript)?.contains("Ticket price: $10"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod prompt;
pub mod session;

pub use config::{Config, LoggingConfig, SessionConfig};
pub use error::{InputError, SessionError};
pub use menu::{Menu, MenuChoice};
pub use session::Session;
