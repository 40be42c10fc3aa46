//! Cinema box office binary
//!
//! Prompts for the hall size, then serves the menu on stdin/stdout until the
//! user exits.

use anyhow::Context;
use cinema_cli::{Config, Session, logging};
use std::io;

fn main() -> anyhow::Result<()> {
    // Optional .env for local runs
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    logging::init(&config.logging);

    tracing::info!(
        max_capacity = config.session.max_capacity,
        "Box office opening"
    );

    let session = Session::new(io::stdin().lock(), io::stdout().lock(), config.session);
    let summary = session.run().context("box office session failed")?;

    match summary {
        Some(stats) => tracing::info!(
            tickets_sold = stats.tickets_sold,
            current_income = %stats.current_income,
            "Box office closed"
        ),
        None => tracing::info!("Box office closed without opening a hall"),
    }

    Ok(())
}
