//! Deal command handler.
//!
//! Shuffles a fresh deck and deals both hands face up without evaluating
//! them. A seed makes the deal reproducible.

use crate::error::CliError;
use crate::formatters::{CardStyle, format_hand};
use std::io::Write;
use teenpatti_engine::engine::Engine;

/// Handle the deal command.
///
/// Prints `Player 1:` and `Player 2:` lines with the dealt cards.
pub fn handle_deal_command(
    seed: Option<u64>,
    style: CardStyle,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut engine = Engine::new(seed);
    let round = engine.start_round()?;
    let (hand1, hand2) = round
        .hands()
        .ok_or_else(|| CliError::InvalidInput("no hands were dealt".into()))?;

    writeln!(out, "Player 1: {}", format_hand(hand1, style))?;
    writeln!(out, "Player 2: {}", format_hand(hand2, style))?;
    Ok(())
}
