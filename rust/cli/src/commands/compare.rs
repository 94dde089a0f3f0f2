//! Compare command handler.
//!
//! Evaluates two hands given on the command line and applies the
//! winner-determination cascade (category, tiebreak, sum of ranks).

use crate::error::CliError;
use crate::formatters::{CardStyle, format_evaluation};
use crate::validation::parse_hand;
use std::io::Write;
use teenpatti_engine::hand::evaluate;
use teenpatti_engine::rules::decide_winner;

pub fn handle_compare_command(
    hand1: &str,
    hand2: &str,
    style: CardStyle,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let h1 = parse_hand(&[hand1])?;
    let h2 = parse_hand(&[hand2])?;
    // the same physical card can't be in both hands
    if let Some(dup) = h1.cards().iter().find(|c| h2.cards().contains(c)) {
        return Err(CliError::InvalidInput(format!(
            "Card {} appears in both hands",
            dup
        )));
    }

    let e1 = evaluate(&h1);
    let e2 = evaluate(&h2);
    let outcome = decide_winner(&e1, &e2, &h1, &h2);

    writeln!(out, "Player 1: {}", format_evaluation(&h1, &e1, style))?;
    writeln!(out, "Player 2: {}", format_evaluation(&h2, &e2, style))?;
    writeln!(out, "Result: {}", outcome.label())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(h1: &str, h2: &str) -> Result<String, CliError> {
        let mut out = Vec::new();
        handle_compare_command(h1, h2, CardStyle::Unicode, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn trail_beats_pair() {
        let s = compare("K♠ K♥ K♦", "5♠ 5♥ 9♦").unwrap();
        assert!(s.contains("Result: Player 1 Wins!"));
    }

    #[test]
    fn same_shape_different_suits_tie() {
        let s = compare("5s,6h,9d", "5c,6d,9s").unwrap();
        assert!(s.contains("Result: It's a Tie!"));
    }

    #[test]
    fn shared_card_is_rejected() {
        assert!(matches!(
            compare("As Kd Qh", "As 2c 3c"),
            Err(CliError::InvalidInput(msg)) if msg.contains("both hands")
        ));
    }
}
