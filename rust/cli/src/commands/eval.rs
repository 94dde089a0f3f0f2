//! # Eval Command
//!
//! Classifies a single three-card hand and prints its category, category
//! rank, tiebreak value and sum of ranks.

use crate::error::CliError;
use crate::formatters::{CardStyle, format_hand};
use crate::validation::parse_hand;
use std::io::Write;
use teenpatti_engine::hand::{evaluate, sum_of_ranks};

pub fn handle_eval_command(
    cards: &[String],
    style: CardStyle,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hand = parse_hand(cards)?;
    let eval = evaluate(&hand);

    writeln!(out, "Hand: {}", format_hand(&hand, style))?;
    writeln!(out, "Category: {}", eval.label())?;
    writeln!(out, "Rank: {}", eval.rank())?;
    writeln!(out, "Tiebreak: {}", eval.tiebreak)?;
    writeln!(out, "Sum of ranks: {}", sum_of_ranks(&hand))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(args: &[&str]) -> Result<String, CliError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        handle_eval_command(&args, CardStyle::Unicode, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn ace_low_sequence_report() {
        let s = eval(&["As", "2h", "3d"]).unwrap();
        assert!(s.contains("Category: Sequence"));
        assert!(s.contains("Rank: 4"));
        assert!(s.contains("Tiebreak: 1"));
        assert!(s.contains("Sum of ranks: 13"));
    }

    #[test]
    fn trail_report() {
        let s = eval(&["K♠ K♥ K♦"]).unwrap();
        assert!(s.contains("Hand: K♠ K♥ K♦"));
        assert!(s.contains("Category: Trail (Three of a Kind)"));
        assert!(s.contains("Tiebreak: 11"));
    }

    #[test]
    fn wrong_card_count_is_invalid_input() {
        assert!(matches!(
            eval(&["As", "Kd", "Qh", "Jc"]),
            Err(CliError::InvalidInput(_))
        ));
    }
}
