//! Input parsing and validation for CLI commands.
//!
//! This module handles:
//! - Reveal commands typed during an interactive round
//! - Hand arguments given to `eval` and `compare`
//!
//! Parsing failures come back as [`RevealInput::Invalid`] or
//! [`CliError::InvalidInput`] so callers can re-prompt or exit with code 2.

use crate::error::CliError;
use teenpatti_engine::cards::Card;
use teenpatti_engine::hand::{HAND_SIZE, Hand};

/// What the player asked for at the reveal prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum RevealInput {
    /// Turn over one of player 2's cards (zero-based index)
    Card(usize),
    /// Turn over every remaining card
    All,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a line typed at the reveal prompt.
///
/// Accepts (case-insensitive):
/// - "1", "2", "3" → reveal that card of player 2
/// - "a" or "all" → reveal the rest
/// - "q" or "quit" → quit
///
/// # Example
///
/// ```rust
/// # use teenpatti_cli::validation::{parse_reveal_input, RevealInput};
/// assert_eq!(parse_reveal_input("2"), RevealInput::Card(1));
/// assert_eq!(parse_reveal_input("ALL"), RevealInput::All);
/// assert_eq!(parse_reveal_input("q"), RevealInput::Quit);
/// assert!(matches!(parse_reveal_input("7"), RevealInput::Invalid(_)));
/// ```
pub fn parse_reveal_input(input: &str) -> RevealInput {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return RevealInput::Invalid("Empty input".to_string());
    }

    match input.as_str() {
        "q" | "quit" => RevealInput::Quit,
        "a" | "all" => RevealInput::All,
        other => match other.parse::<usize>() {
            Ok(n) if (1..=HAND_SIZE).contains(&n) => RevealInput::Card(n - 1),
            Ok(_) => RevealInput::Invalid(format!("Card number must be 1-{}", HAND_SIZE)),
            Err(_) => RevealInput::Invalid(format!(
                "Unrecognized input '{}'. Enter 1-{}, 'all' or 'q'",
                other, HAND_SIZE
            )),
        },
    }
}

/// Parse cards given on the command line into a [`Hand`].
///
/// Each argument may hold one card or several separated by spaces or commas,
/// so `["As", "Kd", "Qh"]` and `["As,Kd,Qh"]` are equivalent.
pub fn parse_hand<S: AsRef<str>>(args: &[S]) -> Result<Hand, CliError> {
    let cards = args
        .iter()
        .flat_map(|a| {
            a.as_ref()
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .map(|t| {
            t.parse::<Card>()
                .map_err(|e| CliError::InvalidInput(e.to_string()))
        })
        .collect::<Result<Vec<Card>, CliError>>()?;

    Hand::from_slice(&cards).map_err(|e| CliError::InvalidInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use teenpatti_engine::cards::{Rank, Suit};

    #[test]
    fn reveal_input_variants() {
        assert_eq!(parse_reveal_input(" 1 "), RevealInput::Card(0));
        assert_eq!(parse_reveal_input("3"), RevealInput::Card(2));
        assert_eq!(parse_reveal_input("a"), RevealInput::All);
        assert_eq!(parse_reveal_input("QUIT"), RevealInput::Quit);
    }

    #[test]
    fn reveal_input_rejects_out_of_range() {
        match parse_reveal_input("0") {
            RevealInput::Invalid(msg) => assert!(msg.contains("1-3")),
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert!(matches!(parse_reveal_input(""), RevealInput::Invalid(_)));
        assert!(matches!(parse_reveal_input("fold"), RevealInput::Invalid(_)));
    }

    #[test]
    fn hand_from_separate_args() {
        let hand = parse_hand(&["As", "Kd", "Qh"]).unwrap();
        assert_eq!(hand.cards()[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(hand.cards()[2], Card::new(Rank::Queen, Suit::Hearts));
    }

    #[test]
    fn hand_from_one_joined_arg() {
        let joined = parse_hand(&["10♠, J♥ Q♦"]).unwrap();
        let split = parse_hand(&["Ts", "Jh", "Qd"]).unwrap();
        assert_eq!(joined, split);
    }

    #[test]
    fn hand_errors_are_invalid_input() {
        assert!(matches!(
            parse_hand(&["As", "Kd"]),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_hand(&["As", "As", "Kd"]),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_hand(&["As", "Xx", "Kd"]),
            Err(CliError::InvalidInput(_))
        ));
    }
}
