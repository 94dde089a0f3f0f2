use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::hand::{sum_of_ranks, Hand, HandEvaluation};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Player1Wins,
    Player2Wins,
    Tie,
}

impl Outcome {
    /// The same verdict with the seats swapped.
    pub fn flip(self) -> Outcome {
        match self {
            Outcome::Player1Wins => Outcome::Player2Wins,
            Outcome::Player2Wins => Outcome::Player1Wins,
            Outcome::Tie => Outcome::Tie,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Player1Wins => "Player 1 Wins!",
            Outcome::Player2Wins => "Player 2 Wins!",
            Outcome::Tie => "It's a Tie!",
        }
    }

    /// Maps player 1's ordering against player 2 to a verdict.
    pub fn from_ordering(ord: Ordering) -> Outcome {
        match ord {
            Ordering::Greater => Outcome::Player1Wins,
            Ordering::Less => Outcome::Player2Wins,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Orders two evaluated hands: category rank, then tiebreak, then the sum of
/// numeric ranks. `Equal` means the hands are fully tied.
pub fn compare_hands(
    eval1: &HandEvaluation,
    hand1: &Hand,
    eval2: &HandEvaluation,
    hand2: &Hand,
) -> Ordering {
    eval1
        .rank()
        .cmp(&eval2.rank())
        .then_with(|| eval1.tiebreak.cmp(&eval2.tiebreak))
        .then_with(|| sum_of_ranks(hand1).cmp(&sum_of_ranks(hand2)))
}

/// Decides a round once both hands are evaluated.
///
/// # Examples
///
/// ```
/// use teenpatti_engine::cards::Card;
/// use teenpatti_engine::hand::{evaluate, Hand};
/// use teenpatti_engine::rules::{decide_winner, Outcome};
///
/// let parse = |s: [&str; 3]| Hand::new(s.map(|c| c.parse::<Card>().unwrap())).unwrap();
/// let trail = parse(["K♠", "K♥", "K♦"]);
/// let pair = parse(["5♠", "5♥", "9♦"]);
///
/// let outcome = decide_winner(&evaluate(&trail), &evaluate(&pair), &trail, &pair);
/// assert_eq!(outcome, Outcome::Player1Wins);
/// ```
pub fn decide_winner(
    eval1: &HandEvaluation,
    eval2: &HandEvaluation,
    hand1: &Hand,
    hand2: &Hand,
) -> Outcome {
    Outcome::from_ordering(compare_hands(eval1, hand1, eval2, hand2))
}
