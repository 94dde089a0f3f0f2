use thiserror::Error;

use crate::cards::Card;
use crate::engine::Stage;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot deal {requested} cards, only {remaining} remain in the deck")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("A hand needs exactly {expected} cards, got {actual}")]
    InvalidHandSize { expected: usize, actual: usize },
    #[error("Card {0} appears more than once in the hand")]
    DuplicateCard(Card),
    #[error("Unrecognized card: {0:?}")]
    InvalidCard(String),
    #[error("Card index {0} is out of range (expected 0..3)")]
    CardIndexOutOfRange(usize),
    #[error("Cannot {action} while the round is {stage}")]
    InvalidTransition { stage: Stage, action: &'static str },
}
