use std::fmt;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate, Hand, HandEvaluation, HAND_SIZE};
use crate::rules::{decide_winner, Outcome};

/// Where a [`Round`] is in its reveal sequence.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Idle,
    Dealt,
    Player1Revealed,
    Player2Revealed,
    Resolved,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Idle => "idle",
            Stage::Dealt => "dealt",
            Stage::Player1Revealed => "showing player 1",
            Stage::Player2Revealed => "showing both players",
            Stage::Resolved => "resolved",
        };
        f.write_str(s)
    }
}

/// Everything a finished round produced.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub hand1: Hand,
    pub hand2: Hand,
    pub eval1: HandEvaluation,
    pub eval2: HandEvaluation,
    pub outcome: Outcome,
}

/// Snapshot of one round. Every transition consumes the current snapshot and
/// returns the next one, so a stale state can't be advanced twice.
///
/// # Examples
///
/// ```
/// use teenpatti_engine::deck::Deck;
/// use teenpatti_engine::engine::{Round, Stage};
///
/// let mut deck = Deck::new_with_seed(7);
/// deck.shuffle();
///
/// let round = Round::Idle.deal(&mut deck).unwrap();
/// let round = round.reveal_player1().unwrap();
/// assert!(round.eval1().is_some());
/// assert!(round.eval2().is_none());
///
/// let round = round.reveal_player2().unwrap().resolve().unwrap();
/// assert_eq!(round.stage(), Stage::Resolved);
/// assert!(round.result().is_some());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Round {
    #[default]
    Idle,
    /// Both hands drawn, neither shown.
    Dealt { hand1: Hand, hand2: Hand },
    /// Player 1's hand is evaluated; player 2's cards turn over one at a time.
    Player1Revealed {
        hand1: Hand,
        hand2: Hand,
        eval1: HandEvaluation,
        revealed2: [bool; HAND_SIZE],
    },
    Player2Revealed {
        hand1: Hand,
        hand2: Hand,
        eval1: HandEvaluation,
        eval2: HandEvaluation,
    },
    Resolved(RoundResult),
}

impl Round {
    pub fn stage(&self) -> Stage {
        match self {
            Round::Idle => Stage::Idle,
            Round::Dealt { .. } => Stage::Dealt,
            Round::Player1Revealed { .. } => Stage::Player1Revealed,
            Round::Player2Revealed { .. } => Stage::Player2Revealed,
            Round::Resolved(_) => Stage::Resolved,
        }
    }

    fn invalid(&self, action: &'static str) -> GameError {
        GameError::InvalidTransition {
            stage: self.stage(),
            action,
        }
    }

    /// Draws two disjoint hands from the front of `deck`.
    pub fn deal(self, deck: &mut Deck) -> Result<Round, GameError> {
        if !matches!(self, Round::Idle) {
            return Err(self.invalid("deal"));
        }
        // both hands or neither
        if deck.remaining() < 2 * HAND_SIZE {
            return Err(GameError::InsufficientCards {
                requested: 2 * HAND_SIZE,
                remaining: deck.remaining(),
            });
        }
        let hand1 = deck.deal_hand()?;
        let hand2 = deck.deal_hand()?;
        debug!(remaining = deck.remaining(), "round dealt");
        Ok(Round::Dealt { hand1, hand2 })
    }

    pub fn reveal_player1(self) -> Result<Round, GameError> {
        match self {
            Round::Dealt { hand1, hand2 } => Ok(Round::Player1Revealed {
                hand1,
                hand2,
                eval1: evaluate(&hand1),
                revealed2: [false; HAND_SIZE],
            }),
            other => Err(other.invalid("reveal player 1")),
        }
    }

    /// Turns over one of player 2's cards. Turning an already visible card
    /// changes nothing; the third card moves the round to [`Stage::Player2Revealed`].
    pub fn reveal_player2_card(self, index: usize) -> Result<Round, GameError> {
        let Round::Player1Revealed {
            hand1,
            hand2,
            eval1,
            mut revealed2,
        } = self
        else {
            return Err(self.invalid("reveal a player 2 card"));
        };
        if index >= HAND_SIZE {
            return Err(GameError::CardIndexOutOfRange(index));
        }
        revealed2[index] = true;
        if revealed2.iter().all(|&r| r) {
            Ok(Round::Player2Revealed {
                hand1,
                hand2,
                eval1,
                eval2: evaluate(&hand2),
            })
        } else {
            Ok(Round::Player1Revealed {
                hand1,
                hand2,
                eval1,
                revealed2,
            })
        }
    }

    /// Turns over every remaining card of player 2.
    pub fn reveal_player2(self) -> Result<Round, GameError> {
        match self {
            Round::Player1Revealed {
                hand1,
                hand2,
                eval1,
                ..
            } => Ok(Round::Player2Revealed {
                hand1,
                hand2,
                eval1,
                eval2: evaluate(&hand2),
            }),
            other => Err(other.invalid("reveal player 2")),
        }
    }

    pub fn resolve(self) -> Result<Round, GameError> {
        match self {
            Round::Player2Revealed {
                hand1,
                hand2,
                eval1,
                eval2,
            } => {
                let outcome = decide_winner(&eval1, &eval2, &hand1, &hand2);
                info!(
                    p1 = eval1.label(),
                    p2 = eval2.label(),
                    ?outcome,
                    "round resolved"
                );
                Ok(Round::Resolved(RoundResult {
                    hand1,
                    hand2,
                    eval1,
                    eval2,
                    outcome,
                }))
            }
            other => Err(other.invalid("resolve")),
        }
    }

    pub fn hands(&self) -> Option<(&Hand, &Hand)> {
        match self {
            Round::Idle => None,
            Round::Dealt { hand1, hand2 }
            | Round::Player1Revealed { hand1, hand2, .. }
            | Round::Player2Revealed { hand1, hand2, .. } => Some((hand1, hand2)),
            Round::Resolved(r) => Some((&r.hand1, &r.hand2)),
        }
    }

    pub fn eval1(&self) -> Option<&HandEvaluation> {
        match self {
            Round::Player1Revealed { eval1, .. } | Round::Player2Revealed { eval1, .. } => {
                Some(eval1)
            }
            Round::Resolved(r) => Some(&r.eval1),
            _ => None,
        }
    }

    pub fn eval2(&self) -> Option<&HandEvaluation> {
        match self {
            Round::Player2Revealed { eval2, .. } => Some(eval2),
            Round::Resolved(r) => Some(&r.eval2),
            _ => None,
        }
    }

    /// Which of player 2's cards are face up.
    pub fn revealed_player2_cards(&self) -> [bool; HAND_SIZE] {
        match self {
            Round::Player1Revealed { revealed2, .. } => *revealed2,
            Round::Player2Revealed { .. } | Round::Resolved(_) => [true; HAND_SIZE],
            _ => [false; HAND_SIZE],
        }
    }

    pub fn result(&self) -> Option<&RoundResult> {
        match self {
            Round::Resolved(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<RoundResult, GameError> {
        match self {
            Round::Resolved(r) => Ok(r),
            other => Err(other.invalid("read the result")),
        }
    }
}

/// Starts rounds. Each round gets its own freshly shuffled deck whose seed is
/// drawn from the engine's generator, so a seeded engine replays the same
/// sequence of rounds.
///
/// # Examples
///
/// ```
/// use teenpatti_engine::engine::Engine;
///
/// let mut a = Engine::new(Some(12345));
/// let mut b = Engine::new(Some(12345));
/// assert_eq!(a.play_round().unwrap(), b.play_round().unwrap());
/// ```
#[derive(Debug)]
pub struct Engine {
    rng: ChaCha20Rng,
    rounds_started: u64,
}

impl Engine {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            rounds_started: 0,
        }
    }

    /// Shuffles a new deck and deals both hands, leaving them hidden.
    pub fn start_round(&mut self) -> Result<Round, GameError> {
        let mut deck = Deck::new_with_seed(self.rng.next_u64());
        deck.shuffle();
        self.rounds_started += 1;
        debug!(round = self.rounds_started, "starting round");
        Round::Idle.deal(&mut deck)
    }

    /// Runs a whole round without pausing between reveals.
    pub fn play_round(&mut self) -> Result<RoundResult, GameError> {
        self.start_round()?
            .reveal_player1()?
            .reveal_player2()?
            .resolve()?
            .into_result()
    }

    pub fn rounds_started(&self) -> u64 {
        self.rounds_started
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Plays one round on an unseeded engine.
pub fn play_round() -> Result<RoundResult, GameError> {
    Engine::default().play_round()
}
