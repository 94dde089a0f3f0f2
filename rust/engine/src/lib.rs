//! # teenpatti-engine: Teen Patti Rules Core
//!
//! A small rules engine for two-player, three-card Teen Patti rounds:
//! deck construction and unbiased shuffling, three-card hand classification,
//! and the tie-break cascade that decides a winner.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), rendering and parsing
//! - [`deck`] - 52-card deck with Fisher–Yates shuffle over a ChaCha20 RNG
//! - [`hand`] - Hand validation, classification and tiebreak values
//! - [`rules`] - Winner determination between two evaluated hands
//! - [`engine`] - Round state machine and round orchestration
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use teenpatti_engine::cards::{Card, Rank, Suit};
//! use teenpatti_engine::hand::{evaluate, Category, Hand};
//!
//! let hand = Hand::new([
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//! ])
//! .unwrap();
//!
//! let eval = evaluate(&hand);
//! assert_eq!(eval.category, Category::PureSequence);
//! println!("{}: {}", hand, eval.label());
//! ```
//!
//! ## Staged Reveal
//!
//! A round can be driven one step at a time, so a front end can show player 1's
//! hand before player 2's cards are turned over:
//!
//! ```rust
//! use teenpatti_engine::engine::{Engine, Stage};
//!
//! let mut engine = Engine::new(Some(42));
//! let round = engine.start_round().unwrap().reveal_player1().unwrap();
//! assert_eq!(round.stage(), Stage::Player1Revealed);
//!
//! let round = round
//!     .reveal_player2_card(0)
//!     .and_then(|r| r.reveal_player2_card(1))
//!     .and_then(|r| r.reveal_player2_card(2))
//!     .unwrap();
//! let result = round.resolve().unwrap().into_result().unwrap();
//! println!("{}", result.outcome.label());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod rules;
