use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

pub const HAND_SIZE: usize = 3;

/// Three distinct cards held by one player for one round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn new(cards: [Card; HAND_SIZE]) -> Result<Self, GameError> {
        let mut seen = HashSet::with_capacity(HAND_SIZE);
        for c in cards {
            if !seen.insert(c) {
                return Err(GameError::DuplicateCard(c));
            }
        }
        Ok(Self(cards))
    }

    pub fn from_slice(cards: &[Card]) -> Result<Self, GameError> {
        let arr: [Card; HAND_SIZE] = cards.try_into().map_err(|_| GameError::InvalidHandSize {
            expected: HAND_SIZE,
            actual: cards.len(),
        })?;
        Self::new(arr)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    fn sorted_ranks(&self) -> [u8; HAND_SIZE] {
        let mut v = self.0.map(|c| c.numeric_rank());
        v.sort_unstable();
        v
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = GameError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::from_slice(&cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.0.to_vec()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{} {} {}", a, b, c)
    }
}

/// Hand categories, weakest first. The discriminant is the rank ordinal (1–6).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    Color = 3,
    Sequence = 4,
    PureSequence = 5,
    Trail = 6,
}

impl Category {
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Trail => "Trail (Three of a Kind)",
            Category::PureSequence => "Pure Sequence",
            Category::Sequence => "Sequence",
            Category::Color => "Color (Flush)",
            Category::Pair => "Pair",
            Category::HighCard => "High Card",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Order in which categories are tested; the first match decides.
pub const CHECK_ORDER: [Category; 6] = [
    Category::Trail,
    Category::PureSequence,
    Category::Sequence,
    Category::Color,
    Category::Pair,
    Category::HighCard,
];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub category: Category,
    /// Compared only between hands of the same category.
    pub tiebreak: u8,
}

impl HandEvaluation {
    pub fn rank(&self) -> u8 {
        self.category.rank()
    }

    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

/// Rank/suit features of a hand, computed once and shared by every predicate.
struct Shape {
    ranks: [u8; HAND_SIZE],
    same_suit: bool,
}

impl Shape {
    fn of(hand: &Hand) -> Self {
        let [a, b, c] = hand.0;
        Self {
            ranks: hand.sorted_ranks(),
            same_suit: a.suit == b.suit && b.suit == c.suit,
        }
    }

    fn high(&self) -> u8 {
        self.ranks[2]
    }

    /// Highest card of a sequence. The Ace only plays low: A-2-3 is a
    /// sequence topped by the 3, Q-K-A is not a sequence at all.
    fn sequence_high(&self) -> Option<u8> {
        let [v0, v1, v2] = self.ranks;
        let ace = Rank::Ace.index();
        if [v0, v1, v2] == [Rank::Two.index(), Rank::Three.index(), ace] {
            Some(v1)
        } else if v2 != ace && v1 == v0 + 1 && v2 == v1 + 1 {
            Some(v2)
        } else {
            None
        }
    }

    /// Rank shared by exactly two cards. Sorted, the middle card is always one of them.
    fn pair_rank(&self) -> Option<u8> {
        let [v0, v1, v2] = self.ranks;
        ((v0 == v1) != (v1 == v2)).then_some(v1)
    }

    /// Tiebreak value if the hand belongs to `category`.
    fn tiebreak_for(&self, category: Category) -> Option<u8> {
        let [v0, v1, v2] = self.ranks;
        match category {
            Category::Trail => (v0 == v1 && v1 == v2).then_some(v0),
            Category::PureSequence => self.sequence_high().filter(|_| self.same_suit),
            Category::Sequence => self.sequence_high(),
            Category::Color => self.same_suit.then(|| self.high()),
            Category::Pair => self.pair_rank(),
            Category::HighCard => Some(self.high()),
        }
    }
}

/// Classifies a hand by testing [`CHECK_ORDER`] and stopping at the first match.
///
/// # Examples
///
/// ```
/// use teenpatti_engine::cards::Card;
/// use teenpatti_engine::hand::{evaluate, Category, Hand};
///
/// let cards: Vec<Card> = ["2♠", "3♥", "A♦"].iter().map(|c| c.parse().unwrap()).collect();
/// let hand = Hand::from_slice(&cards).unwrap();
/// let eval = evaluate(&hand);
/// assert_eq!(eval.category, Category::Sequence);
/// assert_eq!(eval.tiebreak, 1);
/// ```
pub fn evaluate(hand: &Hand) -> HandEvaluation {
    let shape = Shape::of(hand);
    CHECK_ORDER
        .iter()
        .find_map(|&category| {
            shape
                .tiebreak_for(category)
                .map(|tiebreak| HandEvaluation { category, tiebreak })
        })
        .unwrap_or(HandEvaluation {
            category: Category::HighCard,
            tiebreak: shape.high(),
        })
}

/// Validates a raw card slice and evaluates it.
///
/// # Errors
///
/// - [`GameError::InvalidHandSize`] when the slice is not exactly three cards
/// - [`GameError::DuplicateCard`] when a card repeats
pub fn evaluate_cards(cards: &[Card]) -> Result<HandEvaluation, GameError> {
    Hand::from_slice(cards).map(|h| evaluate(&h))
}

/// Sum of the three numeric ranks; the last tiebreaker between hands.
pub fn sum_of_ranks(hand: &Hand) -> u32 {
    hand.0.iter().map(|c| u32::from(c.numeric_rank())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn hand(cards: [&str; 3]) -> Hand {
        Hand::new(cards.map(|c| c.parse::<Card>().unwrap())).unwrap()
    }

    #[test]
    fn rejects_wrong_sizes() {
        let two: Vec<Card> = vec!["2s".parse().unwrap(), "3s".parse().unwrap()];
        assert_eq!(
            Hand::from_slice(&two),
            Err(GameError::InvalidHandSize {
                expected: 3,
                actual: 2
            })
        );
        assert!(matches!(
            evaluate_cards(&[]),
            Err(GameError::InvalidHandSize { actual: 0, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_cards() {
        let k = Card::new(Rank::King, Suit::Hearts);
        let q = Card::new(Rank::Queen, Suit::Hearts);
        assert_eq!(Hand::new([k, q, k]), Err(GameError::DuplicateCard(k)));
    }

    #[test]
    fn pair_tiebreak_ignores_kicker() {
        let e = evaluate(&hand(["5♠", "A♥", "5♦"]));
        assert_eq!(e.category, Category::Pair);
        assert_eq!(e.tiebreak, 3);
    }

    #[test]
    fn each_category_is_reachable() {
        assert_eq!(evaluate(&hand(["9♠", "9♥", "9♦"])).category, Category::Trail);
        assert_eq!(evaluate(&hand(["9♠", "10♠", "J♠"])).category, Category::PureSequence);
        assert_eq!(evaluate(&hand(["9♠", "10♥", "J♠"])).category, Category::Sequence);
        assert_eq!(evaluate(&hand(["2♣", "9♣", "J♣"])).category, Category::Color);
        assert_eq!(evaluate(&hand(["2♣", "2♦", "J♣"])).category, Category::Pair);
        assert_eq!(evaluate(&hand(["2♣", "7♦", "J♣"])).category, Category::HighCard);
    }

    #[test]
    fn ace_low_pure_sequence() {
        let e = evaluate(&hand(["A♥", "2♥", "3♥"]));
        assert_eq!(e.category, Category::PureSequence);
        assert_eq!(e.tiebreak, 1);
    }

    #[test]
    fn no_other_wraparound() {
        assert_eq!(evaluate(&hand(["K♠", "A♥", "2♦"])).category, Category::HighCard);
        assert_eq!(evaluate(&hand(["Q♥", "K♥", "A♥"])).category, Category::Color);
        assert_eq!(evaluate(&hand(["J♠", "Q♥", "K♦"])).category, Category::Sequence);
        assert_eq!(evaluate(&hand(["A♠", "2♥", "4♦"])).category, Category::HighCard);
    }

    #[test]
    fn labels_and_ordinals() {
        let expected = [
            (Category::Trail, 6, "Trail (Three of a Kind)"),
            (Category::PureSequence, 5, "Pure Sequence"),
            (Category::Sequence, 4, "Sequence"),
            (Category::Color, 3, "Color (Flush)"),
            (Category::Pair, 2, "Pair"),
            (Category::HighCard, 1, "High Card"),
        ];
        for (cat, rank, label) in expected {
            assert_eq!(cat.rank(), rank);
            assert_eq!(cat.label(), label);
        }
    }

    #[test]
    fn sum_uses_numeric_ranks() {
        assert_eq!(sum_of_ranks(&hand(["2♠", "7♥", "9♦"])), 12);
        assert_eq!(sum_of_ranks(&hand(["A♠", "K♥", "Q♦"])), 33);
    }

    #[test]
    fn display_joins_cards() {
        assert_eq!(hand(["10♠", "J♥", "Q♦"]).to_string(), "10♠ J♥ Q♦");
    }
}
