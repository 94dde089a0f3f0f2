use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use teenpatti_engine::cards::{full_deck, Card};
use teenpatti_engine::deck::{shuffle_cards, Deck, DECK_SIZE};

#[test]
fn fresh_deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    let cards = deck.deal(DECK_SIZE).expect("should have 52 cards");
    let mut set = HashSet::new();
    for (i, c) in cards.iter().enumerate() {
        assert!(set.insert(*c), "card {:?} duplicated at position {}", c, i);
    }
    assert_eq!(deck.remaining(), 0, "after 52 cards, deck should be empty");
    assert!(deck.deal(1).is_err());
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    assert_eq!(d1.cards(), d2.cards(), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(
        d1.cards(),
        d2.cards(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffle_is_always_a_permutation() {
    let mut reference = full_deck();
    reference.sort();
    for seed in 0..200 {
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let mut cards = deck.cards().to_vec();
        cards.sort();
        assert_eq!(cards, reference, "seed {seed} lost or duplicated a card");
    }
}

#[test]
fn sequential_deals_never_overlap() {
    for seed in 0..500 {
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let h1 = deck.deal_hand().unwrap();
        let h2 = deck.deal_hand().unwrap();
        let a: HashSet<Card> = h1.cards().iter().copied().collect();
        assert!(h2.cards().iter().all(|c| !a.contains(c)), "seed {seed}");
        assert_eq!(deck.remaining() + deck.dealt(), DECK_SIZE);
        assert!(deck.cards().iter().all(|c| !a.contains(c)));
    }
}

fn chi_square(counts: &[u64], expected: f64) -> f64 {
    counts
        .iter()
        .map(|&n| {
            let d = n as f64 - expected;
            d * d / expected
        })
        .sum()
}

#[test]
fn three_card_permutations_are_equally_likely() {
    // 3 cards have 6 orderings; each should show up about 1/6 of the time.
    let base: Vec<Card> = full_deck()[..3].to_vec();
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let trials = 60_000u64;
    let mut counts = [0u64; 6];
    let mut seen: Vec<Vec<Card>> = Vec::new();
    for _ in 0..trials {
        let mut cards = base.clone();
        shuffle_cards(&mut cards, &mut rng);
        let idx = match seen.iter().position(|p| *p == cards) {
            Some(i) => i,
            None => {
                seen.push(cards);
                seen.len() - 1
            }
        };
        counts[idx] += 1;
    }
    assert_eq!(seen.len(), 6, "every ordering should appear");
    // 5 degrees of freedom, p = 0.0001 critical value is ~25.7
    let stat = chi_square(&counts, trials as f64 / 6.0);
    assert!(stat < 25.7, "chi-square {stat} too large: {counts:?}");
}

#[test]
fn every_position_is_equally_likely_for_a_card() {
    let target = full_deck()[0];
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let trials = 52_000u64;
    let mut counts = vec![0u64; DECK_SIZE];
    for _ in 0..trials {
        let mut cards = full_deck();
        shuffle_cards(&mut cards, &mut rng);
        let pos = cards.iter().position(|&c| c == target).unwrap();
        counts[pos] += 1;
    }
    // 51 degrees of freedom, p = 0.0001 critical value is ~99.6
    let stat = chi_square(&counts, trials as f64 / DECK_SIZE as f64);
    assert!(stat < 99.6, "chi-square {stat} too large");
}
