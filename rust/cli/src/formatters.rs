//! Card, hand and evaluation formatters for terminal display.
//!
//! Pure functions that render engine values for the terminal. Cards use the
//! Unicode suit symbols by default, with an ASCII fallback for terminals that
//! can't render them or when `--ascii` / `TEENPATTI_ASCII` asks for it.
//! On an interactive terminal, hearts and diamonds are printed in red.
//!
//! - **Unicode style**: `10♥ J♥ Q♥`
//! - **Color style**: Unicode, with red cards wrapped in ANSI red
//! - **ASCII style**: `10h Jh Qh`
//!
//! ## Example
//!
//! ```rust
//! use teenpatti_engine::cards::{Card, Rank, Suit};
//! use teenpatti_cli::formatters::{format_card, CardStyle};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert_eq!(format_card(&ace_spades, CardStyle::Unicode), "A♠");
//! assert_eq!(format_card(&ace_spades, CardStyle::Ascii), "As");
//! ```

use owo_colors::OwoColorize;
use std::io::IsTerminal;
use teenpatti_engine::cards::Card;
use teenpatti_engine::hand::{HAND_SIZE, Hand, HandEvaluation};

/// Placeholder shown for a card that is still face down.
pub const HIDDEN_CARD: &str = "??";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CardStyle {
    Unicode,
    Color,
    Ascii,
}

impl CardStyle {
    /// Picks the style for this terminal; `force_ascii` wins over detection,
    /// and color is only used on top of Unicode symbols.
    pub fn detect(force_ascii: bool, color: bool) -> Self {
        if force_ascii || !supports_unicode() {
            CardStyle::Ascii
        } else if color {
            CardStyle::Color
        } else {
            CardStyle::Unicode
        }
    }
}

/// Color only when stdout is a terminal and `NO_COLOR` is unset.
pub fn stdout_wants_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_card(card: &Card, style: CardStyle) -> String {
    match style {
        CardStyle::Unicode => card.to_string(),
        CardStyle::Color if card.is_red() => card.to_string().red().to_string(),
        CardStyle::Color => card.to_string(),
        CardStyle::Ascii => format!("{}{}", card.rank.label(), card.suit.letter()),
    }
}

/// Format a hand as space-separated cards, in dealt order.
pub fn format_hand(hand: &Hand, style: CardStyle) -> String {
    hand.cards()
        .iter()
        .map(|c| format_card(c, style))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a hand where only the cards flagged in `revealed` are face up.
///
/// # Example
///
/// ```rust
/// use teenpatti_engine::cards::Card;
/// use teenpatti_engine::hand::Hand;
/// use teenpatti_cli::formatters::{format_hidden_hand, CardStyle};
///
/// let hand = Hand::from_slice(&["2♠".parse::<Card>().unwrap(), "3♠".parse().unwrap(), "4♠".parse().unwrap()]).unwrap();
/// assert_eq!(format_hidden_hand(&hand, [false, true, false], CardStyle::Unicode), "?? 3♠ ??");
/// ```
pub fn format_hidden_hand(hand: &Hand, revealed: [bool; HAND_SIZE], style: CardStyle) -> String {
    hand.cards()
        .iter()
        .zip(revealed)
        .map(|(c, shown)| {
            if shown {
                format_card(c, style)
            } else {
                HIDDEN_CARD.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `<cards>  (<label>)`, the line shown under each player.
pub fn format_evaluation(hand: &Hand, eval: &HandEvaluation, style: CardStyle) -> String {
    format!("{}  ({})", format_hand(hand, style), eval.label())
}

/// Percentage with one decimal place; `0.0` when `total` is zero.
pub fn format_percent(count: u64, total: u64) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", count as f64 * 100.0 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use teenpatti_engine::hand::evaluate;

    fn hand(cards: [&str; 3]) -> Hand {
        Hand::new(cards.map(|c| c.parse::<Card>().unwrap())).unwrap()
    }

    #[test]
    fn ascii_keeps_ten_as_two_digits() {
        let h = hand(["10♥", "J♥", "Q♥"]);
        assert_eq!(format_hand(&h, CardStyle::Ascii), "10h Jh Qh");
        assert_eq!(format_hand(&h, CardStyle::Unicode), "10♥ J♥ Q♥");
    }

    #[test]
    fn hidden_cards_use_placeholder() {
        let h = hand(["A♠", "2♦", "3♣"]);
        assert_eq!(
            format_hidden_hand(&h, [false; 3], CardStyle::Ascii),
            "?? ?? ??"
        );
        assert_eq!(
            format_hidden_hand(&h, [true, false, true], CardStyle::Ascii),
            "As ?? 3c"
        );
    }

    #[test]
    fn evaluation_line_has_label() {
        let h = hand(["A♠", "2♦", "3♣"]);
        let line = format_evaluation(&h, &evaluate(&h), CardStyle::Unicode);
        assert_eq!(line, "A♠ 2♦ 3♣  (Sequence)");
    }

    #[test]
    fn forced_ascii_overrides_detection() {
        assert_eq!(CardStyle::detect(true, true), CardStyle::Ascii);
        assert_eq!(CardStyle::detect(true, false), CardStyle::Ascii);
    }

    #[test]
    fn color_style_paints_only_red_suits() {
        let h = hand(["A♥", "K♠", "Q♦"]);
        let line = format_hand(&h, CardStyle::Color);
        assert_eq!(
            line,
            format!("{} K♠ {}", "A♥".red(), "Q♦".red())
        );
        assert!(line.contains("\u{1b}[31m"));
        assert_eq!(format_card(&h.cards()[1], CardStyle::Color), "K♠");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(1, 4), "25.0%");
        assert_eq!(format_percent(0, 0), "0.0%");
    }
}
