//! # Play Command
//!
//! Plays Teen Patti rounds between two seats.
//!
//! - **Batch** (default): every round is dealt, revealed and resolved at once,
//!   followed by a win/tie tally.
//! - **Interactive** (`--interactive`): player 1's hand is shown right away,
//!   then player 2's cards are turned over one at a time from stdin
//!   (`1`-`3`, `all`, or `q` to quit).
//! - **JSON** (`--json`): one `RoundResult` object per line, nothing else.

use crate::error::CliError;
use crate::formatters::{CardStyle, format_evaluation, format_hidden_hand};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{RevealInput, parse_reveal_input};
use std::io::{BufRead, Write};
use teenpatti_engine::engine::{Engine, Round, RoundResult, Stage};
use teenpatti_engine::hand::HAND_SIZE;
use teenpatti_engine::rules::Outcome;

/// Win/tie counters over a run of rounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeTally {
    pub player1: u64,
    pub player2: u64,
    pub ties: u64,
}

impl OutcomeTally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Player1Wins => self.player1 += 1,
            Outcome::Player2Wins => self.player2 += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.player1 + self.player2 + self.ties
    }
}

/// Settings for one `play` invocation, already merged with config.
/// `rounds` is at least 1: clap and config validation both reject 0.
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    pub rounds: u32,
    pub seed: Option<u64>,
    pub interactive: bool,
    pub json: bool,
    pub style: CardStyle,
}

/// Handle the play command.
///
/// # Returns
///
/// * `Ok(())` after all rounds were played
/// * `Err(CliError::Interrupted)` if the player quits or stdin closes mid-round
/// * `Err(CliError)` for engine or I/O failures
///
/// # Examples
///
/// ```ignore
/// use std::io::Cursor;
/// let opts = PlayOptions { rounds: 1, seed: Some(7), interactive: true, json: false, style: CardStyle::Ascii };
/// let mut input = Cursor::new("1\n2\n3\n");
/// handle_play_command(opts, &mut out, &mut err, &mut input).unwrap();
/// ```
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = opts.seed.unwrap_or_else(rand::random);
    let mut engine = Engine::new(Some(seed));

    if opts.json {
        if opts.interactive {
            ui::warn_parameter_unused(err, "json", "in interactive mode")?;
        } else {
            return play_json(&mut engine, opts.rounds, out);
        }
    }

    writeln!(out, "play: rounds={} seed={}", opts.rounds, seed)?;

    let mut tally = OutcomeTally::default();
    for i in 1..=opts.rounds {
        writeln!(out, "Round {}", i)?;
        let result = if opts.interactive {
            play_interactive_round(&mut engine, i, opts.style, out, err, stdin)?
        } else {
            let result = engine.play_round()?;
            writeln!(
                out,
                "Player 1: {}",
                format_evaluation(&result.hand1, &result.eval1, opts.style)
            )?;
            writeln!(
                out,
                "Player 2: {}",
                format_evaluation(&result.hand2, &result.eval2, opts.style)
            )?;
            result
        };
        writeln!(out, "Result: {}", result.outcome.label())?;
        tally.record(result.outcome);
    }

    writeln!(out, "Rounds: {}", tally.total())?;
    writeln!(out, "Player 1 wins: {}", tally.player1)?;
    writeln!(out, "Player 2 wins: {}", tally.player2)?;
    writeln!(out, "Ties: {}", tally.ties)?;
    Ok(())
}

fn play_json(engine: &mut Engine, rounds: u32, out: &mut dyn Write) -> Result<(), CliError> {
    for _ in 0..rounds {
        let result = engine.play_round()?;
        let line = serde_json::to_string(&result).map_err(std::io::Error::other)?;
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// One round driven by stdin, one reveal step per line.
fn play_interactive_round(
    engine: &mut Engine,
    number: u32,
    style: CardStyle,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<RoundResult, CliError> {
    let mut round = engine.start_round()?.reveal_player1()?;

    if let (Some((hand1, _)), Some(eval1)) = (round.hands(), round.eval1()) {
        writeln!(out, "Player 1: {}", format_evaluation(hand1, eval1, style))?;
    }

    while round.stage() == Stage::Player1Revealed {
        let revealed = round.revealed_player2_cards();
        if let Some((_, hand2)) = round.hands() {
            writeln!(
                out,
                "Player 2: {}",
                format_hidden_hand(hand2, revealed, style)
            )?;
        }
        write!(out, "Reveal card (1-{}, all, q): ", HAND_SIZE)?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            return Err(CliError::Interrupted(format!(
                "input closed during round {}",
                number
            )));
        };
        round = match parse_reveal_input(&line) {
            RevealInput::Card(i) => {
                if revealed[i] {
                    ui::display_warning(err, &format!("Card {} is already face up", i + 1))?;
                }
                round.reveal_player2_card(i)?
            }
            RevealInput::All => round.reveal_player2()?,
            RevealInput::Quit => {
                return Err(CliError::Interrupted(format!(
                    "quit during round {}",
                    number
                )));
            }
            RevealInput::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                round
            }
        };
    }

    if let (Some((_, hand2)), Some(eval2)) = (round.hands(), round.eval2()) {
        writeln!(out, "Player 2: {}", format_evaluation(hand2, eval2, style))?;
    }
    Ok(round.resolve().and_then(Round::into_result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn opts(rounds: u32, interactive: bool, json: bool) -> PlayOptions {
        PlayOptions {
            rounds,
            seed: Some(42),
            interactive,
            json,
            style: CardStyle::Ascii,
        }
    }

    fn run_play(o: PlayOptions, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.to_string());
        let res = handle_play_command(o, &mut out, &mut err, &mut stdin);
        (
            res,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn tally_counts_each_outcome() {
        let mut t = OutcomeTally::default();
        t.record(Outcome::Player1Wins);
        t.record(Outcome::Tie);
        t.record(Outcome::Player1Wins);
        assert_eq!(t.player1, 2);
        assert_eq!(t.player2, 0);
        assert_eq!(t.ties, 1);
        assert_eq!(t.total(), 3);
    }

    #[test]
    fn batch_rounds_print_tally() {
        let (res, out, _) = run_play(opts(3, false, false), "");
        assert!(res.is_ok());
        assert!(out.contains("play: rounds=3 seed=42"));
        assert!(out.contains("Round 3"));
        assert_eq!(out.matches("Result: ").count(), 3);
        assert!(out.contains("Rounds: 3"));
    }

    #[test]
    fn json_prints_only_results() {
        let (res, out, _) = run_play(opts(2, false, true), "");
        assert!(res.is_ok());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let r: RoundResult = serde_json::from_str(line).unwrap();
            assert!(r.eval1.rank() >= 1);
        }
    }

    #[test]
    fn interactive_reveals_one_card_per_line() {
        let (res, out, err) = run_play(opts(1, true, false), "2\n2\nfoo\n1\n3\n");
        assert!(res.is_ok(), "{:?}", res);
        assert!(out.contains("Player 2: ?? ?? ??"));
        assert!(out.contains("Player 2: ?? "));
        assert!(out.contains("Result: "));
        assert!(err.contains("already face up"));
        assert!(err.contains("Unrecognized input"));
    }

    #[test]
    fn interactive_all_finishes_round() {
        let (res, out, _) = run_play(opts(2, true, false), "all\na\n");
        assert!(res.is_ok());
        assert_eq!(out.matches("Result: ").count(), 2);
    }

    #[test]
    fn interactive_quit_and_eof_interrupt() {
        let (res, out, _) = run_play(opts(1, true, false), "q\n");
        assert!(matches!(res, Err(CliError::Interrupted(_))));
        assert!(!out.contains("Result: "));

        let (res, _, _) = run_play(opts(1, true, false), "1\n");
        assert!(matches!(res, Err(CliError::Interrupted(_))));
    }

    #[test]
    fn json_is_ignored_when_interactive() {
        let (res, out, err) = run_play(opts(1, true, true), "all\n");
        assert!(res.is_ok());
        assert!(err.contains("--json is ignored"));
        assert!(out.contains("Result: "));
    }

    #[test]
    fn interactive_matches_batch_for_same_seed() {
        let (_, batch, _) = run_play(opts(1, false, false), "");
        let (_, inter, _) = run_play(opts(1, true, false), "all\n");
        let verdict = |s: &str| s.lines().find(|l| l.starts_with("Result: ")).map(str::to_string);
        assert_eq!(verdict(&batch), verdict(&inter));
    }
}
