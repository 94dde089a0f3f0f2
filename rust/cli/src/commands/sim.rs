//! # Sim Command
//!
//! Plays many rounds without interaction and reports how often each hand
//! category was dealt and how the rounds were decided.

use crate::commands::play::OutcomeTally;
use crate::error::CliError;
use crate::formatters::format_percent;
use std::collections::HashMap;
use std::io::Write;
use teenpatti_engine::engine::Engine;
use teenpatti_engine::hand::{CHECK_ORDER, Category};

/// Counts gathered by [`simulate`].
#[derive(Debug, Default)]
pub struct SimReport {
    pub rounds: u32,
    pub hands: u64,
    pub categories: HashMap<Category, u64>,
    pub outcomes: OutcomeTally,
}

/// Plays `rounds` rounds on `engine`, counting both hands of every round.
pub fn simulate(engine: &mut Engine, rounds: u32) -> Result<SimReport, CliError> {
    let mut report = SimReport {
        rounds,
        ..SimReport::default()
    };
    for _ in 0..rounds {
        let result = engine.play_round()?;
        for eval in [result.eval1, result.eval2] {
            *report.categories.entry(eval.category).or_default() += 1;
            report.hands += 1;
        }
        report.outcomes.record(result.outcome);
    }
    Ok(report)
}

pub fn handle_sim_command(
    rounds: u32,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut engine = Engine::new(Some(seed));
    let report = simulate(&mut engine, rounds)?;

    writeln!(out, "sim: rounds={} seed={}", report.rounds, seed)?;
    writeln!(out, "Categories ({} hands):", report.hands)?;
    for category in CHECK_ORDER {
        let n = report.categories.get(&category).copied().unwrap_or(0);
        writeln!(
            out,
            "  {:<24} {:>8}  {:>6}",
            category.label(),
            n,
            format_percent(n, report.hands)
        )?;
    }

    let total = report.outcomes.total();
    writeln!(out, "Outcomes:")?;
    for (label, n) in [
        ("Player 1 wins", report.outcomes.player1),
        ("Player 2 wins", report.outcomes.player2),
        ("Ties", report.outcomes.ties),
    ] {
        writeln!(out, "  {:<24} {:>8}  {:>6}", label, n, format_percent(n, total))?;
    }
    Ok(())
}
