//! Command-line argument definitions.
//!
//! The clap derive structures live here so that [`crate::run`] and the
//! command registry tests share one source of truth.

use clap::{Parser, Subcommand};

use crate::config::MAX_ROUNDS;

#[derive(Parser, Debug)]
#[command(
    name = "teenpatti",
    version,
    about = "Teen Patti rules engine CLI: deal, evaluate and play three-card rounds"
)]
pub struct TeenPattiCli {
    /// Render cards with ASCII suit letters (s h d c) instead of symbols
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play rounds between two players
    Play {
        /// Number of rounds to play (default from config, else 1)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_ROUNDS as i64))]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Turn over player 2's cards one at a time from stdin
        #[arg(long)]
        interactive: bool,
        /// Print one JSON result per round
        #[arg(long)]
        json: bool,
    },
    /// Deal two hands without evaluating them
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate a three-card hand, e.g. `eval As Kd Qh`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Decide the winner between two given hands
    Compare {
        #[arg(long)]
        hand1: String,
        #[arg(long)]
        hand2: String,
    },
    /// Simulate rounds and report category and outcome frequencies
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_ROUNDS as i64))]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Deal { .. } => "deal",
            Commands::Eval { .. } => "eval",
            Commands::Compare { .. } => "compare",
            Commands::Sim { .. } => "sim",
            Commands::Cfg => "cfg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        TeenPattiCli::command().debug_assert();
    }

    #[test]
    fn ascii_flag_is_global() {
        let cli = TeenPattiCli::try_parse_from(["teenpatti", "deal", "--ascii"]).unwrap();
        assert!(cli.ascii);
        assert_eq!(cli.cmd.name(), "deal");
    }

    #[test]
    fn rounds_must_be_positive() {
        assert!(TeenPattiCli::try_parse_from(["teenpatti", "sim", "--rounds", "0"]).is_err());
        assert!(TeenPattiCli::try_parse_from(["teenpatti", "sim", "--rounds", "3"]).is_ok());
    }

    #[test]
    fn eval_requires_cards() {
        assert!(TeenPattiCli::try_parse_from(["teenpatti", "eval"]).is_err());
        let cli = TeenPattiCli::try_parse_from(["teenpatti", "eval", "As", "Kd", "Qh"]).unwrap();
        match cli.cmd {
            Commands::Eval { cards } => assert_eq!(cards, vec!["As", "Kd", "Qh"]),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
