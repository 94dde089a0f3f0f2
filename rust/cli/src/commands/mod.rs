//! Command handler modules for the `teenpatti` CLI.
//!
//! Each subcommand lives in its own file with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed in, so tests can capture them
//! - All errors propagated via the `CliError` enum

pub mod cfg;
pub mod compare;
pub mod deal;
pub mod eval;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use compare::handle_compare_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::{PlayOptions, handle_play_command};
pub use sim::handle_sim_command;
