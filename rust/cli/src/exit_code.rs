//! Process exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// Bad input, bad configuration, engine or I/O failure.
pub const ERROR: i32 = 2;

/// The player quit, or stdin closed, before a round was resolved.
pub const INTERRUPTED: i32 = 130;
