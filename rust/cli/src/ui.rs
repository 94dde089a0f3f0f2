//! Stderr helpers shared by the subcommands, so every diagnostic carries the
//! same prefix.

use std::io::Write;

/// `Error: <msg>`
pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// `WARNING: <msg>`, for problems that don't stop the command.
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Tells the user a flag had no effect in the current mode.
pub fn warn_parameter_unused(err: &mut dyn Write, param_name: &str, reason: &str) -> std::io::Result<()> {
    display_warning(err, &format!("--{} is ignored {}.", param_name, reason))
}
