//! Early-return helper for code paths that produce an exit code directly.

/// `writeln!` into `$dest`; if the stream is gone, return
/// [`crate::exit_code::ERROR`] from the enclosing function.
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
