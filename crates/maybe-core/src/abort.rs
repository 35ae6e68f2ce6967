// crates/maybe-core/src/abort.rs
// Process termination as the last resort for an unconsumed failure

use std::fmt::Display;
use std::io::Write;

/// Exit status used by [`abort`]
pub const EXIT_FAILURE: i32 = 1;

/// Format the line written to stderr before exiting
pub fn fatal_line(message: impl Display) -> String {
    format!("fatal: {message}")
}

/// Print `message` to stderr and terminate the process with [`EXIT_FAILURE`].
///
/// This is the only place in the workspace that exits the process. Nothing
/// is unwound: destructors of live values do not run, buffered stdout is
/// flushed only as far as the runtime does on `exit`.
pub fn abort(message: impl Display) -> ! {
    let mut stderr = std::io::stderr().lock();
    // Nothing useful can be done if stderr itself is gone
    let _ = writeln!(stderr, "{}", fatal_line(message));
    let _ = stderr.flush();
    drop(stderr);

    let _ = std::io::stdout().flush();
    std::process::exit(EXIT_FAILURE)
}
