// crates/maybe-io/src/cli/files.rs
// File subcommands: any failure ends the process through unwrap_or_panic

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::fs;

/// Print the file's contents to stdout
pub fn run_read(path: &Path) -> std::io::Result<()> {
    let text = fs::read(path).unwrap_or_panic();
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

pub fn run_write(path: &Path, content: &str) {
    fs::write(path, content).unwrap_or_panic();
    info!(path = %path.display(), bytes = content.len(), "Wrote file");
}

pub fn run_append(path: &Path, content: &str) {
    fs::append(path, content).unwrap_or_panic();
    info!(path = %path.display(), bytes = content.len(), "Appended to file");
}

pub fn run_remove(path: &Path) {
    fs::remove(path).unwrap_or_panic();
    info!(path = %path.display(), "Removed file");
}
