// crates/maybe-io/src/fs.rs
// Whole-file helpers that report platform failures as Outcome::Err

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use maybe_core::Outcome;
use tracing::{debug, warn};

use crate::error::{IoOutcome, MaybeError};

/// How [`open`] should treat an existing or missing file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Read an existing file; fails if missing
    Open,
    /// Write, creating or truncating
    Create,
    /// Write a new file; fails if it already exists
    CreateNew,
    /// Read and write, creating if missing
    OpenOrCreate,
    /// Write at the end, creating if missing
    Append,
    /// Write an existing file after emptying it; fails if missing
    Truncate,
}

impl OpenMode {
    fn options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            OpenMode::Open => options.read(true),
            OpenMode::Create => options.write(true).create(true).truncate(true),
            OpenMode::CreateNew => options.write(true).create_new(true),
            OpenMode::OpenOrCreate => options.read(true).write(true).create(true).truncate(false),
            OpenMode::Append => options.append(true).create(true),
            OpenMode::Truncate => options.write(true).truncate(true),
        };
        options
    }
}

/// Turn a std I/O result into an Outcome, logging the failure
fn wrap<T>(op: &'static str, path: &Path, result: std::io::Result<T>) -> IoOutcome<T> {
    match result {
        Ok(value) => {
            debug!(op, path = %path.display(), "File operation succeeded");
            Outcome::Ok(value)
        }
        Err(e) => {
            warn!(op, path = %path.display(), error = %e, "File operation failed");
            Outcome::Err(MaybeError::io(path, e))
        }
    }
}

/// Open a file handle in the given mode
pub fn open(path: impl AsRef<Path>, mode: OpenMode) -> IoOutcome<File> {
    let path = path.as_ref();
    wrap("open", path, mode.options().open(path))
}

/// Read the whole file as UTF-8 text
pub fn read(path: impl AsRef<Path>) -> IoOutcome<String> {
    let path = path.as_ref();
    wrap("read", path, std::fs::read_to_string(path))
}

/// Replace the file's contents, creating it if needed
pub fn write(path: impl AsRef<Path>, content: &str) -> IoOutcome<()> {
    let path = path.as_ref();
    wrap("write", path, std::fs::write(path, content))
}

/// Add text to the end of the file, creating it if needed
pub fn append(path: impl AsRef<Path>, content: &str) -> IoOutcome<()> {
    let path = path.as_ref();
    let result = OpenMode::Append
        .options()
        .open(path)
        .and_then(|mut file| file.write_all(content.as_bytes()));
    wrap("append", path, result)
}

/// Delete the file if it exists. A missing file is not an error.
pub fn remove(path: impl AsRef<Path>) -> IoOutcome<()> {
    let path = path.as_ref();
    let result = match std::fs::remove_file(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        other => other,
    };
    wrap("remove", path, result)
}
