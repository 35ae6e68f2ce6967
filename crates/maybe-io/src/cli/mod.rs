// crates/maybe-io/src/cli/mod.rs
// CLI module for the maybe binary

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod demo;
pub mod files;
pub mod web;

pub use demo::run_demo;
pub use files::{run_append, run_read, run_remove, run_write};
pub use web::{run_get, run_post};

#[derive(Parser)]
#[command(name = "maybe")]
#[command(about = "File and HTTP helpers that fail loudly or not at all")]
#[command(version)]
pub struct Cli {
    /// Log at DEBUG instead of WARN (or set MAYBE_VERBOSE=1)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a file's contents
    Read {
        path: PathBuf,
    },

    /// Replace a file's contents
    Write {
        path: PathBuf,
        content: String,
    },

    /// Append text to a file
    Append {
        path: PathBuf,
        content: String,
    },

    /// Delete a file if it exists
    Remove {
        path: PathBuf,
    },

    /// GET a URL and print the body
    Get {
        url: String,

        /// Use the blocking client
        #[arg(long)]
        blocking: bool,
    },

    /// POST a body to a URL and print the response body
    Post {
        url: String,

        body: String,

        #[arg(long, default_value = "text/plain")]
        content_type: String,

        /// Use the blocking client
        #[arg(long)]
        blocking: bool,
    },

    /// Walk through Maybe/Outcome combinators
    Demo {
        /// Finish by calling unwrap_or_panic on an absent value
        #[arg(long)]
        end_absent: bool,
    },
}
