// crates/maybe-io/src/lib.rs
// File and HTTP helpers built on the maybe-core value types

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod http;

pub use error::{IoOutcome, MaybeError, Result};
pub use maybe_core::{Consume, Maybe, Outcome};
