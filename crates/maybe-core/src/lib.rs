// crates/maybe-core/src/lib.rs
// Two-state value types: Maybe (present/absent) and Outcome (ok/err)
// No dependencies outside std unless the `serde` feature is enabled

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod abort;
pub mod consume;
pub mod maybe;
pub mod outcome;

pub use abort::{abort, EXIT_FAILURE};
pub use consume::{Absent, Consume};
pub use maybe::Maybe;
pub use outcome::Outcome;
