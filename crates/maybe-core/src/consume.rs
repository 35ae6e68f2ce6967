// crates/maybe-core/src/consume.rs
// Combinators shared by every two-state value type

use std::fmt;

use crate::abort::abort;

/// Residual of an absent [`Maybe`](crate::Maybe).
///
/// Carries no data; its `Display` form is the diagnostic printed when an
/// absent value is escalated with `unwrap_or_panic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Absent;

impl fmt::Display for Absent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "called `unwrap_or_panic` on an absent value")
    }
}

/// Total case analysis over a value that is either a wanted `Value` or a
/// `Residual` (the absence marker or an error).
///
/// Implementors only provide [`consume`](Consume::consume). Everything else
/// is written once here in terms of it.
pub trait Consume: Sized {
    type Value;
    type Residual;

    /// Run exactly one of the two branches and return its result
    fn consume<R>(
        self,
        on_value: impl FnOnce(Self::Value) -> R,
        on_residual: impl FnOnce(Self::Residual) -> R,
    ) -> R;

    /// Take the value, or `Value::default()` if there is none.
    /// The residual is dropped silently.
    fn unwrap(self) -> Self::Value
    where
        Self::Value: Default,
    {
        self.consume(|value| value, |_| Self::Value::default())
    }

    /// Take the value, or print the residual and exit the process
    fn unwrap_or_panic(self) -> Self::Value
    where
        Self::Residual: fmt::Display,
    {
        self.consume(|value| value, |residual| abort(residual))
    }
}
