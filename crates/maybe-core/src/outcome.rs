// crates/maybe-core/src/outcome.rs
// Outcome<T, E>: success with a value, or failure with an error

use std::fmt::Display;

use crate::consume::Consume;
use crate::maybe::Maybe;

/// Either `Ok(T)` or `Err(E)`, never both and never neither.
///
/// Convertible to and from `std::result::Result` so that code which wants `?`
/// can hop over with [`into_result`](Outcome::into_result).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "an Outcome may be an error, which should be handled"]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    pub const fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    pub const fn err(error: E) -> Self {
        Outcome::Err(error)
    }

    /// Run `on_ok` with the value or `on_err` with the error
    pub fn match_with<R>(self, on_ok: impl FnOnce(T) -> R, on_err: impl FnOnce(E) -> R) -> R {
        match self {
            Outcome::Ok(value) => on_ok(value),
            Outcome::Err(error) => on_err(error),
        }
    }

    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        self.match_with(|value| Outcome::Ok(f(value)), Outcome::Err)
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        self.match_with(Outcome::Ok, |error| Outcome::Err(f(error)))
    }

    /// The success value, discarding any error
    pub fn value(self) -> Maybe<T> {
        self.match_with(Maybe::Some, |_| Maybe::None)
    }

    /// The error, discarding any success value
    pub fn error(self) -> Maybe<E> {
        self.match_with(|_| Maybe::None, Maybe::Some)
    }

    pub fn into_result(self) -> Result<T, E> {
        self.match_with(Ok, Err)
    }

    /// The value, or `T::default()` on failure. The error is dropped.
    pub fn unwrap(self) -> T
    where
        T: Default,
    {
        Consume::unwrap(self)
    }

    /// The value, or `fallback` on failure.
    ///
    /// `fallback` is evaluated by the caller before the call; use
    /// [`unwrap_or_else`](Outcome::unwrap_or_else) to compute it lazily.
    pub fn unwrap_or(self, fallback: T) -> T {
        self.match_with(|value| value, |_| fallback)
    }

    pub fn unwrap_or_else(self, fallback: impl FnOnce(E) -> T) -> T {
        self.match_with(|value| value, fallback)
    }

    /// The value, or print the error and exit the process on failure.
    /// See [`abort`](crate::abort::abort).
    pub fn unwrap_or_panic(self) -> T
    where
        E: Display,
    {
        Consume::unwrap_or_panic(self)
    }
}

impl<T, E> Consume for Outcome<T, E> {
    type Value = T;
    type Residual = E;

    fn consume<R>(self, on_value: impl FnOnce(T) -> R, on_residual: impl FnOnce(E) -> R) -> R {
        self.match_with(on_value, on_residual)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
