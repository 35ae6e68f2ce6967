// crates/maybe-core/src/maybe.rs
// Maybe<T>: a value that is either present or absent

use crate::consume::{Absent, Consume};
use crate::outcome::Outcome;

/// A value of type `T`, or nothing.
///
/// Presence is tracked by the variant, never by the payload, so
/// `Maybe::some(false)` and `Maybe::some(0)` are present like any other value.
///
/// Variants are spelled out as `Maybe::Some` / `Maybe::None` to stay clear of
/// the prelude's `Option` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    Some(T),
    None,
}

impl<T> Maybe<T> {
    /// Wrap a present value
    pub const fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// The absent value
    pub const fn none() -> Self {
        Maybe::None
    }

    /// Treat `T::default()` as absence.
    ///
    /// Opt-in for callers that still expect a default/zero payload to read as
    /// "nothing". `Maybe::some` never does this.
    pub fn coalesce(value: T) -> Self
    where
        T: Default + PartialEq,
    {
        if value == T::default() {
            Maybe::None
        } else {
            Maybe::Some(value)
        }
    }

    /// Run `on_some` with the value if present, otherwise `on_none`
    pub fn match_with<R>(self, on_some: impl FnOnce(T) -> R, on_none: impl FnOnce() -> R) -> R {
        match self {
            Maybe::Some(value) => on_some(value),
            Maybe::None => on_none(),
        }
    }

    pub const fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        self.match_with(|value| Maybe::Some(f(value)), || Maybe::None)
    }

    /// Turn absence into the given error
    pub fn ok_or<E>(self, err: E) -> Outcome<T, E> {
        self.match_with(Outcome::Ok, || Outcome::Err(err))
    }

    /// The value, or `T::default()` when absent. Never panics.
    pub fn unwrap(self) -> T
    where
        T: Default,
    {
        Consume::unwrap(self)
    }

    /// The value, or the result of `fallback` when absent.
    /// `fallback` is only called in the absent case.
    pub fn unwrap_or(self, fallback: impl FnOnce() -> T) -> T {
        self.match_with(|value| value, fallback)
    }

    /// The value, or print a diagnostic and exit the process when absent.
    /// See [`abort`](crate::abort::abort).
    pub fn unwrap_or_panic(self) -> T {
        Consume::unwrap_or_panic(self)
    }
}

impl<T> Consume for Maybe<T> {
    type Value = T;
    type Residual = Absent;

    fn consume<R>(self, on_value: impl FnOnce(T) -> R, on_residual: impl FnOnce(Absent) -> R) -> R {
        self.match_with(on_value, || on_residual(Absent))
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.match_with(Some, || None)
    }
}
