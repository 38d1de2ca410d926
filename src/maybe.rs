use core::fmt;
use std::hash::{Hash, Hasher};

use crate::{error::Fault, Error, Result};

/// A value that may be absent.
///
/// Built from an absent input, a `Maybe` is always [`Maybe::None`]; there
/// is no present-but-empty state.
///
/// Ordering matches `Option`: `None` sorts before any value.
#[derive(derive_more::IsVariant, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum Maybe<T> {
    #[default]
    None,
    Some(T),
}

impl<T> Maybe<T> {
    pub fn create(value: Option<T>) -> Self {
        value.map_or(Self::None, Self::Some)
    }

    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    pub const fn none() -> Self {
        Self::None
    }

    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    pub const fn has_no_value(&self) -> bool {
        !self.has_value()
    }

    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// # Errors
    ///
    /// Returns [`Fault::InvalidOperation`] if there is no value.
    pub const fn try_value(&self) -> core::result::Result<&T, Fault> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(Fault::invalid_operation("maybe has no value")),
        }
    }

    /// # Panics
    ///
    /// Panics if there is no value.
    #[track_caller]
    pub fn value(&self) -> &T {
        self.try_value().unwrap_or_else(|fault| fault.raise())
    }

    /// # Panics
    ///
    /// Panics if there is no value.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => Fault::invalid_operation("maybe has no value").raise(),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or(T::default())
    }

    /// Runs `action` if there is a value and hands the same `Maybe` back.
    pub fn tap(self, action: impl FnOnce(&T)) -> Self {
        if let Self::Some(value) = &self {
            action(value);
        }

        self
    }

    /// Applies `f` to the value, or yields [`Maybe::None`] without running it.
    pub fn bind<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(value) => f(value),
            Self::None => Maybe::None,
        }
    }

    #[doc(alias = "do")]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        self.bind(f)
    }

    pub fn to_result(self, error: impl Into<Error>) -> Result<T> {
        match self {
            Self::Some(value) => Result::Success(value),
            Self::None => Result::Failure(error.into()),
        }
    }

    pub fn contains(&self, other: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Self::Some(value) if value == other)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Some(value) => value.hash(state),
            Self::None => 0_u8.hash(state),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(f, "{value}"),
            Self::None => write!(f, "None"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::create(value)
    }
}

/// Lifts an optional value into a [`Maybe`]; an absent input always
/// becomes [`Maybe::None`].
pub trait ToMaybe<T> {
    fn to_maybe(self) -> Maybe<T>;
}

impl<T> ToMaybe<T> for Option<T> {
    fn to_maybe(self) -> Maybe<T> {
        Maybe::create(self)
    }
}
