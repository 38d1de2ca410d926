use core::fmt;

use crate::{error::Fault, maybe::Maybe, Error};

/// Outcome of a fallible computation: a value, or the [`Error`] that
/// stopped it.
///
/// `Result` with no type argument is the payload-less form, `Result<()>`.
///
/// Chains built from [`on_success`](Self::on_success),
/// [`on_failure`](Self::on_failure) and friends run left to right. Once a
/// chain has failed, every success step is skipped and the original error
/// travels to the end unless a failure step recovers it.
#[derive(derive_more::IsVariant, Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum Result<T = ()> {
    Success(T),
    Failure(Error),
}

impl Result {
    /// Payload-less success.
    pub const fn unit() -> Self {
        Self::Success(())
    }

    /// Formats a payload-less result as `Success` or `Failure: <message>`.
    ///
    /// `()` has no `Display`, so the untyped form is printed through this
    /// adapter, the same way `Path::display` works.
    pub const fn display(&self) -> UnitDisplay<'_> {
        UnitDisplay(self)
    }
}

/// Printable view of an untyped [`Result`], from [`Result::display`].
#[derive(Debug, Clone, Copy)]
pub struct UnitDisplay<'a>(&'a Result);

impl fmt::Display for UnitDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Result::Success(()) => write!(f, "Success"),
            Result::Failure(error) => write!(f, "Failure: {error}"),
        }
    }
}

impl<T> Result<T> {
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    pub fn fail(error: impl Into<Error>) -> Self {
        Self::Failure(error.into())
    }

    /// # Errors
    ///
    /// Returns [`Fault::InvalidOperation`] if the result is a failure.
    pub const fn try_value(&self) -> core::result::Result<&T, Fault> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(Fault::invalid_operation(
                "an unsuccessful result does not have a value",
            )),
        }
    }

    /// # Panics
    ///
    /// Panics if the result is a failure.
    #[track_caller]
    pub fn value(&self) -> &T {
        self.try_value().unwrap_or_else(|fault| fault.raise())
    }

    /// # Panics
    ///
    /// Panics if the result is a failure.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => {
                Fault::invalid_operation("an unsuccessful result does not have a value").raise()
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`Fault::InvalidOperation`] if the result is a success.
    pub const fn try_error(&self) -> core::result::Result<&Error, Fault> {
        match self {
            Self::Success(_) => Err(Fault::invalid_operation(
                "a successful result does not have an error",
            )),
            Self::Failure(error) => Ok(error),
        }
    }

    /// # Panics
    ///
    /// Panics if the result is a success.
    #[track_caller]
    pub fn error(&self) -> &Error {
        self.try_error().unwrap_or_else(|fault| fault.raise())
    }

    /// # Panics
    ///
    /// Panics if the result is a success.
    #[track_caller]
    pub fn into_error(self) -> Error {
        match self {
            Self::Success(_) => {
                Fault::invalid_operation("a successful result does not have an error").raise()
            }
            Self::Failure(error) => error,
        }
    }

    /// Runs `f` on the value and returns its result. A failure is passed on
    /// untouched and `f` never runs.
    pub fn on_success<U>(self, f: impl FnOnce(T) -> Result<U>) -> Result<U> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => {
                log::trace!("skipping success step after failure: {error}");
                Result::Failure(error)
            }
        }
    }

    pub fn map_success<U>(self, f: impl FnOnce(T) -> U) -> Result<U> {
        match self {
            Self::Success(value) => Result::Success(f(value)),
            Self::Failure(error) => {
                log::trace!("skipping success step after failure: {error}");
                Result::Failure(error)
            }
        }
    }

    pub fn tap_success(self, action: impl FnOnce(&T)) -> Self {
        if let Self::Success(value) = &self {
            action(value);
        }

        self
    }

    /// Runs `f` on the error and returns its result, which may recover into
    /// a success. A success is passed on untouched and `f` never runs.
    pub fn on_failure(self, f: impl FnOnce(Error) -> Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => {
                log::trace!("running failure step for: {error}");
                f(error)
            }
        }
    }

    pub fn map_failure<E: Into<Error>>(self, f: impl FnOnce(Error) -> E) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Failure(f(error).into()),
        }
    }

    pub fn tap_failure(self, action: impl FnOnce(&Error)) -> Self {
        if let Self::Failure(error) = &self {
            action(error);
        }

        self
    }

    /// Always runs `f`, whatever the state.
    pub fn on_both<U>(self, f: impl FnOnce(Self) -> U) -> U {
        f(self)
    }

    /// Turns a success whose value fails `check` into a failure carrying
    /// `error`. Failures pass through and `check` never runs.
    pub fn ensure(self, check: impl FnOnce(&T) -> bool, error: impl Into<Error>) -> Self {
        match self {
            Self::Success(value) if check(&value) => Self::Success(value),
            Self::Success(_) => {
                let error = error.into();
                log::debug!("ensure rejected value: {error}");
                Self::Failure(error)
            }
            Self::Failure(error) => Self::Failure(error),
        }
    }

    /// Raises a failure as the error produced by `f`, for propagation with
    /// `?`. A success is handed back as is.
    pub fn on_failure_raise<E>(self, f: impl FnOnce(Error) -> E) -> core::result::Result<Self, E> {
        match self {
            Self::Success(value) => Ok(Self::Success(value)),
            Self::Failure(error) => {
                log::debug!("raising failure: {error}");
                Err(f(error))
            }
        }
    }

    /// Compares only the success/failure state, ignoring payloads.
    pub const fn same_state<U>(&self, other: &Result<U>) -> bool {
        self.is_success() == other.is_success()
    }

    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Result<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "{value}"),
            Self::Failure(error) => write!(f, "Failure: {error}"),
        }
    }
}

impl<T> From<Error> for Result<T> {
    fn from(error: Error) -> Self {
        Self::Failure(error)
    }
}

impl<T, E: Into<Error>> From<core::result::Result<T, E>> for Result<T> {
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

impl<T> From<Result<T>> for core::result::Result<T, Error> {
    fn from(result: Result<T>) -> Self {
        match result {
            Result::Success(value) => Ok(value),
            Result::Failure(error) => Err(error),
        }
    }
}

/// Collects successes, stopping at the first failure.
impl<T, C: FromIterator<T>> FromIterator<Result<T>> for Result<C> {
    fn from_iter<I: IntoIterator<Item = Result<T>>>(iter: I) -> Self {
        iter.into_iter()
            .map(core::result::Result::<T, Error>::from)
            .collect::<core::result::Result<C, Error>>()
            .into()
    }
}

pub trait ToSuccess: Sized {
    fn to_success(self) -> Result<Self> {
        Result::Success(self)
    }
}

impl<T> ToSuccess for T {}

pub trait ToFail {
    fn to_fail<T>(self) -> Result<T>;
}

impl<E: Into<Error>> ToFail for E {
    fn to_fail<T>(self) -> Result<T> {
        Result::Failure(self.into())
    }
}
