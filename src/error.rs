use core::fmt;
use std::borrow::Cow;

/// Payload of a failed [`Result`](crate::Result).
///
/// An `Error` is plain data: it never panics and is never raised. It is
/// built from and converts back into its message losslessly.
#[repr(transparent)]
#[derive(derive_more::AsRef, derive_more::Into, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[as_ref(forward)]
pub struct Error(String);

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self(message.to_owned())
    }
}

impl From<Cow<'_, str>> for Error {
    fn from(message: Cow<'_, str>) -> Self {
        Self(message.into_owned())
    }
}

impl PartialEq<str> for Error {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Error {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A programmer error: a wrapper was asked for something it does not hold.
///
/// Faults signal a bug at the call site. The panicking accessors
/// (`to_left`, `value`, `error`, ...) panic with a fault's message; the
/// `try_*` accessors hand it back instead.
#[derive(derive_more::Display, derive_more::Error, derive_more::IsVariant, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fault {
    #[display("invalid operation: {message}")]
    InvalidOperation { message: &'static str },
}

impl Fault {
    pub(crate) const fn invalid_operation(message: &'static str) -> Self {
        Self::InvalidOperation { message }
    }

    /// Panics with this fault's message.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        log::error!("{self}");
        panic!("{self}")
    }
}
